//! Input range checks shared by the fallible entry points.
//!
//! NaN fails every range check, so non-finite inputs are rejected with
//! the same variants as out-of-range values.

use crate::error::SunAnglesError;

pub(crate) fn check_latitude(value: f64) -> Result<(), SunAnglesError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(SunAnglesError::InvalidLatitude { value })
    }
}

pub(crate) fn check_longitude(value: f64) -> Result<(), SunAnglesError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(SunAnglesError::InvalidLongitude { value })
    }
}

pub(crate) fn check_day_of_year(value: u32) -> Result<(), SunAnglesError> {
    if (1..=366).contains(&value) {
        Ok(())
    } else {
        Err(SunAnglesError::InvalidDayOfYear { value })
    }
}

pub(crate) fn check_hour(value: f64) -> Result<(), SunAnglesError> {
    if (0.0..24.0).contains(&value) {
        Ok(())
    } else {
        Err(SunAnglesError::InvalidHour { value })
    }
}
