use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::angles;
use crate::error::SunAnglesError;
use crate::types::SunPosition;
use crate::validate;

// 3600 s / 15° of rotation per hour.
const SECONDS_PER_LONGITUDE_DEGREE: f64 = 240.0;

/// Sun position for a latitude, longitude, and timestamp.
///
/// The timestamp is converted to UTC, shifted by the mean solar offset
/// of the longitude (4 minutes per degree) plus the equation of time,
/// and the resulting apparent solar day of year and hour drive the
/// closed-form angle calculations. The solar calendar day follows the
/// longitude shift, so it can differ from the UTC date near the date
/// line.
pub fn sun_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> Result<SunPosition, SunAnglesError> {
    validate::check_latitude(latitude)?;
    validate::check_longitude(longitude)?;

    let utc = dt.with_timezone(&Utc);
    let mean_solar = utc + Duration::seconds((longitude * SECONDS_PER_LONGITUDE_DEGREE) as i64);
    let day_of_year = mean_solar.ordinal();
    let eot_minutes = angles::equation_of_time(day_of_year);
    let apparent = mean_solar + Duration::seconds((eot_minutes * 60.0) as i64);
    Ok(build_position(latitude, day_of_year, fractional_hour(&apparent)))
}

/// Sun position for a latitude at a given solar day of year and
/// apparent solar hour, without a timestamp.
pub fn sun_position_at(
    latitude: f64,
    day_of_year: u32,
    solar_hour: f64,
) -> Result<SunPosition, SunAnglesError> {
    validate::check_latitude(latitude)?;
    validate::check_day_of_year(day_of_year)?;
    validate::check_hour(solar_hour)?;

    Ok(build_position(latitude, day_of_year, solar_hour))
}

fn build_position(latitude: f64, day_of_year: u32, solar_hour: f64) -> SunPosition {
    let declination = angles::solar_declination(day_of_year);
    let hour_angle = angles::hour_angle(solar_hour);
    let zenith = angles::solar_zenith_angle(latitude, declination, hour_angle);
    SunPosition {
        day_of_year,
        declination,
        equation_of_time: angles::equation_of_time(day_of_year),
        solar_time: solar_hour,
        hour_angle,
        zenith,
        elevation: angles::solar_elevation(zenith),
        azimuth: angles::solar_azimuth(latitude, declination, hour_angle),
    }
}

fn fractional_hour<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0
}
