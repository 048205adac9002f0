use crate::angles::{self, DEGREES_PER_HOUR};
use crate::error::SunAnglesError;
use crate::types::DayLength;
use crate::validate;

/// Sunrise hour angle in degrees from latitude and declination, both
/// in degrees.
///
/// Half the angular arc the sun travels above the horizon. Clamped to
/// 0° in polar night and 180° in polar day, where `-tan φ · tan δ`
/// leaves the domain of the arccosine.
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    let cos_sha = -deg_tan(latitude) * deg_tan(declination);
    if cos_sha >= 1.0 {
        0.0
    } else if cos_sha <= -1.0 {
        180.0
    } else {
        angles::rad_to_deg(cos_sha.acos())
    }
}

fn deg_tan(deg: f64) -> f64 {
    angles::deg_to_rad(deg).tan()
}

/// Daylight duration in hours from the sunrise hour angle in degrees.
pub fn daylight_hours(sunrise_hour_angle_deg: f64) -> f64 {
    2.0 * sunrise_hour_angle_deg / DEGREES_PER_HOUR
}

/// Sunrise in solar hours from the sunrise hour angle in degrees.
pub fn sunrise_hour(sunrise_hour_angle_deg: f64) -> f64 {
    12.0 - sunrise_hour_angle_deg / DEGREES_PER_HOUR
}

/// Sunset in solar hours from the sunrise hour angle in degrees.
pub fn sunset_hour(sunrise_hour_angle_deg: f64) -> f64 {
    12.0 + sunrise_hour_angle_deg / DEGREES_PER_HOUR
}

/// Sunrise, sunset, and daylight duration for a latitude and day of
/// year.
///
/// Hours are apparent solar time, symmetric around solar noon. Polar
/// days and nights come back clamped, not as errors; see
/// [`DayLength::is_polar_day`] and [`DayLength::is_polar_night`].
pub fn day_length(latitude: f64, day_of_year: u32) -> Result<DayLength, SunAnglesError> {
    validate::check_latitude(latitude)?;
    validate::check_day_of_year(day_of_year)?;

    let declination = angles::solar_declination(day_of_year);
    let sha = sunrise_hour_angle(latitude, declination);
    Ok(DayLength {
        sunrise: sunrise_hour(sha),
        sunset: sunset_hour(sha),
        daylight_hours: daylight_hours(sha),
    })
}
