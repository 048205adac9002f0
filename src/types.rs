/// Full solar geometry for one location and instant.
///
/// All angles are in degrees. `azimuth` is measured clockwise from
/// north in [0, 360); `zenith` lies in [0, 180] and `elevation` is its
/// complement, negative when the sun is below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Solar day of year, shifted for longitude when computed from a timestamp.
    pub day_of_year: u32,
    /// Solar declination in degrees.
    pub declination: f64,
    /// Equation of time in minutes.
    pub equation_of_time: f64,
    /// Apparent solar time in hours, [0, 24).
    pub solar_time: f64,
    /// Hour angle in degrees, negative before solar noon.
    pub hour_angle: f64,
    /// Solar zenith angle in degrees.
    pub zenith: f64,
    /// Solar elevation in degrees, `90 - zenith`.
    pub elevation: f64,
    /// Solar azimuth in degrees clockwise from north.
    pub azimuth: f64,
}

/// Daylight interval for one location and day, in solar hours.
///
/// During polar night the interval collapses to sunrise = sunset = 12
/// with zero daylight; during polar day it spans 0 to 24.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLength {
    /// Sunrise in solar hours.
    pub sunrise: f64,
    /// Sunset in solar hours.
    pub sunset: f64,
    /// Duration between sunrise and sunset in hours, [0, 24].
    pub daylight_hours: f64,
}

impl DayLength {
    /// True when the sun never sets on this day.
    pub fn is_polar_day(&self) -> bool {
        self.daylight_hours >= 24.0
    }

    /// True when the sun never rises on this day.
    pub fn is_polar_night(&self) -> bool {
        self.daylight_hours <= 0.0
    }
}
