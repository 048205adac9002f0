pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Day angle in radians: 0 on January 1, wrapping back to 2π at year end.
pub fn day_angle(day_of_year: u32) -> f64 {
    2.0 * std::f64::consts::PI * (day_of_year as f64 - 1.0) / 365.0
}

/// Solar declination in degrees from the day angle in radians.
///
/// Spencer (1971) trigonometric series; bounded by the Earth's axial
/// tilt of about ±23.45°.
pub fn declination_from_day_angle(day_angle_rad: f64) -> f64 {
    let g = day_angle_rad;
    rad_to_deg(
        0.006918 - 0.399912 * g.cos() + 0.070257 * g.sin()
            - 0.006758 * (2.0 * g).cos()
            + 0.000907 * (2.0 * g).sin()
            - 0.002697 * (3.0 * g).cos()
            + 0.00148 * (3.0 * g).sin(),
    )
}

/// Solar declination in degrees for a day of year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    declination_from_day_angle(day_angle(day_of_year))
}

/// Equation of time in minutes for a day of year.
///
/// Difference between apparent and mean solar time, roughly within
/// [-15, +17] minutes over the year.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = day_angle(day_of_year);
    229.18
        * (0.000075 + 0.001868 * b.cos() - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Hour angle in degrees from apparent solar time in hours.
///
/// Zero at solar noon, negative before, 15° per hour.
pub fn hour_angle(solar_hour: f64) -> f64 {
    DEGREES_PER_HOUR * (solar_hour - 12.0)
}

/// Solar zenith angle in degrees from latitude, declination, and hour
/// angle, all in degrees.
///
/// The cosine is clamped to [-1, 1], so the result is always defined
/// and lies in [0, 180].
pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

/// Solar elevation above the horizon in degrees; negative after sunset.
pub fn solar_elevation(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Solar azimuth in degrees clockwise from north, in [0, 360).
///
/// Uses the two-argument arctangent, so every quadrant resolves: east
/// of north in the morning, west in the afternoon.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}
