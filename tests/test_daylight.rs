use sun_angles::daylight::*;
use sun_angles::{solar_declination, SunAnglesError};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── SunriseHourAngle ──

#[test]
fn test_sha_equator_always_90() {
    for &decl in &[-23.45, -10.0, 0.0, 10.0, 23.45] {
        assert_approx!(sunrise_hour_angle(0.0, decl), 90.0, 1e-10);
    }
}

#[test]
fn test_sha_polar_day_clamps_to_180() {
    assert_approx!(sunrise_hour_angle(80.0, 23.45), 180.0, 1e-12);
    assert_approx!(sunrise_hour_angle(-80.0, -23.45), 180.0, 1e-12);
}

#[test]
fn test_sha_polar_night_clamps_to_0() {
    assert_approx!(sunrise_hour_angle(80.0, -23.45), 0.0, 1e-12);
    assert_approx!(sunrise_hour_angle(-80.0, 23.45), 0.0, 1e-12);
}

#[test]
fn test_sha_hemisphere_symmetry() {
    for &(lat, decl) in &[(40.0, 23.45), (55.0, -10.0), (66.0, 20.0)] {
        assert_approx!(
            sunrise_hour_angle(lat, decl),
            sunrise_hour_angle(-lat, -decl),
            1e-12
        );
    }
}

#[test]
fn test_sha_in_range_over_grid() {
    for &lat in &[-90.0, -66.5, -40.0, 0.0, 40.0, 66.5, 90.0] {
        for &decl in &[-23.45, -10.0, 0.0, 10.0, 23.45] {
            let sha = sunrise_hour_angle(lat, decl);
            assert!(
                sha >= 0.0 && sha <= 180.0,
                "sha={} for lat={} decl={}",
                sha, lat, decl
            );
        }
    }
}

// ── DaylightHours / Sunrise / Sunset from SHA ──

#[test]
fn test_daylight_hours_known_values() {
    assert_approx!(daylight_hours(90.0), 12.0, 1e-12);
    assert_approx!(daylight_hours(0.0), 0.0, 1e-12);
    assert_approx!(daylight_hours(180.0), 24.0, 1e-12);
    assert_approx!(daylight_hours(45.0), 6.0, 1e-12);
}

#[test]
fn test_sunrise_sunset_known_values() {
    assert_approx!(sunrise_hour(90.0), 6.0, 1e-12);
    assert_approx!(sunset_hour(90.0), 18.0, 1e-12);
    assert_approx!(sunrise_hour(0.0), 12.0, 1e-12);
    assert_approx!(sunset_hour(0.0), 12.0, 1e-12);
    assert_approx!(sunrise_hour(180.0), 0.0, 1e-12);
    assert_approx!(sunset_hour(180.0), 24.0, 1e-12);
}

#[test]
fn test_interval_midpoint_is_solar_noon() {
    for &sha in &[0.0, 30.0, 90.0, 120.0, 180.0] {
        assert_approx!((sunrise_hour(sha) + sunset_hour(sha)) / 2.0, 12.0, 1e-12);
        assert_approx!(sunset_hour(sha) - sunrise_hour(sha), daylight_hours(sha), 1e-12);
    }
}

// ── DayLength ──

#[test]
fn test_day_length_equator_twelve_hours_all_year() {
    for doy in [1, 80, 172, 266, 355, 365] {
        let day = day_length(0.0, doy).unwrap();
        assert_approx!(day.daylight_hours, 12.0, 1e-9);
        assert_approx!(day.sunrise, 6.0, 1e-9);
        assert_approx!(day.sunset, 18.0, 1e-9);
    }
}

#[test]
fn test_day_length_mid_latitude_equinox() {
    let day = day_length(39.8, 80).unwrap();
    assert_approx!(day.daylight_hours, 12.0, 0.1);
}

#[test]
fn test_day_length_mid_latitude_solstices() {
    let summer = day_length(39.8, 172).unwrap();
    let winter = day_length(39.8, 355).unwrap();
    assert_approx!(summer.daylight_hours, 14.8, 0.3);
    assert_approx!(winter.daylight_hours, 9.2, 0.3);
    assert_approx!(summer.daylight_hours + winter.daylight_hours, 24.0, 0.3);
}

#[test]
fn test_day_length_grows_with_latitude_in_june() {
    let lats = [0.0, 20.0, 40.0, 60.0];
    let hours: Vec<f64> = lats
        .iter()
        .map(|&lat| day_length(lat, 172).unwrap().daylight_hours)
        .collect();
    for i in 0..hours.len() - 1 {
        assert!(hours[i] < hours[i + 1], "{:?}", hours);
    }
}

#[test]
fn test_day_length_polar_day() {
    let day = day_length(80.0, 172).unwrap();
    assert!(day.is_polar_day());
    assert!(!day.is_polar_night());
    assert_approx!(day.daylight_hours, 24.0, 1e-12);
    assert_approx!(day.sunrise, 0.0, 1e-12);
    assert_approx!(day.sunset, 24.0, 1e-12);
}

#[test]
fn test_day_length_polar_night() {
    let day = day_length(80.0, 355).unwrap();
    assert!(day.is_polar_night());
    assert!(!day.is_polar_day());
    assert_approx!(day.daylight_hours, 0.0, 1e-12);
    assert_approx!(day.sunrise, 12.0, 1e-12);
    assert_approx!(day.sunset, 12.0, 1e-12);
}

#[test]
fn test_day_length_uses_declination_of_the_day() {
    let decl = solar_declination(172);
    let sha = sunrise_hour_angle(66.0, decl);
    let day = day_length(66.0, 172).unwrap();
    assert_approx!(day.daylight_hours, daylight_hours(sha), 1e-12);
}

// ── Validation ──

#[test]
fn test_day_length_rejects_bad_latitude() {
    assert!(matches!(
        day_length(90.5, 100),
        Err(SunAnglesError::InvalidLatitude { .. })
    ));
    assert!(matches!(
        day_length(f64::NAN, 100),
        Err(SunAnglesError::InvalidLatitude { .. })
    ));
}

#[test]
fn test_day_length_rejects_bad_day_of_year() {
    assert!(matches!(
        day_length(45.0, 0),
        Err(SunAnglesError::InvalidDayOfYear { value: 0 })
    ));
    assert!(matches!(
        day_length(45.0, 367),
        Err(SunAnglesError::InvalidDayOfYear { value: 367 })
    ));
}
