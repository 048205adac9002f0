use chrono::TimeZone;
use chrono_tz::America::Chicago;

use sun_angles::{day_length, sun_position};

fn main() {
    let latitude = 39.8;
    let longitude = -89.6;

    let dt = Chicago.with_ymd_and_hms(2026, 6, 21, 12, 0, 0).unwrap();

    let pos = sun_position(latitude, longitude, &dt).unwrap();
    let day = day_length(latitude, pos.day_of_year).unwrap();

    println!("=== Sun Position ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("Solar day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Apparent Solar Time: {:.2} hours", pos.solar_time);
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Zenith Angle: {:.2}°", pos.zenith);
    println!("Elevation: {:.2}°", pos.elevation);
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!();
    println!("=== Daylight ===");
    println!("Sunrise: {:.2} solar hours", day.sunrise);
    println!("Sunset: {:.2} solar hours", day.sunset);
    println!("Daylight: {:.2} hours", day.daylight_hours);
}
