//! Solar geometry from geographic coordinates and time.
//!
//! Computes solar zenith and azimuth angles, sunrise and sunset, and
//! daylight duration using the closed-form relations collected in
//! Duffie & Beckman, *Solar Engineering of Thermal Processes*.
//!
//! ```
//! use sun_angles::day_length;
//!
//! let day = day_length(47.6, 172)?;
//! assert!(day.daylight_hours > 15.0);
//! # Ok::<(), sun_angles::SunAnglesError>(())
//! ```

pub mod angles;
pub mod daylight;
pub mod error;
pub mod position;
pub mod types;

pub(crate) mod validate;

pub use angles::{
    day_angle, declination_from_day_angle, deg_to_rad, equation_of_time, hour_angle,
    normalize_angle, rad_to_deg, solar_azimuth, solar_declination, solar_elevation,
    solar_zenith_angle, DEGREES_PER_HOUR,
};

pub use daylight::{day_length, daylight_hours, sunrise_hour, sunrise_hour_angle, sunset_hour};

pub use error::SunAnglesError;

pub use position::{sun_position, sun_position_at};

pub use types::{DayLength, SunPosition};
