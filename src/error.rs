//! Error types for the sun_angles crate.

/// Error type for all fallible operations in the sun_angles crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SunAnglesError {
    /// Returned when a latitude is outside [-90, 90] degrees or non-finite.
    #[error("invalid latitude: {value} (must be within [-90, 90])")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        value: f64,
    },

    /// Returned when a longitude is outside [-180, 180] degrees or non-finite.
    #[error("invalid longitude: {value} (must be within [-180, 180])")]
    InvalidLongitude {
        /// The rejected longitude in degrees.
        value: f64,
    },

    /// Returned when a day of year is outside 1..=366.
    #[error("invalid day of year: {value} (must be within 1..=366)")]
    InvalidDayOfYear {
        /// The rejected day of year.
        value: u32,
    },

    /// Returned when a solar hour is outside [0, 24) or non-finite.
    #[error("invalid hour: {value} (must be within [0, 24))")]
    InvalidHour {
        /// The rejected hour.
        value: f64,
    },
}
