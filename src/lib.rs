pub mod angles;
pub mod coefficients;
pub mod error;
pub mod node_factors;
pub mod schureman;
pub mod types;

pub use angles::{
    astro, d_polynomial, hour_angle, julian_centuries, julian_date, normalize_angle, polynomial,
    sexagesimal_to_degrees, utc_timestamp, CENTURIES_PER_HOUR, DAYS_PER_JULIAN_CENTURY,
    DEGREES_PER_HOUR, J2000,
};

pub use error::AstroError;

pub use node_factors::NodeFactor;

pub use types::{AstronomicalParameter, Parameter, ParameterSet};
