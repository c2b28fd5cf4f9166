use crate::types::Parameter;

/// Error type for the fallible operations around the parameter engine.
///
/// The astronomical computation itself is total; these variants cover
/// building inputs, naming parameters and validating results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AstroError {
    /// The civil fields do not name an instant on the proleptic Gregorian calendar.
    #[error(
        "invalid timestamp {year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{microsecond:06}"
    )]
    InvalidTimestamp {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    },

    /// The string is not one of the fixed parameter keys.
    #[error("unknown astronomical parameter `{0}`")]
    UnknownParameter(String),

    /// A value or speed came out as NaN or infinity.
    #[error("parameter `{parameter}` is not finite")]
    NonFinite { parameter: Parameter },
}
