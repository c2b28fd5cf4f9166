//! Polynomial fits from Meeus, *Astronomical Algorithms*, in Julian
//! centuries since J2000. Coefficients are in degrees, lowest order first.

use std::sync::LazyLock;

use crate::angles::sexagesimal_to_degrees as s2d;
use crate::types::Parameter;

/// Meeus 45.1.
pub const LUNAR_LONGITUDE: [f64; 5] = [
    218.316_459_1,
    481_267.881_342_36,
    -0.001_326_8,
    1.0 / 538_841.0,
    -1.0 / 65_194_000.0,
];

/// Meeus 24.2.
pub const SOLAR_LONGITUDE: [f64; 3] = [280.466_45, 36_000.769_83, 0.000_303_2];

/// Meeus, unnumbered formula preceding 45.7.
pub const LUNAR_PERIGEE: [f64; 5] = [
    83.353_243_0,
    4_069.013_711_1,
    -0.010_323_8,
    -1.0 / 80_053.0,
    1.0 / 18_999_000.0,
];

/// Meeus 45.7.
pub const LUNAR_NODE: [f64; 5] = [
    125.044_555_0,
    -1_934.136_184_9,
    0.002_076_2,
    1.0 / 467_410.0,
    -1.0 / 60_616_000.0,
];

/// Difference of Meeus 24.2 and 24.3, kept exactly as fitted.
pub const SOLAR_PERIGEE: [f64; 4] = [
    280.466_45 - 357.529_10,
    36_000.769_32 - 35_999.050_30,
    0.000_303_2 + 0.000_155_9,
    0.000_000_48,
];

/// Mean inclination of the lunar orbit, essentially constant (JPL Horizons).
pub const LUNAR_INCLINATION: [f64; 1] = [5.145];

pub const NINETY: [f64; 1] = [90.0];

/// Meeus 21.3, in units of U = T / 100.
const OBLIQUITY_IN_U: [f64; 11] = [
    s2d(23.0, 26.0, 21.448, 0.0, 0.0),
    -s2d(0.0, 0.0, 4680.93, 0.0, 0.0),
    -s2d(0.0, 0.0, 1.55, 0.0, 0.0),
    s2d(0.0, 0.0, 1999.25, 0.0, 0.0),
    -s2d(0.0, 0.0, 51.38, 0.0, 0.0),
    -s2d(0.0, 0.0, 249.67, 0.0, 0.0),
    -s2d(0.0, 0.0, 39.05, 0.0, 0.0),
    s2d(0.0, 0.0, 7.12, 0.0, 0.0),
    s2d(0.0, 0.0, 27.87, 0.0, 0.0),
    s2d(0.0, 0.0, 5.79, 0.0, 0.0),
    s2d(0.0, 0.0, 2.45, 0.0, 0.0),
];

/// Meeus 21.3 with each coefficient scaled by `1e-2^i`, substituting U = T / 100.
fn obliquity_in_centuries() -> Vec<f64> {
    OBLIQUITY_IN_U
        .iter()
        .enumerate()
        .map(|(i, c)| c * 1e-2_f64.powi(i as i32))
        .collect()
}

/// Every parameter obtained directly from a polynomial, with its coefficients.
pub static POLYNOMIALS: LazyLock<Vec<(Parameter, Vec<f64>)>> = LazyLock::new(|| {
    vec![
        (Parameter::LunarLongitude, LUNAR_LONGITUDE.to_vec()),
        (Parameter::SolarLongitude, SOLAR_LONGITUDE.to_vec()),
        (Parameter::LunarPerigee, LUNAR_PERIGEE.to_vec()),
        (Parameter::LunarNode, LUNAR_NODE.to_vec()),
        (Parameter::SolarPerigee, SOLAR_PERIGEE.to_vec()),
        (Parameter::Ninety, NINETY.to_vec()),
        (Parameter::Obliquity, obliquity_in_centuries()),
        (Parameter::LunarInclination, LUNAR_INCLINATION.to_vec()),
    ]
});

pub fn coefficients(parameter: Parameter) -> Option<&'static [f64]> {
    POLYNOMIALS
        .iter()
        .find(|(p, _)| *p == parameter)
        .map(|(_, c)| c.as_slice())
}

/// Schureman's solar coefficient in the nu' formula (eq. 224).
pub const NU_PRIME_SOLAR_COEFFICIENT: f64 = 0.3347;

/// Schureman's solar coefficient in the 2nu'' formula (eq. 232).
pub const NU_DOUBLE_PRIME_SOLAR_COEFFICIENT: f64 = 0.0727;
