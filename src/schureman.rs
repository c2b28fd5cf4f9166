//! Schureman's auxiliary angles for the regression of the lunar node
//! (notes to Table 6 of *Manual of Harmonic Analysis and Prediction of Tides*).
//!
//! Every function takes the lunar node `N`, lunar inclination `i` and
//! obliquity `omega` in degrees and returns an unnormalized angle in degrees.

use crate::coefficients::{NU_DOUBLE_PRIME_SOLAR_COEFFICIENT, NU_PRIME_SOLAR_COEFFICIENT};
use crate::types::Parameter;

pub type AuxiliaryAngle = fn(f64, f64, f64) -> f64;

/// Evaluation order of the auxiliary angles in [`crate::astro`].
pub const AUXILIARY_ANGLES: [(Parameter, AuxiliaryAngle); 5] = [
    (Parameter::EquatorialInclination, equatorial_inclination),
    (Parameter::Xi, xi),
    (Parameter::Nu, nu),
    (Parameter::NuPrime, nu_prime),
    (Parameter::NuDoublePrime, nu_double_prime),
];

/// `I`, from `cos I = cos i cos omega - sin i sin omega cos N`.
pub fn equatorial_inclination(node: f64, inclination: f64, obliquity: f64) -> f64 {
    let (n, i, omega) = (node.to_radians(), inclination.to_radians(), obliquity.to_radians());
    let cos_i = i.cos() * omega.cos() - i.sin() * omega.sin() * n.cos();
    cos_i.clamp(-1.0, 1.0).acos().to_degrees()
}

/// The two corrected arctangent terms shared by `xi` and `nu`, in radians.
fn node_terms(node: f64, inclination: f64, obliquity: f64) -> (f64, f64) {
    let half_node = node.to_radians() * 0.5;
    let (i, omega) = (inclination.to_radians(), obliquity.to_radians());
    let tan_half_node = half_node.tan();

    let e1 = ((0.5 * (omega - i)).cos() / (0.5 * (omega + i)).cos() * tan_half_node).atan();
    let e2 = ((0.5 * (omega - i)).sin() / (0.5 * (omega + i)).sin() * tan_half_node).atan();
    (e1 - half_node, e2 - half_node)
}

pub fn xi(node: f64, inclination: f64, obliquity: f64) -> f64 {
    let (e1, e2) = node_terms(node, inclination, obliquity);
    (-(e1 + e2)).to_degrees()
}

pub fn nu(node: f64, inclination: f64, obliquity: f64) -> f64 {
    let (e1, e2) = node_terms(node, inclination, obliquity);
    (e1 - e2).to_degrees()
}

/// Schureman eq. 224.
pub fn nu_prime(node: f64, inclination: f64, obliquity: f64) -> f64 {
    let big_i = equatorial_inclination(node, inclination, obliquity).to_radians();
    let nu = nu(node, inclination, obliquity).to_radians();
    let sin_2i = (2.0 * big_i).sin();
    (sin_2i * nu.sin() / (sin_2i * nu.cos() + NU_PRIME_SOLAR_COEFFICIENT))
        .atan()
        .to_degrees()
}

/// Schureman eq. 232.
pub fn nu_double_prime(node: f64, inclination: f64, obliquity: f64) -> f64 {
    let big_i = equatorial_inclination(node, inclination, obliquity).to_radians();
    let nu = nu(node, inclination, obliquity).to_radians();
    let sin_sq_i = big_i.sin().powi(2);
    let tan_2nupp = sin_sq_i * (2.0 * nu).sin()
        / (sin_sq_i * (2.0 * nu).cos() + NU_DOUBLE_PRIME_SOLAR_COEFFICIENT);
    (0.5 * tan_2nupp.atan()).to_degrees()
}
