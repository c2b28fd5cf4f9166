//! Node factors: amplitude scale `f` and phase correction `u` for a tidal
//! constituent, from the nodal angles in a [`ParameterSet`].
//!
//! Equation numbers refer to Schureman, *Manual of Harmonic Analysis and
//! Prediction of Tides*. The magic numbers in K1 and K2 are his.

use crate::types::{Parameter, ParameterSet};

/// The node-factor families a constituent can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFactor {
    /// Solar and compound constituents unaffected by the lunar node.
    Unity,
    Mm,
    Mf,
    O1,
    J1,
    OO1,
    M2,
    K1,
    L2,
    K2,
    M1,
    /// Lunar constituents of species `n`, scaled from M2 (eq. 149).
    Modd(u8),
}

/// The angles node factors read, converted to radians.
struct NodalAngles {
    obliquity: f64,
    inclination: f64,
    big_i: f64,
    nu: f64,
    p: f64,
}

impl NodalAngles {
    fn from_set(a: &ParameterSet) -> Self {
        Self {
            obliquity: a[Parameter::Obliquity].value.to_radians(),
            inclination: a[Parameter::LunarInclination].value.to_radians(),
            big_i: a[Parameter::EquatorialInclination].value.to_radians(),
            nu: a[Parameter::Nu].value.to_radians(),
            p: a[Parameter::SchuremanP].value.to_radians(),
        }
    }
}

impl NodeFactor {
    /// Dimensionless amplitude factor.
    pub fn f(self, a: &ParameterSet) -> f64 {
        let n = NodalAngles::from_set(a);
        match self {
            NodeFactor::Unity => 1.0,
            NodeFactor::Mm => f_mm(&n),
            NodeFactor::Mf => f_mf(&n),
            NodeFactor::O1 => f_o1(&n),
            NodeFactor::J1 => f_j1(&n),
            NodeFactor::OO1 => f_oo1(&n),
            NodeFactor::M2 => f_m2(&n),
            NodeFactor::K1 => f_k1(&n),
            NodeFactor::L2 => f_l2(&n),
            NodeFactor::K2 => f_k2(&n),
            NodeFactor::M1 => f_m1(&n),
            NodeFactor::Modd(species) => f_m2(&n).powf(f64::from(species) / 2.0),
        }
    }

    /// Phase correction in degrees, not normalized (Schureman Table 2).
    pub fn u(self, a: &ParameterSet) -> f64 {
        let xi = a[Parameter::Xi].value;
        let nu = a[Parameter::Nu].value;
        match self {
            NodeFactor::Unity | NodeFactor::Mm => 0.0,
            NodeFactor::Mf => -2.0 * xi,
            NodeFactor::O1 => 2.0 * xi - nu,
            NodeFactor::J1 => -nu,
            NodeFactor::OO1 => -2.0 * xi - nu,
            NodeFactor::M2 => u_m2(xi, nu),
            NodeFactor::K1 => -a[Parameter::NuPrime].value,
            NodeFactor::L2 => u_m2(xi, nu) - l2_phase(&NodalAngles::from_set(a)),
            NodeFactor::K2 => -2.0 * a[Parameter::NuDoublePrime].value,
            NodeFactor::M1 => xi - nu + m1_phase(&NodalAngles::from_set(a)),
            NodeFactor::Modd(species) => f64::from(species) / 2.0 * u_m2(xi, nu),
        }
    }
}

/// 1 - 3/2 sin^2 i, common to several mean values.
fn inclination_term(n: &NodalAngles) -> f64 {
    1.0 - 1.5 * n.inclination.sin().powi(2)
}

// eqs. 73, 65
fn f_mm(n: &NodalAngles) -> f64 {
    let mean = (2.0 / 3.0 - n.obliquity.sin().powi(2)) * inclination_term(n);
    (2.0 / 3.0 - n.big_i.sin().powi(2)) / mean
}

// eqs. 74, 66
fn f_mf(n: &NodalAngles) -> f64 {
    let mean = n.obliquity.sin().powi(2) * (0.5 * n.inclination).cos().powi(4);
    n.big_i.sin().powi(2) / mean
}

// eqs. 75, 67
fn f_o1(n: &NodalAngles) -> f64 {
    let mean = n.obliquity.sin()
        * (0.5 * n.obliquity).cos().powi(2)
        * (0.5 * n.inclination).cos().powi(4);
    n.big_i.sin() * (0.5 * n.big_i).cos().powi(2) / mean
}

// eqs. 76, 68
fn f_j1(n: &NodalAngles) -> f64 {
    let mean = (2.0 * n.obliquity).sin() * inclination_term(n);
    (2.0 * n.big_i).sin() / mean
}

// eqs. 77, 69
fn f_oo1(n: &NodalAngles) -> f64 {
    let mean = n.obliquity.sin()
        * (0.5 * n.obliquity).sin().powi(2)
        * (0.5 * n.inclination).cos().powi(4);
    n.big_i.sin() * (0.5 * n.big_i).sin().powi(2) / mean
}

// eqs. 78, 70
fn f_m2(n: &NodalAngles) -> f64 {
    let mean = (0.5 * n.obliquity).cos().powi(4) * (0.5 * n.inclination).cos().powi(4);
    (0.5 * n.big_i).cos().powi(4) / mean
}

// eqs. 227, 226, 68
fn f_k1(n: &NodalAngles) -> f64 {
    let sin_2i_cos_nu_mean = (2.0 * n.obliquity).sin() * inclination_term(n);
    let mean = 0.5023 * sin_2i_cos_nu_mean + 0.1681;
    let sin_2i = (2.0 * n.big_i).sin();
    (0.2523 * sin_2i.powi(2) + 0.1689 * sin_2i * n.nu.cos() + 0.0283).sqrt() / mean
}

// eqs. 215, 213, 204; the exponent of R_a is 1/2 (Table 7)
fn f_l2(n: &NodalAngles) -> f64 {
    let tan_half_i = (0.5 * n.big_i).tan();
    let r_a_inv = (1.0 - 12.0 * tan_half_i.powi(2) * (2.0 * n.p).cos()
        + 36.0 * tan_half_i.powi(4))
    .sqrt();
    f_m2(n) * r_a_inv
}

// eqs. 235, 234, 71
fn f_k2(n: &NodalAngles) -> f64 {
    let sin_i = n.big_i.sin();
    let sin_sq_i_cos_2nu_mean = n.obliquity.sin().powi(2) * inclination_term(n);
    let mean = 0.5023 * sin_sq_i_cos_2nu_mean + 0.0365;
    (0.2523 * sin_i.powi(4) + 0.0367 * sin_i.powi(2) * (2.0 * n.nu).cos() + 0.0013).sqrt() / mean
}

// eqs. 206, 207, 195
fn f_m1(n: &NodalAngles) -> f64 {
    let cos_i = n.big_i.cos();
    let cos_half_i = (0.5 * n.big_i).cos();
    let q_a_inv = (0.25
        + 1.5 * cos_i * (2.0 * n.p).cos() * cos_half_i.powf(-0.5)
        + 2.25 * cos_i.powi(2) * cos_half_i.powi(-4))
    .sqrt();
    f_o1(n) * q_a_inv
}

fn u_m2(xi: f64, nu: f64) -> f64 {
    2.0 * xi - 2.0 * nu
}

// eq. 214
fn l2_phase(n: &NodalAngles) -> f64 {
    let two_p = 2.0 * n.p;
    (two_p.sin() / (1.0 / 6.0 * (0.5 * n.big_i).tan().powi(-2) - two_p.cos()))
        .atan()
        .to_degrees()
}

// eq. 202
fn m1_phase(n: &NodalAngles) -> f64 {
    let cos_i = n.big_i.cos();
    ((5.0 * cos_i - 1.0) / (7.0 * cos_i + 1.0) * n.p.tan())
        .atan()
        .to_degrees()
}
