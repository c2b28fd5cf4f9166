use std::fmt;
use std::ops::{Add, Index, Sub};
use std::str::FromStr;

use crate::angles::normalize_angle;
use crate::error::AstroError;

/// An angle in degrees together with its rate of change in degrees per hour.
///
/// `speed` is `None` for the Schureman auxiliary angles, whose rates are
/// never needed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AstronomicalParameter {
    pub value: f64,
    pub speed: Option<f64>,
}

impl AstronomicalParameter {
    pub const fn new(value: f64, speed: f64) -> Self {
        Self {
            value,
            speed: Some(speed),
        }
    }

    pub const fn value_only(value: f64) -> Self {
        Self { value, speed: None }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.speed.map_or(true, f64::is_finite)
    }

    /// The same parameter with its value wrapped into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            value: normalize_angle(self.value),
            ..self
        }
    }
}

/// Values combine as raw degrees; a speed survives only if both sides have one.
impl Add for AstronomicalParameter {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            speed: self.speed.zip(rhs.speed).map(|(a, b)| a + b),
        }
    }
}

impl Sub for AstronomicalParameter {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            speed: self.speed.zip(rhs.speed).map(|(a, b)| a - b),
        }
    }
}

/// The fixed vocabulary of keys in a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// `s`, mean longitude of the moon.
    LunarLongitude,
    /// `h`, mean longitude of the sun.
    SolarLongitude,
    /// `p`, longitude of the lunar perigee.
    LunarPerigee,
    /// `N`, longitude of the moon's ascending node.
    LunarNode,
    /// `pp`, longitude of the solar perigee.
    SolarPerigee,
    /// `90`, the constant right angle used in equilibrium arguments.
    Ninety,
    /// `omega`, mean obliquity of the ecliptic.
    Obliquity,
    /// `i`, inclination of the lunar orbit to the ecliptic.
    LunarInclination,
    /// `I`, inclination of the lunar orbit to the celestial equator.
    EquatorialInclination,
    Xi,
    Nu,
    /// `nup`, Schureman's nu'.
    NuPrime,
    /// `nupp`, Schureman's nu''.
    NuDoublePrime,
    /// `T+h-s`, mean lunar time expressed as an angle.
    TPlusHMinusS,
    /// `P`, Schureman's P = p - xi.
    SchuremanP,
}

impl Parameter {
    pub const COUNT: usize = 15;

    pub const ALL: [Parameter; Parameter::COUNT] = [
        Parameter::LunarLongitude,
        Parameter::SolarLongitude,
        Parameter::LunarPerigee,
        Parameter::LunarNode,
        Parameter::SolarPerigee,
        Parameter::Ninety,
        Parameter::Obliquity,
        Parameter::LunarInclination,
        Parameter::EquatorialInclination,
        Parameter::Xi,
        Parameter::Nu,
        Parameter::NuPrime,
        Parameter::NuDoublePrime,
        Parameter::TPlusHMinusS,
        Parameter::SchuremanP,
    ];

    /// The key used by harmonic-analysis consumers.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::LunarLongitude => "s",
            Parameter::SolarLongitude => "h",
            Parameter::LunarPerigee => "p",
            Parameter::LunarNode => "N",
            Parameter::SolarPerigee => "pp",
            Parameter::Ninety => "90",
            Parameter::Obliquity => "omega",
            Parameter::LunarInclination => "i",
            Parameter::EquatorialInclination => "I",
            Parameter::Xi => "xi",
            Parameter::Nu => "nu",
            Parameter::NuPrime => "nup",
            Parameter::NuDoublePrime => "nupp",
            Parameter::TPlusHMinusS => "T+h-s",
            Parameter::SchuremanP => "P",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| AstroError::UnknownParameter(s.to_string()))
    }
}

/// Every [`Parameter`] evaluated at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    values: [AstronomicalParameter; Parameter::COUNT],
}

impl ParameterSet {
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(Parameter) -> AstronomicalParameter,
    {
        Self {
            values: Parameter::ALL.map(f),
        }
    }

    pub fn get(&self, parameter: Parameter) -> AstronomicalParameter {
        self.values[parameter.index()]
    }

    pub fn get_by_name(&self, name: &str) -> Result<AstronomicalParameter, AstroError> {
        Ok(self.get(name.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, AstronomicalParameter)> + '_ {
        Parameter::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Fails on the first value or speed that is NaN or infinite.
    pub fn ensure_finite(&self) -> Result<(), AstroError> {
        match self.iter().find(|(_, a)| !a.is_finite()) {
            Some((parameter, a)) => {
                tracing::warn!(%parameter, value = a.value, speed = ?a.speed, "non-finite astronomical parameter");
                Err(AstroError::NonFinite { parameter })
            }
            None => Ok(()),
        }
    }
}

impl Index<Parameter> for ParameterSet {
    type Output = AstronomicalParameter;

    fn index(&self, parameter: Parameter) -> &Self::Output {
        &self.values[parameter.index()]
    }
}
