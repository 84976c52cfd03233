//! Evaluation mode flags.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }

    /// Keypad label ("DEG" / "RAD")
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
        }
    }

    /// Convert a trig argument in this unit to radians
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Degrees => x * PI / 180.0,
            AngleUnit::Radians => x,
        }
    }

    /// Convert an inverse-trig result from radians to this unit
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Degrees => x * 180.0 / PI,
            AngleUnit::Radians => x,
        }
    }
}

/// Flags that decide which function each symbol is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode {
    pub angle_unit: AngleUnit,
    pub inverse: bool,
}

impl Mode {
    pub fn new(angle_unit: AngleUnit, inverse: bool) -> Self {
        Self {
            angle_unit,
            inverse,
        }
    }

    pub fn degrees() -> Self {
        Self::new(AngleUnit::Degrees, false)
    }

    pub fn radians() -> Self {
        Self::new(AngleUnit::Radians, false)
    }

    pub fn with_inverse(self, inverse: bool) -> Self {
        Self { inverse, ..self }
    }
}
