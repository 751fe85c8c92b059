use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE, NOT_A_NUMBER, SCALE_MAX, SCALE_MIN, SCALE_STEP};
use crate::error::{RecipeError, Result};
use crate::recipe::parse_amount;

/// Closed range the scale factor is kept in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
        }
    }
}

impl ScaleBounds {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RecipeError::InvalidConfig(format!(
                "scale bounds must be finite (got {}..={})",
                self.min, self.max
            )));
        }
        if self.min < 0.0 {
            return Err(RecipeError::InvalidConfig(format!(
                "scale minimum must not be negative (got {})",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(RecipeError::InvalidConfig(format!(
                "scale minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Clamp into the range. NaN passes through untouched.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            value
        } else {
            value.max(self.min).min(self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The scale factor and its three mutation paths.
///
/// Stepper buttons, the slider and the text field all clamp into
/// [`ScaleBounds`]. Text that does not parse leaves the factor at NaN,
/// which the detail view renders as `NaN` quantities. Stepping from NaN
/// restarts at the lower bound.
#[derive(Clone, Debug)]
pub struct ScaleControl {
    bounds: ScaleBounds,
    value: f64,
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}

impl ScaleControl {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            value: bounds.clamp(DEFAULT_SCALE),
            bounds,
        }
    }

    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Raw factor, possibly NaN.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Factor, or `None` after non-numeric input.
    pub fn factor(&self) -> Option<f64> {
        (!self.value.is_nan()).then_some(self.value)
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Quantities are emphasized whenever the recipe is scaled up.
    pub fn is_emphasized(&self) -> bool {
        emphasizes(self.value)
    }

    pub fn can_decrement(&self) -> bool {
        self.is_nan() || self.value > self.bounds.min
    }

    pub fn can_increment(&self) -> bool {
        self.is_nan() || self.value < self.bounds.max
    }

    pub fn decrement(&mut self) -> f64 {
        self.value = if self.is_nan() {
            self.bounds.min
        } else {
            (self.value - SCALE_STEP).max(self.bounds.min)
        };
        self.value
    }

    pub fn increment(&mut self) -> f64 {
        self.value = if self.is_nan() {
            self.bounds.min
        } else {
            (self.value + SCALE_STEP).min(self.bounds.max)
        };
        self.value
    }

    /// Direct set from the slider or an already parsed number.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = self.bounds.clamp(value);
        self.value
    }

    /// Direct set from the text field.
    pub fn set_from_text(&mut self, text: &str) -> f64 {
        match parse_amount(text) {
            Some(v) => self.set(v),
            None => {
                self.value = f64::NAN;
                self.value
            }
        }
    }

    pub fn reset(&mut self) {
        self.value = self.bounds.clamp(DEFAULT_SCALE);
    }
}

/// Whether quantities scaled by `factor` are shown emphasized. False for
/// NaN.
pub fn emphasizes(factor: f64) -> bool {
    factor > 1.0
}

impl fmt::Display for ScaleControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.factor() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str(NOT_A_NUMBER),
        }
    }
}
