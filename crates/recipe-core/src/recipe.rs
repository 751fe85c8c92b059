use std::fmt;

use serde::Deserialize;

use crate::consts::NOT_A_NUMBER;

/// A single recipe as supplied by the data file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recipe {
    /// Display name, also the lookup and routing key.
    pub label: String,
    pub ingredients: Vec<Ingredient>,
    /// Instructions, in the order they are performed.
    pub steps: Vec<String>,
    /// Image reference (URL or path). Never resolved here.
    pub img: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ingredient {
    pub label: String,
    pub quantity: Quantity,
    pub unit: String,
}

/// Ingredient amount, normalized when the data is loaded.
///
/// Data files may carry either a number or a numeric string. Anything that
/// does not parse to a finite number becomes `Unparsable` and renders as
/// `NaN` instead of failing later in the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "RawQuantity")]
pub enum Quantity {
    Amount(f64),
    Unparsable,
}

impl Quantity {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(v) => Some(*v),
            Self::Unparsable => None,
        }
    }

    pub fn is_unparsable(&self) -> bool {
        matches!(self, Self::Unparsable)
    }

    /// Multiply by `factor`. A NaN factor yields `Unparsable`.
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Self::Amount(v) => {
                let scaled = v * factor;
                if scaled.is_nan() {
                    Self::Unparsable
                } else {
                    Self::Amount(scaled)
                }
            }
            Self::Unparsable => Self::Unparsable,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(v) => write!(f, "{v}"),
            Self::Unparsable => f.write_str(NOT_A_NUMBER),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
}

impl From<RawQuantity> for Quantity {
    fn from(raw: RawQuantity) -> Self {
        let parsed = match raw {
            RawQuantity::Number(v) => v.is_finite().then_some(v),
            RawQuantity::Text(s) => parse_amount(&s),
        };
        parsed.map_or(Self::Unparsable, Self::Amount)
    }
}

/// Parse a user- or data-supplied amount.
///
/// Accepts plain decimals (`"2"`, `"0.5"`), a decimal comma (`"0,5"`) and
/// simple fractions (`"1/2"`). Surrounding whitespace is ignored. Returns
/// `None` for anything that is not a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let value = match text.split_once('/') {
        Some((num, den)) => {
            let num = parse_decimal(num)?;
            let den = parse_decimal(den)?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => parse_decimal(text)?,
    };

    value.is_finite().then_some(value)
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
