//! Conversion rules: linear factor tables and affine pair tables

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// How a category converts between its units.
///
/// The rule kind is resolved once with the category lookup; `convert`
/// dispatches on the variant rather than re-branching on the category label
/// per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionRule {
    /// Scale factors relative to a common base unit (the unit with factor 1).
    /// Every unit in the category's unit set has exactly one entry; factors
    /// are positive finite numbers.
    Linear { factors: Vec<(String, f64)> },
    /// Explicit transforms for each ordered unit pair, identity included.
    /// Used where no common multiplicative base exists (temperature).
    Affine { pairs: Vec<AffinePair> },
}

/// An ordered (from, to) unit pair with its transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinePair {
    pub from: String,
    pub to: String,
    pub transform: AffineTransform,
}

/// Evaluates as `(value - pre_offset) * scale + post_offset`.
///
/// Three fields rather than the textbook (scale, offset) pair so each
/// temperature formula is evaluated literally: folding Fahrenheit's -32 into
/// a single offset would change floating-point results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub pre_offset: f64,
    pub scale: f64,
    pub post_offset: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        pre_offset: 0.0,
        scale: 1.0,
        post_offset: 0.0,
    };

    pub fn new(pre_offset: f64, scale: f64, post_offset: f64) -> Self {
        AffineTransform {
            pre_offset,
            scale,
            post_offset,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        (value - self.pre_offset) * self.scale + self.post_offset
    }
}

impl ConversionRule {
    /// Convert `value` from one unit to another under this rule.
    ///
    /// Callers are expected to have checked unit membership against the
    /// category's unit set; a miss here still surfaces as `UnknownUnit`
    /// rather than panicking.
    pub fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64, ConvertError> {
        match self {
            ConversionRule::Linear { factors } => {
                let from_factor = Self::factor(factors, from_unit)?;
                let to_factor = Self::factor(factors, to_unit)?;
                // No from == to special case: the factors cancel through the
                // general formula, matching the linear path bit for bit.
                Ok(value * from_factor / to_factor)
            }
            ConversionRule::Affine { pairs } => pairs
                .iter()
                .find(|p| p.from == from_unit && p.to == to_unit)
                .map(|p| p.transform.apply(value))
                .ok_or_else(|| ConvertError::UnknownUnit(from_unit.to_string())),
        }
    }

    fn factor(factors: &[(String, f64)], unit: &str) -> Result<f64, ConvertError> {
        factors
            .iter()
            .find(|(name, _)| name == unit)
            .map(|(_, f)| *f)
            .ok_or_else(|| ConvertError::UnknownUnit(unit.to_string()))
    }
}
