use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Category, UnitTable};
use crate::types::units::{Unit, UnitDefinition};

/// Error types for a failed conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Value {0} is not a finite number")]
    NonFiniteValue(f64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: String, unit: String },

    #[error("Cannot convert {from} to {to}: one is proportional and the other affine")]
    IncompatibleUnits { from: String, to: String },

    #[error("Converting {value} {from} to {to} overflows")]
    NonFiniteResult { value: f64, from: String, to: String },
}

/// A completed conversion, suitable for logging or JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub category: String,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

fn lookup<'a>(category: &'a Category, unit: &str) -> Result<&'a Unit, ConversionError> {
    category.unit(unit).ok_or_else(|| ConversionError::UnknownUnit {
        category: category.key.to_string(),
        unit: unit.to_string(),
    })
}

impl UnitTable {
    /// Convert `value` from one unit to another within `category`.
    ///
    /// Proportional units compute `value * from / to`; affine units pipe the
    /// value through `from.to_base` then `to.from_base`.
    pub fn try_convert(
        &self,
        category: &str,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::NonFiniteValue(value));
        }

        let category_def = self
            .category(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        let from_unit = lookup(category_def, from)?;
        let to_unit = lookup(category_def, to)?;

        if from == to {
            return Ok(value);
        }

        let result = match (from_unit.definition, to_unit.definition) {
            (
                UnitDefinition::Scale { multiplier: from_factor },
                UnitDefinition::Scale { multiplier: to_factor },
            ) => value * from_factor / to_factor,
            (UnitDefinition::Affine { to_base, .. }, UnitDefinition::Affine { from_base, .. }) => {
                from_base(to_base(value))
            }
            _ => {
                return Err(ConversionError::IncompatibleUnits {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        };

        if !result.is_finite() {
            return Err(ConversionError::NonFiniteResult {
                value,
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        debug!(category, value, from, to, result, "converted");
        Ok(result)
    }

    /// Same as [`UnitTable::try_convert`], with `NaN` standing for failure
    pub fn convert(&self, category: &str, value: f64, from: &str, to: &str) -> f64 {
        self.try_convert(category, value, from, to)
            .unwrap_or(f64::NAN)
    }

    /// Convert and keep the inputs alongside the result
    pub fn conversion(
        &self,
        category: &str,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<Conversion, ConversionError> {
        let result = self.try_convert(category, value, from, to)?;
        Ok(Conversion {
            category: category.to_string(),
            value,
            from: from.to_string(),
            to: to.to_string(),
            result,
        })
    }
}

/// Convert with the built-in table, returning `NaN` on failure
pub fn convert(category: &str, value: f64, from: &str, to: &str) -> f64 {
    UnitTable::builtin().convert(category, value, from, to)
}

/// Convert with the built-in table
pub fn try_convert(category: &str, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    UnitTable::builtin().try_convert(category, value, from, to)
}
