//! Built-in unit table
//!
//! Proportional categories list each unit's multiplier relative to the base
//! unit. Temperature scales are affine, so each unit carries its own pair of
//! transforms to and from degrees Celsius.
//!
//! Money rates are fixed reference values (US dollars per unit), not live
//! quotes.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::category::{Category, SelectOption};
use crate::types::units::{Unit, UnitDefinition};

static LENGTH_UNITS: [Unit; 8] = [
    Unit::scale("kilometer", 1000.0),
    Unit::scale("meter", 1.0),
    Unit::scale("centimeter", 0.01),
    Unit::scale("millimeter", 0.001),
    Unit::scale("inch", 0.0254),
    Unit::scale("foot", 0.3048),
    Unit::scale("yard", 0.9144),
    Unit::scale("mile", 1609.344),
];

static VOLUME_UNITS: [Unit; 7] = [
    Unit::scale("liter", 1.0),
    Unit::scale("milliliter", 0.001),
    Unit::scale("gallon", 3.78541),
    Unit::scale("quart", 0.946353),
    Unit::scale("pint", 0.473176),
    Unit::scale("cup", 0.24),
    Unit::scale("ounce", 0.0295735),
];

static MASS_UNITS: [Unit; 7] = [
    Unit::scale("tonne", 1000.0),
    Unit::scale("kilogram", 1.0),
    Unit::scale("gram", 0.001),
    Unit::scale("milligram", 0.000001),
    Unit::scale("pound", 0.453592),
    Unit::scale("ounce", 0.0283495),
    Unit::scale("stevenHawking", 158.7572),
];

const KIB: f64 = 1024.0;

static STORAGE_UNITS: [Unit; 6] = [
    Unit::scale("bit", 1.0 / 8.0),
    Unit::scale("byte", 1.0),
    Unit::scale("kilobyte", KIB),
    Unit::scale("megabyte", KIB * KIB),
    Unit::scale("gigabyte", KIB * KIB * KIB),
    Unit::scale("terabyte", KIB * KIB * KIB * KIB),
];

fn identity(value: f64) -> f64 {
    value
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * (5.0 / 9.0)
}

fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * (9.0 / 5.0) + 32.0
}

fn kelvin_to_celsius(value: f64) -> f64 {
    value - 273.15
}

fn celsius_to_kelvin(value: f64) -> f64 {
    value + 273.15
}

static TEMPERATURE_UNITS: [Unit; 3] = [
    Unit::affine("celsius", identity, identity),
    Unit::affine("fahrenheit", fahrenheit_to_celsius, celsius_to_fahrenheit),
    Unit::affine("kelvin", kelvin_to_celsius, celsius_to_kelvin),
];

static MONEY_UNITS: [Unit; 6] = [
    Unit::scale("usDollar", 1.0),
    Unit::scale("euro", 1.08),
    Unit::scale("britishPound", 1.27),
    Unit::scale("japaneseYen", 0.0067),
    Unit::scale("swissFranc", 1.13),
    Unit::scale("canadianDollar", 0.74),
];

static BUILTIN_CATEGORIES: [Category; 6] = [
    Category { key: "length", label: "Length", base: "meter", units: &LENGTH_UNITS },
    Category { key: "volume", label: "Volume", base: "liter", units: &VOLUME_UNITS },
    Category { key: "mass", label: "Mass", base: "kilogram", units: &MASS_UNITS },
    Category { key: "storage", label: "Digital Storage", base: "byte", units: &STORAGE_UNITS },
    Category { key: "temperature", label: "Temperature", base: "celsius", units: &TEMPERATURE_UNITS },
    Category { key: "money", label: "Money", base: "usDollar", units: &MONEY_UNITS },
];

static BUILTIN: UnitTable = UnitTable { categories: &BUILTIN_CATEGORIES };

/// Error types for malformed tables
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TableError {
    #[error("Category {0} has no units")]
    EmptyCategory(String),

    #[error("Category {category} lists unit {unit} more than once")]
    DuplicateUnit { category: String, unit: String },

    #[error("Unit {unit} in {category} has unusable multiplier {multiplier}")]
    InvalidMultiplier { category: String, unit: String, multiplier: f64 },

    #[error("Base unit {base} is not defined in {category}")]
    MissingBase { category: String, base: String },

    #[error("Category key {0} appears more than once")]
    DuplicateCategory(String),
}

/// Read-only set of categories, in presentation order
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    categories: &'static [Category],
}

/// Serializable listing of a whole category for front ends
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub key: String,
    pub label: String,
    pub proportional: bool,
    pub units: Vec<SelectOption>,
}

impl UnitTable {
    /// The table shipped with the crate
    pub fn builtin() -> &'static UnitTable {
        &BUILTIN
    }

    /// Wrap a custom static table. Call [`UnitTable::validate`] before use.
    pub const fn from_static(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Category options for a selector, in table order
    pub fn category_options(&self) -> Vec<SelectOption> {
        self.categories
            .iter()
            .map(|c| SelectOption {
                value: c.key.to_string(),
                label: c.label.to_string(),
            })
            .collect()
    }

    /// Unit options for a category; empty when the category is unknown
    pub fn unit_options(&self, category: &str) -> Vec<SelectOption> {
        self.category(category)
            .map(Category::unit_options)
            .unwrap_or_default()
    }

    pub fn listings(&self) -> Vec<CategoryListing> {
        self.categories
            .iter()
            .map(|c| CategoryListing {
                key: c.key.to_string(),
                label: c.label.to_string(),
                proportional: c.is_proportional(),
                units: c.unit_options(),
            })
            .collect()
    }

    /// Listing of every category as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.listings())
    }

    /// Check the table invariants: non-empty categories, unique keys,
    /// finite nonzero multipliers, and a defined base unit.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen_categories = HashSet::new();

        for category in self.categories {
            if !seen_categories.insert(category.key) {
                return Err(TableError::DuplicateCategory(category.key.to_string()));
            }
            if category.units.is_empty() {
                return Err(TableError::EmptyCategory(category.key.to_string()));
            }

            let mut seen_units = HashSet::new();
            for unit in category.units {
                if !seen_units.insert(unit.key) {
                    return Err(TableError::DuplicateUnit {
                        category: category.key.to_string(),
                        unit: unit.key.to_string(),
                    });
                }
                if let UnitDefinition::Scale { multiplier } = unit.definition {
                    if !multiplier.is_finite() || multiplier <= 0.0 {
                        return Err(TableError::InvalidMultiplier {
                            category: category.key.to_string(),
                            unit: unit.key.to_string(),
                            multiplier,
                        });
                    }
                }
            }

            if category.unit(category.base).is_none() {
                return Err(TableError::MissingBase {
                    category: category.key.to_string(),
                    base: category.base.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(UnitTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_category_order() {
        let keys: Vec<_> = UnitTable::builtin().categories().iter().map(|c| c.key).collect();
        assert_eq!(keys, ["length", "volume", "mass", "storage", "temperature", "money"]);
    }

    #[test]
    fn test_base_units_have_unit_multiplier() {
        for category in UnitTable::builtin().categories() {
            let base = category.unit(category.base).unwrap();
            assert_relative_eq!(base.definition.to_base(1.0), 1.0);
        }
    }

    #[test]
    fn test_only_temperature_is_affine() {
        for category in UnitTable::builtin().categories() {
            assert_eq!(category.is_proportional(), category.key != "temperature", "{}", category.key);
        }
    }

    #[test]
    fn test_storage_is_binary() {
        let storage = UnitTable::builtin().category("storage").unwrap();
        let tb = storage.unit("terabyte").unwrap();
        assert_eq!(tb.definition.to_base(1.0), 1_099_511_627_776.0);
    }

    #[test]
    fn test_unknown_category_has_no_options() {
        assert!(UnitTable::builtin().unit_options("speed").is_empty());
        assert_eq!(UnitTable::builtin().unit_options("mass")[6].label, "Steven Hawking");
    }

    #[test]
    fn test_category_options_use_labels() {
        let options = UnitTable::builtin().category_options();
        assert_eq!(options[3].value, "storage");
        assert_eq!(options[3].label, "Digital Storage");
    }

    #[test]
    fn test_json_listing() {
        let json = UnitTable::builtin().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[4]["key"], "temperature");
        assert_eq!(parsed[4]["proportional"], false);
        assert_eq!(parsed[0]["units"][7]["label"], "Mile");
    }

    static EMPTY: [Category; 1] = [Category { key: "void", label: "Void", base: "none", units: &[] }];
    static BAD_MULTIPLIER_UNITS: [Unit; 2] = [Unit::scale("base", 1.0), Unit::scale("zero", 0.0)];
    static BAD_MULTIPLIER: [Category; 1] =
        [Category { key: "bad", label: "Bad", base: "base", units: &BAD_MULTIPLIER_UNITS }];
    static DUPLICATE_UNITS: [Unit; 2] = [Unit::scale("base", 1.0), Unit::scale("base", 2.0)];
    static DUPLICATE: [Category; 1] =
        [Category { key: "dup", label: "Dup", base: "base", units: &DUPLICATE_UNITS }];
    static NO_BASE: [Category; 1] =
        [Category { key: "nobase", label: "No Base", base: "missing", units: &LENGTH_UNITS }];

    #[test]
    fn test_validation_rejects_broken_tables() {
        assert_eq!(
            UnitTable::from_static(&EMPTY).validate(),
            Err(TableError::EmptyCategory("void".into()))
        );
        assert!(matches!(
            UnitTable::from_static(&BAD_MULTIPLIER).validate(),
            Err(TableError::InvalidMultiplier { .. })
        ));
        assert!(matches!(
            UnitTable::from_static(&DUPLICATE).validate(),
            Err(TableError::DuplicateUnit { .. })
        ));
        assert!(matches!(
            UnitTable::from_static(&NO_BASE).validate(),
            Err(TableError::MissingBase { .. })
        ));
    }
}
