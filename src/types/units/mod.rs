mod display;
mod unit_value;

pub use uom::si::f64::{Information, Length, Mass, ThermodynamicTemperature, Volume};

pub use uom::si::{
    information::{bit, byte, gibibyte, kibibyte, mebibyte, tebibyte},
    length::{centimeter, foot, inch, kilometer, meter, mile, millimeter, yard},
    mass::{gram, kilogram, milligram, ounce, pound, ton as tonne},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
    volume::{cup, fluid_ounce, gallon, liter, milliliter, pint_liquid, quart_liquid},
};

pub use display::{format_plain_number, format_unit_label, ConversionSummary, UnitLabel};
pub use unit_value::UnitValue;

/// How a single unit relates to its category's base unit.
#[derive(Debug, Clone, Copy)]
pub enum UnitDefinition {
    /// One of this unit equals `multiplier` base units.
    Scale { multiplier: f64 },

    /// Scale plus offset; each side of the base unit is a pure transform.
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl UnitDefinition {
    /// Express `value` (in this unit) in the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            UnitDefinition::Scale { multiplier } => value * multiplier,
            UnitDefinition::Affine { to_base, .. } => to_base(value),
        }
    }

    /// Express a base-unit `value` in this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            UnitDefinition::Scale { multiplier } => value / multiplier,
            UnitDefinition::Affine { from_base, .. } => from_base(value),
        }
    }

    pub fn is_scale(&self) -> bool {
        matches!(self, UnitDefinition::Scale { .. })
    }
}

/// A named unit inside a category
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    pub key: &'static str,
    pub definition: UnitDefinition,
}

impl Unit {
    pub const fn scale(key: &'static str, multiplier: f64) -> Self {
        Self {
            key,
            definition: UnitDefinition::Scale { multiplier },
        }
    }

    pub const fn affine(
        key: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Self {
            key,
            definition: UnitDefinition::Affine { to_base, from_base },
        }
    }

    /// Human-readable label derived from the key
    pub fn label(&self) -> String {
        format_unit_label(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_definition_routes_through_base() {
        let foot_unit = Unit::scale("foot", 0.3048);
        assert_relative_eq!(foot_unit.definition.to_base(10.0), 3.048);
        assert_relative_eq!(foot_unit.definition.from_base(3.048), 10.0);
        assert!(foot_unit.definition.is_scale());
    }

    #[test]
    fn test_affine_definition_uses_its_transforms() {
        let shifted = Unit::affine("shifted", |v| v - 10.0, |v| v + 10.0);
        assert_relative_eq!(shifted.definition.to_base(15.0), 5.0);
        assert_relative_eq!(shifted.definition.from_base(5.0), 15.0);
        assert!(!shifted.definition.is_scale());
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(Unit::scale("stevenHawking", 158.7572).label(), "Steven Hawking");
    }
}
