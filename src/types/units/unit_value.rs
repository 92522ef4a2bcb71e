use serde::{Deserialize, Serialize};
use uom::si::{information::byte, length::meter, mass::kilogram, thermodynamic_temperature::degree_celsius, volume::liter};

use crate::catalog::UnitTable;
use crate::engine::ConversionError;
use crate::types::units::{Information, Length, Mass, ThermodynamicTemperature, Volume};

/// A number tagged with a unit key from the built-in table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

impl UnitValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    fn base_value(&self, category: &str) -> Result<f64, ConversionError> {
        if !self.value.is_finite() {
            return Err(ConversionError::NonFiniteValue(self.value));
        }
        let category_def = UnitTable::builtin()
            .category(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        let unit = category_def
            .unit(&self.unit)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: category.to_string(),
                unit: self.unit.clone(),
            })?;
        Ok(unit.definition.to_base(self.value))
    }

    fn from_base_value(category: &str, base: f64, unit: &str) -> Result<Self, ConversionError> {
        let category_def = UnitTable::builtin()
            .category(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        let unit_def = category_def
            .unit(unit)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: category.to_string(),
                unit: unit.to_string(),
            })?;
        Ok(Self::new(unit_def.definition.from_base(base), unit))
    }

    pub fn to_length(&self) -> Result<Length, ConversionError> {
        Ok(Length::new::<meter>(self.base_value("length")?))
    }

    pub fn from_length(length: Length, unit: &str) -> Result<Self, ConversionError> {
        Self::from_base_value("length", length.get::<meter>(), unit)
    }

    pub fn to_mass(&self) -> Result<Mass, ConversionError> {
        Ok(Mass::new::<kilogram>(self.base_value("mass")?))
    }

    pub fn from_mass(mass: Mass, unit: &str) -> Result<Self, ConversionError> {
        Self::from_base_value("mass", mass.get::<kilogram>(), unit)
    }

    pub fn to_volume(&self) -> Result<Volume, ConversionError> {
        Ok(Volume::new::<liter>(self.base_value("volume")?))
    }

    pub fn from_volume(volume: Volume, unit: &str) -> Result<Self, ConversionError> {
        Self::from_base_value("volume", volume.get::<liter>(), unit)
    }

    pub fn to_information(&self) -> Result<Information, ConversionError> {
        Ok(Information::new::<byte>(self.base_value("storage")?))
    }

    pub fn from_information(information: Information, unit: &str) -> Result<Self, ConversionError> {
        Self::from_base_value("storage", information.get::<byte>(), unit)
    }

    pub fn to_temperature(&self) -> Result<ThermodynamicTemperature, ConversionError> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(
            self.base_value("temperature")?,
        ))
    }

    pub fn from_temperature(
        temperature: ThermodynamicTemperature,
        unit: &str,
    ) -> Result<Self, ConversionError> {
        Self::from_base_value("temperature", temperature.get::<degree_celsius>(), unit)
    }
}
