use serde::Serialize;

use crate::types::units::{format_unit_label, Unit};

/// A conversion category and its ordered units.
///
/// Unit order is the order offered to the user; the second unit is the
/// default destination.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    /// Canonical unit the multipliers (or affine transforms) are relative to
    pub base: &'static str,
    pub units: &'static [Unit],
}

/// A selectable entry for a unit or category list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl Category {
    /// Look up a unit by key
    pub fn unit(&self, key: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.key == key)
    }

    pub fn unit_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.key)
    }

    /// True when every unit is a plain ratio of the base unit
    pub fn is_proportional(&self) -> bool {
        self.units.iter().all(|u| u.definition.is_scale())
    }

    /// Unit options in table order, labelled for display
    pub fn unit_options(&self) -> Vec<SelectOption> {
        self.units
            .iter()
            .map(|u| SelectOption {
                value: u.key.to_string(),
                label: format_unit_label(u.key),
            })
            .collect()
    }

    /// The unit pre-selected as destination: the second, or the only one
    pub fn default_destination(&self) -> Option<&'static str> {
        self.units.get(1).or_else(|| self.units.first()).map(|u| u.key)
    }
}
