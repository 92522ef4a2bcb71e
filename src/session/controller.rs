//! Form handling for a converter front end
//!
//! The controller keeps the unit selectors in sync with the chosen category
//! and turns a submitted form into a result line or a user-facing message.

use chrono::Datelike;
use tracing::{info, warn};

use crate::catalog::UnitTable;
use crate::config::ConverterConfig;
use crate::format::{format_number, parse_leading_float, NumberFormat};
use crate::session::view::ConverterView;
use crate::types::units::ConversionSummary;

pub const MSG_INVALID_NUMBER: &str = "Please enter a valid number.";
pub const MSG_UNAVAILABLE: &str = "Conversion unavailable for the selected units.";
pub const MSG_ENTER_VALUE: &str = "Enter a value above to see the conversion.";
pub const MSG_SELECT_UNITS: &str = "Select units and enter a value to convert.";

/// What a submit produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted { value: f64, text: String },
    InvalidInput,
    Unavailable,
}

impl Outcome {
    /// Text to show in the result region
    pub fn message(&self) -> &str {
        match self {
            Outcome::Converted { text, .. } => text.as_str(),
            Outcome::InvalidInput => MSG_INVALID_NUMBER,
            Outcome::Unavailable => MSG_UNAVAILABLE,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

/// Event handlers for a converter form
#[derive(Debug, Clone)]
pub struct FormController {
    table: &'static UnitTable,
    format: NumberFormat,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl FormController {
    pub fn new(config: &ConverterConfig) -> Self {
        Self::with_table(UnitTable::builtin(), config)
    }

    pub fn with_table(table: &'static UnitTable, config: &ConverterConfig) -> Self {
        Self {
            table,
            format: config.number_format(),
        }
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    /// Rebuild both unit lists for `category`; an unknown category clears them
    pub fn populate_units<V: ConverterView + ?Sized>(&self, view: &mut V, category: &str) {
        match self.table.category(category) {
            Some(category_def) => {
                let options = category_def.unit_options();
                view.set_unit_options(&options, category_def.default_destination());
            }
            None => view.set_unit_options(&[], None),
        }
    }

    /// Sync the selectors with the initial category and stamp the footer
    pub fn initialize<V: ConverterView + ?Sized>(&self, view: &mut V) {
        self.initialize_at(view, chrono::Local::now().year());
    }

    pub fn initialize_at<V: ConverterView + ?Sized>(&self, view: &mut V, year: i32) {
        let category = view.selected_category();
        self.populate_units(view, &category);
        view.set_footer_year(year);
        info!(category = %category, locale = %self.format.locale, "unit converter initialized");
    }

    pub fn on_category_change<V: ConverterView + ?Sized>(&self, view: &mut V) {
        let category = view.selected_category();
        self.populate_units(view, &category);
        view.set_result_text(MSG_SELECT_UNITS);
    }

    /// Read the form, convert, and write the outcome to the result region
    pub fn on_submit<V: ConverterView + ?Sized>(&self, view: &mut V) -> Outcome {
        let outcome = self.submit_values(
            &view.selected_category(),
            &view.raw_value(),
            &view.selected_from_unit(),
            &view.selected_to_unit(),
        );
        view.set_result_text(outcome.message());
        outcome
    }

    pub fn on_reset<V: ConverterView + ?Sized>(&self, view: &mut V) {
        view.reset_form();
        let category = view.selected_category();
        self.populate_units(view, &category);
        view.set_result_text(MSG_ENTER_VALUE);
        view.focus_value_input();
    }

    /// Submit logic without a view
    pub fn submit_values(&self, category: &str, raw_value: &str, from: &str, to: &str) -> Outcome {
        let value = match parse_leading_float(raw_value) {
            Some(v) if v.is_finite() => v,
            _ => return Outcome::InvalidInput,
        };

        match self.table.try_convert(category, value, from, to) {
            Ok(converted) => {
                let summary = ConversionSummary {
                    input: value,
                    from_unit: from,
                    formatted_result: format_number(converted, &self.format),
                    to_unit: to,
                };
                Outcome::Converted {
                    value: converted,
                    text: summary.to_string(),
                }
            }
            Err(e) => {
                warn!(error = %e, "conversion unavailable");
                Outcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;
    use crate::session::MemoryView;

    fn initialized(category: &str) -> (FormController, MemoryView) {
        let controller = FormController::default();
        let mut view = MemoryView::new(category);
        controller.initialize_at(&mut view, 2026);
        (controller, view)
    }

    #[test]
    fn test_initialize_populates_and_stamps_year() {
        let (_, view) = initialized("length");
        assert_eq!(view.from_options.len(), 8);
        assert_eq!(view.from_unit, "kilometer");
        assert_eq!(view.to_unit, "meter");
        assert_eq!(view.footer_year, Some(2026));
    }

    #[test]
    fn test_submit_formats_result() {
        let (controller, mut view) = initialized("length");
        view.enter_value("1");
        let outcome = controller.on_submit(&mut view);
        assert!(outcome.is_converted());
        assert_eq!(view.result_text, "1 Kilometer = 1,000 Meter");
    }

    #[test]
    fn test_submit_with_camel_case_units() {
        let (controller, mut view) = initialized("mass");
        view.select_units("stevenHawking", "kilogram");
        view.enter_value("2.5");
        controller.on_submit(&mut view);
        assert_eq!(view.result_text, "2.5 Steven Hawking = 396.893 Kilogram");
    }

    #[test]
    fn test_invalid_number() {
        let (controller, mut view) = initialized("length");
        view.enter_value("abc");
        assert_eq!(controller.on_submit(&mut view), Outcome::InvalidInput);
        assert_eq!(view.result_text, MSG_INVALID_NUMBER);

        view.enter_value("Infinity");
        assert_eq!(controller.on_submit(&mut view), Outcome::InvalidInput);
    }

    #[test]
    fn test_unavailable_units() {
        let (controller, mut view) = initialized("length");
        view.select_units("meter", "unknownUnit");
        view.enter_value("5");
        assert_eq!(controller.on_submit(&mut view), Outcome::Unavailable);
        assert_eq!(view.result_text, MSG_UNAVAILABLE);
    }

    #[test]
    fn test_leading_number_is_used() {
        let controller = FormController::default();
        let outcome = controller.submit_values("storage", "2 KB please", "kilobyte", "byte");
        assert_eq!(outcome.message(), "2 Kilobyte = 2,048 Byte");
    }

    #[test]
    fn test_storage_tie_rounds_up() {
        let controller = FormController::default();
        let outcome = controller.submit_values("storage", "0.0625", "bit", "byte");
        assert_eq!(outcome.message(), "0.0625 Bit = 0.007813 Byte");
    }

    #[test]
    fn test_extreme_inputs_echo_in_exponent_form() {
        let controller = FormController::default();
        let outcome = controller.submit_values("length", "1e21", "meter", "meter");
        assert!(outcome.message().starts_with("1e+21 Meter = "));
        let outcome = controller.submit_values("length", "1e-7", "kilometer", "kilometer");
        assert_eq!(outcome.message(), "1e-7 Kilometer = 0 Kilometer");
    }

    #[test]
    fn test_category_change_resyncs_units() {
        let (controller, mut view) = initialized("length");
        view.select_category("temperature");
        controller.on_category_change(&mut view);
        assert_eq!(view.from_unit, "celsius");
        assert_eq!(view.to_unit, "fahrenheit");
        assert_eq!(view.result_text, MSG_SELECT_UNITS);

        view.enter_value("0");
        controller.on_submit(&mut view);
        assert_eq!(view.result_text, "0 Celsius = 32 Fahrenheit");
    }

    #[test]
    fn test_unknown_category_clears_units() {
        let (controller, mut view) = initialized("length");
        view.select_category("speed");
        controller.on_category_change(&mut view);
        assert!(view.from_options.is_empty());
        assert!(view.to_options.is_empty());
        assert_eq!(view.from_unit, "");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (controller, mut view) = initialized("length");
        view.select_category("money");
        controller.on_category_change(&mut view);
        view.enter_value("10");
        controller.on_submit(&mut view);

        controller.on_reset(&mut view);
        assert_eq!(view.category, "length");
        assert_eq!(view.value, "");
        assert_eq!(view.from_unit, "kilometer");
        assert_eq!(view.to_unit, "meter");
        assert_eq!(view.result_text, MSG_ENTER_VALUE);
        assert!(view.value_focused);
    }

    #[test]
    fn test_locale_from_config() {
        let config = ConverterConfig {
            locale: Locale::DeDe,
            max_fraction_digits: 2,
        };
        let controller = FormController::new(&config);
        let outcome = controller.submit_values("length", "1.5", "mile", "meter");
        assert_eq!(outcome.message(), "1.5 Mile = 2.414,02 Meter");
    }
}
