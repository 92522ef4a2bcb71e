use crate::catalog::SelectOption;

/// Handle to the input and output surface of a converter form.
///
/// A browser front end backs this with DOM elements; tests and the demo use
/// [`MemoryView`](super::MemoryView).
pub trait ConverterView {
    /// Key of the selected category
    fn selected_category(&self) -> String;

    fn selected_from_unit(&self) -> String;

    fn selected_to_unit(&self) -> String;

    /// Text currently in the value input
    fn raw_value(&self) -> String;

    /// Replace both unit lists. The source list selects its first option;
    /// the destination list selects `to_selected`.
    fn set_unit_options(&mut self, options: &[SelectOption], to_selected: Option<&str>);

    fn set_result_text(&mut self, text: &str);

    /// Restore every field to its initial state
    fn reset_form(&mut self);

    fn focus_value_input(&mut self);

    /// Write the current year into the footer, if the view has one
    fn set_footer_year(&mut self, _year: i32) {}
}
