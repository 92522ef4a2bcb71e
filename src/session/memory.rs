use crate::catalog::SelectOption;
use crate::session::view::ConverterView;

/// In-memory form state implementing [`ConverterView`]
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    initial_category: String,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: String,
    pub from_options: Vec<SelectOption>,
    pub to_options: Vec<SelectOption>,
    pub result_text: String,
    pub footer_year: Option<i32>,
    pub value_focused: bool,
}

impl MemoryView {
    /// A blank form whose category selector starts (and resets) at `category`
    pub fn new(category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            initial_category: category.clone(),
            category,
            ..Default::default()
        }
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn select_units(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.from_unit = from.into();
        self.to_unit = to.into();
    }

    pub fn enter_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.value_focused = true;
    }
}

impl ConverterView for MemoryView {
    fn selected_category(&self) -> String {
        self.category.clone()
    }

    fn selected_from_unit(&self) -> String {
        self.from_unit.clone()
    }

    fn selected_to_unit(&self) -> String {
        self.to_unit.clone()
    }

    fn raw_value(&self) -> String {
        self.value.clone()
    }

    fn set_unit_options(&mut self, options: &[SelectOption], to_selected: Option<&str>) {
        self.from_options = options.to_vec();
        self.to_options = options.to_vec();
        self.from_unit = options.first().map(|o| o.value.clone()).unwrap_or_default();
        self.to_unit = to_selected.map(str::to_string).unwrap_or_default();
    }

    fn set_result_text(&mut self, text: &str) {
        self.result_text = text.to_string();
    }

    fn reset_form(&mut self) {
        self.category = self.initial_category.clone();
        self.value.clear();
        self.from_unit = self.from_options.first().map(|o| o.value.clone()).unwrap_or_default();
        self.to_unit = self.to_options.first().map(|o| o.value.clone()).unwrap_or_default();
        self.value_focused = false;
    }

    fn focus_value_input(&mut self) {
        self.value_focused = true;
    }

    fn set_footer_year(&mut self, year: i32) {
        self.footer_year = Some(year);
    }
}
