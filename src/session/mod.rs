pub mod controller;
pub mod memory;
pub mod view;

pub use controller::{
    FormController, Outcome, MSG_ENTER_VALUE, MSG_INVALID_NUMBER, MSG_SELECT_UNITS,
    MSG_UNAVAILABLE,
};
pub use memory::MemoryView;
pub use view::ConverterView;
