pub mod category;
pub mod table;

pub use category::{Category, SelectOption};
pub use table::{CategoryListing, TableError, UnitTable};
