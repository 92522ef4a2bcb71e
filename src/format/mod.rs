pub mod number;
pub mod parse;

pub use number::{format_number, Locale, NumberFormat, UnsupportedLocale};
pub use parse::parse_leading_float;
