//! Unit conversion across length, volume, mass, digital storage,
//! temperature and money.
//!
//! ```
//! use unit_convert::convert;
//!
//! assert_eq!(convert("length", 1.0, "kilometer", "meter"), 1000.0);
//! assert!(convert("length", 5.0, "meter", "unknownUnit").is_nan());
//! ```

pub mod types;
pub mod catalog;
pub mod engine;
pub mod format;
pub mod config;
pub mod session;

pub use catalog::{Category, SelectOption, UnitTable};
pub use config::{ConfigError, ConverterConfig};
pub use engine::{convert, try_convert, Conversion, ConversionError};
pub use format::{format_number, Locale, NumberFormat};
pub use types::*;
