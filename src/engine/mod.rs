pub mod convert;

pub use convert::{convert, try_convert, Conversion, ConversionError};
