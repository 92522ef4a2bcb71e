pub mod units;

pub use units::{
    format_plain_number, format_unit_label, ConversionSummary, Unit, UnitDefinition, UnitLabel,
    UnitValue,
};
