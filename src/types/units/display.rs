use std::fmt;

/// Turn a unit key such as `stevenHawking` or `fluid_ounce` into a label.
///
/// Spaces go in at lower-to-upper camelCase boundaries, underscores become
/// spaces, and the first ASCII letter of every word is uppercased.
pub fn format_unit_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(if ch == '_' { ' ' } else { ch });
        prev = Some(ch);
    }

    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && at_word_start {
            label.push(ch.to_ascii_uppercase());
        } else {
            label.push(ch);
        }
        at_word_start = !is_word;
    }
    label
}

/// Display wrapper printing a unit key as its label
#[derive(Debug)]
pub struct UnitLabel<'a>(pub &'a str);

impl fmt::Display for UnitLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_unit_label(self.0))
    }
}

/// Shortest round-trip form of `value`, switching to exponent notation
/// below 1e-6 and from 1e21 upward (`1e-7`, `1.5e+21`).
pub fn format_plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // `{:e}` yields the shortest digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    // value = 0.digits * 10^n
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_digits, frac_digits) = digits.split_at(n as usize);
        format!("{}.{}", int_digits, frac_digits)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if exponent >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// The sentence shown after a successful conversion,
/// e.g. `1 Kilometer = 1,000 Meter`.
#[derive(Debug, Clone)]
pub struct ConversionSummary<'a> {
    pub input: f64,
    pub from_unit: &'a str,
    pub formatted_result: String,
    pub to_unit: &'a str,
}

impl fmt::Display for ConversionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            format_plain_number(self.input),
            UnitLabel(self.from_unit),
            self.formatted_result,
            UnitLabel(self.to_unit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        assert_eq!(format_unit_label("stevenHawking"), "Steven Hawking");
        assert_eq!(format_unit_label("usDollar"), "Us Dollar");
        assert_eq!(format_unit_label("kilometer"), "Kilometer");
    }

    #[test]
    fn test_underscored_keys() {
        assert_eq!(format_unit_label("fluid_ounce"), "Fluid Ounce");
        assert_eq!(format_unit_label("cubic_foot_per_second"), "Cubic Foot Per Second");
    }

    #[test]
    fn test_acronym_runs_only_split_once() {
        // Only a lowercase letter followed by an uppercase one is a boundary
        assert_eq!(format_unit_label("megaBTU"), "Mega BTU");
        assert_eq!(format_unit_label("ABC"), "ABC");
    }

    #[test]
    fn test_digits_and_empty() {
        assert_eq!(format_unit_label(""), "");
        assert_eq!(format_unit_label("x2_speed"), "X2 Speed");
    }

    #[test]
    fn test_plain_numbers_switch_to_exponent_at_the_edges() {
        assert_eq!(format_plain_number(1e21), "1e+21");
        assert_eq!(format_plain_number(1.5e21), "1.5e+21");
        assert_eq!(format_plain_number(1e20), "100000000000000000000");
        assert_eq!(format_plain_number(1e-7), "1e-7");
        assert_eq!(format_plain_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_plain_number(0.000001), "0.000001");
        assert_eq!(format_plain_number(0.0625), "0.0625");
    }

    #[test]
    fn test_plain_numbers_in_the_middle_range() {
        assert_eq!(format_plain_number(1.0), "1");
        assert_eq!(format_plain_number(2.5), "2.5");
        assert_eq!(format_plain_number(-40.0), "-40");
        assert_eq!(format_plain_number(123.456), "123.456");
        assert_eq!(format_plain_number(1500.0), "1500");
        assert_eq!(format_plain_number(-0.0), "0");
    }

    #[test]
    fn test_summary_sentence() {
        let summary = ConversionSummary {
            input: 1.0,
            from_unit: "kilometer",
            formatted_result: "1,000".into(),
            to_unit: "meter",
        };
        assert_eq!(summary.to_string(), "1 Kilometer = 1,000 Meter");

        let summary = ConversionSummary {
            input: -0.0,
            from_unit: "celsius",
            formatted_result: "32".into(),
            to_unit: "fahrenheit",
        };
        assert_eq!(summary.to_string(), "0 Celsius = 32 Fahrenheit");
    }

    #[test]
    fn test_fractional_input_keeps_its_digits() {
        let summary = ConversionSummary {
            input: 2.5,
            from_unit: "stevenHawking",
            formatted_result: "396.893".into(),
            to_unit: "kilogram",
        };
        assert_eq!(summary.to_string(), "2.5 Steven Hawking = 396.893 Kilogram");
    }
}
