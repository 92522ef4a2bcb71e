use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Locales with known separator conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "ja-JP")]
    JaJp,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::EsEs,
        Locale::ItIt,
        Locale::PtBr,
        Locale::JaJp,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::EsEs => "es-ES",
            Locale::ItIt => "it-IT",
            Locale::PtBr => "pt-BR",
            Locale::JaJp => "ja-JP",
        }
    }

    pub fn group_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ",",
            Locale::DeDe | Locale::EsEs | Locale::ItIt | Locale::PtBr => ".",
            // narrow no-break space
            Locale::FrFr => "\u{202F}",
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ".",
            _ => ",",
        }
    }

    /// Integer digits required before grouping kicks in
    fn min_grouping_digits(&self) -> usize {
        match self {
            Locale::EsEs => 5,
            _ => 4,
        }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts BCP 47 tags case-insensitively, with `-` or `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Output options for [`format_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub locale: Locale,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            max_fraction_digits: 6,
        }
    }
}

fn group_digits(digits: &str, separator: &str, min_grouping: usize) -> String {
    if digits.len() < min_grouping {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Fraction digits in the exact decimal expansion of the smallest subnormal
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round a non-negative finite value to `digits` fraction digits, ties away
/// from zero. Works on the exact decimal expansion so binary ties such as
/// 0.0078125 round up instead of to even.
fn round_half_away(magnitude: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let digits = digits.min(frac_part.len());

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let int_len = kept.len() - digits;
    let mut rounded = String::with_capacity(kept.len() + 1);
    rounded.extend(kept[..int_len].iter().map(|&b| b as char));
    if digits > 0 {
        rounded.push('.');
        rounded.extend(kept[int_len..].iter().map(|&b| b as char));
    }
    rounded
}

/// Format a number with locale separators, rounding to at most
/// `max_fraction_digits` and dropping trailing fraction zeros.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = round_half_away(value.abs(), format.max_fraction_digits);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let rounds_to_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let locale = format.locale;

    let mut out = String::new();
    if value < 0.0 && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_digits(
        int_part,
        locale.group_separator(),
        locale.min_grouping_digits(),
    ));
    if !frac_part.is_empty() {
        out.push_str(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}
