/// Parse the longest numeric prefix of `input`, ignoring whatever follows.
///
/// Leading whitespace is skipped. The accepted prefix is
/// `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` or `[+-]?Infinity`.
/// Returns `None` when no number starts the text.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        let end = pos + "Infinity".len();
        return text[..end].parse::<f64>().ok();
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        let mut look = pos + 1;
        while look < bytes.len() && bytes[look].is_ascii_digit() {
            look += 1;
        }
        frac_digits = look - pos - 1;
        if int_digits > 0 || frac_digits > 0 {
            pos = look;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut look = pos + 1;
        if look < bytes.len() && matches!(bytes[look], b'+' | b'-') {
            look += 1;
        }
        let exp_start = look;
        while look < bytes.len() && bytes[look].is_ascii_digit() {
            look += 1;
        }
        if look > exp_start {
            pos = look;
        }
    }

    text[..pos].parse::<f64>().ok()
}
