//! Float rendering matching C's `%g` conversion, used for coefficient text.

/// Significant digits printed by `%g` when no precision is given.
const PRECISION: usize = 6;

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// `%g`: shortest of fixed and exponent notation with six significant digits.
pub(crate) fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // the exponent has to be taken after rounding to PRECISION digits
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// `%+g`: like [`format_g`] but always carries a sign.
pub(crate) fn format_g_signed(value: f64) -> String {
    let text = format_g(value);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}
