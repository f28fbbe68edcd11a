use std::fmt::{self, Display, Formatter};

use num_complex::Complex64;
use num_traits::Zero;
use tracing::debug;

use crate::{
    constants::{MAX_REPR_LEN, TRUNCATION_MARKER},
    numeric::format::{format_g, format_g_signed},
    polynomials::Polynomial,
};

fn is_negative(c: Complex64) -> bool {
    if c.re != 0.0 {
        c.re < 0.0
    } else {
        c.im < 0.0
    }
}

fn push_power(out: &mut String, degree: usize) {
    match degree {
        0 => {}
        1 => out.push('X'),
        _ => {
            out.push_str("X**");
            out.push_str(&degree.to_string());
        }
    }
}

/// Appends `c * X**degree`, `c` rendered as is (sign included).
fn push_term(out: &mut String, c: Complex64, degree: usize) {
    let factor = if c.im == 0.0 {
        if degree > 0 && c.re == 1.0 {
            None
        } else if degree > 0 && c.re == -1.0 {
            out.push('-');
            None
        } else {
            Some(format_g(c.re))
        }
    } else if c.re == 0.0 {
        if c.im == 1.0 {
            Some("j".to_string())
        } else {
            Some(format!("{}j", format_g(c.im)))
        }
    } else if degree == 0 {
        Some(format!("{}{}j", format_g(c.re), format_g_signed(c.im)))
    } else {
        Some(format!("({}{}j)", format_g(c.re), format_g_signed(c.im)))
    };

    match factor {
        Some(factor) if degree == 0 => out.push_str(&factor),
        Some(factor) => {
            out.push_str(&factor);
            out.push_str(" * ");
            push_power(out, degree);
        }
        None => push_power(out, degree),
    }
}

fn render(coefficients: &[Complex64]) -> String {
    let mut out = String::new();
    for (degree, c) in coefficients.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        if out.is_empty() {
            push_term(&mut out, *c, degree);
        } else if is_negative(*c) {
            out.push_str(" - ");
            push_term(&mut out, -*c, degree);
        } else {
            out.push_str(" + ");
            push_term(&mut out, *c, degree);
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Cuts `text` down to [`MAX_REPR_LEN`] with the marker as its tail when it is longer.
fn apply_length_cap(mut text: String) -> String {
    if text.len() <= MAX_REPR_LEN {
        return text;
    }
    debug!(full_len = text.len(), "truncating polynomial representation");
    let mut keep = MAX_REPR_LEN - TRUNCATION_MARKER.len();
    while !text.is_char_boundary(keep) {
        keep -= 1;
    }
    text.truncate(keep);
    text.push_str(TRUNCATION_MARKER);
    text
}

impl Polynomial {
    /// Canonical text, e.g. `-1 + 3 * X**2`, at most [`MAX_REPR_LEN`] characters long.
    pub fn repr(&self) -> String {
        apply_length_cap(render(self.coefficients()))
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}
