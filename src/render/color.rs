//! CSS value formatting shared by the position and style passes.

use crate::types::{Rgb, Rgba};

/// Shortest round-trip rendering of a number, with negative zero folded to `0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Fixed-point rendering with `precision` decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$}");
    // `-0.0000` reads as a sign error in a stylesheet
    if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
        return rendered[1..].to_string();
    }
    rendered
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// `rgb(R, G, B)` from 0-1 channels.
pub fn rgb(color: Rgb) -> String {
    format!(
        "rgb({}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// `rgba(R, G, B, a)`, always carrying the alpha term.
pub fn rgba(color: Rgb, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        css_number(alpha)
    )
}

/// `rgb(...)` when fully opaque, `rgba(...)` otherwise.
pub fn rgb_or_rgba(color: Rgb, alpha: f64) -> String {
    if alpha == 1.0 {
        rgb(color)
    } else {
        rgba(color, alpha)
    }
}

pub fn rgba_of(color: Rgba) -> String {
    rgba(
        Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        },
        color.a,
    )
}
