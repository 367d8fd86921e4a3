//! Ring color derivation.
//!
//! Theming code hands us the active theme's base color and applies the
//! returned string as a CSS property value (a focus ring, a box shadow).
//! The derivation never fails: inputs we can't interpret degrade to a
//! `color-mix(...)` deferral or to the caller's fallback string.

use crate::oklch::Oklch;

/// How strongly the derived color is pulled toward black. 0 is black,
/// 1 keeps the original brightness.
pub const DEFAULT_MIX_RATIO: f64 = 0.62;

pub const DEFAULT_FALLBACK: &str = "rgba(0, 0, 0, 0.15)";

/// [`derive`] with the default mix ratio and fallback.
pub fn derive_default(color: &str) -> String {
    derive(color, DEFAULT_MIX_RATIO, DEFAULT_FALLBACK)
}

/// Derives a darkened ring variant of `color`.
///
/// Inputs of the form `oklch(L C H)` are converted to sRGB and scaled
/// toward black by `mix_ratio`, returned as `rgb(R G B)`. A `var(...)`
/// reference can't be resolved here, so the mix is deferred to the
/// rendering engine as a `color-mix(...)` expression. Anything else
/// returns `fallback` verbatim.
///
/// `mix_ratio` is not itself clamped; only the per-channel results are.
pub fn derive(color: &str, mix_ratio: f64, fallback: &str) -> String {
    let Some(oklch) = Oklch::parse(color) else {
        let trimmed = color.trim();
        if trimmed.starts_with("var(") {
            let percent = (mix_ratio * 100.0).round() as i64;
            return format!("color-mix(in oklch, {} {}%, black)", trimmed, percent);
        }
        return fallback.to_string();
    };

    let [r, g, b] = oklch.to_srgb8();
    format!(
        "rgb({} {} {})",
        mix_toward_black(r, mix_ratio),
        mix_toward_black(g, mix_ratio),
        mix_toward_black(b, mix_ratio)
    )
}

/// Linear interpolation toward black in 8-bit sRGB space, not a perceptual
/// mix. Good enough for a dimmed ring variant.
fn mix_toward_black(channel: u8, ratio: f64) -> u8 {
    (f64::from(channel) * ratio).round().clamp(0.0, 255.0) as u8
}
