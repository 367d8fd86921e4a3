//! Parsing and conversion for `oklch(L C H)` color strings.
//!
//! Only the fixed three-number grammar is recognized; anything else is the
//! caller's problem. Conversion goes through the OKLab basis to linear
//! sRGB, clamps each linear channel to [0, 1], then gamma-encodes to 8-bit
//! channel values.

use regex::Regex;

lazy_static! {
    static ref OKLCH: Regex = Regex::new(
        r"^oklch\(\s*([+-]?(?:\d+\.?\d*|\.\d+))\s+([+-]?(?:\d+\.?\d*|\.\d+))\s+([+-]?(?:\d+\.?\d*|\.\d+))\s*\)$"
    )
    .unwrap();
}

/// An OKLCH color: lightness in [0, 1], chroma >= 0, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    /// Parses a string like `oklch(0.7 0.1 150)`. Internal whitespace is
    /// arbitrary; percentage and `deg` suffixes are not part of the
    /// grammar. Returns `None` for anything that doesn't match.
    pub fn parse(input: &str) -> Option<Oklch> {
        let caps = OKLCH.captures(input.trim())?;
        // The capture pattern only admits valid float syntax, so these
        // parses cannot fail in practice.
        let l = caps[1].parse().ok()?;
        let c = caps[2].parse().ok()?;
        let h = caps[3].parse().ok()?;
        Some(Oklch { l, c, h })
    }

    /// Converts to 8-bit sRGB channels.
    ///
    /// Out-of-gamut colors land on the nearest face of the sRGB cube: each
    /// linear channel is clamped to [0, 1] before gamma encoding.
    pub fn to_srgb8(self) -> [u8; 3] {
        let h_rad = self.h.to_radians();
        let a = self.c * h_rad.cos();
        let b = self.c * h_rad.sin();

        let l_ = self.l + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = self.l - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = self.l - 0.0894841775 * a - 1.2914855480 * b;

        let l3 = l_ * l_ * l_;
        let m3 = m_ * m_ * m_;
        let s3 = s_ * s_ * s_;

        let red = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
        let green = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
        let blue = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

        [
            encode_channel(red),
            encode_channel(green),
            encode_channel(blue),
        ]
    }
}

fn encode_channel(linear: f64) -> u8 {
    let v = gamma_encode(linear.clamp(0.0, 1.0)).clamp(0.0, 1.0);
    (v * 255.0).round() as u8
}

/// The sRGB transfer function, linear light to display value.
fn gamma_encode(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_triple() {
        assert_eq!(
            Oklch::parse("oklch(0.7 0.1 150)"),
            Some(Oklch {
                l: 0.7,
                c: 0.1,
                h: 150.0
            })
        );
    }

    #[test]
    fn parses_arbitrary_internal_whitespace() {
        assert_eq!(
            Oklch::parse("oklch(  0.7   0.1\t150 )"),
            Some(Oklch {
                l: 0.7,
                c: 0.1,
                h: 150.0
            })
        );
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert!(Oklch::parse("  oklch(1 0 0)  ").is_some());
    }

    #[test]
    fn parses_leading_dot_and_signed_components() {
        assert_eq!(
            Oklch::parse("oklch(.5 0.0 -30)"),
            Some(Oklch {
                l: 0.5,
                c: 0.0,
                h: -30.0
            })
        );
    }

    #[test]
    fn rejects_other_color_expressions() {
        assert_eq!(Oklch::parse("rgb(255 0 0)"), None);
        assert_eq!(Oklch::parse("var(--accent)"), None);
        assert_eq!(Oklch::parse("#ff0000"), None);
        assert_eq!(Oklch::parse("hotpink"), None);
    }

    #[test]
    fn rejects_wrong_arity_and_suffixes() {
        assert_eq!(Oklch::parse("oklch(0.7 0.1)"), None);
        assert_eq!(Oklch::parse("oklch(0.7 0.1 150 30)"), None);
        assert_eq!(Oklch::parse("oklch(70% 0.1 150)"), None);
        assert_eq!(Oklch::parse("oklch(0.7 0.1 150deg)"), None);
        assert_eq!(Oklch::parse("oklch(a b c)"), None);
    }

    #[test]
    fn white_converts_to_full_channels() {
        let white = Oklch {
            l: 1.0,
            c: 0.0,
            h: 0.0,
        };
        assert_eq!(white.to_srgb8(), [255, 255, 255]);
    }

    #[test]
    fn black_converts_to_zero_channels() {
        let black = Oklch {
            l: 0.0,
            c: 0.0,
            h: 0.0,
        };
        assert_eq!(black.to_srgb8(), [0, 0, 0]);
    }

    #[test]
    fn achromatic_inputs_give_equal_channels() {
        let gray = Oklch {
            l: 0.5,
            c: 0.0,
            h: 123.4,
        };
        assert_eq!(gray.to_srgb8(), [99, 99, 99]);
    }

    #[test]
    fn chromatic_reference_values() {
        // Reference channels computed directly from the fixed matrices.
        let green = Oklch {
            l: 0.7,
            c: 0.1,
            h: 150.0,
        };
        assert_eq!(green.to_srgb8(), [111, 176, 125]);

        let blue = Oklch {
            l: 0.65,
            c: 0.15,
            h: 250.0,
        };
        assert_eq!(blue.to_srgb8(), [58, 147, 230]);
    }

    #[test]
    fn srgb_red_round_trips_from_its_oklch_coordinates() {
        let red = Oklch {
            l: 0.627955,
            c: 0.257683,
            h: 29.2338851,
        };
        assert_eq!(red.to_srgb8(), [255, 0, 0]);
    }

    #[test]
    fn out_of_gamut_channels_clamp_to_cube_faces() {
        // Chroma far beyond what sRGB can represent at this hue.
        let loud = Oklch {
            l: 0.45,
            c: 0.3,
            h: 264.0,
        };
        assert_eq!(loud.to_srgb8(), [0, 22, 247]);

        let overbright = Oklch {
            l: 1.3,
            c: 0.0,
            h: 0.0,
        };
        assert_eq!(overbright.to_srgb8(), [255, 255, 255]);
    }
}
