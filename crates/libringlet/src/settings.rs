//! Theme settings and CSS variable emission.
//!
//! A theme is a named base color plus a color mode, optionally overridden
//! by an arbitrary CSS accent color. Settings are read from `ringlet.yaml`
//! and are forgiving: an accent that doesn't parse as a CSS color is
//! dropped in favor of the named theme, never an error.

use crate::ring;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    #[serde(rename = "auto")]
    #[default]
    Auto,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "light")]
    Light,
}

/// The built-in theme palette.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeColor {
    #[default]
    #[serde(rename = "zinc")]
    Zinc,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "rose")]
    Rose,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "violet")]
    Violet,
}

impl ThemeColor {
    /// The theme's base color for the given appearance.
    pub fn base_color(self, appearance: Appearance) -> &'static str {
        use Appearance::*;

        match (self, appearance) {
            (ThemeColor::Zinc, Light) => "oklch(0.21 0.006 285.885)",
            (ThemeColor::Zinc, Dark) => "oklch(0.92 0.004 286.32)",
            (ThemeColor::Red, _) => "oklch(0.637 0.237 25.331)",
            (ThemeColor::Rose, _) => "oklch(0.645 0.246 16.439)",
            (ThemeColor::Orange, Light) => "oklch(0.705 0.213 47.604)",
            (ThemeColor::Orange, Dark) => "oklch(0.646 0.222 41.116)",
            (ThemeColor::Green, Light) => "oklch(0.723 0.219 149.579)",
            (ThemeColor::Green, Dark) => "oklch(0.696 0.17 162.48)",
            (ThemeColor::Blue, Light) => "oklch(0.623 0.214 259.815)",
            (ThemeColor::Blue, Dark) => "oklch(0.546 0.245 262.881)",
            (ThemeColor::Yellow, _) => "oklch(0.795 0.184 86.047)",
            (ThemeColor::Violet, Light) => "oklch(0.606 0.25 292.717)",
            (ThemeColor::Violet, Dark) => "oklch(0.541 0.281 293.009)",
        }
    }
}

/// An intermediary struct used to parse settings.
///
/// Lets us sanitize the accent override before constructing the real
/// [`ThemeSettings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeSettingsDescription {
    #[serde(default)]
    theme: ThemeColor,
    #[serde(default)]
    color_mode: ColorMode,
    #[serde(default)]
    accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "ThemeSettingsDescription")]
pub struct ThemeSettings {
    #[serde(default)]
    pub theme: ThemeColor,
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    accent: Option<String>,
}

impl From<ThemeSettingsDescription> for ThemeSettings {
    fn from(value: ThemeSettingsDescription) -> Self {
        let accent = value
            .accent
            .filter(|color| csscolorparser::parse(color).is_ok());

        ThemeSettings {
            theme: value.theme,
            color_mode: value.color_mode,
            accent,
        }
    }
}

impl ThemeSettings {
    /// Settings for a named theme with no accent override.
    pub fn for_theme(theme: ThemeColor) -> ThemeSettings {
        ThemeSettings {
            theme,
            ..ThemeSettings::default()
        }
    }

    pub fn from_yaml(input: &str) -> Result<ThemeSettings> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// The effective accent color: the validated override if one was
    /// given, otherwise the named theme's base color.
    pub fn accent_color(&self, appearance: Appearance) -> &str {
        match &self.accent {
            Some(accent) => accent,
            None => self.theme.base_color(appearance),
        }
    }

    /// Emits the `--accent` and `--ring` custom properties for a selector.
    ///
    /// The caller picks the selector per appearance (`:root` and `.dark`,
    /// typically) and concatenates the blocks.
    pub fn generate_css(&self, selector: &str, appearance: Appearance) -> String {
        let accent = self.accent_color(appearance);

        let mut css = String::new();
        css.push_str(&format!("{} {{\n", selector));
        css.push_str(&format!("  --accent: {};\n", accent));
        css.push_str(&format!("  --ring: {};\n", ring::derive_default(accent)));
        css.push_str("}\n");
        css
    }
}
