//! Style configuration read by widget evaluation.
//!
//! A [`Style`] is a passive record: colors, a font reference, font size and
//! letter spacing, padding. It carries no behavior. The context resets it to
//! a base style at frame begin; hosts override it after `begin_frame` or load
//! a theme file once at startup with [`Style::from_toml_str`].

use serde::{Deserialize, Serialize};

use crate::error::StyleConfigError;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Opaque reference to a host-registered font.
///
/// The core never touches glyph data; it passes this handle back to the
/// renderer's measurement and draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontId(pub u32);

impl FontId {
    /// The host's default font.
    pub const DEFAULT: Self = Self(0);
}

/// Visual parameters read by widget evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Widget background fill.
    pub background: Color,
    /// Border and outline color.
    pub border: Color,
    /// Label text color.
    pub text: Color,
    /// Background used while a widget is highlighted or focused.
    pub accent: Color,
    /// Font the renderer should measure and draw with.
    pub font: FontId,
    /// Font size in pixels.
    pub font_size: f32,
    /// Additional advance between glyphs.
    pub letter_spacing: f32,
    /// Inner padding between a widget's border and its content.
    pub padding: f32,
    /// Border thickness.
    pub border_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::BLACK,
            text: Color::BLACK,
            accent: Color::rgb(0.6, 0.6, 0.6),
            font: FontId::DEFAULT,
            font_size: 20.0,
            letter_spacing: 1.0,
            padding: 6.0,
            border_width: 2.0,
        }
    }
}

impl Style {
    /// Loads a style from a TOML document.
    ///
    /// Missing fields fall back to the defaults, so a theme file only needs
    /// to name what it changes.
    ///
    /// # Errors
    ///
    /// Returns [`StyleConfigError::Parse`] if the document is not valid TOML
    /// or does not match the style schema.
    pub fn from_toml_str(source: &str) -> Result<Self, StyleConfigError> {
        Ok(toml::from_str(source)?)
    }
}
