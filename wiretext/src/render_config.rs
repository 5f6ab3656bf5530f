//! Rendering configuration for SVG export
//!
//! Defaults reproduce the fixed greyscale wireframe style on a 960-unit
//! canvas. A TOML file may override any subset of the values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in SVG units
    pub page_width: f64,

    /// Outer padding on every side of the canvas
    pub padding: f64,

    pub fonts: Fonts,
    pub colors: Colors,
    pub spacing: Spacing,
    pub button: ButtonStyle,
    pub input: InputStyle,
    pub image: ImageStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width: 960.0,
            padding: 40.0,
            fonts: Fonts::default(),
            colors: Colors::default(),
            spacing: Spacing::default(),
            button: ButtonStyle::default(),
            input: InputStyle::default(),
            image: ImageStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Width available to content between the left and right padding
    pub fn content_width(&self) -> f64 {
        self.page_width - self.padding * 2.0
    }

    /// Load configuration from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RenderConfig)` - Loaded configuration, missing values defaulted
    /// * `Err(RenderConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderConfigError> {
        let content = fs::read_to_string(&path).map_err(RenderConfigError::IoError)?;

        let config: RenderConfig =
            toml::from_str(&content).map_err(RenderConfigError::ParseError)?;

        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to a TOML file
    ///
    /// # Parameters
    /// * `path` - Path where the configuration file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(RenderConfigError)` - Error serializing or writing the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderConfigError> {
        let content = toml::to_string_pretty(self).map_err(RenderConfigError::SerializeError)?;

        fs::write(&path, content).map_err(RenderConfigError::IoError)?;

        Ok(())
    }
}

/// Font weight as written to SVG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Size and weight of one text style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

/// Typography for headings, body text and labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub h1: FontSpec,
    pub h2: FontSpec,
    pub h3: FontSpec,
    pub h4: FontSpec,
    pub h5: FontSpec,
    pub h6: FontSpec,
    pub body: FontSpec,
    pub label: FontSpec,
    /// Font family written on every text element
    pub family: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            h1: FontSpec::new(32.0, FontWeight::Bold),
            h2: FontSpec::new(24.0, FontWeight::Bold),
            h3: FontSpec::new(20.0, FontWeight::Bold),
            h4: FontSpec::new(18.0, FontWeight::Bold),
            h5: FontSpec::new(16.0, FontWeight::Bold),
            h6: FontSpec::new(14.0, FontWeight::Bold),
            body: FontSpec::new(14.0, FontWeight::Normal),
            label: FontSpec::new(12.0, FontWeight::Normal),
            family: "Arial, sans-serif".to_string(),
        }
    }
}

impl Fonts {
    /// Font for a heading level; levels outside 1..=6 use the body font
    pub fn heading(&self, level: u8) -> FontSpec {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => self.body,
        }
    }
}

/// Greyscale wireframe palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: String,
    pub border: String,
    pub text: String,
    pub text_light: String,
    pub button_bg: String,
    pub button_border: String,
    pub image_placeholder: String,
    pub landmark_bg: String,
    pub link: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            border: "#CCCCCC".to_string(),
            text: "#333333".to_string(),
            text_light: "#666666".to_string(),
            button_bg: "#F5F5F5".to_string(),
            button_border: "#999999".to_string(),
            image_placeholder: "#E8E8E8".to_string(),
            landmark_bg: "#FAFAFA".to_string(),
            link: "#0066CC".to_string(),
        }
    }
}

/// Vertical spacing constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Added after each landmark
    pub section: f64,
    /// Added after each element
    pub element: f64,
    pub small: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            section: 40.0,
            element: 16.0,
            small: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub height: f64,
    pub border_radius: f64,
    pub padding_x: f64,
    pub min_width: f64,
    /// Approximate advance per character used to size the label
    pub char_width: f64,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            height: 40.0,
            border_radius: 4.0,
            padding_x: 24.0,
            min_width: 120.0,
            char_width: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputStyle {
    pub height: f64,
    pub border_radius: f64,
}

impl Default for InputStyle {
    fn default() -> Self {
        Self {
            height: 40.0,
            border_radius: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStyle {
    pub min_height: f64,
    /// Fraction of the content width
    pub default_width: f64,
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            min_height: 120.0,
            default_width: 0.8,
        }
    }
}

/// Errors that can occur when loading or saving render configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum RenderConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderConfigError::IoError(e) => write!(f, "IO error: {}", e),
            RenderConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            RenderConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for RenderConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderConfigError::IoError(e) => Some(e),
            RenderConfigError::ParseError(e) => Some(e),
            RenderConfigError::SerializeError(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();

        assert_eq!(config.page_width, 960.0);
        assert_eq!(config.content_width(), 880.0);
        assert_eq!(config.fonts.heading(1).size, 32.0);
        assert_eq!(config.fonts.heading(6).size, 14.0);
        assert_eq!(config.fonts.heading(9), config.fonts.body);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_content = r##"
page_width = 1200.0

[colors]
landmark_bg = "#EEEEEE"

[spacing]
element = 20.0
"##;

        let config: RenderConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.page_width, 1200.0);
        assert_eq!(config.padding, 40.0);
        assert_eq!(config.colors.landmark_bg, "#EEEEEE");
        assert_eq!(config.colors.border, "#CCCCCC");
        assert_eq!(config.spacing.element, 20.0);
        assert_eq!(config.spacing.small, 8.0);
        assert_eq!(config.fonts.h2.size, 24.0);
    }

    #[test]
    fn test_render_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiretext.toml");
        let mut config = RenderConfig::default();
        config.button.min_width = 96.0;

        config.save(&path).unwrap();
        let loaded = RenderConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = RenderConfig::load("/nonexistent/wiretext.toml");

        assert!(matches!(result, Err(RenderConfigError::IoError(_))));
    }
}
