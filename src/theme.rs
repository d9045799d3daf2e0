//! Color themes for the gallery
//!
//! Three terminal palettes, selected with `--theme`.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// Available color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Nord-inspired theme (default) - modern muted colors
    #[default]
    Nord,
    /// Amber CRT - orange/amber text on black
    AmberCrt,
    /// Green Phosphor - green text on black
    GreenPhosphor,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nord" => Ok(Theme::Nord),
            "amber" | "ambercrt" | "amber-crt" => Ok(Theme::AmberCrt),
            "green" | "greenphosphor" | "green-phosphor" => Ok(Theme::GreenPhosphor),
            _ => Err(format!(
                "Unknown theme '{s}'. Available: nord, amber-crt, green-phosphor"
            )),
        }
    }
}

impl Theme {
    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Nord => ColorScheme::nord(),
            Theme::AmberCrt => ColorScheme::amber_crt(),
            Theme::GreenPhosphor => ColorScheme::green_phosphor(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Nord => write!(f, "nord"),
            Theme::AmberCrt => write!(f, "amber-crt"),
            Theme::GreenPhosphor => write!(f, "green-phosphor"),
        }
    }
}

/// Color scheme for a theme
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Primary text color
    pub text: Color,
    /// Dimmed text color (image URLs, disabled hints)
    pub text_dim: Color,
    /// Header title color
    pub title: Color,
    /// Border of the selected card
    pub focus_border: Color,
    /// Border of other cards
    pub unfocused_border: Color,
    /// "Favourited" label and footer count
    pub favorite: Color,
    /// Toast info message color
    pub toast_info: Color,
    /// Toast and footer error color
    pub toast_error: Color,
}

impl ColorScheme {
    pub fn nord() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            title: Color::Cyan,
            focus_border: Color::Yellow,
            unfocused_border: Color::DarkGray,
            favorite: Color::LightRed,
            toast_info: Color::Green,
            toast_error: Color::Red,
        }
    }

    pub fn amber_crt() -> Self {
        let amber = Color::Rgb(255, 176, 0);
        let amber_bright = Color::Rgb(255, 200, 100);
        let amber_dim = Color::Rgb(180, 120, 0);

        Self {
            text: amber,
            text_dim: amber_dim,
            title: amber_bright,
            focus_border: amber_bright,
            unfocused_border: amber_dim,
            favorite: Color::Rgb(255, 90, 60),
            toast_info: Color::Rgb(100, 255, 100),
            toast_error: Color::Red,
        }
    }

    pub fn green_phosphor() -> Self {
        let green = Color::Rgb(0, 255, 0);
        let green_dim = Color::Rgb(0, 180, 0);
        let green_bright = Color::Rgb(100, 255, 100);

        Self {
            text: green,
            text_dim: green_dim,
            title: green_bright,
            focus_border: green_bright,
            unfocused_border: green_dim,
            favorite: Color::Yellow,
            toast_info: green_bright,
            toast_error: Color::Red,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::nord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("nord".parse::<Theme>().unwrap(), Theme::Nord);
        assert_eq!("NORD".parse::<Theme>().unwrap(), Theme::Nord);
        assert_eq!("amber".parse::<Theme>().unwrap(), Theme::AmberCrt);
        assert_eq!("green-phosphor".parse::<Theme>().unwrap(), Theme::GreenPhosphor);
        assert!("dos-blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for theme in [Theme::Nord, Theme::AmberCrt, Theme::GreenPhosphor] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }
}
