use std::str::FromStr;
use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// What the toggle button shows for a given theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    pub label: &'static str,
    pub icon: &'static str,
    pub aria_pressed: &'static str,
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                theme,
                label: "Switch to light mode",
                icon: "🌞",
                aria_pressed: "true",
            },
            Theme::Light => Self {
                theme,
                label: "Switch to dark mode",
                icon: "🌙",
                aria_pressed: "false",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_state_mirrors_theme() {
        let state = ThemeState::from(Theme::Dark);
        assert_eq!(state.aria_pressed, "true");
        assert_eq!(ThemeState::from(Theme::Light).aria_pressed, "false");
    }
}
