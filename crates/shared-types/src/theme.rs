use serde::{Deserialize, Serialize};

/// Concrete color mode the presentation layer is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// What the user asked for. `System` follows the platform color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// All preferences in display order.
pub const ALL_PREFERENCES: &[ThemePreference] = &[
    ThemePreference::Light,
    ThemePreference::Dark,
    ThemePreference::System,
];

impl ThemePreference {
    /// Internal key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "Match system",
        }
    }

    /// Parse a stored key, falling back to `System`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Resolve to a concrete mode. Explicit preferences ignore the platform.
    pub fn resolve(&self, system_prefers_dark: bool) -> ThemeMode {
        match (self, system_prefers_dark) {
            (ThemePreference::Light, _) => ThemeMode::Light,
            (ThemePreference::Dark, _) => ThemeMode::Dark,
            (ThemePreference::System, true) => ThemeMode::Dark,
            (ThemePreference::System, false) => ThemeMode::Light,
        }
    }
}
