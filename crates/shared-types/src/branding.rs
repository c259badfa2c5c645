use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// Names of the seven colors, in the order they are injected.
pub const COLOR_KEYS: [&str; 7] = [
    "primary",
    "secondary",
    "accent",
    "background",
    "surface",
    "text",
    "textSecondary",
];

/// Dotted path under which validation reports a color, using the Rust field
/// name: `("dark", "textSecondary")` → `colors.dark.text_secondary`.
pub fn color_field_path(mode: ThemeMode, key: &str) -> String {
    let mut path = format!("colors.{}.", mode.as_str());
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            path.push('_');
            path.push(c.to_ascii_lowercase());
        } else {
            path.push(c);
        }
    }
    path
}

/// The seven named colors of one theme variant. Every key is a required
/// field, so a scheme can never be missing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub primary: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub secondary: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub accent: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub background: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub surface: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub text: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "crate::validation::validate_hex_color")))]
    pub text_secondary: String,
}

impl ColorScheme {
    pub fn light_default() -> Self {
        Self {
            primary: "#1E3A8A".to_string(),
            secondary: "#64748B".to_string(),
            accent: "#B45309".to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F8FAFC".to_string(),
            text: "#0F172A".to_string(),
            text_secondary: "#475569".to_string(),
        }
    }

    pub fn dark_default() -> Self {
        Self {
            primary: "#3B82F6".to_string(),
            secondary: "#94A3B8".to_string(),
            accent: "#FBBF24".to_string(),
            background: "#0F172A".to_string(),
            surface: "#1E293B".to_string(),
            text: "#F8FAFC".to_string(),
            text_secondary: "#CBD5E1".to_string(),
        }
    }

    /// `(key, value)` pairs in [`COLOR_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
        ]
    }

    fn apply(&mut self, patch: &ColorSchemePatch) {
        set_if(&mut self.primary, &patch.primary);
        set_if(&mut self.secondary, &patch.secondary);
        set_if(&mut self.accent, &patch.accent);
        set_if(&mut self.background, &patch.background);
        set_if(&mut self.surface, &patch.surface);
        set_if(&mut self.text, &patch.text);
        set_if(&mut self.text_secondary, &patch.text_secondary);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct BrandColors {
    #[cfg_attr(feature = "validation", validate(nested))]
    pub light: ColorScheme,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub dark: ColorScheme,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            light: ColorScheme::light_default(),
            dark: ColorScheme::dark_default(),
        }
    }
}

impl BrandColors {
    pub fn for_mode(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Fonts / contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct Fonts {
    /// Body and UI text.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Primary font is required"))
    )]
    pub primary: String,
    /// Headings.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Secondary font is required"))
    )]
    pub secondary: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            primary: "Inter, system-ui, sans-serif".to_string(),
            secondary: "Merriweather, Georgia, serif".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ContactInfo {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, max = 20, message = "Phone number must be 8-20 characters"))
    )]
    pub phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Website must be a full URL such as https://example.com"))
    )]
    pub website: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contato@jurisai.com.br".to_string(),
            phone: "+55 11 4000-0000".to_string(),
            website: "https://www.jurisai.com.br".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// BrandingConfig
// ---------------------------------------------------------------------------

/// Identity and visual settings a deployment can rebrand.
///
/// `Default` is the compiled-in branding; every other source is merged over
/// it with [`BrandingConfig::merged`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 50, message = "Application name must be 1-50 characters"))
    )]
    pub app_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Tagline must be 1-100 characters"))
    )]
    pub tagline: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Logo is required"))
    )]
    pub logo_url: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Favicon is required"))
    )]
    pub favicon_url: String,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub colors: BrandColors,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub fonts: Fonts,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub contact: ContactInfo,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: "JurisAI".to_string(),
            tagline: "Your intelligent legal assistant".to_string(),
            logo_url: "/assets/logo.svg".to_string(),
            favicon_url: "/assets/favicon.ico".to_string(),
            colors: BrandColors::default(),
            fonts: Fonts::default(),
            contact: ContactInfo::default(),
        }
    }
}

impl BrandingConfig {
    /// A copy of `self` with `patch` merged over it.
    pub fn merged(&self, patch: &BrandingPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }

    /// Merge `patch` in place. Nested records merge key by key, so fields the
    /// patch does not mention keep their current values.
    pub fn apply(&mut self, patch: &BrandingPatch) {
        set_if(&mut self.app_name, &patch.app_name);
        set_if(&mut self.tagline, &patch.tagline);
        set_if(&mut self.logo_url, &patch.logo_url);
        set_if(&mut self.favicon_url, &patch.favicon_url);
        if let Some(colors) = &patch.colors {
            if let Some(light) = &colors.light {
                self.colors.light.apply(light);
            }
            if let Some(dark) = &colors.dark {
                self.colors.dark.apply(dark);
            }
        }
        if let Some(fonts) = &patch.fonts {
            set_if(&mut self.fonts.primary, &fonts.primary);
            set_if(&mut self.fonts.secondary, &fonts.secondary);
        }
        if let Some(contact) = &patch.contact {
            set_if(&mut self.contact.email, &contact.email);
            set_if(&mut self.contact.phone, &contact.phone);
            set_if(&mut self.contact.website, &contact.website);
        }
    }
}

fn set_if(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}

// ---------------------------------------------------------------------------
// Partial overrides
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSchemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
}

impl From<&ColorScheme> for ColorSchemePatch {
    fn from(c: &ColorScheme) -> Self {
        Self {
            primary: Some(c.primary.clone()),
            secondary: Some(c.secondary.clone()),
            accent: Some(c.accent.clone()),
            background: Some(c.background.clone()),
            surface: Some(c.surface.clone()),
            text: Some(c.text.clone()),
            text_secondary: Some(c.text_secondary.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BrandColorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<ColorSchemePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<ColorSchemePatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FontsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Partial branding override. This is also the shape of the persisted
/// override and of the remote `branding.json`, so documents written by older
/// versions with fewer keys still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BrandColorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactPatch>,
}

impl BrandingPatch {
    /// Override a single color of one variant. `None` when `key` is not one
    /// of [`COLOR_KEYS`].
    pub fn color(mode: ThemeMode, key: &str, value: impl Into<String>) -> Option<Self> {
        let value = Some(value.into());
        let mut scheme = ColorSchemePatch::default();
        match key {
            "primary" => scheme.primary = value,
            "secondary" => scheme.secondary = value,
            "accent" => scheme.accent = value,
            "background" => scheme.background = value,
            "surface" => scheme.surface = value,
            "text" => scheme.text = value,
            "textSecondary" => scheme.text_secondary = value,
            _ => return None,
        }
        let colors = match mode {
            ThemeMode::Light => BrandColorsPatch {
                light: Some(scheme),
                dark: None,
            },
            ThemeMode::Dark => BrandColorsPatch {
                light: None,
                dark: Some(scheme),
            },
        };
        Some(Self {
            colors: Some(colors),
            ..Self::default()
        })
    }
}

impl From<&BrandingConfig> for BrandingPatch {
    fn from(c: &BrandingConfig) -> Self {
        Self {
            app_name: Some(c.app_name.clone()),
            tagline: Some(c.tagline.clone()),
            logo_url: Some(c.logo_url.clone()),
            favicon_url: Some(c.favicon_url.clone()),
            colors: Some(BrandColorsPatch {
                light: Some((&c.colors.light).into()),
                dark: Some((&c.colors.dark).into()),
            }),
            fonts: Some(FontsPatch {
                primary: Some(c.fonts.primary.clone()),
                secondary: Some(c.fonts.secondary.clone()),
            }),
            contact: Some(ContactPatch {
                email: Some(c.contact.email.clone()),
                phone: Some(c.contact.phone.clone()),
                website: Some(c.contact.website.clone()),
            }),
        }
    }
}
