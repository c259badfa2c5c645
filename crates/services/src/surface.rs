//! Presentation port: the resolved visual state for one branding + mode, and
//! the surface it is written to.

use shared_types::{BrandingConfig, ThemeMode};
use std::cell::{Cell, RefCell};

/// Everything the page needs to show a branding in one color mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub mode: ThemeMode,
    /// `(css variable, value)` pairs: seven colors then two fonts.
    pub variables: Vec<(String, String)>,
    pub title: String,
    pub favicon_url: String,
}

impl Presentation {
    pub fn resolve(branding: &BrandingConfig, mode: ThemeMode) -> Self {
        let mut variables: Vec<(String, String)> = branding
            .colors
            .for_mode(mode)
            .entries()
            .into_iter()
            .map(|(key, value)| (color_variable(key), value.to_string()))
            .collect();
        variables.push(("--font-primary".to_string(), branding.fonts.primary.clone()));
        variables.push(("--font-secondary".to_string(), branding.fonts.secondary.clone()));

        Self {
            mode,
            variables,
            title: document_title(branding),
            favicon_url: branding.favicon_url.clone(),
        }
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// `textSecondary` → `--color-text-secondary`.
pub fn color_variable(key: &str) -> String {
    let mut name = String::from("--color-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

fn document_title(branding: &BrandingConfig) -> String {
    if branding.tagline.is_empty() {
        branding.app_name.clone()
    } else {
        format!("{} | {}", branding.app_name, branding.tagline)
    }
}

// ── Trait ────────────────────────────────────────────────────────────

/// Where resolved presentation is written. Applying must be synchronous so a
/// branding mutation is visible once it returns.
pub trait ThemeSurface {
    fn apply(&self, presentation: &Presentation);

    /// Platform color-scheme preference; surfaces without one report light.
    fn system_prefers_dark(&self) -> bool {
        false
    }
}

/// Discards everything. Used before a real surface exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl ThemeSurface for NullSurface {
    fn apply(&self, _presentation: &Presentation) {}
}

/// Keeps every applied presentation, for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    applied: RefCell<Vec<Presentation>>,
    prefers_dark: Cell<bool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefers_dark(self) -> Self {
        self.prefers_dark.set(true);
        self
    }

    pub fn last(&self) -> Option<Presentation> {
        self.applied.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, presentation: &Presentation) {
        self.applied.borrow_mut().push(presentation.clone());
    }

    fn system_prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}
