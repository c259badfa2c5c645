use dioxus::prelude::*;
use services::{Presentation, ThemeSurface};
use shared_types::{ThemePreference, ALL_PREFERENCES};

use crate::FormSelect;

/// Writes resolved branding onto the live document: CSS custom properties
/// and `data-theme` on `<html>`, the page title and the favicon link.
///
/// Must be used from inside the Dioxus runtime, since it goes through
/// [`document::eval`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DomSurface;

impl ThemeSurface for DomSurface {
    fn apply(&self, presentation: &Presentation) {
        tracing::debug!(mode = presentation.mode.as_str(), "Applying presentation");
        document::eval(&presentation_script(presentation));
    }

    #[cfg(target_arch = "wasm32")]
    fn system_prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

/// JS string literal, quoted and escaped.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script that applies a presentation to `document`.
pub fn presentation_script(presentation: &Presentation) -> String {
    let mut script = String::from("(function() {\n    var root = document.documentElement;\n");
    script.push_str(&format!(
        "    root.setAttribute('data-theme', {});\n",
        js_string(presentation.mode.as_str())
    ));
    for (name, value) in &presentation.variables {
        script.push_str(&format!(
            "    root.style.setProperty({}, {});\n",
            js_string(name),
            js_string(value)
        ));
    }
    script.push_str(&format!("    document.title = {};\n", js_string(&presentation.title)));
    script.push_str(&format!(
        r#"    var icon = document.querySelector("link[rel~='icon']");
    if (!icon) {{
        icon = document.createElement('link');
        icon.rel = 'icon';
        document.head.appendChild(icon);
    }}
    icon.href = {};
}})();
"#,
        js_string(&presentation.favicon_url)
    ));
    script
}

/// Light / dark / system selector.
#[component]
pub fn ThemePicker(
    value: ThemePreference,
    on_change: EventHandler<ThemePreference>,
    #[props(default = "Theme".to_string())] label: String,
) -> Element {
    rsx! {
        FormSelect {
            label: label,
            value: value.as_str().to_string(),
            onchange: move |evt: Event<FormData>| on_change.call(ThemePreference::from_key(&evt.value())),
            for pref in ALL_PREFERENCES {
                option {
                    value: pref.as_str(),
                    selected: *pref == value,
                    "{pref.display_name()}"
                }
            }
        }
    }
}
