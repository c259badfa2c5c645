//! Field groups for editing a branding record. Each group reports edits as a
//! [`BrandingPatch`], so the wizard and the settings page can merge them
//! into their own drafts.

use dioxus::prelude::*;
use shared_types::{
    color_field_path, BrandingConfig, BrandingPatch, ContactPatch, FontsPatch, ThemeMode,
};
use shared_ui::{DetailItem, DetailList, Input};
use std::collections::HashMap;

fn color_label(key: &str) -> &'static str {
    match key {
        "primary" => "Primary",
        "secondary" => "Secondary",
        "accent" => "Accent",
        "background" => "Background",
        "surface" => "Surface",
        "text" => "Text",
        "textSecondary" => "Secondary text",
        _ => "Color",
    }
}

#[component]
pub fn BasicInfoFields(
    value: BrandingConfig,
    errors: HashMap<String, String>,
    on_change: EventHandler<BrandingPatch>,
) -> Element {
    rsx! {
        div { class: "form-grid",
            Input {
                label: "Application name",
                value: value.app_name,
                error: errors.get("app_name").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    app_name: Some(evt.value()),
                    ..Default::default()
                }),
            }
            Input {
                label: "Tagline",
                value: value.tagline,
                error: errors.get("tagline").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    tagline: Some(evt.value()),
                    ..Default::default()
                }),
            }
        }
    }
}

#[component]
pub fn VisualIdentityFields(
    value: BrandingConfig,
    errors: HashMap<String, String>,
    on_change: EventHandler<BrandingPatch>,
) -> Element {
    rsx! {
        div { class: "form-grid",
            Input {
                label: "Logo URL",
                value: value.logo_url.clone(),
                error: errors.get("logo_url").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    logo_url: Some(evt.value()),
                    ..Default::default()
                }),
            }
            Input {
                label: "Favicon URL",
                value: value.favicon_url.clone(),
                error: errors.get("favicon_url").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    favicon_url: Some(evt.value()),
                    ..Default::default()
                }),
            }
            Input {
                label: "Primary font",
                value: value.fonts.primary.clone(),
                error: errors.get("fonts.primary").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    fonts: Some(FontsPatch { primary: Some(evt.value()), secondary: None }),
                    ..Default::default()
                }),
            }
            Input {
                label: "Secondary font",
                value: value.fonts.secondary.clone(),
                error: errors.get("fonts.secondary").cloned(),
                on_input: move |evt: FormEvent| on_change.call(BrandingPatch {
                    fonts: Some(FontsPatch { primary: None, secondary: Some(evt.value()) }),
                    ..Default::default()
                }),
            }
        }

        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            ColorSchemeFields {
                key: "{mode.as_str()}",
                mode,
                value: value.clone(),
                errors: errors.clone(),
                on_change,
            }
        }
    }
}

#[component]
fn ColorSchemeFields(
    mode: ThemeMode,
    value: BrandingConfig,
    errors: HashMap<String, String>,
    on_change: EventHandler<BrandingPatch>,
) -> Element {
    let scheme = value.colors.for_mode(mode).clone();
    let title = match mode {
        ThemeMode::Light => "Light colors",
        ThemeMode::Dark => "Dark colors",
    };

    rsx! {
        fieldset { class: "color-fieldset",
            legend { "{title}" }
            div { class: "color-grid",
                for (key, color) in scheme.entries() {
                    div { key: "{key}", class: "color-field",
                        span { class: "color-swatch", style: "background: {color}" }
                        Input {
                            label: color_label(key).to_string(),
                            value: color.to_string(),
                            error: errors.get(&color_field_path(mode, key)).cloned(),
                            on_input: move |evt: FormEvent| {
                                if let Some(patch) = BrandingPatch::color(mode, key, evt.value()) {
                                    on_change.call(patch);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactFields(
    value: BrandingConfig,
    errors: HashMap<String, String>,
    on_change: EventHandler<BrandingPatch>,
) -> Element {
    let contact = |patch: ContactPatch| BrandingPatch {
        contact: Some(patch),
        ..Default::default()
    };

    rsx! {
        div { class: "form-grid",
            Input {
                label: "Email",
                input_type: "email",
                value: value.contact.email,
                error: errors.get("contact.email").cloned(),
                on_input: move |evt: FormEvent| on_change.call(contact(ContactPatch {
                    email: Some(evt.value()),
                    ..Default::default()
                })),
            }
            Input {
                label: "Phone",
                input_type: "tel",
                value: value.contact.phone,
                error: errors.get("contact.phone").cloned(),
                on_input: move |evt: FormEvent| on_change.call(contact(ContactPatch {
                    phone: Some(evt.value()),
                    ..Default::default()
                })),
            }
            Input {
                label: "Website",
                input_type: "url",
                value: value.contact.website,
                error: errors.get("contact.website").cloned(),
                on_input: move |evt: FormEvent| on_change.call(contact(ContactPatch {
                    website: Some(evt.value()),
                    ..Default::default()
                })),
            }
        }
    }
}

/// Read-only recap shown on the wizard's review step.
#[component]
pub fn BrandingSummary(value: BrandingConfig) -> Element {
    rsx! {
        div { class: "branding-summary",
            img { class: "branding-summary-logo", src: "{value.logo_url}", alt: "{value.app_name}" }
            DetailList {
                DetailItem { label: "Name", value: value.app_name.clone() }
                DetailItem { label: "Tagline", value: value.tagline.clone() }
                DetailItem { label: "Fonts", value: format!("{}, {}", value.fonts.primary, value.fonts.secondary) }
                DetailItem { label: "Email", value: value.contact.email.clone() }
                DetailItem { label: "Phone", value: value.contact.phone.clone() }
                DetailItem { label: "Website", value: value.contact.website.clone() }
                DetailItem { label: "Palette",
                    div { class: "swatch-row",
                        for (key, color) in value.colors.light.entries() {
                            span { key: "{key}", class: "color-swatch", title: "{key}", style: "background: {color}" }
                        }
                    }
                }
            }
        }
    }
}
