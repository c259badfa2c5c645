use dioxus::prelude::*;

/// Panel-level failure message. Renders nothing without a message; a
/// multi-line message becomes one line per rejected item.
#[component]
pub fn InlineError(
    message: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    let base = vec![
        Attribute::new("class", "inline-error", None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for line in message.lines() {
                p { class: "inline-error-line", "{line}" }
            }
        }
    }
}

/// Neutral hint, e.g. an empty result set.
#[component]
pub fn Notice(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "notice", {children} }
    }
}
