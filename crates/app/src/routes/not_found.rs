use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

/// Unknown path. Rendered outside the startup guard, so it works even while
/// configuration is unavailable.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let session = use_session();
    let app_name = session.branding().app_name;
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                }
                Link { to: Route::Home {}, class: "not-found-link", "Back to {app_name}" }
            }
        }
    }
}
