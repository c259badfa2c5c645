use dioxus::prelude::*;

use crate::Skeleton;

/// Full-page placeholder shown until the application configuration is
/// ready. `detail` carries the reason when loading failed.
#[component]
pub fn LoadingScreen(
    #[props(default = "Loading...".to_string())] message: String,
    #[props(default)] detail: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-screen", "aria-busy": true,
            div { class: "loading-screen-spinner" }
            p { class: "loading-screen-message", "{message}" }
            if let Some(detail) = detail {
                p { class: "loading-screen-detail", "{detail}" }
            }
            div { class: "loading-screen-skeleton",
                Skeleton { style: "width: 60%" }
                Skeleton { style: "width: 80%" }
                Skeleton { style: "width: 40%" }
            }
        }
    }
}
