use dioxus::prelude::*;

mod platform;
mod routes;
mod session;

use routes::Route;
use session::Session;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env loaded: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_context_provider(Session::new);

    // Configuration and branding load once, concurrently, when the app mounts.
    use_hook(move || session.start());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
