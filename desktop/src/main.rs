#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer, LanguageRoot, PageErrorBoundary};
use ui::views::{About, Contact, Home, PageNotFound, ProductDetail, Products};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/products/:id")]
    ProductDetail { id: String },
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("SaShop – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_products(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Products {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Contact {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        products: nav_products,
        about: nav_about,
        contact: nav_contact,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        LanguageRoot {
            Router::<Route> {}
        }
    }
}

/// Desktop layout around the shared navbar and footer, bound to the desktop `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        AppNavbar {}
        main {
            PageErrorBoundary { Outlet::<Route> {} }
        }
        Footer {}
    }
}
