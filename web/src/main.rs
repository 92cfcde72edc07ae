use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer, LanguageRoot, PageErrorBoundary};
use ui::views::{About, Contact, Home, PageNotFound, ProductDetail, Products};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
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

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_products(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Products {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Contact {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
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
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        LanguageRoot {
            Router::<Route> {}
        }
    }
}

/// Web layout around the shared navbar and footer, bound to the web `Route` enum.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppNavbar {}
        main {
            PageErrorBoundary { Outlet::<Route> {} }
        }
        Footer {}
    }
}
