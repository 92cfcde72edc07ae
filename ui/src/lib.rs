//! Shared UI crate for the SaShop storefront. Catalog queries, localization
//! and the cross-platform views all live here; the platform crates only supply
//! routing and launch configuration.

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;


use dioxus::prelude::*;

/// Shared theme stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
