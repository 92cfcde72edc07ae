//! Platform-agnostic storefront logic: catalog queries, configuration,
//! settings persistence, form submission and home-page testimonials.

pub mod catalog;
pub mod config;
pub mod format;
pub mod forms;
pub mod platform;
pub mod storage;
pub mod testimonials;
