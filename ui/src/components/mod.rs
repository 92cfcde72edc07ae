// Localized application navbar with language switcher.
pub mod app_navbar;
pub use app_navbar::register_nav;
pub use app_navbar::AppNavbar;
pub use app_navbar::NavBuilder;

mod category_chips;
pub use category_chips::CategoryChips;

mod contact_form;
pub use contact_form::ContactForm;

mod error_panel;
pub use error_panel::PageErrorBoundary;

mod footer;
pub use footer::Footer;

mod language_root;
pub use language_root::LanguageRoot;

mod order_form;
pub use order_form::OrderForm;

mod product_card;
pub use product_card::{ProductCard, ProductGrid};

mod review_card;
pub use review_card::ReviewCard;
