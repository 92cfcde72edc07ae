mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::{NotFoundPanel, PageNotFound};

mod product_detail;
pub use product_detail::ProductDetail;

mod products;
pub use products::Products;
