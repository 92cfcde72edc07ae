//! Customer testimonials shown on the home page.
//!
//! Names, ratings and screenshots are fixed; the quote text lives in the
//! dictionary under `testimonials.quotes.*` so it follows the active language.

/// Ratings are out of five stars.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    /// Dictionary key of the quote.
    pub quote_key: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ahmed Hassan",
        rating: 5,
        quote_key: "testimonials.quotes.ahmed",
        image: "/whatsapp-review-screenshot-happy-customer.png",
    },
    Testimonial {
        name: "Fatima Mohamed",
        rating: 5,
        quote_key: "testimonials.quotes.fatima",
        image: "/whatsapp-review-screenshot-satisfied-customer.png",
    },
    Testimonial {
        name: "Karim Ali",
        rating: 5,
        quote_key: "testimonials.quotes.karim",
        image: "/whatsapp-review-screenshot-positive-feedback.png",
    },
];

impl Testimonial {
    /// Upper-cased first letter of the name, for the avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// One flag per star, `true` for filled. Ratings above the maximum are capped.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = usize::from(self.rating.min(MAX_RATING));
        std::array::from_fn(|i| i < filled)
    }

    pub fn rating_label(&self) -> String {
        format!("{}.0/{MAX_RATING}.0", self.rating.min(MAX_RATING))
    }
}
