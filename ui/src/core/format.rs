//! Formatting helpers for presenting prices.

/// Whole amounts print without decimals (`399`), anything else with two
/// (`399.50`).
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{} {currency}", format_amount(amount))
}

/// Line total for an order.
pub fn order_total(unit_price: f64, quantity: u32) -> f64 {
    unit_price * f64::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amount_with_currency() {
        assert_eq!(format_price(399.0, "MAD"), "399 MAD");
        assert_eq!(format_price(399.5, "MAD"), "399.50 MAD");
    }

    #[test]
    fn total_multiplies_price_by_quantity() {
        assert_eq!(order_total(399.0, 3), 1197.0);
        assert_eq!(format_amount(order_total(19.99, 2)), "39.98");
    }
}
