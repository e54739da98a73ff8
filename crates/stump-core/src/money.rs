//! # Money Module
//!
//! Turns the pricing engine's amounts into cents and into display strings.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICING vs DISPLAY                                                     │
//! │                                                                         │
//! │  Pricing works in f64 dollars:                                          │
//! │    10" × $5/inch × 1.3 = 65.00000000000001                              │
//! │                                                                         │
//! │  Display needs exact cents:                                             │
//! │    Money::from_amount(65.00000000000001) = 6500 cents → "$65.00"        │
//! │                                                                         │
//! │  Rounding happens exactly once, here, at the display boundary.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stump_core::money::{format_currency, Money};
//! use stump_core::types::Currency;
//!
//! let price = Money::from_amount(1234.5);
//! assert_eq!(price.cents(), 123450);
//! assert_eq!(format_currency(1234.5, Currency::Cad), "$1,234.50");
//! ```

use crate::types::Currency;

// =============================================================================
// Money Type
// =============================================================================

/// An amount rounded to whole cents, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Rounds a dollar amount to the nearest cent.
    ///
    /// Halves round away from zero, matching how the quote form has always
    /// displayed amounts. Non-finite input becomes zero.
    ///
    /// ## Example
    /// ```rust
    /// use stump_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.005).cents(), 1001);
    /// assert_eq!(Money::from_amount(-2.5).cents(), -250);
    /// assert_eq!(Money::from_amount(f64::NAN).cents(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money(0);
        }
        // Go through the shortest decimal form so 10.005 (stored as
        // 10.00499999...) still rounds up like a person would expect.
        let scaled: f64 = format!("{}e2", amount).parse().unwrap_or(amount * 100.0);
        Money(scaled.round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Formats the value for the given currency, with digit grouping.
    ///
    /// ## Example
    /// ```rust
    /// use stump_core::money::Money;
    /// use stump_core::types::Currency;
    ///
    /// assert_eq!(Money::from_amount(-1234.5).display(Currency::Cad), "-$1,234.50");
    /// ```
    pub fn display(&self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            currency.symbol(),
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

/// Inserts `,` between each group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a dollar amount the way the quote shows it (en-CA, 2 decimals).
///
/// ## Example
/// ```rust
/// use stump_core::money::format_currency;
/// use stump_core::types::Currency;
///
/// assert_eq!(format_currency(56.5, Currency::Cad), "$56.50");
/// assert_eq!(format_currency(-5.5, Currency::Cad), "-$5.50");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    Money::from_amount(amount).display(currency)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount_rounding() {
        assert_eq!(Money::from_amount(65.00000000000001).cents(), 6500);
        assert_eq!(Money::from_amount(1.005).cents(), 101);
        assert_eq!(Money::from_amount(0.004).cents(), 0);
        assert_eq!(Money::from_amount(f64::INFINITY).cents(), 0);
    }

    #[test]
    fn test_display() {
        let cad = |amount: f64| format_currency(amount, Currency::Cad);
        assert_eq!(cad(10.99), "$10.99");
        assert_eq!(cad(5.0), "$5.00");
        assert_eq!(cad(-5.5), "-$5.50");
        assert_eq!(cad(0.0), "$0.00");
        assert_eq!(cad(-0.05), "-$0.05");
        assert_eq!(cad(f64::NAN), "$0.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(1234.5, Currency::Cad), "$1,234.50");
        assert_eq!(format_currency(999.99, Currency::Cad), "$999.99");
        assert_eq!(format_currency(1_000_000.0, Currency::Cad), "$1,000,000.00");
    }
}
