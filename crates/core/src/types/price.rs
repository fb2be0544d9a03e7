//! Type-safe price representation in minor currency units.
//!
//! Prices arrive from catalog data as human-formatted strings such as
//! `"3,50,000 INR"` (Indian digit grouping). Parsing happens once, at the
//! ingestion boundary; everything downstream works with exact `i64` minor
//! units so cart arithmetic never touches floating point.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from a display string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The leading numeric token could not be converted to an integer.
    #[error("invalid price amount: {0:?}")]
    InvalidAmount(String),
}

/// ISO 4217 currency codes accepted by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl CurrencyCode {
    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price in minor currency units.
///
/// ## Examples
///
/// ```
/// use south_core::Price;
///
/// let price = Price::parse("3,50,000 INR").unwrap();
/// assert_eq!(price.amount, 350_000);
/// assert_eq!(price.to_string(), "3,50,000 INR");
///
/// assert!(Price::parse("priceless").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the smallest indivisible unit of the currency.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price from an amount in minor units.
    #[must_use]
    pub const fn new(amount: i64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Parse a `Price` from a catalog display string.
    ///
    /// The expected form is `"<digits-with-separators> <currency-code>"`.
    /// Comma separators are stripped before conversion. A missing or
    /// unrecognized currency code falls back to INR; only a malformed
    /// numeric token is an error.
    ///
    /// # Errors
    ///
    /// Returns [`PriceParseError::Empty`] for a blank input, or
    /// [`PriceParseError::InvalidAmount`] when the leading token is not an
    /// integer after separators are removed.
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let mut tokens = s.split_whitespace();

        let amount_token = tokens.next().ok_or(PriceParseError::Empty)?;
        let amount = amount_token
            .replace(',', "")
            .parse::<i64>()
            .map_err(|_| PriceParseError::InvalidAmount(amount_token.to_owned()))?;

        let currency = match tokens.next() {
            Some(code) => parse_currency(code),
            None => CurrencyCode::default(),
        };

        Ok(Self { amount, currency })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grouped = match self.currency {
            CurrencyCode::Inr => group_indian(self.amount),
            CurrencyCode::Usd | CurrencyCode::Eur => group_western(self.amount),
        };
        write!(f, "{} {}", grouped, self.currency)
    }
}

/// Map a currency token to a known code, defaulting to INR.
fn parse_currency(code: &str) -> CurrencyCode {
    match code.to_ascii_uppercase().as_str() {
        "USD" => CurrencyCode::Usd,
        "EUR" => CurrencyCode::Eur,
        _ => CurrencyCode::Inr,
    }
}

/// Group digits in the Indian numbering style: last three digits, then
/// groups of two (3,50,000).
fn group_indian(amount: i64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 || amount < 0 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_chars: Vec<char> = head.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = head_chars.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head_chars.get(start..end).unwrap_or_default().iter().collect());
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Group digits in the Western numbering style (350,000).
fn group_western(amount: i64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 || amount < 0 {
        return digits;
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(chars.get(start..end).unwrap_or_default().iter().collect());
        end = start;
    }
    groups.reverse();

    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indian_grouped_amount() {
        let price = Price::parse("3,50,000 INR").expect("should parse");
        assert_eq!(price.amount, 350_000);
        assert_eq!(price.currency, CurrencyCode::Inr);
    }

    #[test]
    fn parses_plain_amount_without_currency() {
        let price = Price::parse("1000").expect("should parse");
        assert_eq!(price.amount, 1000);
        assert_eq!(price.currency, CurrencyCode::Inr);
    }

    #[test]
    fn currency_code_is_case_insensitive() {
        let price = Price::parse("42 usd").expect("should parse");
        assert_eq!(price.currency, CurrencyCode::Usd);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert_eq!(
            Price::parse("priceless INR"),
            Err(PriceParseError::InvalidAmount("priceless".to_owned()))
        );
        assert_eq!(Price::parse("   "), Err(PriceParseError::Empty));
    }

    #[test]
    fn display_round_trips_indian_grouping() {
        let price = Price::new(350_000, CurrencyCode::Inr);
        assert_eq!(price.to_string(), "3,50,000 INR");

        let reparsed = Price::parse(&price.to_string()).expect("should reparse");
        assert_eq!(reparsed, price);
    }

    #[test]
    fn display_grouping_edge_cases() {
        assert_eq!(Price::new(0, CurrencyCode::Inr).to_string(), "0 INR");
        assert_eq!(Price::new(100, CurrencyCode::Inr).to_string(), "100 INR");
        assert_eq!(Price::new(1_000, CurrencyCode::Inr).to_string(), "1,000 INR");
        assert_eq!(
            Price::new(12_345_678, CurrencyCode::Inr).to_string(),
            "1,23,45,678 INR"
        );
        assert_eq!(
            Price::new(350_000, CurrencyCode::Usd).to_string(),
            "350,000 USD"
        );
    }
}
