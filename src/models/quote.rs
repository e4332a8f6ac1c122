//! Quote indicator parsing and the in-memory quote board.
//!
//! The broker shows a two-sided quote as `17,560 € / 17,550 €` (bid first,
//! ask second) and a single-priced instrument as `17,550 €`.

use tracing::debug;

use super::{AvailablePrices, Price, PriceType};
use crate::engine::PriceSource;

/// A parsed quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
    TwoSided { bid: Price, ask: Price },
    Single(Price),
}

impl Quote {
    /// Parses quote indicator text.
    ///
    /// Returns `None` for text that is empty, has more than two parts, or
    /// contains an unparsable price.
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text
            .split('/')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [single] => Price::parse(single).ok().map(Self::Single),
            [bid, ask] => {
                let bid = Price::parse(bid).ok()?;
                let ask = Price::parse(ask).ok()?;
                Some(Self::TwoSided { bid, ask })
            }
            _ => None,
        }
    }

    /// Returns the price that values an existing position: the bid of a
    /// two-sided quote or the single price.
    pub fn valuation_price(&self) -> &Price {
        match self {
            Self::TwoSided { bid, .. } => bid,
            Self::Single(price) => price,
        }
    }
}

/// Latest known quote, readable through [`PriceSource`].
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    bid: Option<Price>,
    ask: Option<Price>,
    single: Option<Price>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board with a new quote. A single quote clears bid and
    /// ask and vice versa.
    pub fn apply(&mut self, quote: Quote) {
        match quote {
            Quote::TwoSided { bid, ask } => {
                self.bid = Some(bid);
                self.ask = Some(ask);
                self.single = None;
            }
            Quote::Single(price) => {
                self.bid = None;
                self.ask = None;
                self.single = Some(price);
            }
        }
    }

    /// Parses and applies quote text. Unparsable text leaves the board
    /// unchanged and returns `false`.
    pub fn apply_text(&mut self, text: &str) -> bool {
        match Quote::parse(text) {
            Some(quote) => {
                self.apply(quote);
                true
            }
            None => {
                debug!(text, "Ignoring unparsable quote text");
                false
            }
        }
    }

    /// Returns the price used for valuing a held position.
    pub fn valuation_price(&self) -> Option<&Price> {
        self.single.as_ref().or(self.bid.as_ref())
    }
}

impl PriceSource for QuoteBoard {
    fn current_price(&self, price_type: PriceType) -> Option<Price> {
        match price_type {
            PriceType::Bid => self.bid.clone(),
            PriceType::Ask => self.ask.clone(),
            PriceType::Single => self.single.clone(),
        }
    }

    fn available_prices(&self) -> AvailablePrices {
        if self.single.is_some() {
            return AvailablePrices {
                has_bid: false,
                has_ask: false,
                has_single: true,
            };
        }
        AvailablePrices {
            has_bid: self.bid.is_some(),
            has_ask: self.ask.is_some(),
            has_single: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_two_sided_quote() {
        let quote = Quote::parse("17,560 € / 17,550 €").unwrap();
        match quote {
            Quote::TwoSided { bid, ask } => {
                assert_eq!(bid.value(), dec!(17.560));
                assert_eq!(ask.value(), dec!(17.550));
            }
            Quote::Single(_) => panic!("expected two-sided quote"),
        }
    }

    #[test]
    fn parses_single_quote() {
        let quote = Quote::parse("17,550 €").unwrap();
        assert_eq!(quote, Quote::Single(Price::parse("17,550").unwrap()));
        assert_eq!(quote.valuation_price().value(), dec!(17.550));
    }

    #[test]
    fn rejects_malformed_quotes() {
        assert!(Quote::parse("").is_none());
        assert!(Quote::parse("1 / 2 / 3").is_none());
        assert!(Quote::parse("17,50 € / --").is_none());
    }

    #[test]
    fn board_switches_between_quote_shapes() {
        let mut board = QuoteBoard::new();
        assert!(board.available_prices().is_empty());

        assert!(board.apply_text("10,00 € / 10,10 €"));
        assert_eq!(board.available_prices().types(), vec![PriceType::Bid, PriceType::Ask]);
        assert_eq!(board.valuation_price().unwrap().value(), dec!(10.00));

        assert!(board.apply_text("9,95 €"));
        let available = board.available_prices();
        assert!(available.has_single && !available.has_bid && !available.has_ask);
        assert!(board.current_price(PriceType::Bid).is_none());
    }

    #[test]
    fn unparsable_text_keeps_previous_quote() {
        let mut board = QuoteBoard::new();
        board.apply_text("10,00 €");
        assert!(!board.apply_text("loading…"));
        assert_eq!(
            board.current_price(PriceType::Single).unwrap().value(),
            dec!(10.00)
        );
    }
}
