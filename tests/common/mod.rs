//! Shared test utilities.

use std::path::PathBuf;

use limitpad::engine::PriceTarget;
use limitpad::models::{Price, QuoteBoard};

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Quote board holding the quote parsed from `text`.
pub fn board(text: &str) -> QuoteBoard {
    let mut board = QuoteBoard::new();
    assert!(board.apply_text(text), "unparsable quote {text:?}");
    board
}

/// Shorthand for a price written in broker notation.
pub fn price(text: &str) -> Price {
    Price::parse(text).expect("valid price")
}

/// Price target that records every call.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub calls: Vec<(Price, bool)>,
}

impl PriceTarget for RecordingTarget {
    fn set_price(&mut self, price: &Price, auto_confirm: bool) {
        self.calls.push((price.clone(), auto_confirm));
    }
}
