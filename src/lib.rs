//! Limit price offset buttons for brokerage order tickets.
//!
//! Computes a grid of candidate limit prices around the live quote
//! (percentage or fixed offsets), can freeze that grid in fix mode, and
//! hands the chosen price to an order ticket. A terminal front end, a
//! quote latency monitor and position performance figures sit on top.

pub mod config;
pub mod engine;
pub mod error;
pub mod latency;
pub mod models;
pub mod performance;
pub mod settings;
pub mod simulation;
pub mod ticket;
pub mod tui;

pub use error::{LimitpadError, PriceError, Result};
