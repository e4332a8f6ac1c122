//! Simulated quote feed for running the button grid without a broker page.
//!
//! The feed walks the bid in whole ticks and emits quote and time text in
//! the same shape the broker page renders, so the rest of the application
//! parses it exactly like live data.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Price;

/// Parameters of the random walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Starting bid.
    pub start: Decimal,
    /// Smallest price increment.
    pub tick: Decimal,
    /// Ask minus bid, in ticks. Zero produces single quotes.
    pub spread_ticks: i64,
    /// Largest move per update, in ticks.
    pub max_step_ticks: i64,
    /// Largest delay between the quote stamp and the update, in seconds.
    pub max_lag_secs: i64,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            start: Decimal::new(17_550, 3),
            tick: Decimal::new(1, 3),
            spread_ticks: 10,
            max_step_ticks: 5,
            max_lag_secs: 6,
            seed: 42,
        }
    }
}

/// One simulated update: quote text and the time stamp shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedQuote {
    pub text: String,
    pub time: String,
}

/// Seeded random-walk quote generator.
pub struct QuoteSimulator {
    rng: StdRng,
    settings: SimulationSettings,
    bid_ticks: i64,
    decimals: u32,
}

impl QuoteSimulator {
    pub fn new(settings: SimulationSettings) -> Self {
        let rng = StdRng::seed_from_u64(settings.seed);
        let bid_ticks = ticks_of(settings.start, settings.tick).max(1);
        let decimals = settings.tick.normalize().scale().max(2);
        Self {
            rng,
            settings,
            bid_ticks,
            decimals,
        }
    }

    /// Current bid.
    pub fn bid(&self) -> Decimal {
        self.settings.tick * Decimal::from(self.bid_ticks)
    }

    /// Advances the walk and renders the quote as of `now`.
    pub fn next_tick(&mut self, now: NaiveDateTime) -> SimulatedQuote {
        let max_step = self.settings.max_step_ticks.max(0);
        let step = self.rng.gen_range(-max_step..=max_step);
        self.bid_ticks = (self.bid_ticks + step).max(1);

        let bid = Price::new(self.bid(), self.decimals);
        let text = if self.settings.spread_ticks > 0 {
            let ask_value = bid.value() + self.settings.tick * Decimal::from(self.settings.spread_ticks);
            let ask = Price::new(ask_value, self.decimals);
            format!("{} € / {} €", bid.to_display(), ask.to_display())
        } else {
            format!("{} €", bid.to_display())
        };

        let lag = self.rng.gen_range(0..=self.settings.max_lag_secs.max(0));
        let stamped = now - Duration::seconds(lag);
        SimulatedQuote {
            text,
            time: stamped.format("%H:%M:%S").to_string(),
        }
    }
}

fn ticks_of(value: Decimal, tick: Decimal) -> i64 {
    if tick.is_zero() {
        return 0;
    }
    (value / tick).round().try_into().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::find_quote_time;
    use crate::models::Quote;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 12)
            .unwrap()
            .and_hms_opt(14, 3, 27)
            .unwrap()
    }

    #[test]
    fn same_seed_same_feed() {
        let mut a = QuoteSimulator::new(SimulationSettings::default());
        let mut b = QuoteSimulator::new(SimulationSettings::default());
        for _ in 0..20 {
            assert_eq!(a.next_tick(now()), b.next_tick(now()));
        }
    }

    #[test]
    fn emits_parsable_two_sided_quotes() {
        let mut sim = QuoteSimulator::new(SimulationSettings::default());
        for _ in 0..50 {
            let update = sim.next_tick(now());
            match Quote::parse(&update.text) {
                Some(Quote::TwoSided { bid, ask }) => {
                    assert_eq!(ask.value() - bid.value(), dec!(0.010));
                    assert_eq!(bid.decimals(), 3);
                }
                other => panic!("unexpected quote {other:?} from {}", update.text),
            }
        }
    }

    #[test]
    fn zero_spread_emits_single_quotes() {
        let settings = SimulationSettings {
            start: dec!(24110.50),
            tick: dec!(0.50),
            spread_ticks: 0,
            ..SimulationSettings::default()
        };
        let mut sim = QuoteSimulator::new(settings);
        let update = sim.next_tick(now());
        assert!(matches!(Quote::parse(&update.text), Some(Quote::Single(_))));
        assert!(!update.text.contains('/'));
    }

    #[test]
    fn time_stamp_lags_behind_now() {
        let mut sim = QuoteSimulator::new(SimulationSettings::default());
        for _ in 0..20 {
            let update = sim.next_tick(now());
            let time = find_quote_time(&update.time).unwrap();
            let lag = (now().time() - time).num_seconds();
            assert!((0..=6).contains(&lag), "lag {lag}");
        }
    }

    #[test]
    fn bid_never_reaches_zero() {
        let settings = SimulationSettings {
            start: dec!(0.002),
            max_step_ticks: 50,
            ..SimulationSettings::default()
        };
        let mut sim = QuoteSimulator::new(settings);
        for _ in 0..100 {
            sim.next_tick(now());
            assert!(sim.bid() > Decimal::ZERO);
        }
    }
}
