//! Application state for the TUI.

use std::time::Instant;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::engine::adjuster::NUDGES;
use crate::engine::format::format_currency;
use crate::engine::presets::{cycle_button_count, larger_step, smaller_step};
use crate::engine::{ButtonDisplayInfo, FixState, PriceButtonController, PriceSource};
use crate::latency::{self, Latency};
use crate::models::{OffsetMode, Position, Price, PriceType, QuoteBoard};
use crate::performance::Performance;
use crate::settings::Settings;
use crate::ticket::OrderTicket;

/// Seconds a status message stays visible.
const STATUS_TIMEOUT_SECS: u64 = 5;

pub type Controller = PriceButtonController<QuoteBoard, OrderTicket>;

/// Central application state container.
pub struct App {
    /// Button engine over the quote board and the order ticket.
    pub controller: Controller,
    pub settings: Settings,
    /// Column and row of the highlighted button.
    pub selection: Selection,
    /// Index into [`NUDGES`] used by `+` / `-`.
    pub nudge_index: usize,

    /// Raw quote text as last received.
    pub quote_text: Option<String>,
    /// Raw quote time text as last received.
    pub quote_time: Option<String>,
    pub latency: Option<Latency>,

    pub position: Option<Position>,
    pub status: Option<StatusMessage>,

    /// What the grid shows, rebuilt by [`App::reconcile`].
    pub panel: PanelView,

    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let controller = PriceButtonController::new(
            QuoteBoard::new(),
            OrderTicket::new(),
            settings.controller_config(),
        );
        Self {
            controller,
            settings,
            selection: Selection::default(),
            nudge_index: 1,
            quote_text: None,
            quote_time: None,
            latency: None,
            position: None,
            status: None,
            panel: PanelView::default(),
            should_quit: false,
        }
    }

    /// Rebuilds the panel from the controller and re-measures latency.
    ///
    /// Calling it twice in a row yields the same state.
    pub fn reconcile(&mut self, now: NaiveDateTime) {
        let previous = self.selected_button();
        self.panel = PanelView::build(&self.controller, self.settings.offset_buttons_enabled);
        self.latency = if self.settings.latency_monitor_enabled {
            self.quote_time
                .as_deref()
                .and_then(|t| latency::measure(t, now, &self.settings.latency_thresholds()))
        } else {
            None
        };
        self.restore_selection(previous);
    }

    fn restore_selection(&mut self, previous: Option<(PriceType, Option<Decimal>)>) {
        let Some((price_type, offset)) = previous else {
            self.selection = self.panel.default_selection();
            return;
        };
        let Some(column) = self.panel.column_index(price_type) else {
            self.selection = self.panel.default_selection();
            return;
        };
        let rows = &self.panel.columns[column].rows;
        let row = rows
            .iter()
            .position(|r| r.offset == offset)
            .unwrap_or_else(|| self.panel.columns[column].main_row());
        self.selection = Selection { column, row };
    }

    /// Feeds a new quote and its time text.
    pub fn apply_quote(&mut self, text: &str, time: &str, now: NaiveDateTime) {
        if self.controller.source_mut().apply_text(text) {
            self.quote_text = Some(text.to_string());
            self.quote_time = Some(time.to_string());
        } else {
            self.show_status(format!("Kurs nicht lesbar: {text}"));
        }
        self.reconcile(now);
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    /// Performance of the loaded position against the current quote.
    pub fn performance(&self) -> Option<Performance> {
        if !self.settings.confirm_page_performance_info_enabled {
            return None;
        }
        let current = self.controller.source().valuation_price().map(Price::value);
        Performance::compute(self.position.as_ref()?, current)
    }

    /// Price type and offset of the highlighted button. The main button has
    /// no offset.
    pub fn selected_button(&self) -> Option<(PriceType, Option<Decimal>)> {
        let column = self.panel.columns.get(self.selection.column)?;
        let row = column.rows.get(self.selection.row)?;
        Some((column.price_type, row.offset))
    }

    pub fn move_selection(&mut self, columns: isize, rows: isize) {
        let Some(column_count) = self.panel.columns.len().checked_sub(1) else {
            return;
        };
        let column = self.selection.column.saturating_add_signed(columns).min(column_count);
        let row_count = self.panel.columns[column].rows.len().saturating_sub(1);
        let row = self.selection.row.saturating_add_signed(rows).min(row_count);
        self.selection = Selection { column, row };
    }

    /// Clicks the highlighted button.
    pub fn click_selected(&mut self, now: NaiveDateTime) {
        let Some((price_type, offset)) = self.selected_button() else {
            return;
        };
        match self.controller.click(price_type, offset.unwrap_or(Decimal::ZERO)) {
            Some(price) => {
                let confirm = if self.settings.auto_check_enabled {
                    ", weiter zur Prüfung"
                } else {
                    ""
                };
                self.show_status(format!("Limit {} gesetzt{confirm}", price.to_display()));
            }
            None => self.show_status("Kein Kurs für diesen Button"),
        }
        self.reconcile(now);
    }

    pub fn toggle_fix_mode(&mut self, now: NaiveDateTime) {
        match self.controller.toggle_fix_mode() {
            FixState::Frozen => self.show_status("Fix-Modus aktiv"),
            FixState::Live if self.controller.source().available_prices().is_empty() => {
                self.show_status("Kein Kurs zum Fixieren")
            }
            FixState::Live => self.show_status("Fix-Modus beendet"),
        }
        self.reconcile(now);
    }

    pub fn toggle_auto_confirm(&mut self, now: NaiveDateTime) {
        self.settings.auto_check_enabled = !self.settings.auto_check_enabled;
        self.apply_settings(now);
    }

    pub fn toggle_offset_mode(&mut self, now: NaiveDateTime) {
        self.settings.offset_button_mode.toggle();
        self.apply_settings(now);
    }

    /// `<` / `>`: finer or coarser offsets for the current mode.
    pub fn step_offsets(&mut self, larger: bool, now: NaiveDateTime) {
        match self.settings.offset_button_mode {
            OffsetMode::Percentage if !self.settings.custom_offsets.trim().is_empty() => {
                self.show_status("Eigene Offsets aktiv");
                return;
            }
            OffsetMode::Percentage => {
                let preset = &mut self.settings.percentage_preset;
                *preset = if larger { preset.larger() } else { preset.smaller() };
            }
            OffsetMode::Fixed => {
                let step = self.settings.offset_button_step;
                self.settings.offset_button_step = if larger {
                    larger_step(step)
                } else {
                    smaller_step(step)
                };
            }
        }
        self.apply_settings(now);
    }

    pub fn cycle_button_count(&mut self, now: NaiveDateTime) {
        self.settings.offset_button_count = cycle_button_count(self.settings.offset_button_count);
        self.apply_settings(now);
    }

    pub fn cycle_nudge(&mut self) {
        self.nudge_index = (self.nudge_index + 1) % NUDGES.len();
    }

    pub fn nudge(&self) -> Decimal {
        NUDGES[self.nudge_index % NUDGES.len()]
    }

    /// `+` / `-`: moves the ticket limit by the selected nudge.
    pub fn adjust_limit(&mut self, up: bool) {
        if !self.settings.limit_adjuster_enabled {
            return;
        }
        let delta = if up { self.nudge() } else { -self.nudge() };
        let limit = self.controller.target_mut().adjust(delta).to_display();
        self.show_status(format!("Limit {limit}"));
    }

    /// Pushes the edited settings into the controller.
    fn apply_settings(&mut self, now: NaiveDateTime) {
        let was_frozen = self.controller.is_frozen();
        self.controller.update_config(self.settings.controller_config());
        if was_frozen && !self.controller.is_frozen() {
            self.show_status("Einstellungen geändert, Fix-Modus beendet");
        }
        self.reconcile(now);
    }

    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears status messages older than five seconds.
    pub fn clear_stale_status(&mut self) {
        if let Some(ref status) = self.status
            && status.timestamp.elapsed() > std::time::Duration::from_secs(STATUS_TIMEOUT_SECS)
        {
            self.status = None;
        }
    }

    /// Ticket limit as shown in the side panel.
    pub fn limit_label(&self) -> String {
        match self.controller.target().limit() {
            Some(limit) => format_currency(limit.value()),
            None => "–".to_string(),
        }
    }
}

/// Grid position of the highlighted button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub row: usize,
}

/// One rendered button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    /// `None` for the main button.
    pub offset: Option<Decimal>,
    pub info: ButtonDisplayInfo,
}

impl ButtonView {
    pub fn is_main(&self) -> bool {
        self.offset.is_none()
    }
}

/// Buttons of one price type, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnView {
    pub price_type: PriceType,
    pub rows: Vec<ButtonView>,
}

impl ColumnView {
    /// Row index of the main button.
    pub fn main_row(&self) -> usize {
        self.rows.iter().position(ButtonView::is_main).unwrap_or(0)
    }
}

/// Everything the grid shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelView {
    pub columns: Vec<ColumnView>,
    pub fix_state: Option<FixState>,
}

impl PanelView {
    /// Resolves every button of every available price type.
    pub fn build(controller: &Controller, offsets_enabled: bool) -> Self {
        let offsets = controller.offset_set();
        let columns = controller
            .source()
            .available_prices()
            .types()
            .into_iter()
            .map(|price_type| {
                let mut rows = Vec::new();
                if offsets_enabled {
                    rows.extend(offsets.above_main().into_iter().map(|offset| ButtonView {
                        offset: Some(offset),
                        info: controller.display_info(price_type, offset),
                    }));
                }
                rows.push(ButtonView {
                    offset: None,
                    info: controller.main_display(price_type),
                });
                if offsets_enabled {
                    rows.extend(offsets.below_main().into_iter().map(|offset| ButtonView {
                        offset: Some(offset),
                        info: controller.display_info(price_type, offset),
                    }));
                }
                ColumnView { price_type, rows }
            })
            .collect();

        Self {
            columns,
            fix_state: Some(controller.fix_state()),
        }
    }

    pub fn column_index(&self, price_type: PriceType) -> Option<usize> {
        self.columns.iter().position(|c| c.price_type == price_type)
    }

    /// Main button of the first column.
    pub fn default_selection(&self) -> Selection {
        Selection {
            column: 0,
            row: self.columns.first().map_or(0, ColumnView::main_row),
        }
    }
}

/// Status line message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub message: String,
    pub timestamp: Instant,
}
