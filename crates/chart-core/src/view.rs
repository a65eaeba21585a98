// File: crates/chart-core/src/view.rs
// Summary: Caller-owned dashboard view state: theme, chart carousel and time period.

use crate::theme::Theme;

/// Selectable time windows, in carousel order.
pub const PERIODS: [&str; 3] = ["Last Week", "This Week", "Next Week"];
pub const MAX_PERIOD_INDEX: usize = PERIODS.len() - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub chart_index: usize,
    pub chart_count: usize,
    pub period_index: usize,
}

impl ViewState {
    pub fn new(chart_count: usize) -> Self {
        Self { theme: Theme::Dark, chart_index: 0, chart_count, period_index: 1 }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // The chart carousel wraps around in both directions.
    pub fn next_chart(&mut self) {
        if self.chart_count == 0 { return; }
        self.chart_index = (self.chart_index % self.chart_count + 1) % self.chart_count;
    }

    pub fn prev_chart(&mut self) {
        if self.chart_count == 0 { return; }
        self.chart_index = (self.chart_index % self.chart_count + self.chart_count - 1) % self.chart_count;
    }

    // Periods stop at either end.
    pub fn next_period(&mut self) {
        self.period_index = self.period_index.saturating_add(1).min(MAX_PERIOD_INDEX);
    }

    pub fn prev_period(&mut self) {
        self.period_index = self.period_index.saturating_sub(1);
    }

    pub fn period_label(&self) -> &'static str {
        PERIODS[self.period_index.min(MAX_PERIOD_INDEX)]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(0)
    }
}
