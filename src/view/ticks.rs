//! Fixed tick layout for the scroll variant
//!
//! X ticks are placed every `spacing` rows across the whole table (plus the
//! last row), independent of the visible window. Y ticks, when requested, are
//! evenly spaced over the global Y range.
//!
//! The free-zoom variants keep automatic ticks except for a categorical X
//! axis, which gets one labelled tick per row.

use super::command::{Axis, RenderCommand, Tick};
use super::format::format_sig;
use crate::types::DataSeries;

/// Ticks at rows `0, spacing, 2*spacing, ..` and always the last row
pub fn x_ticks(data: &DataSeries, spacing: usize) -> Vec<Tick> {
    let n = data.len();
    let spacing = spacing.max(1);
    let mut rows: Vec<usize> = (0..n).step_by(spacing).collect();
    if rows.last() != Some(&(n - 1)) {
        rows.push(n - 1);
    }

    rows.into_iter()
        .map(|row| Tick {
            value: data.x()[row],
            label: data.x_display(row),
        })
        .collect()
}

/// One tick per row carrying its label, or `None` for a numeric X column
pub fn category_ticks(data: &DataSeries) -> Option<Vec<Tick>> {
    data.x_labels().map(|_| x_ticks(data, 1))
}

/// X tick command for the free-zoom variants
pub fn x_axis_command(data: &DataSeries) -> RenderCommand {
    match category_ticks(data) {
        Some(ticks) => RenderCommand::SetTicks {
            axis: Axis::X,
            ticks,
        },
        None => RenderCommand::ClearTicks(Axis::X),
    }
}

/// Evenly spaced Y ticks: `max(2, n / spacing + 1)` of them over the Y range
pub fn y_ticks(data: &DataSeries, spacing: usize) -> Vec<Tick> {
    let count = (data.len() / spacing.max(1) + 1).max(2);
    let bounds = data.y_bounds();
    let step = bounds.span() / (count - 1) as f64;

    (0..count)
        .map(|i| {
            let value = bounds.min + i as f64 * step;
            Tick {
                value,
                label: format_sig(value, 4),
            }
        })
        .collect()
}
