//! Chart composition.
//!
//! Charts are described, not drawn: each composer returns a [`Figure`] that
//! serializes to Plotly's JSON schema and can be handed to any Plotly renderer.

mod figure;
mod line;
mod regime;
mod spread;

pub use figure::{
    Axis, Coord, Figure, Layout, LineStyle, RangeSelector, RangeSlider, SelectorButton, Shape,
    Title, Trace, Visibility,
};
pub use line::{LINE_DEFAULT_VISIBLE, LineChart};
pub use regime::{BEAR_REGIMES, BearRegime};
pub use spread::{SPREAD_DEFAULT_VISIBLE, SpreadChart, SpreadPreset};

use crate::core::{SfError, Table};

/// Row positions per category value, categories in first-seen order.
/// Rows whose category is null belong to no trace.
pub(crate) fn group_rows(
    table: &Table,
    category: &str,
) -> Result<Vec<(String, Vec<usize>)>, SfError> {
    let cats = table
        .column(category)
        .ok_or_else(|| SfError::MissingColumn(category.to_string()))?;
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, cell) in cats.into_iter().enumerate() {
        if cell.is_null() {
            continue;
        }
        let name = cell.to_string();
        match groups.iter_mut().find(|(g, _)| *g == name) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((name, vec![row])),
        }
    }
    Ok(groups)
}
