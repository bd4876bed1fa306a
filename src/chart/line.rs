use crate::core::{Cell, SfError, Table};
use crate::project::columns::ALTMAN_Z_SCORE_TTM;

use super::figure::{
    Axis, Figure, Layout, RangeSelector, RangeSlider, Shape, Title, Trace, Visibility, x_bounds,
};
use super::regime::BearRegime;
use super::group_rows;

/// Categories drawn when a line chart first renders; the rest start legend-only.
pub const LINE_DEFAULT_VISIBLE: usize = 3;

/// Altman Z above this is the conventional "safe" zone.
const ALTMAN_SAFE_ZONE: f64 = 3.0;

/// One indicator over time, one line per category.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// The charted column.
    pub indicator: String,
    /// The figure to hand to a renderer.
    pub figure: Figure,
}

impl LineChart {
    /// Builds the chart of column `y` against column `x`, split by column `category`.
    ///
    /// Every category keeps all of its rows; only the first
    /// [`LINE_DEFAULT_VISIBLE`] categories start visible.
    ///
    /// # Errors
    ///
    /// `SfError::MissingColumn` if a named column is absent,
    /// `SfError::TypeConversion` if `y` holds non-numeric text.
    pub fn compose(
        table: &Table,
        x: &str,
        y: &str,
        category: &str,
        regimes: &[BearRegime],
    ) -> Result<Self, SfError> {
        let ys = table.f64_column(y)?;
        let xs = table
            .column(x)
            .ok_or_else(|| SfError::MissingColumn(x.to_string()))?;
        let groups = group_rows(table, category)?;

        let data = groups
            .into_iter()
            .enumerate()
            .map(|(i, (name, rows))| {
                let mut t = Trace::line(
                    name.clone(),
                    name,
                    rows.iter().map(|&r| xs[r].clone()).collect(),
                    rows.iter().map(|&r| ys[r]).collect(),
                );
                if i >= LINE_DEFAULT_VISIBLE {
                    t.visible = Visibility::LegendOnly;
                }
                t
            })
            .collect();

        let reference = if y == ALTMAN_Z_SCORE_TTM {
            ALTMAN_SAFE_ZONE
        } else {
            0.0
        };
        let mut shapes: Vec<Shape> = regimes.iter().map(BearRegime::band).collect();
        shapes.push(Shape::hline(reference));

        let figure = Figure {
            data,
            layout: Layout {
                title: Some(Title {
                    text: format!("<b>{y}</b>"),
                }),
                showlegend: true,
                hovermode: None,
                xaxis: Axis {
                    range: x_bounds(xs.iter().copied()),
                    rangeslider: Some(RangeSlider { visible: true }),
                    rangeselector: Some(RangeSelector::standard()),
                    ..Axis::default()
                },
                yaxis: Axis {
                    showgrid: Some(false),
                    ..Axis::default()
                },
                shapes,
            },
        };

        Ok(Self {
            indicator: y.to_string(),
            figure,
        })
    }

    /// Categories that start visible.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<&str> {
        self.figure.visible_groups()
    }
}
