use crate::core::{SfError, Table};
use crate::project::columns::{EV_EBITDA_TTM, EV_SALES_TTM, PE_TTM, PS_TTM};

use super::figure::{
    Axis, Figure, Layout, LineStyle, RangeSelector, RangeSlider, Shape, Title, Trace, Visibility,
    x_bounds,
};
use super::group_rows;
use super::regime::BearRegime;

/// Categories drawn when a spread chart first renders.
pub const SPREAD_DEFAULT_VISIBLE: usize = 1;

const DASHES: [&str; 2] = ["solid", "dash"];

/// A pair of valuation multiples drawn together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadPreset {
    /// P/E (ttm) and EV/EBITDA (ttm).
    Earnings,
    /// P/S (ttm) and EV/Sales (ttm).
    Revenue,
    /// EV/Sales (ttm) and EV/EBITDA (ttm).
    EarningsAndRevenue,
}

impl SpreadPreset {
    /// Display order used by the dashboard.
    pub const DISPLAY_ORDER: [Self; 3] = [Self::EarningsAndRevenue, Self::Earnings, Self::Revenue];

    /// The two indicator columns.
    #[must_use]
    pub const fn indicators(self) -> [&'static str; 2] {
        match self {
            Self::Earnings => [PE_TTM, EV_EBITDA_TTM],
            Self::Revenue => [PS_TTM, EV_SALES_TTM],
            Self::EarningsAndRevenue => [EV_SALES_TTM, EV_EBITDA_TTM],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Earnings => "Earnings",
            Self::Revenue => "Revenue",
            Self::EarningsAndRevenue => "Earnings & Revenue",
        }
    }
}

/// Two multiples over time for each category.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadChart {
    pub preset: SpreadPreset,
    /// Whether the chart's panel starts expanded.
    pub expanded: bool,
    pub figure: Figure,
}

impl SpreadChart {
    /// Builds one trace per (category, indicator), grouped in the legend by
    /// category. Only the first category starts visible.
    ///
    /// # Errors
    ///
    /// `SfError::MissingColumn` if a column is absent, `SfError::TypeConversion`
    /// if an indicator holds non-numeric text.
    pub fn compose(
        table: &Table,
        x: &str,
        category: &str,
        preset: SpreadPreset,
        regimes: &[BearRegime],
        expanded: bool,
    ) -> Result<Self, SfError> {
        let [first, second] = preset.indicators();
        let series = [(first, table.f64_column(first)?), (second, table.f64_column(second)?)];
        let xs = table
            .column(x)
            .ok_or_else(|| SfError::MissingColumn(x.to_string()))?;
        let groups = group_rows(table, category)?;

        let mut data = Vec::with_capacity(groups.len() * 2);
        for (i, (group, rows)) in groups.into_iter().enumerate() {
            for ((indicator, ys), dash) in series.iter().zip(DASHES) {
                let mut t = Trace::line(
                    format!("{group}, {indicator}"),
                    group.clone(),
                    rows.iter().map(|&r| xs[r].clone()).collect(),
                    rows.iter().map(|&r| ys[r]).collect(),
                );
                t.line = Some(LineStyle {
                    dash: Some(dash),
                    width: None,
                });
                if i >= SPREAD_DEFAULT_VISIBLE {
                    t.visible = Visibility::LegendOnly;
                }
                data.push(t);
            }
        }

        let mut shapes: Vec<Shape> = regimes.iter().map(BearRegime::band).collect();
        shapes.push(Shape::hline(0.0));

        let figure = Figure {
            data,
            layout: Layout {
                title: Some(Title {
                    text: format!("Price ratios: {}", preset.label()),
                }),
                showlegend: true,
                hovermode: Some("x unified"),
                xaxis: Axis {
                    title: Some(Title {
                        text: String::new(),
                    }),
                    range: x_bounds(xs.iter().copied()),
                    rangeslider: Some(RangeSlider { visible: true }),
                    rangeselector: Some(RangeSelector::standard()),
                    ..Axis::default()
                },
                yaxis: Axis {
                    title: Some(Title {
                        text: "<b>Price Ratio Spread</b>".into(),
                    }),
                    ..Axis::default()
                },
                shapes,
            },
        };

        Ok(Self {
            preset,
            expanded,
            figure,
        })
    }

    /// Categories that start visible.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<&str> {
        self.figure.visible_groups()
    }
}
