//! Serializable figure description, shaped like Plotly's JSON schema.

use serde::{Serialize, Serializer};

use crate::core::Cell;

/// Initial visibility of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Drawn.
    Visible,
    /// Hidden, but listed in the legend so the viewer can toggle it on.
    LegendOnly,
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Visible => s.serialize_bool(true),
            Self::LegendOnly => s.serialize_str("legendonly"),
        }
    }
}

/// Stroke settings shared by traces and shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Plotly dash pattern (`"dash"`, `"dot"`); solid when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
    /// Stroke width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// One line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Plotly trace type, always `"scatter"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Drawing mode, always `"lines"`.
    pub mode: &'static str,
    /// Legend label.
    pub name: String,
    /// The category (ticker) this series belongs to.
    pub legendgroup: String,
    /// X values, usually dates.
    pub x: Vec<Cell>,
    /// Y values; `None` leaves a gap.
    pub y: Vec<Option<f64>>,
    /// Initial visibility.
    pub visible: Visibility,
    /// Stroke override; Plotly defaults when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

impl Trace {
    pub(crate) fn line(name: String, group: String, x: Vec<Cell>, y: Vec<Option<f64>>) -> Self {
        Self {
            kind: "scatter",
            mode: "lines",
            name,
            legendgroup: group,
            x,
            y,
            visible: Visibility::Visible,
            line: None,
        }
    }
}

/// A shape coordinate: data values are usually dates, paper values are fractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coord {
    /// A number, either a data value or a paper fraction.
    Num(f64),
    /// A text data value such as an ISO date.
    Text(String),
}

/// A layout shape: a shaded band or a reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// `"rect"` or `"line"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// What `x0`/`x1` are measured against: `"x"` (data) or `"paper"`.
    pub xref: &'static str,
    /// What `y0`/`y1` are measured against: `"y"` (data) or `"paper"`.
    pub yref: &'static str,
    /// Start x.
    pub x0: Coord,
    /// End x.
    pub x1: Coord,
    /// Start y.
    pub y0: Coord,
    /// End y.
    pub y1: Coord,
    /// Fill colour for rectangles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<&'static str>,
    /// Fill opacity in `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// `"below"` draws the shape under the traces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<&'static str>,
    /// Outline stroke.
    pub line: LineStyle,
}

impl Shape {
    /// A full-height vertical band between two x values.
    pub(crate) fn vrect(x0: String, x1: String, fill: &'static str, opacity: f64) -> Self {
        Self {
            kind: "rect",
            xref: "x",
            yref: "paper",
            x0: Coord::Text(x0),
            x1: Coord::Text(x1),
            y0: Coord::Num(0.0),
            y1: Coord::Num(1.0),
            fillcolor: Some(fill),
            opacity: Some(opacity),
            layer: Some("below"),
            line: LineStyle {
                dash: None,
                width: Some(0.0),
            },
        }
    }

    /// A dotted full-width horizontal line at `y`.
    pub(crate) fn hline(y: f64) -> Self {
        Self {
            kind: "line",
            xref: "paper",
            yref: "y",
            x0: Coord::Num(0.0),
            x1: Coord::Num(1.0),
            y0: Coord::Num(y),
            y1: Coord::Num(y),
            fillcolor: None,
            opacity: None,
            layer: None,
            line: LineStyle {
                dash: Some("dot"),
                width: None,
            },
        }
    }
}

/// Figure or axis title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    /// Title text.
    pub text: String,
}

/// The miniature overview slider under a date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    /// Whether the slider is shown.
    pub visible: bool,
}

/// One range-selector button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorButton {
    /// Number of `step` units the button spans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Button caption; Plotly derives one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Unit: `"month"`, `"year"` or `"all"`.
    pub step: &'static str,
    /// `"backward"` counts back from the last date, `"todate"` from the start of the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepmode: Option<&'static str>,
}

/// Quick zoom buttons above a date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSelector {
    /// Buttons, left to right.
    pub buttons: Vec<SelectorButton>,
}

impl RangeSelector {
    /// 1m, 6m, YTD, 1y and all.
    pub(crate) fn standard() -> Self {
        let b = |count: u32, label: &'static str, step: &'static str, stepmode: &'static str| {
            SelectorButton {
                count: Some(count),
                label: Some(label),
                step,
                stepmode: Some(stepmode),
            }
        };
        Self {
            buttons: vec![
                b(1, "1m", "month", "backward"),
                b(6, "6m", "month", "backward"),
                b(1, "YTD", "year", "todate"),
                b(1, "1y", "year", "backward"),
                SelectorButton {
                    count: None,
                    label: None,
                    step: "all",
                    stepmode: None,
                },
            ],
        }
    }
}

/// An x or y axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    /// Axis title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Initial `[min, max]`; autoscaled when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[Cell; 2]>,
    /// Grid lines on or off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    /// Overview slider, x axis only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    /// Zoom buttons, x axis only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeselector: Option<RangeSelector>,
}

/// Figure-wide layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Figure title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Whether the legend is drawn.
    pub showlegend: bool,
    /// Plotly hover mode, e.g. `"x unified"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    /// Horizontal axis.
    pub xaxis: Axis,
    /// Vertical axis.
    pub yaxis: Axis,
    /// Bands and reference lines, drawn in order.
    pub shapes: Vec<Shape>,
}

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Traces, in legend order.
    pub data: Vec<Trace>,
    /// Layout.
    pub layout: Layout,
}

impl Figure {
    /// Legend groups with at least one initially visible trace, in trace order.
    #[must_use]
    pub fn visible_groups(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for t in &self.data {
            if t.visible == Visibility::Visible && !out.contains(&t.legendgroup.as_str()) {
                out.push(&t.legendgroup);
            }
        }
        out
    }

    /// The `y` of the horizontal reference line, if one was added.
    #[must_use]
    pub fn reference_line(&self) -> Option<f64> {
        self.layout
            .shapes
            .iter()
            .find(|s| s.kind == "line")
            .and_then(|s| match s.y0 {
                Coord::Num(y) => Some(y),
                Coord::Text(_) => None,
            })
    }

    /// The x-axis range, if the figure has any x values.
    #[must_use]
    pub fn x_range(&self) -> Option<&[Cell; 2]> {
        self.layout.xaxis.range.as_ref()
    }

    /// Plotly JSON (`{"data": [...], "layout": {...}}`).
    ///
    /// # Errors
    ///
    /// Only fails if serialization itself fails, which the figure types do not trigger.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// `[min, max]` over the non-null x values. Numbers compare numerically, anything
/// else compares as text (ISO dates sort correctly that way).
pub(crate) fn x_bounds<'a, I>(xs: I) -> Option<[Cell; 2]>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let xs: Vec<&Cell> = xs.into_iter().filter(|c| !c.is_null()).collect();
    if xs.is_empty() {
        return None;
    }
    if xs.iter().all(|c| matches!(c, Cell::Number(_))) {
        let nums = xs.iter().filter_map(|c| match c {
            Cell::Number(n) => Some(*n),
            _ => None,
        });
        let (lo, hi) = nums.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), n| {
            (lo.min(n), hi.max(n))
        });
        return Some([Cell::Number(lo), Cell::Number(hi)]);
    }
    let lo = xs.iter().map(|c| c.to_string()).min()?;
    let hi = xs.iter().map(|c| c.to_string()).max()?;
    Some([Cell::Text(lo), Cell::Text(hi)])
}
