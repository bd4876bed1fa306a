use polars::prelude::*;

use super::table::{Cell, Table};

/// Conversion of tables into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// A column whose non-null cells are all numbers becomes `Float64`; any other
    /// column becomes `String`, with nulls preserved.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.width());
        for name in self.columns() {
            let values = self.column(name).unwrap_or_default();
            let numeric = values
                .iter()
                .all(|c| matches!(c, Cell::Null | Cell::Number(_)));
            let series = if numeric {
                let v: Vec<Option<f64>> = values
                    .iter()
                    .map(|c| match c {
                        Cell::Number(n) => Some(*n),
                        _ => None,
                    })
                    .collect();
                Series::new(name.as_str().into(), v)
            } else {
                let v: Vec<Option<String>> = values
                    .iter()
                    .map(|c| (!c.is_null()).then(|| c.to_string()))
                    .collect();
                Series::new(name.as_str().into(), v)
            };
            columns.push(series.into());
        }
        DataFrame::new(columns)
    }
}
