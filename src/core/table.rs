//! A small, dynamically-typed table.
//!
//! The provider decides which columns a response carries, so the column set is
//! only known at runtime. `Table` keeps rows in provider order and remembers an
//! optional index column by name.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::error::SfError;

/// One value in a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing or undefined.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// Text (dates arrive as text too).
    Text(String),
}

impl Cell {
    /// True for [`Cell::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text content, if this is a text cell.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Float coercion: numbers pass through, numeric text is parsed, booleans
    /// become 0/1 and nulls stay missing. `Err(())` marks text that is not a number.
    pub(crate) fn to_f64(&self) -> Result<Option<f64>, ()> {
        match self {
            Self::Null => Ok(None),
            Self::Number(n) => Ok(Some(*n)),
            Self::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
            Self::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return Err(());
                }
                t.parse::<f64>().map(Some).map_err(|_| ())
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<serde_json::Value> for Cell {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Text(other.to_string()),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A wide table: named columns, rows of [`Cell`]s, and an optional index column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    index: Option<String>,
}

impl Table {
    /// An empty table with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table, checking every row has exactly one cell per column.
    ///
    /// # Errors
    ///
    /// Returns `SfError::Data` if a row's width differs from the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, SfError> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
        {
            return Err(SfError::Data(format!(
                "{} columns passed, row {i} has {} values",
                columns.len(),
                row.len()
            )));
        }
        Ok(Self {
            columns,
            rows,
            index: None,
        })
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// True if a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The values of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let pos = self.position(name)?;
        Some(self.rows.iter().map(|r| &r[pos]).collect())
    }

    /// A single cell.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let pos = self.position(column)?;
        self.rows.get(row).map(|r| &r[pos])
    }

    /// Name of the index column, if one has been set.
    #[must_use]
    pub fn index_name(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Values of the index column.
    #[must_use]
    pub fn index(&self) -> Option<Vec<&Cell>> {
        self.column(self.index.as_deref()?)
    }

    /// Marks an existing column as the index. The column stays a regular column too.
    ///
    /// # Errors
    ///
    /// Returns `SfError::MissingColumn` if there is no such column.
    pub fn set_index(&mut self, name: &str) -> Result<(), SfError> {
        if !self.has_column(name) {
            return Err(SfError::MissingColumn(name.to_string()));
        }
        self.index = Some(name.to_string());
        Ok(())
    }

    /// Marks `name` as the index if the column exists. Returns whether it did.
    pub(crate) fn set_index_if_present(&mut self, name: &str) -> bool {
        let present = self.has_column(name);
        if present {
            self.index = Some(name.to_string());
        }
        present
    }

    /// Keeps only columns accepted by `keep`, in their current order.
    #[must_use]
    pub fn filter_columns<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let picked: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| keep(c))
            .map(|(i, _)| i)
            .collect();
        let columns = picked.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|r| picked.iter().map(|&i| r[i].clone()).collect())
            .collect();
        let index = self
            .index
            .clone()
            .filter(|idx| picked.iter().any(|&i| &self.columns[i] == idx));
        Self {
            columns,
            rows,
            index,
        }
    }

    /// Rebuilds the table with exactly `names` as columns, in that order.
    /// Names absent from this table become all-`Null` columns.
    #[must_use]
    pub fn reindex_columns(&self, names: &[&str]) -> Self {
        let positions: Vec<Option<usize>> = names.iter().map(|n| self.position(n)).collect();
        let rows = self
            .rows
            .iter()
            .map(|r| {
                positions
                    .iter()
                    .map(|p| p.map_or(Cell::Null, |i| r[i].clone()))
                    .collect()
            })
            .collect();
        let index = self
            .index
            .clone()
            .filter(|idx| names.iter().any(|n| n == idx));
        Self {
            columns: names.iter().map(|n| (*n).to_string()).collect(),
            rows,
            index,
        }
    }

    /// Distinct non-null values of a column as text, in first-seen order.
    #[must_use]
    pub fn unique(&self, name: &str) -> Vec<String> {
        let Some(values) = self.column(name) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        values
            .into_iter()
            .filter(|c| !c.is_null())
            .map(ToString::to_string)
            .filter(|s| seen.insert(s.clone()))
            .collect()
    }

    /// A column coerced to floats. Nulls stay `None`.
    ///
    /// # Errors
    ///
    /// `SfError::MissingColumn` if the column is absent, `SfError::TypeConversion`
    /// on the first value that is not numeric.
    pub fn f64_column(&self, name: &str) -> Result<Vec<Option<f64>>, SfError> {
        let values = self
            .column(name)
            .ok_or_else(|| SfError::MissingColumn(name.to_string()))?;
        values
            .into_iter()
            .enumerate()
            .map(|(row, c)| {
                c.to_f64().map_err(|()| SfError::TypeConversion {
                    column: name.to_string(),
                    row,
                    value: c.to_string(),
                })
            })
            .collect()
    }

    /// Appends rows that share this table's column layout.
    pub(crate) fn extend_rows(&mut self, rows: Vec<Vec<Cell>>) -> Result<(), SfError> {
        let width = self.columns.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(SfError::Data(format!(
                "{width} columns passed, row has {} values",
                bad.len()
            )));
        }
        self.rows.extend(rows);
        Ok(())
    }
}
