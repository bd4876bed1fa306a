//! Turns decoded provider pages into one [`Table`].

use url::Url;

use super::client::SfClient;
use super::table::{Cell, Table};
use super::wire::{PageNode, TableNode, decode_pages, decode_table};
use super::{SfError, net};

/// How pages whose column lists differ are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaPolicy {
    /// Take the columns of the first kept page and append every later page's
    /// rows under them, unchecked. Pages with the same width but different
    /// columns are silently misaligned. (Default)
    #[default]
    FirstPage,
    /// Require every kept page to carry exactly the first page's columns.
    Strict,
}

fn to_cells(rows: Vec<Vec<serde_json::Value>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .map(|r| r.into_iter().map(Cell::from).collect())
        .collect()
}

pub(crate) fn table_from_node(node: TableNode) -> Result<Table, SfError> {
    Table::from_rows(node.columns, to_cells(node.data))
}

/// Concatenates the rows of every page that was `found` and has data.
///
/// No kept pages yields an empty table with no columns.
pub(crate) fn assemble(pages: Vec<PageNode>, policy: SchemaPolicy) -> Result<Table, SfError> {
    let mut table: Option<Table> = None;

    for (i, page) in pages.into_iter().enumerate() {
        let rows = match page.data {
            Some(rows) if page.found && !rows.is_empty() => rows,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(page = i, found = page.found, "skipping page without data");
                continue;
            }
        };
        let columns = page.columns.unwrap_or_default();

        match table.as_mut() {
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(page = i, columns = columns.len(), "schema taken from first page");
                table = Some(Table::from_rows(columns, to_cells(rows))?);
            }
            Some(t) => {
                if policy == SchemaPolicy::Strict && t.columns() != columns.as_slice() {
                    return Err(SfError::SchemaMismatch {
                        page: i,
                        expected: t.columns().to_vec(),
                        found: columns,
                    });
                }
                t.extend_rows(to_cells(rows))?;
            }
        }
    }

    Ok(table.unwrap_or_default())
}

/// GETs a single-table endpoint and decodes it.
pub(crate) async fn fetch_single(
    client: &SfClient,
    url: &Url,
    endpoint: &str,
    key: &str,
) -> Result<Table, SfError> {
    let body = net::get_body(client, url, endpoint, key).await?;
    table_from_node(decode_table(&body)?)
}

/// GETs a batched endpoint and assembles its pages.
pub(crate) async fn fetch_paged(
    client: &SfClient,
    url: &Url,
    endpoint: &str,
    key: &str,
    policy: SchemaPolicy,
) -> Result<Table, SfError> {
    let body = net::get_body(client, url, endpoint, key).await?;
    assemble(decode_pages(&body)?, policy)
}
