/* ---------- Minimal serde mapping of SimFin v2 envelopes ---------- */

use serde::Deserialize;
use serde_json::Value;

use super::SfError;

/// `{"error": "..."}`, returned instead of data for bad keys or parameters.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorNode {
    pub(crate) error: String,
}

/// `companies/list`: a single `columns` + `data` block.
#[derive(Debug, Deserialize)]
pub(crate) struct TableNode {
    pub(crate) columns: Vec<String>,
    pub(crate) data: Vec<Vec<Value>>,
}

/// One entry of a batched `statements` / `prices` response.
#[derive(Debug, Deserialize)]
pub(crate) struct PageNode {
    #[serde(default)]
    pub(crate) found: bool,
    #[serde(default)]
    pub(crate) columns: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) data: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PagesEnvelope {
    Pages(Vec<PageNode>),
    Error(ApiErrorNode),
}

pub(crate) fn decode_table(body: &str) -> Result<TableNode, SfError> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("error").is_some() && value.get("data").is_none() {
        let node: ApiErrorNode = serde_json::from_value(value)?;
        return Err(SfError::Api(node.error));
    }
    Ok(serde_json::from_value(value)?)
}

pub(crate) fn decode_pages(body: &str) -> Result<Vec<PageNode>, SfError> {
    match serde_json::from_str::<PagesEnvelope>(body) {
        Ok(PagesEnvelope::Pages(p)) => Ok(p),
        Ok(PagesEnvelope::Error(e)) => Err(SfError::Api(e.error)),
        Err(_) => {
            // Re-run the strict decoder so the error names the real problem.
            let pages: Vec<PageNode> = serde_json::from_str(body)?;
            Ok(pages)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_tolerate_missing_fields_when_not_found() {
        let body = r#"[{"found": false}, {"found": true, "columns": ["Ticker"], "data": [["AAPL"]]}]"#;
        let pages = decode_pages(body).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(!pages[0].found);
        assert!(pages[0].data.is_none());
        assert_eq!(pages[1].columns.as_deref(), Some(&["Ticker".to_string()][..]));
    }

    #[test]
    fn provider_error_object_is_reported() {
        let err = decode_pages(r#"{"error": "invalid api key"}"#).unwrap_err();
        assert!(matches!(err, SfError::Api(m) if m == "invalid api key"));

        let err = decode_table(r#"{"error": "invalid api key"}"#).unwrap_err();
        assert!(matches!(err, SfError::Api(_)));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(decode_pages("<html>"), Err(SfError::Json(_))));
        assert!(matches!(decode_table("nope"), Err(SfError::Json(_))));
        assert!(matches!(decode_table("{}"), Err(SfError::Json(_))));
    }
}
