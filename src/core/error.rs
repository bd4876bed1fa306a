use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SfError {
    /// An error occurred during an HTTP request. Any URL it carries has the API key redacted.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected envelope.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404, with the API key redacted.
        url: String,
    },

    /// The provider throttled the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429, with the API key redacted.
        url: String,
    },

    /// The provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code (5xx).
        status: u16,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// The provider answered with an error object instead of data.
    #[error("SimFin API error: {0}")]
    Api(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No API key was configured on the client.
    #[error("no API key configured (set it on the builder or via {0})")]
    MissingApiKey(&'static str),

    /// The request parameters were rejected before anything was sent.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// A column selected for charting holds a value that is not numeric.
    #[error("column '{column}' has non-numeric value {value:?} at row {row}")]
    TypeConversion {
        /// The column being converted.
        column: String,
        /// Zero-based row position of the offending value.
        row: usize,
        /// The offending value, as text.
        value: String,
    },

    /// A later response page carried a different column schema than the first one.
    #[error("page {page} columns differ from the first page (expected {expected:?}, found {found:?})")]
    SchemaMismatch {
        /// Zero-based position of the page in the response.
        page: usize,
        /// Columns of the first kept page.
        expected: Vec<String>,
        /// Columns of the offending page.
        found: Vec<String>,
    },

    /// A column required by an operation is absent from the table.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// The indicator requested for a chart is not one of the table's indicator columns.
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),
}

/// Parameter problems detected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The ticker list is empty.
    #[error("select at least one ticker")]
    NoTickers,

    /// More tickers than the configured limit were requested.
    #[error("to preserve bandwidth, you can only select up to {max} tickers (got {count})")]
    TooManyTickers {
        /// Number of tickers supplied.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// The end year precedes the start year.
    #[error("end year {end} must not be before start year {start}")]
    InvertedYears {
        /// Requested first fiscal year.
        start: i32,
        /// Requested last fiscal year.
        end: i32,
    },

    /// A selector value (statement kind, sector preset) is not one of the offered choices.
    #[error("unknown {field} '{value}'")]
    UnknownChoice {
        /// Which selector the value was meant for.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Coarse error categories, used to decide how a failure is shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or provider failure. Scoped to the action, shown as a warning.
    Fetch,
    /// Bad input. The fetch never ran.
    Validation,
    /// A chart could not be drawn for the selected indicator.
    TypeConversion,
    /// The provider's tables did not have the expected shape.
    Schema,
}

impl SfError {
    /// Maps this error onto its [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_)
            | Self::Url(_)
            | Self::Json(_)
            | Self::Status { .. }
            | Self::NotFound { .. }
            | Self::RateLimited { .. }
            | Self::ServerError { .. }
            | Self::Api(_)
            | Self::Data(_)
            | Self::MissingApiKey(_) => ErrorKind::Fetch,
            Self::Validation(_) => ErrorKind::Validation,
            Self::TypeConversion { .. } | Self::UnknownIndicator(_) => ErrorKind::TypeConversion,
            Self::SchemaMismatch { .. } | Self::MissingColumn(_) => ErrorKind::Schema,
        }
    }

    /// Returns true when the failure happened before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
