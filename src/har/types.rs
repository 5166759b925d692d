use serde::Deserialize;

/// Root HAR structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Har {
    #[serde(default)]
    pub log: Log,
}

/// Log object - the main container
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// HTTP request/response entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Capture tool's resource classification (e.g. "xhr", "document")
    #[serde(default, rename = "_resourceType")]
    pub resource_type: String,
    #[serde(default, rename = "_initiator")]
    pub initiator: Initiator,
    #[serde(default)]
    pub request: Request,
    #[serde(default)]
    pub response: Response,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub started_date_time: String,
    #[serde(default)]
    pub timings: Timings,
}

/// What triggered the request (informational)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Initiator {
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// HTTP Request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub headers_size: i64,
    #[serde(default)]
    pub body_size: i64,
    #[serde(default)]
    pub post_data: PostData,
}

/// HTTP Response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Capture-time failure (e.g. "net::ERR_ABORTED"); non-empty means no real response
    #[serde(default, rename = "_error")]
    pub error: String,
}

/// Header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// POST data
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub params: Vec<Param>,
}

/// POST form parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Cookie
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub expires: String,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
}

/// Timing breakdown
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timings {
    #[serde(default)]
    pub connect: f64,
}

// Helper implementations

impl Har {
    pub fn entries(&self) -> &[Entry] {
        &self.log.entries
    }
}

impl Entry {
    pub fn url(&self) -> &str {
        &self.request.url
    }

    /// Whether the capture recorded a finished exchange worth replaying
    pub fn is_complete(&self) -> bool {
        self.response.status != 0 && self.response.error.is_empty()
    }

    /// Get a header value from the recorded request
    pub fn request_header(&self, name: &str) -> Option<&str> {
        self.request
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
