use super::ReplayError;
use crate::har::{Entry, Param};
use reqwest::blocking::Request;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::form_urlencoded;
use url::Url;

/// HTTP/2 capture artifacts; method/URL/scheme travel as dedicated request
/// fields, never as headers.
fn is_pseudo_header(name: &str) -> bool {
    matches!(name, ":method" | ":path" | ":authority" | ":scheme")
}

/// Percent-encode (name, value) pairs as application/x-www-form-urlencoded,
/// preserving recorded order.
fn form_encode(params: &[Param]) -> String {
    let mut body = form_urlencoded::Serializer::new(String::new());
    for p in params {
        body.append_pair(&p.name, &p.value);
    }
    body.finish()
}

impl Entry {
    /// Reconstruct the outbound request this entry recorded.
    ///
    /// The result is a bare request: recorded cookies are deliberately not
    /// attached here, session state comes from the replaying client's
    /// cookie jar. Entries whose capture never completed fail with
    /// `Incomplete` before anything is built.
    pub fn build_request(&self) -> Result<Request, ReplayError> {
        if !self.is_complete() {
            return Err(ReplayError::Incomplete);
        }

        let method = Method::from_bytes(self.request.method.as_bytes())
            .map_err(|_| ReplayError::InvalidMethod(self.request.method.clone()))?;
        let url = Url::parse(&self.request.url)?;
        let mut request = Request::new(method, url);

        let headers = request.headers_mut();
        for h in &self.request.headers {
            if is_pseudo_header(&h.name) {
                continue;
            }
            let name = HeaderName::from_bytes(h.name.as_bytes())?;
            headers.insert(name, HeaderValue::from_str(&h.value)?);
        }

        // The recorded MIME type wins over any recorded content-type header.
        let post = &self.request.post_data;
        if !post.mime_type.is_empty() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(&post.mime_type)?);
        }

        // Raw text takes precedence; decomposed form params are only a
        // fallback for captures that dropped the raw body.
        if !post.text.is_empty() {
            *request.body_mut() = Some(post.text.clone().into());
        } else if !post.params.is_empty() {
            *request.body_mut() = Some(form_encode(&post.params).into());
        }

        Ok(request)
    }
}
