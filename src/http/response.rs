use futures_util::StreamExt;
use http::{HeaderMap, StatusCode};

const MAX_BODY_PREALLOC: usize = 1024 * 1024;

/// Response captured in full so assertions can inspect it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// Reads the response to the end, keeping status and headers.
///
/// # Errors
///
/// Returns the transport error raised while streaming the body.
pub(crate) async fn capture_response(
    response: reqwest::Response,
) -> Result<HttpResponse, reqwest::Error> {
    let status = response.status();
    let headers = response.headers().clone();
    let mut body = Vec::with_capacity(
        response
            .content_length()
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(0)
            .min(MAX_BODY_PREALLOC),
    );
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(HttpResponse::new(status, headers, body))
}
