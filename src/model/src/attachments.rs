// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Attachments and attachment downloads.

use crate::Result;
use std::io::Read;

pub use crate::common::Attachment;

const MAX_PREALLOCATED_BYTES: u64 = 64 * 1024;

/// The response to an attachment download.
///
/// This is the only record holding a live resource: the byte stream opened
/// by the HTTP client. Ownership of the stream moves to the caller with the
/// response. The stream is released when the response (or the reader returned
/// by [into_reader][DownloadResponse::into_reader]) is dropped, on every path.
///
/// # Example
/// ```
/// # use mailsuite_model::attachments::DownloadResponse;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("text/plain"));
/// let response = DownloadResponse::new(headers, std::io::Cursor::new(b"hello".to_vec()));
/// assert_eq!(response.content_type(), Some("text/plain"));
/// let contents = response.into_bytes()?;
/// assert_eq!(contents.as_ref(), b"hello");
/// # Ok::<(), mailsuite_model::Error>(())
/// ```
pub struct DownloadResponse {
    headers: http::HeaderMap,
    body: Box<dyn Read + Send>,
}

impl DownloadResponse {
    /// Creates a response from the headers and body returned by the service.
    pub fn new<R>(headers: http::HeaderMap, body: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            headers,
            body: Box::new(body),
        }
    }

    /// The response headers.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// The `Content-Type` header, if present and valid.
    pub fn content_type(&self) -> Option<&str> {
        self.header_str(http::header::CONTENT_TYPE)
    }

    /// The `Content-Disposition` header, if present and valid.
    pub fn content_disposition(&self) -> Option<&str> {
        self.header_str(http::header::CONTENT_DISPOSITION)
    }

    /// The `Content-Length` header, if present and valid.
    pub fn content_length(&self) -> Option<u64> {
        self.header_str(http::header::CONTENT_LENGTH)
            .and_then(|v| v.parse::<u64>().ok())
    }

    fn header_str(&self, name: http::header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Transfers ownership of the byte stream to the caller.
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.body
    }

    /// Reads the remaining payload and releases the stream.
    pub fn into_bytes(mut self) -> Result<bytes::Bytes> {
        // The header is only a hint, the buffer grows as needed past the cap.
        let hint = self
            .content_length()
            .map_or(0, |n| n.min(MAX_PREALLOCATED_BYTES));
        let mut buffer = Vec::with_capacity(usize::try_from(hint).unwrap_or_default());
        self.body.read_to_end(&mut buffer)?;
        tracing::debug!(bytes = buffer.len(), "attachment download consumed");
        Ok(bytes::Bytes::from(buffer))
    }
}

impl Read for DownloadResponse {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.body.read(buf)
    }
}

impl std::fmt::Debug for DownloadResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadResponse")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, header};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    // Records when the stream is released.
    struct TrackedStream {
        data: std::io::Cursor<Vec<u8>>,
        released: Arc<AtomicBool>,
        fail: bool,
    }

    impl Read for TrackedStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.fail {
                return Err(std::io::Error::other("connection reset"));
            }
            self.data.read(buf)
        }
    }

    impl Drop for TrackedStream {
        fn drop(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    fn tracked(data: &[u8], fail: bool) -> (TrackedStream, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        let stream = TrackedStream {
            data: std::io::Cursor::new(data.to_vec()),
            released: released.clone(),
            fail,
        };
        (stream, released)
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("4"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"logo.png\""),
        );
        headers
    }

    #[test]
    fn accessors() {
        let response = DownloadResponse::new(headers(), std::io::empty());
        assert_eq!(response.content_type(), Some("image/png"));
        assert_eq!(response.content_length(), Some(4));
        assert_eq!(
            response.content_disposition(),
            Some("attachment; filename=\"logo.png\"")
        );
        assert_eq!(response.headers().len(), 3);

        let response = DownloadResponse::new(HeaderMap::new(), std::io::empty());
        assert_eq!(response.content_type(), None);
        assert_eq!(response.content_length(), None);
        assert_eq!(response.content_disposition(), None);
    }

    #[test]
    fn into_bytes_releases_stream() -> TestResult {
        let (stream, released) = tracked(b"\x89PNG", false);
        let response = DownloadResponse::new(headers(), stream);
        let got = response.into_bytes()?;
        assert_eq!(got.as_ref(), b"\x89PNG");
        assert!(released.load(Ordering::SeqCst));
        Ok(())
    }

    #[test]
    fn error_releases_stream() {
        let (stream, released) = tracked(b"", true);
        let response = DownloadResponse::new(headers(), stream);
        let got = response.into_bytes();
        assert!(matches!(got, Err(crate::Error::Io(_))), "{got:?}");
        assert!(released.load(Ordering::SeqCst));
    }

    #[test_case("18446744073709551615")]
    #[test_case("1099511627776")]
    #[test_case("not-a-number")]
    #[test_case("0")]
    fn into_bytes_ignores_bogus_length(length: &'static str) -> TestResult {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static(length));
        let response = DownloadResponse::new(headers, std::io::Cursor::new(b"hi".to_vec()));
        let got = response.into_bytes()?;
        assert_eq!(got.as_ref(), b"hi");
        Ok(())
    }

    #[test]
    fn into_bytes_larger_than_hint() -> TestResult {
        let data = vec![7_u8; 3 * MAX_PREALLOCATED_BYTES as usize];
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(data.len()));
        let response = DownloadResponse::new(headers, std::io::Cursor::new(data.clone()));
        let got = response.into_bytes()?;
        assert_eq!(got.as_ref(), data.as_slice());
        Ok(())
    }

    #[test]
    fn drop_releases_stream() {
        let (stream, released) = tracked(b"unused", false);
        let response = DownloadResponse::new(headers(), stream);
        assert!(!released.load(Ordering::SeqCst));
        drop(response);
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn into_reader() -> TestResult {
        let (stream, released) = tracked(b"abc", false);
        let response = DownloadResponse::new(headers(), stream);
        let mut reader = response.into_reader();
        assert!(!released.load(Ordering::SeqCst));
        let mut got = String::new();
        reader.read_to_string(&mut got)?;
        assert_eq!(got, "abc");
        drop(reader);
        assert!(released.load(Ordering::SeqCst));
        Ok(())
    }

    #[test]
    fn read() -> TestResult {
        let mut response = DownloadResponse::new(headers(), std::io::Cursor::new(b"xyz".to_vec()));
        let mut got = Vec::new();
        response.read_to_end(&mut got)?;
        assert_eq!(got, b"xyz");
        assert!(format!("{response:?}").contains("image/png"));
        Ok(())
    }
}
