// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;

/// Per-call options passed to the `*_with_context` methods
///
/// The timeout bounds the whole call, retries and backoff included.
/// Cancellation is dropping the returned future.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
    headers: HeaderMap,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an extra header sent with every attempt of this call
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("invalid header value for '{}': {e}", name.as_str())))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = RequestContext::new()
            .with_timeout(Duration::from_secs(3))
            .with_header("X-TC-TraceId", "abc")
            .unwrap();
        assert_eq!(ctx.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(ctx.headers().get("x-tc-traceid").unwrap(), "abc");
    }

    #[test]
    fn test_rejects_bad_header() {
        let err = RequestContext::new().with_header("bad header", "x").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
