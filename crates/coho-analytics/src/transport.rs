// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The opaque HTTP transport capability used by the delivery pipeline.
//!
//! The pipeline only needs "POST these headers and bytes, give me a status
//! code or a transport error". Everything else about HTTP stays behind this
//! trait, which also makes the retry loop testable without a server.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// A transport-level failure (connection refused, timeout, TLS, ...).
///
/// The `code` feeds the same retryable-code predicate as HTTP statuses:
/// timeouts map to 408 and connection failures to 503, both in the
/// retryable set; anything else maps to 0 and is terminal.
#[derive(Debug, Clone, Error)]
#[error("transport error ({code}): {message}")]
pub struct TransportError {
	pub code: u16,
	pub message: String,
}

impl From<reqwest::Error> for TransportError {
	fn from(err: reqwest::Error) -> Self {
		let code = if err.is_timeout() {
			408
		} else if err.is_connect() {
			503
		} else {
			0
		};
		Self {
			code,
			message: err.to_string(),
		}
	}
}

/// Asynchronous POST capability consumed by the delivery pipeline.
///
/// Implementations return the response status code on any completed HTTP
/// exchange (2xx or not); the response body is never inspected.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn post(&self, url: &str, headers: &HeaderMap, body: &[u8])
		-> Result<u16, TransportError>;
}

/// Default transport over the shared `reqwest` client.
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	/// Creates a transport over the standard shared client.
	pub fn new() -> Self {
		Self {
			client: coho_common_http::new_client(),
		}
	}

	/// Creates a transport over a caller-provided client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl Default for ReqwestTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Transport for ReqwestTransport {
	async fn post(
		&self,
		url: &str,
		headers: &HeaderMap,
		body: &[u8],
	) -> Result<u16, TransportError> {
		let response = self
			.client
			.post(url)
			.headers(headers.clone())
			.body(body.to_vec())
			.send()
			.await
			.map_err(TransportError::from)?;

		Ok(response.status().as_u16())
	}
}
