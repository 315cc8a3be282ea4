// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The SDK client: session identity and the send/retry delivery pipeline.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use coho_analytics_core::endpoint::headers;
use coho_analytics_core::{build_event, CohoOptions, DeviceContext, EventEnvelope, Properties};
use coho_common_http::RetryableError;

use crate::error::{CohoError, Result};
use crate::transport::{ReqwestTransport, Transport};

/// Client for the Coho event-telemetry API.
///
/// Construct once per process with [`CohoOptions`], set the user id, then
/// send events. Every `send_event` call is independent: concurrent sends
/// share no retry state, and each resolves exactly once.
pub struct CohoClient {
	options: CohoOptions,
	endpoint: String,
	request_headers: HeaderMap,
	transport: Arc<dyn Transport>,
	user_id: RwLock<Option<String>>,
}

impl CohoClient {
	/// Creates a client using the default `reqwest` transport.
	pub fn new(options: CohoOptions) -> Self {
		Self::with_transport(options, Arc::new(ReqwestTransport::new()))
	}

	/// Creates a client over a caller-provided transport.
	pub fn with_transport(options: CohoOptions, transport: Arc<dyn Transport>) -> Self {
		let endpoint = options.region.endpoint().to_string();
		Self::build(options, endpoint, transport)
	}

	/// Test seam: points the client at an arbitrary ingestion endpoint.
	#[doc(hidden)]
	pub fn with_endpoint(
		options: CohoOptions,
		endpoint: impl Into<String>,
		transport: Arc<dyn Transport>,
	) -> Self {
		Self::build(options, endpoint.into(), transport)
	}

	fn build(options: CohoOptions, endpoint: String, transport: Arc<dyn Transport>) -> Self {
		let request_headers = Self::request_headers(&options);
		Self {
			options,
			endpoint,
			request_headers,
			transport,
			user_id: RwLock::new(None),
		}
	}

	fn request_headers(options: &CohoOptions) -> HeaderMap {
		let mut map = HeaderMap::new();
		map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		map.insert(ACCEPT, HeaderValue::from_static("*/*"));
		// Tenant ids are opaque and forwarded verbatim; a value that is not
		// a legal header value degrades to empty rather than failing
		// construction.
		let tenant = HeaderValue::from_str(&options.tenant_id)
			.unwrap_or_else(|_| HeaderValue::from_static(""));
		map.insert(headers::TENANT_ID, tenant);
		map.insert(
			headers::USER_ID_KEY,
			HeaderValue::from_static(headers::USER_ID_KEY_VALUE),
		);
		map.insert(
			headers::DATA_SOURCE_CONTEXT,
			HeaderValue::from_static(headers::DATA_SOURCE_CONTEXT_VALUE),
		);
		map
	}

	/// Sets the session user id, overwriting any previous value.
	///
	/// Cannot fail. The id is captured by each `send_event` call at its
	/// start; changing it does not affect sends already in flight.
	pub fn set_user_id(&self, user_id: impl Into<String>) {
		let user_id = user_id.into();
		if self.options.enable_logging {
			debug!(user_id = %user_id, "user id set");
		}
		*self
			.user_id
			.write()
			.unwrap_or_else(PoisonError::into_inner) = Some(user_id);
	}

	fn snapshot_user_id(&self) -> Option<String> {
		self
			.user_id
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Sends one event, driving retries to completion.
	///
	/// Returns `MissingUserId` without any network activity if no user id
	/// has been set, and `Serialization` if the payload cannot be encoded.
	/// Otherwise the serialized payload is posted up to `retries + 1`
	/// times, with a flat `retry_delay` between attempts; transient codes
	/// (408, 429, 500, 502, 503, 504) are retried, anything else is
	/// terminal. After network activity the only failure returned is
	/// `FailedAfterRetries`.
	pub async fn send_event(&self, event_name: &str, properties: Properties) -> Result<()> {
		let Some(user_id) = self.snapshot_user_id() else {
			if self.options.enable_logging {
				warn!("user id is not set; call set_user_id before sending events");
			}
			return Err(CohoError::MissingUserId);
		};

		let event = build_event(event_name, &user_id, DeviceContext::get(), properties);
		let body = serde_json::to_vec(&EventEnvelope::single(event))?;

		self.deliver(&body).await
	}

	/// The send/retry loop. The same serialized bytes are resent verbatim
	/// on every attempt; `attempts` counts completed attempts, so with
	/// `retries = R` up to `R + 1` requests go out.
	async fn deliver(&self, body: &[u8]) -> Result<()> {
		let mut attempts: u32 = 0;

		loop {
			if self.options.enable_logging {
				debug!(
					url = %self.endpoint,
					attempt = attempts,
					body = %String::from_utf8_lossy(body),
					"sending event"
				);
			}

			let failure = match self
				.transport
				.post(&self.endpoint, &self.request_headers, body)
				.await
			{
				Ok(status) if (200..300).contains(&status) => {
					if self.options.enable_logging {
						debug!("event sent successfully");
					}
					return Ok(());
				}
				Ok(status) => CohoError::ServerError { status },
				Err(err) => CohoError::Transport(err),
			};

			if self.options.enable_logging {
				debug!(error = %failure, attempt = attempts, "send attempt failed");
			}

			if attempts < self.options.retries && failure.is_retryable() {
				if self.options.enable_logging {
					debug!(delay = ?self.options.retry_delay, "retrying after delay");
				}
				attempts += 1;
				tokio::time::sleep(self.options.retry_delay).await;
			} else {
				if self.options.enable_logging {
					warn!(
						retries = self.options.retries,
						error = %failure,
						"failed to send event after retries or non-retryable error"
					);
				}
				return Err(CohoError::FailedAfterRetries);
			}
		}
	}
}
