// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Coho SDK.

use coho_common_http::{is_retryable_status, RetryableError};
use thiserror::Error;

use crate::transport::TransportError;

/// Coho SDK errors.
///
/// Callers only ever observe three of these from `send_event`:
/// `MissingUserId` and `Serialization` before any network activity, and
/// `FailedAfterRetries` once network activity has occurred. `ServerError`
/// and `Transport` describe single attempts and are absorbed by the retry
/// loop; they surface in diagnostic logs only.
#[derive(Debug, Error)]
pub enum CohoError {
	/// No user id has been set; call `set_user_id` before sending events.
	#[error("user id is not set; call set_user_id before sending events")]
	MissingUserId,

	/// The event payload could not be encoded.
	#[error("failed to serialize event payload: {0}")]
	Serialization(#[from] serde_json::Error),

	/// A single attempt received a non-2xx response.
	#[error("server error ({status})")]
	ServerError { status: u16 },

	/// A single attempt failed below HTTP (connection, timeout, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Terminal failure: retries exhausted or a non-retryable code was hit.
	#[error("failed to send event after retries")]
	FailedAfterRetries,
}

impl CohoError {
	/// The numeric code checked against the retryable set: the HTTP status
	/// for server errors, the transport-assigned code otherwise.
	pub(crate) fn status_code(&self) -> Option<u16> {
		match self {
			CohoError::ServerError { status } => Some(*status),
			CohoError::Transport(err) => Some(err.code),
			_ => None,
		}
	}
}

impl RetryableError for CohoError {
	fn is_retryable(&self) -> bool {
		match self.status_code() {
			Some(code) => is_retryable_status(code),
			None => false,
		}
	}
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, CohoError>;
