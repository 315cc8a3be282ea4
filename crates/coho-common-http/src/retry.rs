// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Retry classification for transient HTTP failures.

/// Status codes treated as transient and eligible for automatic resend.
///
/// Fixed by the ingestion API contract; not configurable.
pub const RETRYABLE_STATUS_CODES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Returns true if `status` is in the fixed retryable set.
pub fn is_retryable_status(status: u16) -> bool {
	RETRYABLE_STATUS_CODES.contains(&status)
}

/// Classifies an error as retryable or terminal.
pub trait RetryableError {
	/// Returns true if the operation that produced this error may be retried.
	fn is_retryable(&self) -> bool;
}
