// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Coho SDK.
//!
//! This crate provides:
//! - A pre-configured HTTP client with a consistent User-Agent header
//! - The fixed retryable status-code set and retry classification trait

mod client;
mod retry;

pub use client::{builder, new_client, user_agent};
pub use retry::{is_retryable_status, RetryableError, RETRYABLE_STATUS_CODES};
