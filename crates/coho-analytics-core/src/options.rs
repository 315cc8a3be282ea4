// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client options and region resolution.

use std::time::Duration;

use crate::endpoint;

/// Ingestion region. The set is closed; each region maps to exactly one
/// fixed endpoint, resolved once at client construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
	Us,
	Eu,
}

impl Region {
	/// Returns the fixed ingestion endpoint for this region.
	pub fn endpoint(&self) -> &'static str {
		match self {
			Region::Us => endpoint::US_ENDPOINT,
			Region::Eu => endpoint::EU_ENDPOINT,
		}
	}
}

/// Immutable configuration for a [`CohoClient`](../coho-analytics).
///
/// Resolved once at construction and never changed afterwards. The tenant
/// id is opaque: it is forwarded verbatim as a header value with no
/// validation.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use coho_analytics_core::{CohoOptions, Region};
///
/// let options = CohoOptions::new("my-tenant", Region::Us)
///     .with_retries(3)
///     .with_retry_delay(Duration::from_secs(1))
///     .with_logging(true);
/// ```
#[derive(Debug, Clone)]
pub struct CohoOptions {
	/// Opaque tenant identifier, sent as the tenant header value.
	pub tenant_id: String,
	/// Ingestion region; selects one of two fixed endpoints.
	pub region: Region,
	/// Maximum number of retries after the initial attempt. With
	/// `retries = R`, up to `R + 1` network calls are made per send.
	pub retries: u32,
	/// Flat delay between attempts. Not exponential, not jittered.
	pub retry_delay: Duration,
	/// Gates all diagnostic logging from the client.
	pub enable_logging: bool,
}

impl CohoOptions {
	/// Creates options with the defaults: no retries, a 100 second retry
	/// delay, and logging disabled.
	pub fn new(tenant_id: impl Into<String>, region: Region) -> Self {
		Self {
			tenant_id: tenant_id.into(),
			region,
			retries: 0,
			retry_delay: Duration::from_secs(100),
			enable_logging: false,
		}
	}

	/// Sets the maximum retry count.
	pub fn with_retries(mut self, retries: u32) -> Self {
		self.retries = retries;
		self
	}

	/// Sets the flat delay applied between attempts.
	pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
		self.retry_delay = retry_delay;
		self
	}

	/// Enables or disables diagnostic logging.
	pub fn with_logging(mut self, enable_logging: bool) -> Self {
		self.enable_logging = enable_logging;
		self
	}
}
