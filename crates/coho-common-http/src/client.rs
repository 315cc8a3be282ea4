// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the standard Coho User-Agent header.
///
/// No request timeout is applied; delivery deadlines are governed by the
/// caller's retry policy alone.
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Creates a new HTTP client builder with the standard Coho User-Agent header.
///
/// Use this when you need to customize the client further.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Coho User-Agent string.
///
/// Format: `coho-sdk/{version}/{os}-{arch}`
/// Example: `coho-sdk/0.1.0/linux-x86_64`
pub fn user_agent() -> String {
	format!(
		"coho-sdk/{}/{}-{}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
