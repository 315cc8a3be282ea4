// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire constants for the Coho ingestion API.
//!
//! The endpoint set is closed: two fixed URLs, one per region, pointing at
//! the custom-event ingestion route. Header names and static values are
//! defined here so the client and tests agree on the exact wire shape.

/// US-region ingestion endpoint.
pub const US_ENDPOINT: &str = "https://app.us.coho.ai/api/raw-data/custom";

/// EU-region ingestion endpoint.
pub const EU_ENDPOINT: &str = "https://app.coho.ai/api/raw-data/custom";

/// HTTP header names and static values sent on every ingestion request.
pub mod headers {
	/// Tenant identifier header; value is the configured tenant id, verbatim.
	pub const TENANT_ID: &str = "X-Coho-TenantId";

	/// Static user-id-key marker header. The value is always the literal
	/// [`USER_ID_KEY_VALUE`], never the actual user id.
	pub const USER_ID_KEY: &str = "X-Coho-UserId-Key";

	/// Constant value of the [`USER_ID_KEY`] header.
	pub const USER_ID_KEY_VALUE: &str = "userId";

	/// Marks the request as SDK-originated traffic.
	pub const DATA_SOURCE_CONTEXT: &str = "X-Coho-Data-Source-Context";

	/// Constant value of the [`DATA_SOURCE_CONTEXT`] header.
	pub const DATA_SOURCE_CONTEXT_VALUE: &str = "sdk";
}
