// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust SDK client for Coho product analytics.
//!
//! Builds one user action into a structured JSON event, attaches device and
//! session context, and delivers it over HTTPS with bounded flat-delay
//! retry on transient failures.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use coho_analytics::{CohoClient, CohoOptions, Properties, Region};
//!
//! # async fn example() -> coho_analytics::Result<()> {
//! let client = CohoClient::new(
//!     CohoOptions::new("my-tenant", Region::Us)
//!         .with_retries(3)
//!         .with_retry_delay(Duration::from_secs(1)),
//! );
//!
//! client.set_user_id("user-42");
//! client
//!     .send_event("checkout_completed", Properties::new().insert("total", 99.99))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod transport;

pub use client::CohoClient;
pub use error::{CohoError, Result};
pub use transport::{ReqwestTransport, Transport, TransportError};

pub use coho_analytics_core::{CohoOptions, Properties, Region};
