// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Coho event-telemetry SDK.
//!
//! This crate holds everything the SDK client needs that does not touch the
//! network: client options and region resolution, wire constants, the
//! property bag, device/locale context collection, and event payload
//! construction.

pub mod context;
pub mod endpoint;
pub mod event;
pub mod options;
pub mod properties;

pub use context::DeviceContext;
pub use event::{build_event, EventEnvelope};
pub use options::{CohoOptions, Region};
pub use properties::Properties;
