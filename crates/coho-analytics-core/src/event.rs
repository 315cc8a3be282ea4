// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event payload construction.
//!
//! The wire payload wraps exactly one event in an `events` array. Built-in
//! fields use the camelCase keys the ingestion API expects; caller-supplied
//! properties are merged last and win every key collision.

use chrono::{Local, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::DeviceContext;
use crate::properties::Properties;

/// The wire payload: a singleton batch of one event.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
	pub events: Vec<Map<String, Value>>,
}

impl EventEnvelope {
	/// Wraps a single event in the envelope.
	pub fn single(event: Map<String, Value>) -> Self {
		Self {
			events: vec![event],
		}
	}
}

/// Builds the event record for one send.
///
/// Timestamps are taken at call time: `clientTimestamp` in UTC,
/// `localClientTime` with the local offset, both ISO-8601. Properties in
/// `additional` override built-in fields of the same name, including
/// `eventName` and `userId`.
pub fn build_event(
	event_name: &str,
	user_id: &str,
	context: &DeviceContext,
	additional: Properties,
) -> Map<String, Value> {
	let mut event = Map::new();
	event.insert("eventName".into(), event_name.into());
	event.insert("userId".into(), user_id.into());
	event.insert(
		"clientTimestamp".into(),
		Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true).into(),
	);
	event.insert(
		"localClientTime".into(),
		Local::now()
			.to_rfc3339_opts(SecondsFormat::Secs, false)
			.into(),
	);
	event.insert("timeZone".into(), context.time_zone.as_str().into());
	event.insert("country".into(), context.country.as_str().into());
	event.insert("language".into(), context.language.as_str().into());
	event.insert("os".into(), context.os.as_str().into());
	event.insert("osVersion".into(), context.os_version.as_str().into());
	event.insert("device".into(), context.device.as_str().into());
	event.insert("manufacturer".into(), context.manufacturer.as_str().into());
	event.insert("deviceType".into(), context.device_type.as_str().into());

	for (key, value) in additional.into_map() {
		event.insert(key, value);
	}

	event
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn test_context() -> DeviceContext {
		DeviceContext {
			time_zone: "Europe/Amsterdam".into(),
			country: "NL".into(),
			language: "nl".into(),
			os: "linux".into(),
			os_version: "6.1.0".into(),
			device: "x86_64".into(),
			manufacturer: "Unknown".into(),
			device_type: "Mobile".into(),
		}
	}

	#[test]
	fn event_carries_all_builtin_fields() {
		let event = build_event("signup", "user-1", &test_context(), Properties::new());

		for key in [
			"eventName",
			"userId",
			"clientTimestamp",
			"localClientTime",
			"timeZone",
			"country",
			"language",
			"os",
			"osVersion",
			"device",
			"manufacturer",
			"deviceType",
		] {
			assert!(event.contains_key(key), "missing field {key}");
		}
		assert_eq!(event["eventName"], "signup");
		assert_eq!(event["userId"], "user-1");
		assert_eq!(event["timeZone"], "Europe/Amsterdam");
	}

	#[test]
	fn client_timestamp_is_utc_iso8601() {
		let event = build_event("e", "u", &test_context(), Properties::new());
		let ts = event["clientTimestamp"].as_str().unwrap();
		assert!(ts.ends_with('Z'), "expected UTC designator: {ts}");
		assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
	}

	#[test]
	fn local_client_time_carries_offset() {
		let event = build_event("e", "u", &test_context(), Properties::new());
		let ts = event["localClientTime"].as_str().unwrap();
		assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
	}

	#[test]
	fn additional_properties_override_builtins() {
		let props = Properties::new()
			.insert("eventName", "spoofed")
			.insert("userId", "someone-else")
			.insert("custom", 7);
		let event = build_event("real", "user-1", &test_context(), props);

		assert_eq!(event["eventName"], "spoofed");
		assert_eq!(event["userId"], "someone-else");
		assert_eq!(event["custom"], 7);
	}

	#[test]
	fn envelope_wraps_exactly_one_event() {
		let event = build_event("e", "u", &test_context(), Properties::new());
		let envelope = EventEnvelope::single(event);
		assert_eq!(envelope.events.len(), 1);

		let json = serde_json::to_value(&envelope).unwrap();
		assert!(json["events"].is_array());
		assert_eq!(json["events"].as_array().unwrap().len(), 1);
	}

	proptest! {
		#[test]
		fn caller_properties_always_win(
			key_suffix in "[a-z]{1,8}",
			value in "[a-zA-Z0-9 ]{0,32}",
		) {
			// Collide with a built-in and with a fresh key; both must
			// carry the caller's value.
			let key = format!("os{key_suffix}");
			let props = Properties::new()
				.insert("os", value.clone())
				.insert(key.clone(), value.clone());
			let event = build_event("e", "u", &test_context(), props);

			prop_assert_eq!(event["os"].as_str(), Some(value.as_str()));
			prop_assert_eq!(event[&key].as_str(), Some(value.as_str()));
		}

		#[test]
		fn event_name_and_user_are_verbatim(
			name in "[\\PC]{0,40}",
			user in "[a-zA-Z0-9@._-]{1,40}",
		) {
			let event = build_event(&name, &user, &test_context(), Properties::new());
			prop_assert_eq!(event["eventName"].as_str(), Some(name.as_str()));
			prop_assert_eq!(event["userId"].as_str(), Some(user.as_str()));
		}
	}
}
