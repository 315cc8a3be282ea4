// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort device and locale context.
//!
//! Collection is cheap but not free (locale and timezone lookups, platform
//! probes), so the result is cached for the process lifetime. Every field
//! falls back to `"Unknown"` rather than failing; context collection must
//! never prevent an event from being sent.

use std::sync::OnceLock;

static DEVICE_CONTEXT: OnceLock<DeviceContext> = OnceLock::new();

const UNKNOWN: &str = "Unknown";

#[cfg(any(target_os = "macos", target_os = "ios"))]
const MANUFACTURER: &str = "Apple";
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
const MANUFACTURER: &str = UNKNOWN;

/// Device and locale fields attached to every event.
#[derive(Debug, Clone)]
pub struct DeviceContext {
	/// IANA time zone identifier, e.g. `Europe/Amsterdam`.
	pub time_zone: String,
	/// ISO country code from the system locale.
	pub country: String,
	/// ISO language code from the system locale.
	pub language: String,
	/// Operating system name, e.g. `linux`, `macos`.
	pub os: String,
	/// Operating system version string.
	pub os_version: String,
	/// Hardware model name.
	pub device: String,
	/// Device manufacturer; a compile-time constant per platform.
	pub manufacturer: String,
	/// Binary form-factor classification: `Tablet` or `Mobile`.
	pub device_type: String,
}

impl DeviceContext {
	/// Returns the process-wide context, collecting it on first use.
	pub fn get() -> &'static DeviceContext {
		DEVICE_CONTEXT.get_or_init(DeviceContext::collect)
	}

	/// Collects context from the current environment.
	pub fn collect() -> Self {
		let (language, country) = split_locale(sys_locale::get_locale());

		Self {
			time_zone: iana_time_zone::get_timezone().unwrap_or_else(|_| UNKNOWN.to_string()),
			country,
			language,
			os: std::env::consts::OS.to_string(),
			os_version: detect_os_version().unwrap_or_else(|| UNKNOWN.to_string()),
			device: detect_device_model().unwrap_or_else(|| std::env::consts::ARCH.to_string()),
			manufacturer: MANUFACTURER.to_string(),
			device_type: classify_form_factor().to_string(),
		}
	}
}

/// Splits a BCP 47 locale tag like `en-US` or `nl_NL` into
/// `(language, country)`, with `"Unknown"` for anything missing.
fn split_locale(raw: Option<String>) -> (String, String) {
	let Some(raw) = raw else {
		return (UNKNOWN.to_string(), UNKNOWN.to_string());
	};

	let mut parts = raw.split(['-', '_']);
	let language = match parts.next() {
		Some(lang) if !lang.is_empty() => lang.to_lowercase(),
		_ => UNKNOWN.to_string(),
	};
	// The region subtag is two letters; script subtags like "Latn" are not it.
	let country = parts
		.find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
		.map(|part| part.to_uppercase())
		.unwrap_or_else(|| UNKNOWN.to_string());

	(language, country)
}

#[cfg(target_os = "linux")]
fn detect_os_version() -> Option<String> {
	std::fs::read_to_string("/proc/sys/kernel/osrelease")
		.ok()
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
}

#[cfg(target_os = "macos")]
fn detect_os_version() -> Option<String> {
	let output = std::process::Command::new("sw_vers")
		.arg("-productVersion")
		.output()
		.ok()?;
	let version = String::from_utf8(output.stdout).ok()?.trim().to_string();
	(!version.is_empty()).then_some(version)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn detect_os_version() -> Option<String> {
	None
}

#[cfg(target_os = "linux")]
fn detect_device_model() -> Option<String> {
	std::fs::read_to_string("/sys/devices/virtual/dmi/id/product_name")
		.ok()
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
}

#[cfg(target_os = "macos")]
fn detect_device_model() -> Option<String> {
	let output = std::process::Command::new("sysctl")
		.args(["-n", "hw.model"])
		.output()
		.ok()?;
	let model = String::from_utf8(output.stdout).ok()?.trim().to_string();
	(!model.is_empty()).then_some(model)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn detect_device_model() -> Option<String> {
	None
}

/// Classifies the device form factor. SMBIOS chassis type 30 is a tablet;
/// everything else, and every platform without a chassis probe, reports
/// `Mobile`.
fn classify_form_factor() -> &'static str {
	#[cfg(target_os = "linux")]
	{
		if let Ok(chassis) = std::fs::read_to_string("/sys/class/dmi/id/chassis_type") {
			if chassis.trim() == "30" {
				return "Tablet";
			}
		}
	}
	"Mobile"
}
