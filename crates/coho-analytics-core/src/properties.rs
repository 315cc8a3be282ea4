// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Caller-supplied event properties.

use serde_json::{Map, Value};

/// A string-keyed bag of additional event properties.
///
/// Values can be anything `serde_json::Value` can represent. When an event
/// is built, these properties are merged last and override any built-in
/// field with the same key.
///
/// # Example
///
/// ```
/// use coho_analytics_core::Properties;
///
/// let props = Properties::new()
///     .insert("button", "checkout")
///     .insert("price", 99.99)
///     .insert("first_purchase", true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	/// Creates an empty property bag.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair, replacing any existing value for the key.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Returns the value for `key`, if present.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Returns true if no properties have been set.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Consumes the bag, yielding the underlying JSON object map.
	pub fn into_map(self) -> Map<String, Value> {
		self.inner
	}
}

impl From<Map<String, Value>> for Properties {
	fn from(inner: Map<String, Value>) -> Self {
		Self { inner }
	}
}

impl From<Properties> for Value {
	fn from(props: Properties) -> Self {
		Value::Object(props.inner)
	}
}

impl FromIterator<(String, Value)> for Properties {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().collect(),
		}
	}
}
