//! Navigation state stored in the host history stack.
//!
//! Each history entry carries one [`NavigationState`]: a fixed record of
//! reserved fields (`page`, `displayInURL`, `sequence`) plus an open-ended
//! string-to-string parameter map. The whole structure serializes to a single
//! flat object so it round-trips through `history.state` unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved state key naming the page module to activate.
pub const PAGE_KEY: &str = "page";
/// Reserved state key controlling whether params are echoed into the URL.
pub const DISPLAY_IN_URL_KEY: &str = "displayInURL";
/// Reserved state key carrying the logical navigation depth.
pub const SEQUENCE_KEY: &str = "sequence";

/// The three reserved keys, never visible to page entry points.
pub const RESERVED_KEYS: [&str; 3] = [PAGE_KEY, DISPLAY_IN_URL_KEY, SEQUENCE_KEY];

/// Application-supplied navigation parameters.
///
/// A `BTreeMap` so URL construction follows a deterministic iteration order.
pub type PageParams = BTreeMap<String, String>;

/// One history entry's worth of navigation state.
///
/// Invariant: `sequence` increases by exactly 1 per forward push and is
/// unchanged by a replace. Comparing two states' sequences tells the
/// controller whether a host-reported transition was a logical forward or
/// backward step, even though the host only reports the new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
	/// Identifier of the page module to activate.
	pub page: String,
	/// Whether non-reserved params are echoed into the visible URL.
	#[serde(rename = "displayInURL")]
	pub display_in_url: bool,
	/// Monotonic logical depth counter.
	pub sequence: u64,
	/// Open-ended application parameters, disjoint from the reserved keys.
	#[serde(flatten)]
	pub params: PageParams,
}

impl NavigationState {
	/// Creates a navigation state, enforcing the reserved-key disjointness
	/// invariant by dropping any reserved keys from `params`.
	pub fn new(
		page: impl Into<String>,
		mut params: PageParams,
		display_in_url: bool,
		sequence: u64,
	) -> Self {
		for key in RESERVED_KEYS {
			params.remove(key);
		}

		Self {
			page: page.into(),
			display_in_url,
			sequence,
			params,
		}
	}

	/// Synthesizes the cold-start state from parsed URL query parameters.
	///
	/// A `page` query parameter overrides `default_page`; everything else
	/// becomes an application parameter. The synthesized state always starts
	/// at sequence 0 with URL display enabled.
	pub fn from_query(mut params: PageParams, default_page: &str) -> Self {
		let page = params
			.remove(PAGE_KEY)
			.unwrap_or_else(|| default_page.to_string());

		Self::new(page, params, true, 0)
	}

	/// Projects the parameters handed to a page entry point.
	///
	/// Strips the reserved keys; the constructor already enforces
	/// disjointness, so this is a defensive projection over states that
	/// arrived from the host as an opaque blob.
	pub fn public_params(&self) -> PageParams {
		let mut params = self.params.clone();
		for key in RESERVED_KEYS {
			params.remove(key);
		}
		params
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(pairs: &[(&str, &str)]) -> PageParams {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_new_strips_reserved_keys() {
		let state = NavigationState::new(
			"detail",
			params(&[("foo", "bar"), ("page", "evil"), ("sequence", "99")]),
			true,
			3,
		);

		assert_eq!(state.page, "detail");
		assert_eq!(state.sequence, 3);
		assert_eq!(state.params, params(&[("foo", "bar")]));
	}

	#[test]
	fn test_from_query_uses_default_page() {
		let state = NavigationState::from_query(params(&[("foo", "bar")]), "main");

		assert_eq!(state.page, "main");
		assert!(state.display_in_url);
		assert_eq!(state.sequence, 0);
		assert_eq!(state.params, params(&[("foo", "bar")]));
	}

	#[test]
	fn test_from_query_page_param_overrides_default() {
		let state = NavigationState::from_query(params(&[("page", "detail")]), "main");

		assert_eq!(state.page, "detail");
		assert!(state.params.is_empty());
	}

	#[test]
	fn test_public_params_projection() {
		let mut state = NavigationState::new("detail", params(&[("foo", "bar")]), true, 1);
		// Simulate a blob from the host carrying a stray reserved key.
		state
			.params
			.insert("displayInURL".to_string(), "true".to_string());

		let public = state.public_params();
		assert_eq!(public, params(&[("foo", "bar")]));
	}

	#[test]
	fn test_serializes_to_flat_blob() {
		let state = NavigationState::new("detail", params(&[("foo", "bar baz")]), true, 2);

		let value = serde_json::to_value(&state).unwrap();
		assert_eq!(
			value,
			serde_json::json!({
				"page": "detail",
				"displayInURL": true,
				"sequence": 2,
				"foo": "bar baz",
			})
		);
	}

	#[test]
	fn test_deserializes_from_flat_blob() {
		let json = r#"{"page":"main","displayInURL":false,"sequence":5,"id":"42"}"#;
		let state: NavigationState = serde_json::from_str(json).unwrap();

		assert_eq!(state.page, "main");
		assert!(!state.display_in_url);
		assert_eq!(state.sequence, 5);
		assert_eq!(state.params, params(&[("id", "42")]));
	}
}
