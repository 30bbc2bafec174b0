//! Browser history backend (wasm32 only).
//!
//! Wraps the History API. States round-trip through `serde_json` +
//! `js_sys::JSON` so the blob stored in `history.state` is a plain JS object.

use wasm_bindgen::JsValue;

use crate::error::NavigationError;
use crate::history::HistoryBackend;
use crate::state::NavigationState;

/// History backend over `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
	/// Creates the backend.
	pub fn new() -> Self {
		Self
	}
}

/// Serializes a navigation state into a plain JS object.
pub fn state_to_js(state: &NavigationState) -> Result<JsValue, NavigationError> {
	let json = serde_json::to_string(state)
		.map_err(|err| NavigationError::InvalidState(err.to_string()))?;
	js_sys::JSON::parse(&json)
		.map_err(|_| NavigationError::InvalidState("state is not valid JSON".to_string()))
}

/// Deserializes a `history.state` value, if it carries a navigation state.
///
/// `null`/`undefined` (first load, or a state written by someone else) maps
/// to `None`, as does any blob that does not match the state shape.
pub fn state_from_js(value: &JsValue) -> Option<NavigationState> {
	if value.is_null() || value.is_undefined() {
		return None;
	}
	let json: String = js_sys::JSON::stringify(value).ok()?.into();
	serde_json::from_str(&json).ok()
}

fn browser_history() -> Result<web_sys::History, NavigationError> {
	web_sys::window()
		.ok_or_else(|| NavigationError::History("no window object".to_string()))?
		.history()
		.map_err(|_| NavigationError::History("history API unavailable".to_string()))
}

impl HistoryBackend for BrowserHistory {
	fn push(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError> {
		let value = state_to_js(state)?;
		browser_history()?
			.push_state_with_url(&value, "", Some(url))
			.map_err(|err| NavigationError::History(format!("pushState failed: {err:?}")))
	}

	fn replace(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError> {
		let value = state_to_js(state)?;
		browser_history()?
			.replace_state_with_url(&value, "", Some(url))
			.map_err(|err| NavigationError::History(format!("replaceState failed: {err:?}")))
	}

	fn back(&self) {
		if let Ok(history) = browser_history() {
			let _ = history.back();
		}
	}

	fn forward(&self) {
		if let Ok(history) = browser_history() {
			let _ = history.forward();
		}
	}

	fn current_state(&self) -> Option<NavigationState> {
		let value = browser_history().ok()?.state().ok()?;
		state_from_js(&value)
	}

	fn location_base(&self) -> String {
		let Some(window) = web_sys::window() else {
			return String::new();
		};
		let location = window.location();
		format!(
			"{}//{}{}",
			location.protocol().unwrap_or_default(),
			location.host().unwrap_or_default(),
			location.pathname().unwrap_or_default()
		)
	}

	fn location_query(&self) -> String {
		web_sys::window()
			.map(|window| window.location().search().unwrap_or_default())
			.unwrap_or_default()
	}
}
