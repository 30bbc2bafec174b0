//! Host history stack collaborator.
//!
//! The controller talks to the history stack through [`HistoryBackend`]:
//! push/replace with an associated state blob and URL, compensating
//! back/forward calls, and read access to the current state and location.
//! [`memory::MemoryHistory`] backs native tests; [`browser::BrowserHistory`]
//! wraps the real History API on wasm32.

use crate::error::NavigationError;
use crate::state::NavigationState;

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod browser;

/// How a navigation state is committed to the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
	/// Append a new, reachable-by-back entry.
	Push,
	/// Overwrite the top entry in place.
	Replace,
}

/// Operations the controller requires from the host history stack.
///
/// State is round-tripped through the backend unchanged; the URL is the
/// visible address committed together with the state, atomically as the host
/// API provides.
#[cfg(not(target_arch = "wasm32"))]
pub trait HistoryBackend: Send + Sync {
	/// Appends a new history entry carrying `state` and `url`.
	fn push(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError>;

	/// Overwrites the current history entry with `state` and `url`.
	fn replace(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError>;

	/// Issues a native "go back" (used to compensate vetoed or racing
	/// forward navigations).
	fn back(&self);

	/// Issues a native "go forward" (the symmetric compensation).
	fn forward(&self);

	/// Returns the state attached to the current history entry, if any.
	fn current_state(&self) -> Option<NavigationState>;

	/// Returns `{protocol}//{host}{pathname}` for target-URL construction.
	fn location_base(&self) -> String;

	/// Returns the current query string (leading `?` included, or empty).
	fn location_query(&self) -> String;
}

/// Operations the controller requires from the host history stack
/// (WASM version, without the `Send + Sync` bounds).
#[cfg(target_arch = "wasm32")]
pub trait HistoryBackend {
	/// Appends a new history entry carrying `state` and `url`.
	fn push(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError>;

	/// Overwrites the current history entry with `state` and `url`.
	fn replace(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError>;

	/// Issues a native "go back".
	fn back(&self);

	/// Issues a native "go forward".
	fn forward(&self);

	/// Returns the state attached to the current history entry, if any.
	fn current_state(&self) -> Option<NavigationState>;

	/// Returns `{protocol}//{host}{pathname}` for target-URL construction.
	fn location_base(&self) -> String;

	/// Returns the current query string (leading `?` included, or empty).
	fn location_query(&self) -> String;
}

/// Shared handle to a history backend.
#[cfg(target_arch = "wasm32")]
pub type HistoryHandle = std::rc::Rc<dyn HistoryBackend>;

/// Shared handle to a history backend (non-WASM version).
#[cfg(not(target_arch = "wasm32"))]
pub type HistoryHandle = std::sync::Arc<dyn HistoryBackend>;
