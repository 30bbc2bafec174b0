//! Error types for navigation operations.

use thiserror::Error;

/// Error type for navigation operations.
///
/// All failures are contained to the navigation attempt that produced them;
/// none are fatal to the host page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// No page module is registered under the (sanitized) identifier.
	#[error("page not found: {0}")]
	PageNotFound(String),
	/// The registered loader for a page module failed to resolve.
	#[error("page load failed for `{page}`: {reason}")]
	LoadFailed {
		/// The sanitized page identifier whose loader failed.
		page: String,
		/// Loader-supplied failure description.
		reason: String,
	},
	/// An external bootstrap script could not be loaded.
	#[error("script load failed: {0}")]
	ScriptLoad(String),
	/// The host history backend rejected an operation.
	#[error("history backend error: {0}")]
	History(String),
	/// A history state blob could not be serialized or deserialized.
	#[error("invalid navigation state: {0}")]
	InvalidState(String),
}
