//! In-memory history backend.
//!
//! A real entry stack with push/replace semantics, plus call counters for
//! `back()` and `forward()` so compensation and veto behavior is assertable.
//! Unlike a browser, moving through the stack does not emit pop
//! notifications; tests drive `Navigator::handle_state_change` directly.

use std::sync::{Mutex, MutexGuard};

use crate::error::NavigationError;
use crate::history::HistoryBackend;
use crate::state::NavigationState;

#[derive(Debug, Default)]
struct MemoryHistoryInner {
	entries: Vec<(NavigationState, String)>,
	index: usize,
	back_calls: usize,
	forward_calls: usize,
}

/// History backend backed by an in-process entry stack.
#[derive(Debug)]
pub struct MemoryHistory {
	base: String,
	query: String,
	inner: Mutex<MemoryHistoryInner>,
}

impl MemoryHistory {
	/// Creates a backend with a placeholder location base.
	pub fn new() -> Self {
		Self::with_base("https://app.invalid/www")
	}

	/// Creates a backend reporting `base` as `{protocol}//{host}{pathname}`.
	pub fn with_base(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			query: String::new(),
			inner: Mutex::new(MemoryHistoryInner::default()),
		}
	}

	/// Sets the query string reported on cold start (include the leading `?`).
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self
	}

	/// Returns the number of entries in the stack.
	pub fn len(&self) -> usize {
		self.lock().entries.len()
	}

	/// Returns whether the stack is empty.
	pub fn is_empty(&self) -> bool {
		self.lock().entries.is_empty()
	}

	/// Returns the number of `back()` calls issued so far.
	pub fn back_count(&self) -> usize {
		self.lock().back_calls
	}

	/// Returns the number of `forward()` calls issued so far.
	pub fn forward_count(&self) -> usize {
		self.lock().forward_calls
	}

	/// Returns the URL of the current entry.
	pub fn current_url(&self) -> Option<String> {
		let inner = self.lock();
		inner.entries.get(inner.index).map(|(_, url)| url.clone())
	}

	/// Returns the state stored at stack position `index`.
	pub fn state_at(&self, index: usize) -> Option<NavigationState> {
		self.lock()
			.entries
			.get(index)
			.map(|(state, _)| state.clone())
	}

	fn lock(&self) -> MutexGuard<'_, MemoryHistoryInner> {
		self.inner.lock().expect("memory history lock poisoned")
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl HistoryBackend for MemoryHistory {
	fn push(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError> {
		let mut inner = self.lock();
		let keep = if inner.entries.is_empty() {
			0
		} else {
			inner.index + 1
		};
		inner.entries.truncate(keep);
		inner.entries.push((state.clone(), url.to_string()));
		inner.index = inner.entries.len() - 1;
		Ok(())
	}

	fn replace(&self, state: &NavigationState, url: &str) -> Result<(), NavigationError> {
		let mut inner = self.lock();
		if inner.entries.is_empty() {
			inner.entries.push((state.clone(), url.to_string()));
			inner.index = 0;
		} else {
			let index = inner.index;
			inner.entries[index] = (state.clone(), url.to_string());
		}
		Ok(())
	}

	fn back(&self) {
		let mut inner = self.lock();
		inner.back_calls += 1;
		if inner.index > 0 {
			inner.index -= 1;
		}
	}

	fn forward(&self) {
		let mut inner = self.lock();
		inner.forward_calls += 1;
		if inner.index + 1 < inner.entries.len() {
			inner.index += 1;
		}
	}

	fn current_state(&self) -> Option<NavigationState> {
		let inner = self.lock();
		inner
			.entries
			.get(inner.index)
			.map(|(state, _)| state.clone())
	}

	fn location_base(&self) -> String {
		self.base.clone()
	}

	fn location_query(&self) -> String {
		self.query.clone()
	}
}
