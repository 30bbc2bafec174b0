//! The navigation controller.
//!
//! [`Navigator`] serializes all navigation intents into a single well-ordered
//! pipeline: it updates the host history stack, activates exactly one page
//! module per intent, and arbitrates pop notifications so in-flight
//! activations are not corrupted. The pipeline is a two-state machine
//! ([`Phase`]); the `Transitioning` guard is the system's only mutual
//! exclusion, checked and set synchronously before any suspension point.

use std::sync::{Mutex, MutexGuard};

use crate::error::NavigationError;
use crate::history::{HistoryHandle, SaveMode};
use crate::hook::NavHook;
use crate::registry::PageRegistry;
use crate::state::{NavigationState, PageParams};
use crate::url::{sanitize_page_id, state_url};
use crate::{nav_debug, nav_error, nav_info, nav_warn};

#[cfg(target_arch = "wasm32")]
type SharedNav = std::rc::Rc<NavigatorInner>;
#[cfg(not(target_arch = "wasm32"))]
type SharedNav = std::sync::Arc<NavigatorInner>;

/// The activation pipeline's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// No activation in flight; navigation intents are accepted.
	#[default]
	Idle,
	/// A page activation is in flight; push/replace intents are dropped and
	/// pop notifications are compensated.
	Transitioning,
}

#[derive(Default)]
struct ControllerState {
	current: Option<NavigationState>,
	current_sequence: u64,
	phase: Phase,
	events_bound: bool,
	forward_hook: Option<NavHook>,
	back_hook: Option<NavHook>,
}

struct NavigatorInner {
	default_page: String,
	history: HistoryHandle,
	registry: PageRegistry,
	state: Mutex<ControllerState>,
}

/// The page navigation controller.
///
/// Cheaply cloneable; clones share one controller state, so however many call
/// sites hold a handle there is a single source of truth for the in-flight
/// guard and the hook registry.
///
/// # Example
///
/// ```ignore
/// use std::rc::Rc;
/// use pagenav::{BrowserHistory, Navigator, PageRegistry};
///
/// let registry = PageRegistry::new()
///     .page("main", |params| { /* mount main */ })
///     .page("detail", |params| { /* mount detail */ });
///
/// let nav = Navigator::new(Rc::new(BrowserHistory::new()), registry, "main").install();
/// wasm_bindgen_futures::spawn_local(async move {
///     if let Err(err) = nav.start().await {
///         pagenav::nav_error!("start failed: {err}");
///     }
/// });
/// ```
pub struct Navigator {
	inner: SharedNav,
}

impl Clone for Navigator {
	fn clone(&self) -> Self {
		Self {
			inner: SharedNav::clone(&self.inner),
		}
	}
}

impl std::fmt::Debug for Navigator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state();
		f.debug_struct("Navigator")
			.field("default_page", &self.inner.default_page)
			.field("phase", &state.phase)
			.field("current_sequence", &state.current_sequence)
			.finish()
	}
}

impl Navigator {
	/// Creates a controller over the given history backend and page registry.
	pub fn new(
		history: HistoryHandle,
		registry: PageRegistry,
		default_page: impl Into<String>,
	) -> Self {
		Self {
			inner: SharedNav::new(NavigatorInner {
				default_page: default_page.into(),
				history,
				registry,
				state: Mutex::new(ControllerState::default()),
			}),
		}
	}

	/// Cold-boot entry point, called once when the host is ready.
	///
	/// Parses the current URL's query string; if the history stack already
	/// carries a state (reload mid-session) it is reused verbatim, otherwise
	/// one is synthesized from the query parameters and the default page.
	/// Activates with save-mode Replace.
	///
	/// # Errors
	///
	/// Propagates activation failures; see [`Navigator::move_to`].
	pub async fn start(&self) -> Result<(), NavigationError> {
		let state = match self.inner.history.current_state() {
			Some(existing) => existing,
			None => {
				let params = crate::url::parse_query(&self.inner.history.location_query());
				NavigationState::from_query(params, &self.inner.default_page)
			}
		};

		self.activate(SaveMode::Replace, state).await
	}

	/// Like [`Navigator::start`], invoking an application ready callback
	/// before the first activation.
	pub async fn start_with_ready<F>(&self, ready: F) -> Result<(), NavigationError>
	where
		F: FnOnce(),
	{
		ready();
		self.start().await
	}

	/// Navigates forward to `page`, appending a new, reachable-by-back
	/// history entry (`sequence` advances by 1).
	///
	/// # Errors
	///
	/// Returns [`NavigationError::PageNotFound`] when the sanitized page
	/// identifier has no registry entry, or the loader's error when the page
	/// module fails to load. A call arriving while another activation is in
	/// flight is dropped and returns `Ok(())`.
	pub async fn move_to(
		&self,
		page: impl Into<String>,
		params: PageParams,
		display_in_url: bool,
	) -> Result<(), NavigationError> {
		let sequence = self.state().current_sequence + 1;
		let state = NavigationState::new(page, params, display_in_url, sequence);
		self.activate(SaveMode::Push, state).await
	}

	/// Navigates to `page` in place, overwriting the current history entry
	/// (`sequence` is unchanged, no new back-reachable entry).
	///
	/// # Errors
	///
	/// Same contract as [`Navigator::move_to`].
	pub async fn replace_with(
		&self,
		page: impl Into<String>,
		params: PageParams,
		display_in_url: bool,
	) -> Result<(), NavigationError> {
		let sequence = self.state().current_sequence;
		let state = NavigationState::new(page, params, display_in_url, sequence);
		self.activate(SaveMode::Replace, state).await
	}

	/// Reacts to a host-level "state changed by browser chrome" notification.
	///
	/// Compares the incoming sequence with the active one to recover the
	/// transition direction, then delegates to the forward or backward path.
	/// Equal sequences are a no-op (the host reported the state already
	/// occupied).
	pub async fn handle_state_change(&self, state: NavigationState) {
		let current = self.current_sequence();
		if state.sequence > current {
			self.on_forward_state(state).await;
		} else if state.sequence < current {
			self.on_backward_state(state).await;
		}
	}

	async fn on_forward_state(&self, state: NavigationState) {
		// A forward re-entry racing an in-flight activation is undone
		// immediately rather than activated.
		if self.phase() == Phase::Transitioning {
			self.inner.history.back();
			return;
		}

		let hook = self.state().forward_hook.clone();
		let allowed = match hook {
			None => true,
			Some(hook) => hook.call().await,
		};

		if allowed {
			// Failures are logged inside activate.
			let _ = self.activate(SaveMode::Replace, state).await;
		} else {
			self.inner.history.back();
		}
	}

	async fn on_backward_state(&self, state: NavigationState) {
		if self.phase() == Phase::Transitioning {
			self.inner.history.forward();
			return;
		}

		let hook = self.state().back_hook.clone();
		let allowed = match hook {
			None => true,
			Some(hook) => hook.call().await,
		};

		if allowed {
			let _ = self.activate(SaveMode::Replace, state).await;
		} else {
			self.inner.history.forward();
		}
	}

	/// The activation pipeline.
	///
	/// Idle -> Transitioning is guarded by the phase: a second intent while
	/// one is in flight is dropped. On failure the controller returns to Idle
	/// and propagates the error instead of staying stuck mid-transition.
	async fn activate(
		&self,
		mode: SaveMode,
		state: NavigationState,
	) -> Result<(), NavigationError> {
		{
			let mut guard = self.state();
			if guard.phase == Phase::Transitioning {
				nav_debug!(
					"navigation intent for `{}` dropped: a transition is in flight",
					state.page
				);
				return Ok(());
			}
			guard.phase = Phase::Transitioning;
			guard.current_sequence = state.sequence;
			guard.current = Some(state.clone());
		}

		let result = self.activate_inner(mode, &state).await;
		if let Err(ref err) = result {
			nav_error!("page activation failed for `{}`: {}", state.page, err);
			self.state().phase = Phase::Idle;
		}
		result
	}

	async fn activate_inner(
		&self,
		mode: SaveMode,
		state: &NavigationState,
	) -> Result<(), NavigationError> {
		let url = state_url(&self.inner.history.location_base(), state);
		match mode {
			SaveMode::Push => self.inner.history.push(state, &url)?,
			SaveMode::Replace => self.inner.history.replace(state, &url)?,
		}

		self.bind_state_events();

		let page_id = sanitize_page_id(&state.page);
		if page_id != state.page {
			nav_warn!("page id sanitized: `{}` -> `{}`", state.page, page_id);
		}

		let entry = self.inner.registry.load(&page_id)?.await?;

		{
			let mut guard = self.state();
			guard.phase = Phase::Idle;
			guard.forward_hook = None;
			guard.back_hook = None;
		}
		self.reset_scroll();

		nav_info!("page activated: {}", page_id);
		entry(state.public_params());
		Ok(())
	}

	/// Attaches the pop notification handler, exactly once for the
	/// controller's lifetime.
	fn bind_state_events(&self) {
		{
			let mut guard = self.state();
			if guard.events_bound {
				return;
			}
			guard.events_bound = true;
		}

		#[cfg(target_arch = "wasm32")]
		{
			use wasm_bindgen::JsCast;
			use wasm_bindgen::prelude::Closure;

			let Some(window) = web_sys::window() else {
				return;
			};

			let nav = self.clone();
			let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
				let Some(state) = crate::history::browser::state_from_js(&event.state()) else {
					return;
				};
				let nav = nav.clone();
				wasm_bindgen_futures::spawn_local(async move {
					nav.handle_state_change(state).await;
				});
			}) as Box<dyn FnMut(web_sys::PopStateEvent)>);

			window.set_onpopstate(Some(closure.as_ref().unchecked_ref()));
			closure.forget();
		}
	}

	#[cfg(target_arch = "wasm32")]
	fn reset_scroll(&self) {
		if let Some(window) = web_sys::window() {
			let options = web_sys::ScrollToOptions::new();
			options.set_top(0.0);
			options.set_left(0.0);
			options.set_behavior(web_sys::ScrollBehavior::Smooth);
			window.scroll_with_scroll_to_options(&options);
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	fn reset_scroll(&self) {}

	/// Registers the back hook, overwriting any previous one.
	pub fn add_back_listener(&self, hook: NavHook) {
		self.state().back_hook = Some(hook);
	}

	/// Returns the currently registered back hook.
	pub fn get_back_listener(&self) -> Option<NavHook> {
		self.state().back_hook.clone()
	}

	/// Clears the back hook.
	pub fn remove_back_listener(&self) {
		self.state().back_hook = None;
	}

	/// Registers the forward hook, overwriting any previous one.
	pub fn add_forward_listener(&self, hook: NavHook) {
		self.state().forward_hook = Some(hook);
	}

	/// Returns the currently registered forward hook.
	pub fn get_forward_listener(&self) -> Option<NavHook> {
		self.state().forward_hook.clone()
	}

	/// Clears the forward hook.
	pub fn remove_forward_listener(&self) {
		self.state().forward_hook = None;
	}

	/// Returns the activation pipeline's current phase.
	pub fn phase(&self) -> Phase {
		self.state().phase
	}

	/// Returns the sequence of the active page.
	pub fn current_sequence(&self) -> u64 {
		self.state().current_sequence
	}

	/// Returns the last-activated navigation state.
	pub fn current_state(&self) -> Option<NavigationState> {
		self.state().current.clone()
	}

	/// Returns whether two handles share the same controller.
	pub fn same_instance(&self, other: &Navigator) -> bool {
		SharedNav::ptr_eq(&self.inner, &other.inner)
	}

	fn state(&self) -> MutexGuard<'_, ControllerState> {
		self.inner
			.state
			.lock()
			.expect("controller state lock poisoned")
	}
}

#[cfg(not(target_arch = "wasm32"))]
static INSTALLED: std::sync::OnceLock<Navigator> = std::sync::OnceLock::new();

#[cfg(target_arch = "wasm32")]
thread_local! {
	static INSTALLED: std::cell::OnceCell<Navigator> = const { std::cell::OnceCell::new() };
}

impl Navigator {
	/// Installs this controller as the process-wide instance.
	///
	/// Idempotent: once an instance is installed, later installs return the
	/// existing instance unchanged, preserving a single source of truth for
	/// the in-flight guard and the hook registry.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn install(self) -> Navigator {
		INSTALLED.get_or_init(|| self).clone()
	}

	/// Returns the installed process-wide instance, if any.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn installed() -> Option<Navigator> {
		INSTALLED.get().cloned()
	}

	/// Installs this controller as the process-wide instance.
	///
	/// Idempotent: once an instance is installed, later installs return the
	/// existing instance unchanged, preserving a single source of truth for
	/// the in-flight guard and the hook registry.
	#[cfg(target_arch = "wasm32")]
	pub fn install(self) -> Navigator {
		INSTALLED.with(|cell| cell.get_or_init(|| self).clone())
	}

	/// Returns the installed process-wide instance, if any.
	#[cfg(target_arch = "wasm32")]
	pub fn installed() -> Option<Navigator> {
		INSTALLED.with(|cell| cell.get().cloned())
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crate::history::memory::MemoryHistory;

	use super::*;

	fn navigator() -> Navigator {
		let history = Arc::new(MemoryHistory::new());
		Navigator::new(history, PageRegistry::new().page("main", |_| {}), "main")
	}

	#[test]
	fn test_new_controller_is_idle() {
		let nav = navigator();

		assert_eq!(nav.phase(), Phase::Idle);
		assert_eq!(nav.current_sequence(), 0);
		assert!(nav.current_state().is_none());
	}

	#[test]
	fn test_back_listener_registry_round_trip() {
		let nav = navigator();
		let hook = NavHook::new(|| async { true });

		nav.add_back_listener(hook.clone());
		let stored = nav.get_back_listener().expect("hook registered");
		assert!(stored.ptr_eq(&hook));

		nav.remove_back_listener();
		assert!(nav.get_back_listener().is_none());
	}

	#[test]
	fn test_forward_listener_overwrites_previous() {
		let nav = navigator();
		let first = NavHook::new(|| async { true });
		let second = NavHook::new(|| async { false });

		nav.add_forward_listener(first.clone());
		nav.add_forward_listener(second.clone());

		let stored = nav.get_forward_listener().expect("hook registered");
		assert!(stored.ptr_eq(&second));
		assert!(!stored.ptr_eq(&first));
	}

	#[test]
	fn test_clones_share_state() {
		let nav = navigator();
		let clone = nav.clone();

		nav.add_back_listener(NavHook::new(|| async { true }));
		assert!(clone.get_back_listener().is_some());
		assert!(nav.same_instance(&clone));
	}
}
