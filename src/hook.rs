//! Back/forward navigation hooks.
//!
//! A [`NavHook`] is an async predicate consulted before a native back or
//! forward navigation is honored: resolving `true` permits it, `false` vetoes
//! it. A fresh page starts with no hooks; the controller clears both hooks
//! after every successful activation.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use futures::future::{BoxFuture, FutureExt};
#[cfg(target_arch = "wasm32")]
use futures::future::{FutureExt, LocalBoxFuture};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// An async navigation predicate.
///
/// Cheaply cloneable; clones share the same underlying function, so a hook
/// retrieved from the controller compares pointer-equal to the one that was
/// registered.
///
/// # Example
///
/// ```ignore
/// use pagenav::NavHook;
///
/// let confirm_leave = NavHook::new(|| async {
///     // Ask the user, hit an API, etc.
///     true
/// });
/// ```
#[cfg(target_arch = "wasm32")]
pub struct NavHook {
	inner: Rc<dyn Fn() -> LocalBoxFuture<'static, bool> + 'static>,
}

/// An async navigation predicate (non-WASM version).
///
/// See the WASM version for full documentation. This version carries
/// `Send + Sync` bounds for thread-safe native usage.
#[cfg(not(target_arch = "wasm32"))]
pub struct NavHook {
	inner: Arc<dyn Fn() -> BoxFuture<'static, bool> + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl NavHook {
	/// Wraps an async predicate.
	pub fn new<F, Fut>(f: F) -> Self
	where
		F: Fn() -> Fut + 'static,
		Fut: Future<Output = bool> + 'static,
	{
		Self {
			inner: Rc::new(move || f().boxed_local()),
		}
	}

	/// Invokes the predicate.
	pub fn call(&self) -> LocalBoxFuture<'static, bool> {
		(self.inner)()
	}

	/// Returns whether two hooks share the same underlying function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl NavHook {
	/// Wraps an async predicate.
	pub fn new<F, Fut>(f: F) -> Self
	where
		F: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = bool> + Send + 'static,
	{
		Self {
			inner: Arc::new(move || f().boxed()),
		}
	}

	/// Invokes the predicate.
	pub fn call(&self) -> BoxFuture<'static, bool> {
		(self.inner)()
	}

	/// Returns whether two hooks share the same underlying function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Clone for NavHook {
	#[cfg(target_arch = "wasm32")]
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl std::fmt::Debug for NavHook {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavHook")
			.field("inner", &"<async predicate>")
			.finish()
	}
}
