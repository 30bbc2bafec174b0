//! Page module registry.
//!
//! Maps page identifiers to page-module loaders, populated at composition
//! time with a chained builder. Replaces filesystem-path module resolution:
//! the controller sanitizes an identifier and looks it up here, and a miss is
//! an explicit [`NavigationError::PageNotFound`] instead of a path trick.
//!
//! # Example
//!
//! ```ignore
//! use pagenav::PageRegistry;
//!
//! let registry = PageRegistry::new()
//!     .page("main", |params| {
//!         // mount the main page
//!     })
//!     .page("detail", |params| {
//!         // mount the detail page
//!     });
//! ```

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use futures::future::{BoxFuture, FutureExt};
#[cfg(target_arch = "wasm32")]
use futures::future::{FutureExt, LocalBoxFuture};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::error::NavigationError;
use crate::state::PageParams;

/// A page module's entry point, invoked with the filtered params.
#[cfg(target_arch = "wasm32")]
pub type PageEntry = Rc<dyn Fn(PageParams) + 'static>;

/// A page module's entry point, invoked with the filtered params
/// (non-WASM version, with `Send + Sync` bounds).
#[cfg(not(target_arch = "wasm32"))]
pub type PageEntry = Arc<dyn Fn(PageParams) + Send + Sync + 'static>;

/// The in-flight load of a page module.
#[cfg(target_arch = "wasm32")]
pub type PageFuture = LocalBoxFuture<'static, Result<PageEntry, NavigationError>>;

/// The in-flight load of a page module (non-WASM version).
#[cfg(not(target_arch = "wasm32"))]
pub type PageFuture = BoxFuture<'static, Result<PageEntry, NavigationError>>;

#[cfg(target_arch = "wasm32")]
type PageLoader = Rc<dyn Fn() -> PageFuture + 'static>;

#[cfg(not(target_arch = "wasm32"))]
type PageLoader = Arc<dyn Fn() -> PageFuture + Send + Sync + 'static>;

/// Registry of page modules, keyed by sanitized page identifier.
#[derive(Default)]
pub struct PageRegistry {
	pages: HashMap<String, PageLoader>,
}

impl std::fmt::Debug for PageRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageRegistry")
			.field("pages", &self.pages.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl PageRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Begins the load of the module registered under `page_id`.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::PageNotFound`] when no module is registered
	/// under the identifier.
	pub fn load(&self, page_id: &str) -> Result<PageFuture, NavigationError> {
		match self.pages.get(page_id) {
			Some(loader) => Ok(loader()),
			None => Err(NavigationError::PageNotFound(page_id.to_string())),
		}
	}

	/// Returns whether a module is registered under `page_id`.
	pub fn contains(&self, page_id: &str) -> bool {
		self.pages.contains_key(page_id)
	}

	/// Returns the number of registered page modules.
	pub fn len(&self) -> usize {
		self.pages.len()
	}

	/// Returns whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}
}

#[cfg(target_arch = "wasm32")]
impl PageRegistry {
	/// Registers an eagerly available page module.
	pub fn page<F>(mut self, name: impl Into<String>, entry: F) -> Self
	where
		F: Fn(PageParams) + 'static,
	{
		let entry: PageEntry = Rc::new(entry);
		self.pages.insert(
			name.into(),
			Rc::new(move || {
				let entry = entry.clone();
				async move { Ok(entry) }.boxed_local()
			}),
		);
		self
	}

	/// Registers a page module behind an asynchronous loader.
	///
	/// The loader runs once per activation and resolves to the module's entry
	/// point, or fails with the error surfaced to the caller of the
	/// navigation.
	pub fn lazy_page<L, Fut>(mut self, name: impl Into<String>, loader: L) -> Self
	where
		L: Fn() -> Fut + 'static,
		Fut: Future<Output = Result<PageEntry, NavigationError>> + 'static,
	{
		self.pages
			.insert(name.into(), Rc::new(move || loader().boxed_local()));
		self
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl PageRegistry {
	/// Registers an eagerly available page module.
	pub fn page<F>(mut self, name: impl Into<String>, entry: F) -> Self
	where
		F: Fn(PageParams) + Send + Sync + 'static,
	{
		let entry: PageEntry = Arc::new(entry);
		self.pages.insert(
			name.into(),
			Arc::new(move || {
				let entry = entry.clone();
				async move { Ok(entry) }.boxed()
			}),
		);
		self
	}

	/// Registers a page module behind an asynchronous loader.
	///
	/// The loader runs once per activation and resolves to the module's entry
	/// point, or fails with the error surfaced to the caller of the
	/// navigation.
	pub fn lazy_page<L, Fut>(mut self, name: impl Into<String>, loader: L) -> Self
	where
		L: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<PageEntry, NavigationError>> + Send + 'static,
	{
		self.pages
			.insert(name.into(), Arc::new(move || loader().boxed()));
		self
	}
}
