//! pagenav - History-Backed Page Navigation for WASM SPAs
//!
//! A page navigation controller for single-page applications: it stores
//! per-navigation state in the browser history stack, activates page modules
//! through an explicit registry, and exposes back/forward interception hooks
//! to application code. It decides which page module runs and with which
//! parameters - nothing more (no rendering, component model, or data
//! binding).
//!
//! ## Architecture
//!
//! - [`controller`]: the [`Navigator`] state machine (the core)
//! - [`state`]: [`NavigationState`], the blob stored per history entry
//! - [`registry`]: page identifier to page-module loader mapping
//! - [`history`]: host history collaborators (browser and in-memory)
//! - [`hook`]: async back/forward predicates
//! - [`url`]: query parsing, target-URL construction, id sanitization
//! - [`bootstrap`]: sequential external-script loading (wasm32 only)
//! - [`logging`]: console/stderr level macros
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use pagenav::{BrowserHistory, Navigator, PageRegistry};
//!
//! let registry = PageRegistry::new()
//!     .page("main", |params| { /* mount the main page */ })
//!     .page("detail", |params| { /* mount the detail page */ });
//!
//! let nav = Navigator::new(Rc::new(BrowserHistory::new()), registry, "main").install();
//! wasm_bindgen_futures::spawn_local(async move {
//!     nav.start().await.expect("cold boot");
//! });
//! ```

#[cfg(target_arch = "wasm32")]
pub mod bootstrap;
pub mod controller;
pub mod error;
pub mod history;
pub mod hook;
pub mod logging;
pub mod registry;
pub mod state;
pub mod url;

pub use controller::{Navigator, Phase};
pub use error::NavigationError;
#[cfg(target_arch = "wasm32")]
pub use history::browser::BrowserHistory;
pub use history::memory::MemoryHistory;
pub use history::{HistoryBackend, HistoryHandle, SaveMode};
pub use hook::NavHook;
pub use registry::{PageEntry, PageRegistry};
pub use state::{NavigationState, PageParams, RESERVED_KEYS};
