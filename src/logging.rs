//! Logging layer for pagenav.
//!
//! Level macros that log to the browser console on wasm32 and to stderr on
//! native targets. Debug, info, and warn levels compile to no-ops in release
//! builds; errors are always compiled, because a failed page load must stay
//! visible in production.
//!
//! ## Example
//!
//! ```ignore
//! use pagenav::{nav_debug, nav_error, nav_info, nav_warn};
//!
//! nav_debug!("navigation intent dropped: {}", page);
//! nav_info!("page activated: {}", page);
//! nav_warn!("page id sanitized: {} -> {}", raw, clean);
//! nav_error!("page activation failed: {}", err);
//! ```

/// Logs a debug message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! nav_debug {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! nav_debug {
	($($arg:tt)*) => {{
		eprintln!("[DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op nav_debug in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! nav_debug {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! nav_info {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! nav_info {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// No-op nav_info in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! nav_info {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! nav_warn {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (development builds only).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! nav_warn {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// No-op nav_warn in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! nav_warn {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (always compiled).
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! nav_error {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message (always compiled).
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! nav_error {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}
