//! Bootstrap script loading (wasm32 only).
//!
//! Sequentially loads a fixed list of external scripts before the
//! application starts the controller. Each script is appended as a
//! non-async `<script>` element and awaited before the next one begins, so
//! polyfills and vendor bundles execute in order.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::error::NavigationError;

/// Loads `paths` one at a time, in order.
///
/// # Errors
///
/// Fails with [`NavigationError::ScriptLoad`] on the first script whose
/// `error` event fires; later scripts are not attempted.
pub async fn load_scripts(paths: &[&str]) -> Result<(), NavigationError> {
	for path in paths {
		load_script(path).await?;
	}
	Ok(())
}

async fn load_script(path: &str) -> Result<(), NavigationError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| NavigationError::History("no document object".to_string()))?;

	let script: web_sys::HtmlScriptElement = document
		.create_element("script")
		.map_err(|err| NavigationError::History(format!("createElement failed: {err:?}")))?
		.dyn_into()
		.map_err(|_| NavigationError::History("script element has wrong type".to_string()))?;
	script.set_src(path);
	script.set_async(false);

	let (tx, rx) = oneshot::channel::<Result<(), NavigationError>>();
	let tx = Rc::new(RefCell::new(Some(tx)));

	let load_tx = Rc::clone(&tx);
	let onload = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		if let Some(tx) = load_tx.borrow_mut().take() {
			let _ = tx.send(Ok(()));
		}
	}) as Box<dyn FnMut(web_sys::Event)>);

	let failed_path = path.to_string();
	let error_tx = Rc::clone(&tx);
	let onerror = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		if let Some(tx) = error_tx.borrow_mut().take() {
			let _ = tx.send(Err(NavigationError::ScriptLoad(failed_path.clone())));
		}
	}) as Box<dyn FnMut(web_sys::Event)>);

	script.set_onload(Some(onload.as_ref().unchecked_ref()));
	script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
	onload.forget();
	onerror.forget();

	document
		.body()
		.ok_or_else(|| NavigationError::History("no document body".to_string()))?
		.append_child(&script)
		.map_err(|err| NavigationError::History(format!("appendChild failed: {err:?}")))?;

	rx.await
		.unwrap_or_else(|_| Err(NavigationError::History("script load channel dropped".to_string())))
}
