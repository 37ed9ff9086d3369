use crate::core::{Teardown, Theme, ThemeSignal};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Feed `signal` from a `MutationObserver` on `<html class>`. Disconnecting
/// is handed to `teardown`.
pub fn observe_theme(
    document: &web::Document,
    signal: &Rc<RefCell<ThemeSignal>>,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let doc = document.clone();
    let sig = signal.clone();
    let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _obs: web::MutationObserver| {
        let theme = Theme::from_dark_flag(dom::is_dark(&doc));
        if let Ok(mut s) = sig.try_borrow_mut() {
            s.set(theme);
        }
    }) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

    let observer = web::MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("MutationObserver: {:?}", e))?;
    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    let filter = js_sys::Array::of1(&JsValue::from_str("class"));
    init.set_attribute_filter(&filter);
    observer
        .observe_with_options(&root, &init)
        .map_err(|e| anyhow::anyhow!("observe: {:?}", e))?;

    teardown.defer("theme observer", move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(())
}
