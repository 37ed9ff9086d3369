use crate::core::Teardown;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod pointer;
pub mod scroll;

pub use pointer::wire_pointer_handlers;
pub use scroll::{wire_resize, wire_scroll};

/// A registered DOM listener that can be taken off its target again.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn remove(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach `handler` to `target` and hand its removal to `teardown`. If the
/// host refuses the listener the feature just stays inactive.
pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    passive: bool,
    teardown: &mut Teardown,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let added = if passive {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
    } else {
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    };
    if let Err(e) = added {
        log::debug!("[events] {} listener unavailable: {:?}", kind, e);
        return;
    }
    let listener = Listener {
        target: target.clone(),
        kind,
        closure,
    };
    teardown.defer(kind, move || listener.remove());
}
