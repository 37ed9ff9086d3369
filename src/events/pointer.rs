use super::listen;
use crate::core::{BackgroundConfig, BackgroundEngine, Teardown};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

/// Pointer move/leave (when `mouseEffects`) and click (when `clickEffects`).
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    config: &BackgroundConfig,
    engine: &Rc<RefCell<BackgroundEngine>>,
    teardown: &mut Teardown,
) {
    if config.mouse_effects {
        let e = engine.clone();
        listen(window, "mousemove", false, teardown, move |ev| {
            if let (Some(pos), Ok(mut eng)) = (client_pos(&ev), e.try_borrow_mut()) {
                eng.pointer_move(pos);
            }
        });

        let e = engine.clone();
        listen(document, "mouseleave", false, teardown, move |_| {
            if let Ok(mut eng) = e.try_borrow_mut() {
                eng.pointer_leave();
            }
        });
    }

    if config.click_effects {
        let e = engine.clone();
        listen(window, "click", false, teardown, move |ev| {
            if let (Some(pos), Ok(mut eng)) = (client_pos(&ev), e.try_borrow_mut()) {
                eng.click(pos);
            }
        });
    }
}
