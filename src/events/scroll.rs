use super::listen;
use crate::core::{BackgroundEngine, Teardown};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    engine: &Rc<RefCell<BackgroundEngine>>,
    teardown: &mut Teardown,
) {
    let e = engine.clone();
    let w = window.clone();
    let d = document.clone();
    listen(window, "scroll", true, teardown, move |_| {
        let sample = dom::scroll_sample(&w, &d);
        if let Ok(mut eng) = e.try_borrow_mut() {
            eng.scroll_to(sample);
        }
    });
}

/// Keep the canvas at viewport size and rebuild the ambient population.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    engine: &Rc<RefCell<BackgroundEngine>>,
    teardown: &mut Teardown,
) {
    let e = engine.clone();
    let w = window.clone();
    let c = canvas.clone();
    listen(window, "resize", false, teardown, move |_| {
        let size = dom::fit_canvas_to_viewport(&c, &w);
        if let Ok(mut eng) = e.try_borrow_mut() {
            eng.resize(size);
        }
    });
}
