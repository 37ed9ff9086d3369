//! Interactive geometric page background.
//!
//! The animation engine lives in [`core`] and is platform independent. The
//! remaining modules are the browser front-end: they wire DOM events into the
//! engine, draw it on a 2D canvas every animation frame and undo all of it on
//! [`BackgroundHandle::destroy`].

pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod theme;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas::Canvas2dSurface;
    use crate::core::{check_mount, BackgroundEngine, SetupError, Teardown, Theme, ThemeSignal};
    use crate::{dom, events, frame, theme};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        Ok(())
    }

    /// Returned by [`mount_background`]. Inert when setup was skipped.
    #[wasm_bindgen]
    pub struct BackgroundHandle {
        teardown: Option<Rc<RefCell<Teardown>>>,
    }

    #[wasm_bindgen]
    impl BackgroundHandle {
        /// Remove listeners, stop the frame loop and disconnect the theme
        /// observer. Safe to call any number of times.
        pub fn destroy(&mut self) {
            if let Some(t) = self.teardown.take() {
                let n = t.borrow_mut().run();
                log::info!("[background] torn down ({} cleanups)", n);
            }
        }

        #[wasm_bindgen(getter)]
        pub fn active(&self) -> bool {
            self.teardown
                .as_ref()
                .map(|t| !t.borrow().is_done())
                .unwrap_or(false)
        }
    }

    /// Mount the background on `<canvas id=canvas_id>`. `options` is an
    /// optional plain object; see `BackgroundConfig` for the keys. Never
    /// throws: if anything is missing the handle is inert.
    #[wasm_bindgen]
    pub fn mount_background(canvas_id: &str, options: JsValue) -> BackgroundHandle {
        match mount(canvas_id, &options) {
            Ok(teardown) => BackgroundHandle {
                teardown: Some(teardown),
            },
            Err(e) => {
                log::info!("[background] not mounted: {}", e);
                BackgroundHandle { teardown: None }
            }
        }
    }

    fn mount(canvas_id: &str, options: &JsValue) -> anyhow::Result<Rc<RefCell<Teardown>>> {
        let config = dom::config_from_js(options);
        let window = web::window().ok_or(SetupError::NoWindow)?;
        check_mount(&config, dom::viewport_size(&window).x)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let canvas = dom::canvas_by_id(&document, canvas_id)
            .ok_or_else(|| SetupError::MissingCanvas(canvas_id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(SetupError::NoContext)?;

        dom::set_canvas_opacity(&canvas, &config);
        let size = dom::fit_canvas_to_viewport(&canvas, &window);
        let initial_theme = Theme::from_dark_flag(dom::is_dark(&document));
        let engine = Rc::new(RefCell::new(BackgroundEngine::from_entropy(
            config.clone(),
            size,
            initial_theme,
        )));
        log::info!(
            "[background] mounted {}x{}, {} ambient shapes",
            size.x,
            size.y,
            engine.borrow().pools().ambient_count()
        );

        let mut teardown = Teardown::new();

        events::wire_pointer_handlers(&window, &document, &config, &engine, &mut teardown);
        if config.scroll_effects {
            events::wire_scroll(&window, &document, &engine, &mut teardown);
        }
        events::wire_resize(&window, &canvas, &engine, &mut teardown);

        let signal = Rc::new(RefCell::new(ThemeSignal::new(initial_theme)));
        let e = engine.clone();
        let sub = signal.borrow_mut().subscribe(move |t| {
            if let Ok(mut eng) = e.try_borrow_mut() {
                eng.set_theme(t);
            }
        });
        let sig = signal.clone();
        teardown.defer("theme subscription", move || {
            sig.borrow_mut().unsubscribe(sub);
        });
        if let Err(e) = theme::observe_theme(&document, &signal, &mut teardown) {
            log::debug!("[background] theme tracking off: {:?}", e);
        }

        frame::start_loop(
            &window,
            frame::FrameContext {
                engine,
                surface: Canvas2dSurface::new(ctx),
                stats_at: Instant::now(),
                stats_frames: 0,
            },
            &mut teardown,
        );

        Ok(Rc::new(RefCell::new(teardown)))
    }
}
