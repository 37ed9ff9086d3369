use crate::canvas::Canvas2dSurface;
use crate::core::{BackgroundEngine, FrameLoop, Teardown};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

pub struct FrameContext {
    pub engine: Rc<RefCell<BackgroundEngine>>,
    pub surface: Canvas2dSurface,
    pub stats_at: Instant,
    pub stats_frames: u32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            return;
        };
        engine.frame(&mut self.surface);

        self.stats_frames += 1;
        let elapsed = self.stats_at.elapsed();
        if elapsed >= STATS_INTERVAL {
            let pools = engine.pools();
            log::debug!(
                "[frame] {:.1} fps, shapes={} (ambient {}), ripples={}",
                self.stats_frames as f32 / elapsed.as_secs_f32(),
                pools.shapes().len(),
                pools.ambient_count(),
                pools.ripples().len()
            );
            self.stats_at = Instant::now();
            self.stats_frames = 0;
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request(window: &web::Window, tick: &Tick, state: &Rc<RefCell<FrameLoop>>) {
    if !state.borrow().can_arm() {
        return;
    }
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            state.borrow_mut().armed(id);
        }
    }
}

/// Drive `ctx` from `requestAnimationFrame` until teardown runs. Teardown
/// cancels the pending frame and drops the callback.
pub fn start_loop(window: &web::Window, mut ctx: FrameContext, teardown: &mut Teardown) {
    let state = Rc::new(RefCell::new(FrameLoop::new()));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_inner = tick.clone();
    let state_inner = state.clone();
    let window_inner = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state_inner.borrow_mut().begin_frame() {
            return;
        }
        ctx.frame();
        request(&window_inner, &tick_inner, &state_inner);
    }) as Box<dyn FnMut()>));

    request(window, &tick, &state);

    let window_stop = window.clone();
    teardown.defer("animation frame", move || {
        if let Some(id) = state.borrow_mut().stop() {
            _ = window_stop.cancel_animation_frame(id);
        }
        log::info!("[frame] stopped after {} frames", state.borrow().frames());
        // Breaks the closure <-> slot cycle
        tick.borrow_mut().take();
    });
}
