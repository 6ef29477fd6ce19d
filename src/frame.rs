use statue_core::{Renderer, Session};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    // None until the adapter and device are ready; animation runs regardless
    pub renderer: Rc<RefCell<Option<Renderer<'static>>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut session = self.session.borrow_mut();
        let now = session.now();
        session.tick(now);

        let mut renderer = self.renderer.borrow_mut();
        let Some(gpu) = renderer.as_mut() else {
            return;
        };
        match gpu.render(&session.scene, &session.camera, &session.lights) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("[gpu] frame skipped: {e:?}"),
        }
    }
}

/// Stops the requestAnimationFrame loop started by [`start_loop`].
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("[loop] stopped");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[loop] started");
    LoopHandle { running }
}

fn request_frame(tick: &TickClosure) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[loop] requestAnimationFrame failed: {e:?}");
        }
    }
}
