#![cfg(target_arch = "wasm32")]
use constants::{CANVAS_ID, PRELOADER_DELAY_MS};
use frame::{FrameContext, LoopHandle};
use statue_core::scene::Scene;
use statue_core::{Renderer, Session, SessionParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;

type SharedRenderer = Rc<RefCell<Option<Renderer<'static>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("statue-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("[init] #{CANVAS_ID} not found; hero disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let session = Rc::new(RefCell::new(Session::new(SessionParams {
        seed: rand::random(),
        width,
        height,
    })?));
    let renderer: SharedRenderer = Rc::new(RefCell::new(None));

    events::wire_resize(&window, canvas.clone(), session.clone(), renderer.clone());
    events::pointer::wire_pointermove(&window, canvas.clone(), session.clone());
    events::hover::wire_cta_hover(&document, session.clone());
    schedule_entrance(&window, session.clone());

    let handle = frame::start_loop(Rc::new(RefCell::new(FrameContext {
        session: session.clone(),
        renderer: renderer.clone(),
    })));
    wire_teardown(&window, handle, renderer.clone());

    // upload from a copy so the session is never borrowed across an await
    let scene = session.borrow().scene.clone();
    spawn_local(async move {
        if let Err(e) = init_gpu(canvas, scene, session, renderer).await {
            log::error!("[gpu] init failed: {:?}", e);
        }
    });
    Ok(())
}

async fn init_gpu(
    canvas: web::HtmlCanvasElement,
    scene: Scene,
    session: Rc<RefCell<Session>>,
    renderer: SharedRenderer,
) -> anyhow::Result<()> {
    let (w, h) = (canvas.width(), canvas.height());
    let mut gpu = Renderer::new(wgpu::SurfaceTarget::Canvas(canvas), w, h, &scene).await?;
    // the page may have resized while the adapter was pending
    let viewport = session.borrow().viewport;
    gpu.resize(viewport.width, viewport.height);
    *renderer.borrow_mut() = Some(gpu);
    log::info!("[gpu] ready at {}x{}", viewport.width, viewport.height);
    Ok(())
}

fn schedule_entrance(window: &web::Window, session: Rc<RefCell<Session>>) {
    let cb = Closure::once_into_js(move || {
        let mut s = session.borrow_mut();
        let now = s.now();
        s.begin_entrance(now);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        PRELOADER_DELAY_MS,
    ) {
        log::warn!("[loop] could not schedule entrance: {e:?}");
    }
}

fn wire_teardown(window: &web::Window, handle: LoopHandle, renderer: SharedRenderer) {
    dom::add_listener(window, "pagehide", move |_| {
        handle.stop();
        // drop the surface and device with the page
        renderer.borrow_mut().take();
    });
}
