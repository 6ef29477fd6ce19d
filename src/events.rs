use crate::dom;
use statue_core::{Renderer, Session};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod hover;
pub mod pointer;

/// Keep the canvas backing store, the session layout and the surface in step
/// with the window size.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
    renderer: Rc<RefCell<Option<Renderer<'static>>>>,
) {
    dom::add_listener(window, "resize", move |_| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        session.borrow_mut().resize(w, h);
        if let Some(r) = renderer.borrow_mut().as_mut() {
            r.resize(w, h);
        }
    });
}
