use crate::{dom, input};
use statue_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer anywhere on the page, not just over the canvas.
pub fn wire_pointermove(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
) {
    dom::add_listener(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = input::client_to_backing(
            ev.client_x() as f64,
            ev.client_y() as f64,
            dom::css_rect(&canvas),
            canvas.width(),
            canvas.height(),
        );
        session.borrow_mut().pointer_moved(x, y);
    });
}
