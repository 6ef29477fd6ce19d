use crate::constants::CTA_ID;
use crate::dom;
use statue_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Turn the statue to liquid gold while the call-to-action is hovered.
pub fn wire_cta_hover(document: &web::Document, session: Rc<RefCell<Session>>) {
    let Some(cta) = document.get_element_by_id(CTA_ID) else {
        log::debug!("[hover] #{CTA_ID} not on this page");
        return;
    };
    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let session = session.clone();
        dom::add_listener(&cta, event, move |_| {
            let mut s = session.borrow_mut();
            let now = s.now();
            s.set_cta_hovered(hovered, now);
        });
    }
}
