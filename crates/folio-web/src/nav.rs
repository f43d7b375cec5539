//! Header extras: the small-screen menu overlay and the back-to-top button.

use std::rc::Rc;

use folio_core::ScrollBehavior;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, BACK_TOP_ID, MENU_OPEN_ID, MOBILE_CARD_CLASS, MOBILE_CLOSE_CLASS,
    MOBILE_LINK_CLASS, MOBILE_OVERLAY_CLASS, NAV_BUTTON_SELECTOR, TARGET_ATTR,
};
use crate::dom;
use crate::router::{prefers_reduced_motion, scroll_to_top, SectionRouter};

/// `#menuOpen` opens an overlay mirroring the header's nav buttons.
pub fn wire_mobile_menu(document: &web::Document, router: Rc<SectionRouter>) {
    let doc = document.clone();
    dom::add_click_listener(document, MENU_OPEN_ID, move |_ev| {
        if let Err(e) = open_mobile_menu(&doc, &router) {
            log::warn!("[nav] mobile menu failed: {:?}", e);
        }
    });
}

/// Build and attach the overlay. A second open while one is showing is a no-op.
pub fn open_mobile_menu(
    document: &web::Document,
    router: &Rc<SectionRouter>,
) -> Result<(), wasm_bindgen::JsValue> {
    let overlay_selector = format!(".{}", MOBILE_OVERLAY_CLASS);
    if document.query_selector(&overlay_selector)?.is_some() {
        return Ok(());
    }
    let Some(body) = document.body() else {
        return Ok(());
    };

    let overlay = document.create_element("div")?;
    overlay.set_class_name(MOBILE_OVERLAY_CLASS);
    let card = document.create_element("div")?;
    card.set_class_name(MOBILE_CARD_CLASS);
    overlay.append_child(&card)?;

    let current = router.current();
    for nav in dom::query_all(document, NAV_BUTTON_SELECTOR) {
        let Some(target) = nav.get_attribute(TARGET_ATTR) else {
            continue;
        };
        let target = target.trim().to_owned();
        if target.is_empty() {
            continue;
        }
        let link = document.create_element("button")?;
        link.set_class_name(MOBILE_LINK_CLASS);
        link.set_attribute(TARGET_ATTR, &target)?;
        link.set_text_content(nav.text_content().as_deref());
        dom::set_class(&link, ACTIVE_CLASS, current == target.as_str());

        let r = router.clone();
        let o = overlay.clone();
        dom::add_listener(&link, "click", move |ev| {
            ev.prevent_default();
            r.go(&target);
            o.remove();
        });
        card.append_child(&link)?;
    }

    let close = document.create_element("button")?;
    close.set_class_name(MOBILE_CLOSE_CLASS);
    close.set_text_content(Some("Close"));
    let o = overlay.clone();
    dom::add_listener(&close, "click", move |_ev| o.remove());
    card.append_child(&close)?;

    body.append_child(&overlay)?;
    Ok(())
}

pub fn wire_back_to_top(document: &web::Document) {
    dom::add_click_listener(document, BACK_TOP_ID, |_ev| {
        let reduced = web::window()
            .map(|w| prefers_reduced_motion(&w))
            .unwrap_or(false);
        scroll_to_top(ScrollBehavior::for_reduced_motion(reduced));
    });
}
