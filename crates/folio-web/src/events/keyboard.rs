use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::modal::Modal;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

// Escape closes the project modal when it is open
pub fn wire_escape_closes(modal: Rc<Modal>) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev| {
            let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if is_dismiss_key(&kev.key()) && modal.is_open() {
                modal.close();
                ev.prevent_default();
            }
        });
    }
}
