use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::TOAST_MS;
use web_sys as web;

use crate::constants::TOAST_ID;
use crate::dom;

/// Transient notification in `#toast`. Without the element it only logs.
#[derive(Clone)]
pub struct Toast {
    el: Option<web::Element>,
    // bumps on every show so an older timer cannot hide a newer message
    generation: Rc<Cell<u32>>,
}

impl Toast {
    pub fn find(document: &web::Document) -> Self {
        Self {
            el: document.get_element_by_id(TOAST_ID),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn show(&self, message: &str) {
        self.show_for(message, Duration::from_millis(TOAST_MS));
    }

    pub fn show_for(&self, message: &str, duration: Duration) {
        let Some(el) = &self.el else {
            log::info!("[toast] {}", message);
            return;
        };
        el.set_text_content(Some(message));
        dom::set_style(el, "opacity", "1");

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        let current = self.generation.clone();
        let el = el.clone();
        dom::set_timeout(duration, move || {
            if current.get() == generation {
                dom::set_style(&el, "opacity", "0");
            }
        });
    }
}
