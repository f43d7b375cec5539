use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    MODAL_CLOSE_ID, MODAL_DESC_ID, MODAL_FALLBACK_HREF, MODAL_ID, MODAL_LIVE_ID, MODAL_TITLE_ID,
    PROJECT_SELECTOR, SHOW_CLASS, VIEW_PROJECT_SELECTOR,
};
use crate::dom;

/// Details copied from a `.project` card's data attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub live_url: Option<String>,
}

impl ProjectDetails {
    pub fn from_card(card: &web::Element) -> Self {
        Self {
            title: card.get_attribute("data-title").unwrap_or_default(),
            description: card.get_attribute("data-desc").unwrap_or_default(),
            live_url: card.get_attribute("data-live").filter(|s| !s.is_empty()),
        }
    }
}

/// Project-details dialog. Its visibility is independent of the section router.
pub struct Modal {
    root: web::Element,
    title: Option<web::Element>,
    description: Option<web::Element>,
    live: Option<web::Element>,
}

impl Modal {
    /// Find `#modal`, wire the project buttons, the close button and the
    /// backdrop. `None` when the page has no modal.
    pub fn wire(document: &web::Document) -> Option<Rc<Self>> {
        let root = document.get_element_by_id(MODAL_ID)?;
        let modal = Rc::new(Self {
            root,
            title: document.get_element_by_id(MODAL_TITLE_ID),
            description: document.get_element_by_id(MODAL_DESC_ID),
            live: document.get_element_by_id(MODAL_LIVE_ID),
        });

        for button in dom::query_all(document, VIEW_PROJECT_SELECTOR) {
            let m = modal.clone();
            let b = button.clone();
            dom::add_listener(&button, "click", move |_ev| {
                match b.closest(PROJECT_SELECTOR).ok().flatten() {
                    Some(card) => m.open(&ProjectDetails::from_card(&card)),
                    None => log::warn!("[modal] view button outside a {}", PROJECT_SELECTOR),
                }
            });
        }

        let m = modal.clone();
        dom::add_click_listener(document, MODAL_CLOSE_ID, move |_ev| m.close());

        // clicks on the backdrop itself, not on the dialog content
        let m = modal.clone();
        dom::add_listener(&modal.root, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .is_some_and(|node| m.root.is_same_node(Some(&node)));
            if on_backdrop {
                m.close();
            }
        });
        Some(modal)
    }

    pub fn open(&self, details: &ProjectDetails) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(details.title.as_str()));
        }
        if let Some(el) = &self.description {
            el.set_text_content(Some(details.description.as_str()));
        }
        if let Some(a) = self
            .live
            .as_ref()
            .and_then(|el| el.dyn_ref::<web::HtmlAnchorElement>())
        {
            a.set_href(details.live_url.as_deref().unwrap_or(MODAL_FALLBACK_HREF));
        }
        dom::set_class(&self.root, SHOW_CLASS, true);
        _ = self.root.set_attribute("aria-hidden", "false");
    }

    pub fn close(&self) {
        dom::set_class(&self.root, SHOW_CLASS, false);
        _ = self.root.set_attribute("aria-hidden", "true");
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains(SHOW_CLASS)
    }
}
