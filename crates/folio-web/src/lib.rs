#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod events;
mod modal;
mod nav;
mod router;
mod skills;
mod toast;
mod typing;

pub use contact::wire as wire_contact_form;
pub use events::wire_hashchange;
pub use modal::{Modal, ProjectDetails};
pub use nav::{open_mobile_menu, wire_back_to_top, wire_mobile_menu};
pub use router::SectionRouter;
pub use toast::Toast;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

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

    // The module may be instantiated before the markup is parsed
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_ev| wire_page(&doc));
    } else {
        wire_page(&document);
    }
    Ok(())
}

/// Wire every page widget. Each one no-ops when its markup is missing.
fn wire_page(document: &web::Document) {
    set_footer_year(document);

    match SectionRouter::mount(document) {
        Some(router) => {
            nav::wire_mobile_menu(document, router.clone());
            events::wire_hashchange(router);
        }
        None => log::warn!("[router] navigation disabled"),
    }
    nav::wire_back_to_top(document);

    typing::start(document);

    if let Some(modal) = Modal::wire(document) {
        events::wire_escape_closes(modal);
    }

    contact::wire(document, Toast::find(document));
    log::info!("page wired");
}

fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(year.to_string().as_str()));
    }
}
