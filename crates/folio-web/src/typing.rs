use folio_core::{TypingLoop, HERO_PHRASES};
use web_sys as web;

use crate::constants::{PHRASES_ATTR, TYPED_SELECTOR};
use crate::dom;

/// Start the hero typing loop. Phrases come from `data-phrases`
/// (`|`-separated) when present. No `.typed` element, no loop.
pub fn start(document: &web::Document) {
    let Ok(Some(el)) = document.query_selector(TYPED_SELECTOR) else {
        return;
    };
    let custom = el.get_attribute(PHRASES_ATTR);
    let looper = match custom.as_deref() {
        Some(list) => TypingLoop::with_default_pause(list.split('|').map(str::trim)),
        None => TypingLoop::with_default_pause(HERO_PHRASES.iter().copied()),
    };
    match looper {
        Some(looper) => step(el, looper),
        None => log::warn!("[typing] no phrases to type"),
    }
}

fn step(el: web::Element, mut looper: TypingLoop) {
    let frame = looper.tick();
    el.set_text_content(Some(frame.text.as_str()));
    dom::set_timeout(frame.delay, move || step(el, looper));
}
