use std::rc::Rc;

use web_sys as web;

use crate::dom;
use crate::router::SectionRouter;

/// Route back/forward and hand-edited fragments through the router without
/// writing history again.
pub fn wire_hashchange(router: Rc<SectionRouter>) {
    if let Some(window) = web::window() {
        let w = window.clone();
        dom::add_listener(&window, "hashchange", move |_ev| {
            let hash = w.location().hash().unwrap_or_default();
            log::debug!("[router] hashchange to {:?}", hash);
            router.follow_location(&hash);
        });
    }
}
