//! DOM side of the section router: discovers sections and controls, wires
//! their clicks and applies router effects to the document.

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashMap;
use folio_core::{
    run_hook, Effects, HistoryMode, RouteEffect, Router, RouterConfig, ScrollBehavior, SectionId,
    SectionSpec, DEFAULT_SECTION_ID, SKILLS_SECTION_ID,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, CONTROL_SELECTOR, DEFAULT_SECTION_ATTR, REDUCED_MOTION_QUERY, REENTRY_ATTR,
    SECTION_ENTER_EVENT, SECTION_SELECTOR, SHOW_CLASS, TARGET_ATTR,
};
use crate::{dom, skills};

pub struct SectionRouter {
    router: RefCell<Router>,
    sections: FnvHashMap<SectionId, web::Element>,
    controls: Vec<web::Element>,
}

impl SectionRouter {
    /// Discover the page's sections and controls, show the initial section
    /// and wire control clicks. `None` when the page has nothing to route.
    pub fn mount(document: &web::Document) -> Option<Rc<Self>> {
        let window = web::window()?;

        let mut sections = FnvHashMap::default();
        let mut config = RouterConfig::new(default_section_id(document))
            .reduced_motion(prefers_reduced_motion(&window));
        for el in dom::query_all(document, SECTION_SELECTOR) {
            let id = SectionId::new(el.id());
            let mut spec = SectionSpec::new(id.clone());
            if el.has_attribute(REENTRY_ATTR) || id == SKILLS_SECTION_ID {
                spec = spec.with_reentry();
                let root = el.clone();
                config = config.on_reentry(id.clone(), move || skills::animate(&root));
            }
            config = config.section(spec);
            sections.insert(id, el);
        }

        let controls: Vec<(web::Element, String)> = dom::query_all(document, CONTROL_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let target = el.get_attribute(TARGET_ATTR)?;
                let target = target.trim();
                (!target.is_empty()).then(|| (el, target.to_owned()))
            })
            .collect();
        config = config.controls(controls.iter().map(|(_, t)| t.as_str()));

        let location = window.location().hash().unwrap_or_default();
        let mut out = Effects::new();
        let router = match Router::initialize(config, Some(location.as_str()), &mut out) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("[router] not mounted: {}", e);
                return None;
            }
        };

        let this = Rc::new(Self {
            router: RefCell::new(router),
            sections,
            controls: controls.iter().map(|(el, _)| el.clone()).collect(),
        });
        this.apply(&out);

        for (el, target) in controls {
            let router = this.clone();
            dom::add_listener(&el, "click", move |ev| {
                ev.prevent_default();
                router.go(&target);
            });
        }
        Some(this)
    }

    /// Navigation requested by a control: records history.
    pub fn go(&self, id: &str) {
        let mut out = Effects::new();
        let moved = self
            .router
            .borrow_mut()
            .activate(id, HistoryMode::Record, &mut out);
        if moved {
            self.apply(&out);
        }
    }

    /// The location fragment changed under us (back/forward, edited address).
    pub fn follow_location(&self, fragment: &str) {
        let mut out = Effects::new();
        let moved = self.router.borrow_mut().navigate_external(fragment, &mut out);
        if moved {
            self.apply(&out);
        }
    }

    pub fn current(&self) -> SectionId {
        self.router.borrow().current().clone()
    }

    /// Callers must not hold a borrow of `router`: `Replay` runs page code.
    fn apply(&self, effects: &Effects) {
        for effect in effects {
            match effect {
                RouteEffect::ShowSection(id) => self.show_section(id, true),
                RouteEffect::HideSection(id) => self.show_section(id, false),
                RouteEffect::SetControlActive { control, active } => {
                    if let Some(el) = self.controls.get(*control) {
                        dom::set_class(el, ACTIVE_CLASS, *active);
                        if *active {
                            _ = el.set_attribute("aria-current", "page");
                        } else {
                            _ = el.remove_attribute("aria-current");
                        }
                    }
                }
                RouteEffect::PushFragment(id) => write_fragment(id, false),
                RouteEffect::ReplaceFragment(id) => write_fragment(id, true),
                RouteEffect::ScrollToTop(behavior) => scroll_to_top(*behavior),
                RouteEffect::FocusSection { id, delay } => {
                    if let Some(el) = self.sections.get(id.as_str()).cloned() {
                        dom::set_timeout(*delay, move || focus_section(&el));
                    }
                }
                RouteEffect::Replay(id) => self.replay(id),
            }
        }
    }

    fn replay(&self, id: &SectionId) {
        let hook = self.router.borrow().reentry_hook(id.as_str());
        if let Some(hook) = hook {
            run_hook(&hook);
        }
        if let Some(el) = self.sections.get(id.as_str()) {
            if let Ok(ev) = web::Event::new(SECTION_ENTER_EVENT) {
                _ = el.dispatch_event(&ev);
            }
        }
    }

    fn show_section(&self, id: &SectionId, show: bool) {
        if let Some(el) = self.sections.get(id.as_str()) {
            dom::set_class(el, SHOW_CLASS, show);
            _ = el.set_attribute("aria-hidden", if show { "false" } else { "true" });
        }
    }
}

fn default_section_id(document: &web::Document) -> String {
    document
        .body()
        .and_then(|b| b.get_attribute(DEFAULT_SECTION_ATTR))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SECTION_ID.to_owned())
}

pub(crate) fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

// pushState/replaceState do not fire hashchange, so this never loops back
fn write_fragment(id: &SectionId, replace: bool) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let url = id.fragment();
    let res = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
    };
    if let Err(e) = res {
        log::warn!("[router] history write for {} failed: {:?}", url, e);
    }
}

pub(crate) fn scroll_to_top(behavior: ScrollBehavior) {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(match behavior {
            ScrollBehavior::Instant => web::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web::ScrollBehavior::Smooth,
        });
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

fn focus_section(el: &web::Element) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        // focusable for assistive tech, but not a tab stop
        html.set_tab_index(-1);
        let opts = web::FocusOptions::new();
        opts.set_prevent_scroll(true);
        _ = html.focus_with_options(&opts);
    }
}
