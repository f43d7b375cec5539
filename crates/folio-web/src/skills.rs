use std::time::Duration;

use folio_core::{bar_width, parse_percent, radial_dasharray, SKILL_FILL_DELAY_MS};
use web_sys as web;

use crate::constants::{
    BAR_FILL_SELECTOR, BAR_SELECTOR, PCT_ATTR, PULSE_CLASS, RADIAL_PROGRESS_SELECTOR,
    RADIAL_SELECTOR,
};
use crate::dom;

/// Replay the bar and radial fills inside `root`. Used as the router's
/// re-entry hook, so it only touches the DOM and never reports failure.
pub fn animate(root: &web::Element) {
    for bar in dom::query_all_in(root, BAR_SELECTOR) {
        // the percentage usually sits on the wrapping row, sometimes on the bar
        let raw = bar
            .parent_element()
            .and_then(|p| p.get_attribute(PCT_ATTR))
            .or_else(|| bar.get_attribute(PCT_ATTR));
        let pct = parse_percent(raw.as_deref());
        let Some(fill) = dom::query_in(&bar, BAR_FILL_SELECTOR) else {
            continue;
        };
        dom::set_style(&fill, "width", "0%");
        let width = bar_width(pct);
        dom::set_timeout(Duration::from_millis(SKILL_FILL_DELAY_MS), move || {
            dom::set_style(&fill, "width", &width);
        });
    }

    for radial in dom::query_all_in(root, RADIAL_SELECTOR) {
        let pct = parse_percent(radial.get_attribute(PCT_ATTR).as_deref());
        let Some(progress) = dom::query_in(&radial, RADIAL_PROGRESS_SELECTOR) else {
            continue;
        };
        _ = progress.set_attribute("stroke-dasharray", &radial_dasharray(pct));
        // restart the CSS pulse: drop the class, force a layout, add it back
        dom::set_class(&radial, PULSE_CLASS, false);
        _ = radial.client_width();
        dom::set_class(&radial, PULSE_CLASS, true);
    }
}
