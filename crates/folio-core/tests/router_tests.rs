// Host-side tests for the section router state machine.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use folio_core::{
    DisplayState, Effects, HistoryMode, ReentryPolicy, RouteEffect, Router, RouterConfig,
    RouterError, ScrollBehavior, SectionId, SectionSpec, run_hook,
};

const IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

fn site_config(skills_hits: &Rc<Cell<u32>>) -> RouterConfig {
    let hits = skills_hits.clone();
    RouterConfig::new("home")
        .sections(IDS.iter().map(|id| {
            let spec = SectionSpec::new(*id);
            if *id == "skills" {
                spec.with_reentry()
            } else {
                spec
            }
        }))
        // nav buttons, then a hero CTA and a footer link
        .controls(IDS)
        .control("contact")
        .control("projects")
        .on_reentry("skills", move || hits.set(hits.get() + 1))
}

fn boot(fragment: Option<&str>) -> (Router, Rc<Cell<u32>>, Effects) {
    let hits = Rc::new(Cell::new(0));
    let mut out = Effects::new();
    let router = Router::initialize(site_config(&hits), fragment, &mut out).unwrap();
    router.replay_entries(&out);
    (router, hits, out)
}

/// Activate and apply hooks, the way the page applier does.
fn go(router: &mut Router, id: &str) -> Effects {
    let mut out = Effects::new();
    router.activate(id, HistoryMode::Record, &mut out);
    router.replay_entries(&out);
    out
}

fn history_writes(out: &Effects) -> usize {
    out.iter().filter(|e| e.is_history_write()).count()
}

fn assert_single_active(router: &Router) {
    let active: Vec<_> = router.active_sections().collect();
    assert_eq!(active.len(), 1, "expected exactly one active section");
    assert_eq!(active[0], router.current());
    for id in IDS {
        let expected = if id == router.current().as_str() {
            DisplayState::Active
        } else {
            DisplayState::Inactive
        };
        assert_eq!(router.display_state(id), Some(expected));
    }
}

#[test]
fn load_without_fragment_activates_default() {
    let (router, hits, out) = boot(None);
    assert_eq!(router.current(), "home");
    assert_single_active(&router);
    assert_eq!(history_writes(&out), 0);
    assert_eq!(hits.get(), 0);

    // first activation hides every other section
    for id in ["about", "skills", "projects", "contact"] {
        assert!(out.contains(&RouteEffect::HideSection(SectionId::from(id))));
    }
    assert!(out.contains(&RouteEffect::ShowSection(SectionId::from("home"))));
}

#[test]
fn load_with_known_fragment_uses_it() {
    let (router, hits, out) = boot(Some("#projects"));
    assert_eq!(router.current(), "projects");
    assert_eq!(history_writes(&out), 0);
    assert_eq!(hits.get(), 0);
}

#[test]
fn load_with_unknown_fragment_falls_back_to_default() {
    let (router, _, _) = boot(Some("#doesnotexist"));
    assert_eq!(router.current(), "home");
}

#[test]
fn deep_link_to_skills_runs_animation() {
    let (router, hits, _) = boot(Some("#skills"));
    assert_eq!(router.current(), "skills");
    assert_eq!(hits.get(), 1);
}

#[test]
fn empty_section_list_fails_soft() {
    let mut out = Effects::new();
    let err = Router::initialize(RouterConfig::new("home"), None, &mut out).unwrap_err();
    assert_eq!(err, RouterError::NoSections);
    assert!(out.is_empty());
}

#[test]
fn duplicate_sections_are_rejected() {
    let mut out = Effects::new();
    let cfg = RouterConfig::new("home")
        .section(SectionSpec::new("home"))
        .section(SectionSpec::new("home"));
    let err = Router::initialize(cfg, None, &mut out).unwrap_err();
    assert_eq!(err, RouterError::DuplicateSection(SectionId::from("home")));
}

#[test]
fn unregistered_default_falls_back_to_first_section() {
    let mut out = Effects::new();
    let cfg = RouterConfig::new("landing")
        .section(SectionSpec::new("about"))
        .section(SectionSpec::new("contact"));
    let router = Router::initialize(cfg, None, &mut out).unwrap();
    assert_eq!(router.current(), "about");
    assert_eq!(router.default_section(), "about");
}

#[test]
fn exactly_one_section_active_after_every_call() {
    let (mut router, _, _) = boot(None);
    let walk = [
        "about", "skills", "skills", "home", "contact", "projects", "about", "home",
    ];
    for id in walk {
        let mut out = Effects::new();
        assert!(router.activate(id, HistoryMode::Record, &mut out));
        assert_eq!(router.current(), id);
        assert_single_active(&router);
    }
}

#[test]
fn unknown_target_changes_nothing() {
    let (mut router, hits, _) = boot(None);
    let mut out = Effects::new();
    router.activate("about", HistoryMode::Record, &mut out);

    let before: Vec<_> = (0..router.controls().len())
        .map(|i| router.is_control_active(i))
        .collect();
    let mut out = Effects::new();
    assert!(!router.activate("nonexistent", HistoryMode::Record, &mut out));
    assert!(out.is_empty());
    assert_eq!(router.current(), "about");
    let after: Vec<_> = (0..router.controls().len())
        .map(|i| router.is_control_active(i))
        .collect();
    assert_eq!(before, after);
    assert_eq!(hits.get(), 0);
}

#[test]
fn transition_effects_are_ordered() {
    let (mut router, _, _) = boot(None);
    let mut out = Effects::new();
    router.activate("about", HistoryMode::Record, &mut out);

    let about = SectionId::from("about");
    assert_eq!(out[0], RouteEffect::HideSection(SectionId::from("home")));
    assert_eq!(out[1], RouteEffect::ShowSection(about.clone()));
    // one mark per control: five nav buttons plus two extra links
    let marks: Vec<_> = out
        .iter()
        .filter_map(|e| match e {
            RouteEffect::SetControlActive { control, active } => Some((*control, *active)),
            _ => None,
        })
        .collect();
    assert_eq!(marks.len(), 7);
    assert_eq!(
        marks.iter().filter(|(_, a)| *a).map(|(c, _)| *c).collect::<Vec<_>>(),
        vec![1]
    );
    let tail = &out[out.len() - 3..];
    assert_eq!(tail[0], RouteEffect::PushFragment(about.clone()));
    assert_eq!(tail[1], RouteEffect::ScrollToTop(ScrollBehavior::Smooth));
    assert!(matches!(tail[2], RouteEffect::FocusSection { ref id, .. } if *id == about));
    assert!(!out.iter().any(|e| matches!(e, RouteEffect::Replay(_))));
}

#[test]
fn replay_comes_last_after_the_section_is_shown() {
    let (mut router, hits, _) = boot(None);
    let mut out = Effects::new();
    router.activate("skills", HistoryMode::Record, &mut out);
    // activation alone only requests the hook
    assert_eq!(hits.get(), 0);

    let skills = SectionId::from("skills");
    let shown = out
        .iter()
        .position(|e| *e == RouteEffect::ShowSection(skills.clone()))
        .unwrap();
    let focus = out
        .iter()
        .position(|e| matches!(e, RouteEffect::FocusSection { .. }))
        .unwrap();
    assert_eq!(out.last(), Some(&RouteEffect::Replay(skills)));
    assert!(shown < out.len() - 1);
    assert!(focus < out.len() - 1);

    router.replay_entries(&out);
    assert_eq!(hits.get(), 1);
}

#[test]
fn hook_may_read_router_state() {
    let seen = Rc::new(RefCell::new(None::<String>));
    let slot: Rc<RefCell<Option<Rc<RefCell<Router>>>>> = Rc::new(RefCell::new(None));
    let (s, r) = (seen.clone(), slot.clone());
    let cfg = RouterConfig::new("home")
        .section(SectionSpec::new("home"))
        .section(SectionSpec::new("skills").with_reentry())
        .on_reentry("skills", move || {
            if let Some(router) = r.borrow().as_ref() {
                *s.borrow_mut() = Some(router.borrow().current().to_string());
            }
        });
    let mut out = Effects::new();
    let router = Rc::new(RefCell::new(Router::initialize(cfg, None, &mut out).unwrap()));
    *slot.borrow_mut() = Some(router.clone());

    let mut out = Effects::new();
    router
        .borrow_mut()
        .activate("skills", HistoryMode::Record, &mut out);
    let hook = router.borrow().reentry_hook("skills").unwrap();
    run_hook(&hook);
    assert_eq!(seen.borrow().as_deref(), Some("skills"));
}

#[test]
fn reentry_hook_needs_the_flag() {
    let (router, _, _) = boot(None);
    assert!(router.reentry_hook("skills").is_some());
    assert!(router.reentry_hook("about").is_none());
    assert!(router.reentry_hook("nope").is_none());
}

#[test]
fn controls_sharing_a_target_light_up_together() {
    let (mut router, _, _) = boot(None);
    let mut out = Effects::new();
    router.activate("contact", HistoryMode::Record, &mut out);
    // nav button #4 and the hero CTA #5 both point at contact
    assert_eq!(router.is_control_active(4), Some(true));
    assert_eq!(router.is_control_active(5), Some(true));
    assert_eq!(router.is_control_active(6), Some(false));
    assert_eq!(router.is_control_active(99), None);
}

#[test]
fn two_recorded_activations_write_history_twice() {
    let (mut router, _, _) = boot(None);
    let mut first = Effects::new();
    router.activate("about", HistoryMode::Record, &mut first);
    let mut second = Effects::new();
    router.activate("about", HistoryMode::Record, &mut second);

    let about = SectionId::from("about");
    assert_eq!(history_writes(&first), 1);
    assert!(first.contains(&RouteEffect::PushFragment(about.clone())));
    assert_eq!(history_writes(&second), 1);
    assert!(second.contains(&RouteEffect::ReplaceFragment(about)));
}

#[test]
fn external_navigation_never_writes_history() {
    let (mut router, _, _) = boot(None);
    let mut out = Effects::new();
    router.activate("projects", HistoryMode::Record, &mut out);

    // fragment change to the already-active id
    let mut out = Effects::new();
    assert!(router.navigate_external("#projects", &mut out));
    assert_eq!(history_writes(&out), 0);

    let mut out = Effects::new();
    assert!(router.navigate_external("#about", &mut out));
    assert_eq!(router.current(), "about");
    assert_eq!(history_writes(&out), 0);
}

#[test]
fn external_navigation_to_empty_fragment_goes_home() {
    let (mut router, _, _) = boot(Some("#contact"));
    let mut out = Effects::new();
    assert!(router.navigate_external("", &mut out));
    assert_eq!(router.current(), "home");
}

#[test]
fn external_navigation_ignores_unknown_ids() {
    let (mut router, _, _) = boot(None);
    let mut out = Effects::new();
    assert!(!router.navigate_external("#nope", &mut out));
    assert!(out.is_empty());
    assert_eq!(router.current(), "home");
}

#[test]
fn reentry_hook_fires_on_every_activation() {
    let (mut router, hits, _) = boot(None);
    go(&mut router, "skills");
    go(&mut router, "skills");
    assert_eq!(hits.get(), 2);

    go(&mut router, "about");
    go(&mut router, "skills");
    assert_eq!(hits.get(), 3);
}

#[test]
fn hook_without_reentry_flag_stays_silent() {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let cfg = RouterConfig::new("home")
        .section(SectionSpec::new("home"))
        .section(SectionSpec::new("about"))
        .on_reentry("about", move || h.set(h.get() + 1));
    let mut out = Effects::new();
    let mut router = Router::initialize(cfg, None, &mut out).unwrap();
    let out = go(&mut router, "about");
    assert!(!out.iter().any(|e| matches!(e, RouteEffect::Replay(_))));
    assert_eq!(hits.get(), 0);
}

#[test]
fn click_skills_then_back_to_home() {
    let (mut router, hits, _) = boot(None);

    let out = go(&mut router, "skills");
    assert_eq!(router.current(), "skills");
    for id in ["home", "about", "projects", "contact"] {
        assert_eq!(router.display_state(id), Some(DisplayState::Inactive));
    }
    assert!(out.contains(&RouteEffect::PushFragment(SectionId::from("skills"))));
    assert_eq!(hits.get(), 1);

    let mut out = Effects::new();
    router.navigate_external("#home", &mut out);
    router.replay_entries(&out);
    assert_eq!(router.current(), "home");
    assert_eq!(history_writes(&out), 0);
    assert_eq!(hits.get(), 1);
}

#[test]
fn skip_when_active_policy_short_circuits() {
    let hits = Rc::new(Cell::new(0));
    let cfg = site_config(&hits).reentry_policy(ReentryPolicy::SkipWhenActive);
    let mut out = Effects::new();
    let mut router = Router::initialize(cfg, Some("#skills"), &mut out).unwrap();
    router.replay_entries(&out);
    assert_eq!(hits.get(), 1);

    let mut out = Effects::new();
    assert!(!router.activate("skills", HistoryMode::Record, &mut out));
    assert!(out.is_empty());
    router.replay_entries(&out);
    assert_eq!(hits.get(), 1);

    assert!(router.activate("about", HistoryMode::Record, &mut out));
    assert_eq!(router.policy(), ReentryPolicy::SkipWhenActive);
}

#[test]
fn reduced_motion_scrolls_instantly() {
    let hits = Rc::new(Cell::new(0));
    let cfg = site_config(&hits)
        .reduced_motion(true)
        .focus_delay(Duration::from_millis(5));
    let mut out = Effects::new();
    let mut router = Router::initialize(cfg, None, &mut out).unwrap();

    let mut out = Effects::new();
    router.activate("contact", HistoryMode::Record, &mut out);
    assert!(out.contains(&RouteEffect::ScrollToTop(ScrollBehavior::Instant)));
    assert!(out.contains(&RouteEffect::FocusSection {
        id: SectionId::from("contact"),
        delay: Duration::from_millis(5),
    }));
}

#[test]
fn scroll_behavior_follows_motion_preference() {
    assert_eq!(ScrollBehavior::for_reduced_motion(true), ScrollBehavior::Instant);
    assert_eq!(ScrollBehavior::for_reduced_motion(false), ScrollBehavior::Smooth);
}

#[test]
fn hook_that_reenters_itself_is_skipped() {
    let calls = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<folio_core::ReentryHook>>> = Rc::new(RefCell::new(None));
    let (c, s) = (calls.clone(), slot.clone());
    let cfg = RouterConfig::new("home")
        .section(SectionSpec::new("home"))
        .section(SectionSpec::new("skills").with_reentry())
        .on_reentry("skills", move || {
            c.set(c.get() + 1);
            if let Some(me) = s.borrow().as_ref() {
                run_hook(me);
            }
        });
    let mut out = Effects::new();
    let router = Router::initialize(cfg, None, &mut out).unwrap();
    let hook = router.reentry_hook("skills").unwrap();
    *slot.borrow_mut() = Some(hook.clone());
    run_hook(&hook);
    assert_eq!(calls.get(), 1);
}
