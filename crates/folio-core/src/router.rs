//! Client-side section router.
//!
//! The router owns which single section is visible. It never touches the DOM
//! itself: every transition is described as a list of [`RouteEffect`]s that
//! the front-end applies in order, so the state machine runs unchanged on the
//! host and in the browser.
//!
//! Re-entry hooks ride the same channel: a transition into a flagged section
//! ends with [`RouteEffect::Replay`], and the applier runs the hook once the
//! section is visible and the router is no longer borrowed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::constants::{focus_delay, DEFAULT_SECTION_ID};
use crate::error::RouterError;
use crate::section::{DisplayState, NavControl, SectionId, SectionSpec};

/// Zero-argument callback replayed whenever its section becomes active.
/// Shared so the applier can hold it after releasing the router.
pub type ReentryHook = Rc<RefCell<dyn FnMut()>>;

/// Effect buffer filled by a single transition.
pub type Effects = SmallVec<[RouteEffect; 16]>;

/// Whether a transition writes the location fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Push (or replace, when re-entering the active section) `#id`.
    Record,
    /// Leave history alone: initial load and back/forward navigation.
    Silent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

impl ScrollBehavior {
    #[inline]
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        }
    }
}

/// What to do when the already-active section is activated again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReentryPolicy {
    /// Refresh the UI and replay the re-entry hook.
    #[default]
    AlwaysRerun,
    /// Treat the call as a no-op.
    SkipWhenActive,
}

/// One UI write requested by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteEffect {
    ShowSection(SectionId),
    HideSection(SectionId),
    SetControlActive { control: usize, active: bool },
    PushFragment(SectionId),
    ReplaceFragment(SectionId),
    ScrollToTop(ScrollBehavior),
    /// Give the section programmatic focus once it is visible.
    FocusSection { id: SectionId, delay: Duration },
    /// Run the section's re-entry hook. Always the last effect of a transition.
    Replay(SectionId),
}

impl RouteEffect {
    #[inline]
    pub fn is_history_write(&self) -> bool {
        matches!(
            self,
            RouteEffect::PushFragment(_) | RouteEffect::ReplaceFragment(_)
        )
    }
}

/// Router configuration, assembled by the page bootstrap.
pub struct RouterConfig {
    sections: Vec<SectionSpec>,
    controls: Vec<SectionId>,
    default_id: SectionId,
    reduced_motion: bool,
    policy: ReentryPolicy,
    focus_delay: Duration,
    hooks: FnvHashMap<SectionId, ReentryHook>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            controls: Vec::new(),
            default_id: SectionId::from(DEFAULT_SECTION_ID),
            reduced_motion: false,
            policy: ReentryPolicy::default(),
            focus_delay: focus_delay(),
            hooks: FnvHashMap::default(),
        }
    }
}

impl RouterConfig {
    pub fn new(default_id: impl Into<SectionId>) -> Self {
        Self {
            default_id: default_id.into(),
            ..Self::default()
        }
    }

    pub fn section(mut self, spec: SectionSpec) -> Self {
        self.sections.push(spec);
        self
    }

    pub fn sections(mut self, specs: impl IntoIterator<Item = SectionSpec>) -> Self {
        self.sections.extend(specs);
        self
    }

    /// Register a control; its index is its position in registration order.
    pub fn control(mut self, target: impl Into<SectionId>) -> Self {
        self.controls.push(target.into());
        self
    }

    pub fn controls<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SectionId>,
    {
        self.controls.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn reentry_policy(mut self, policy: ReentryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn focus_delay(mut self, delay: Duration) -> Self {
        self.focus_delay = delay;
        self
    }

    /// Attach the re-entry hook for `id`. Only fires if the section is flagged.
    pub fn on_reentry(mut self, id: impl Into<SectionId>, hook: impl FnMut() + 'static) -> Self {
        self.hooks.insert(id.into(), Rc::new(RefCell::new(hook)));
        self
    }
}

pub struct Router {
    sections: Vec<SectionSpec>,
    index: FnvHashMap<SectionId, usize>,
    controls: Vec<NavControl>,
    current: usize,
    default_index: usize,
    reduced_motion: bool,
    policy: ReentryPolicy,
    focus_delay: Duration,
    hooks: FnvHashMap<SectionId, ReentryHook>,
}

impl Router {
    /// Build the router and perform the first activation.
    ///
    /// The initial section is the one named by `location_fragment` when it is
    /// registered, otherwise the configured default. The first activation
    /// hides every other section and writes no history.
    pub fn initialize(
        config: RouterConfig,
        location_fragment: Option<&str>,
        out: &mut Effects,
    ) -> Result<Self, RouterError> {
        let RouterConfig {
            sections,
            controls,
            default_id,
            reduced_motion,
            policy,
            focus_delay,
            hooks,
        } = config;

        if sections.is_empty() {
            return Err(RouterError::NoSections);
        }
        let mut index = FnvHashMap::default();
        for (i, s) in sections.iter().enumerate() {
            if index.insert(s.id.clone(), i).is_some() {
                return Err(RouterError::DuplicateSection(s.id.clone()));
            }
        }

        let default_index = match index.get(default_id.as_str()) {
            Some(&i) => i,
            None => {
                log::warn!(
                    "[router] default section `{}` not registered; using `{}`",
                    default_id,
                    sections[0].id
                );
                0
            }
        };
        for id in hooks.keys().filter(|id| !index.contains_key(id.as_str())) {
            log::warn!("[router] re-entry hook for unknown section `{}` ignored", id);
        }

        let initial = match location_fragment.and_then(parse_fragment) {
            Some(id) => match index.get(id) {
                Some(&i) => i,
                None => {
                    log::warn!("[router] unknown fragment `#{}`; falling back to default", id);
                    default_index
                }
            },
            None => default_index,
        };

        let controls = controls
            .into_iter()
            .enumerate()
            .map(|(index, target)| NavControl { index, target })
            .collect();

        let mut router = Self {
            sections,
            index,
            controls,
            current: initial,
            default_index,
            reduced_motion,
            policy,
            focus_delay,
            hooks,
        };
        log::info!(
            "[router] {} sections, {} controls, initial `{}`",
            router.sections.len(),
            router.controls.len(),
            router.current()
        );
        router.enter(initial, HistoryMode::Silent, true, out);
        Ok(router)
    }

    /// Make `id` the active section.
    ///
    /// Returns `false` without emitting anything when `id` is not registered,
    /// or when it is already active under [`ReentryPolicy::SkipWhenActive`].
    pub fn activate(&mut self, id: &str, history: HistoryMode, out: &mut Effects) -> bool {
        match self.index.get(id) {
            Some(&target) => self.activate_index(target, history, out),
            None => {
                log::debug!("[router] ignoring unknown section `{}`", id);
                false
            }
        }
    }

    /// Follow a fragment change the router did not cause (back/forward, a
    /// hand-edited address). Never writes history. An empty fragment means the
    /// default section.
    pub fn navigate_external(&mut self, fragment: &str, out: &mut Effects) -> bool {
        match parse_fragment(fragment) {
            Some(id) => self.activate(id, HistoryMode::Silent, out),
            None => self.activate_index(self.default_index, HistoryMode::Silent, out),
        }
    }

    pub fn current(&self) -> &SectionId {
        &self.sections[self.current].id
    }

    pub fn default_section(&self) -> &SectionId {
        &self.sections[self.default_index].id
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn policy(&self) -> ReentryPolicy {
        self.policy
    }

    pub fn display_state(&self, id: &str) -> Option<DisplayState> {
        self.index.get(id).map(|&i| {
            if i == self.current {
                DisplayState::Active
            } else {
                DisplayState::Inactive
            }
        })
    }

    pub fn active_sections(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i == self.current)
            .map(|(_, s)| &s.id)
    }

    pub fn is_control_active(&self, control: usize) -> Option<bool> {
        self.controls
            .get(control)
            .map(|c| c.target == *self.current())
    }

    #[inline]
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        ScrollBehavior::for_reduced_motion(self.reduced_motion)
    }

    /// Hook to run for a [`RouteEffect::Replay`], if the section is flagged.
    pub fn reentry_hook(&self, id: &str) -> Option<ReentryHook> {
        let &i = self.index.get(id)?;
        if !self.sections[i].reentry {
            return None;
        }
        self.hooks.get(id).cloned()
    }

    /// Run the hooks named by `Replay` effects, for callers that apply
    /// effects without a DOM.
    pub fn replay_entries(&self, effects: &Effects) {
        for effect in effects {
            if let RouteEffect::Replay(id) = effect {
                if let Some(hook) = self.reentry_hook(id.as_str()) {
                    run_hook(&hook);
                }
            }
        }
    }

    fn activate_index(&mut self, target: usize, history: HistoryMode, out: &mut Effects) -> bool {
        if target == self.current && self.policy == ReentryPolicy::SkipWhenActive {
            return false;
        }
        self.enter(target, history, false, out);
        true
    }

    fn enter(&mut self, target: usize, history: HistoryMode, full_sync: bool, out: &mut Effects) {
        let previous = self.current;
        if full_sync {
            out.extend(
                self.sections
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != target)
                    .map(|(_, s)| RouteEffect::HideSection(s.id.clone())),
            );
        } else if previous != target {
            out.push(RouteEffect::HideSection(self.sections[previous].id.clone()));
        }

        self.current = target;
        let id = self.sections[target].id.clone();
        out.push(RouteEffect::ShowSection(id.clone()));
        out.extend(self.controls.iter().map(|c| RouteEffect::SetControlActive {
            control: c.index,
            active: c.target == id,
        }));
        if history == HistoryMode::Record {
            out.push(if previous == target {
                RouteEffect::ReplaceFragment(id.clone())
            } else {
                RouteEffect::PushFragment(id.clone())
            });
        }
        out.push(RouteEffect::ScrollToTop(self.scroll_behavior()));
        out.push(RouteEffect::FocusSection {
            id: id.clone(),
            delay: self.focus_delay,
        });
        log::debug!(
            "[router] `{}` -> `{}` ({:?})",
            self.sections[previous].id,
            id,
            history
        );

        if self.sections[target].reentry && self.hooks.contains_key(id.as_str()) {
            out.push(RouteEffect::Replay(id));
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", self.current())
            .field("default", self.default_section())
            .field("sections", &self.sections)
            .field("controls", &self.controls)
            .field("reduced_motion", &self.reduced_motion)
            .field("policy", &self.policy)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Call a re-entry hook. A hook that re-enters itself is skipped, not a panic.
pub fn run_hook(hook: &ReentryHook) {
    match hook.try_borrow_mut() {
        Ok(mut f) => (&mut *f)(),
        Err(_) => log::warn!("[router] re-entry hook already running; skipped"),
    }
}

/// Section id named by a location fragment (`#skills` or `skills`).
pub fn parse_fragment(raw: &str) -> Option<&str> {
    let s = raw.trim();
    let s = s.strip_prefix('#').unwrap_or(s).trim();
    (!s.is_empty()).then_some(s)
}
