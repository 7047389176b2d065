use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use super::state::NavAction;
use super::visibility::VisibilityConfig;
use super::NavEntry;
use crate::timer::Scheduler;

/// The page environment the controller drives.
pub trait SectionHost {
    /// Live visibility subscription; dropping it stops the callbacks.
    type Observation: 'static;

    /// Starts observing the element with this id. `None` when there is no
    /// such element.
    fn observe(
        &self,
        anchor_id: &str,
        config: &VisibilityConfig,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Option<Self::Observation>;

    /// Starts a smooth scroll to the element. `false` when it does not exist.
    fn scroll_into_view(&self, anchor_id: &str) -> bool;

    /// Current URL fragment without the leading `#`.
    fn current_fragment(&self) -> Option<String>;

    /// Replaces the URL fragment in place, without reload or new history entry.
    fn replace_fragment(&self, anchor_id: &str);
}

pub struct SectionNavController<H: SectionHost, S: Scheduler> {
    host: H,
    scheduler: S,
    visibility: VisibilityConfig,
    scroll_settle_ms: u32,
    dispatch: Rc<dyn Fn(NavAction)>,
    // Flipped off on teardown; callbacks already queued by the host check it.
    alive: Rc<Cell<bool>>,
    mounted: bool,
    observations: Vec<H::Observation>,
    timers: Vec<S::Handle>,
}

impl<H: SectionHost, S: Scheduler> SectionNavController<H, S> {
    pub fn new(
        host: H,
        scheduler: S,
        visibility: VisibilityConfig,
        scroll_settle_ms: u32,
        dispatch: impl Fn(NavAction) + 'static,
    ) -> Self {
        Self {
            host,
            scheduler,
            visibility,
            scroll_settle_ms,
            dispatch: Rc::new(dispatch),
            alive: Rc::new(Cell::new(false)),
            mounted: false,
            observations: Vec::new(),
            timers: Vec::new(),
        }
    }

    fn gated(&self) -> impl Fn(NavAction) + 'static {
        let alive = self.alive.clone();
        let dispatch = self.dispatch.clone();
        move |action| {
            if alive.get() {
                dispatch(action);
            }
        }
    }

    /// Registers one observer per entry whose element exists and returns
    /// how many were registered. Entries without an element are skipped.
    pub fn mount(&mut self, entries: &[NavEntry]) -> usize {
        if self.mounted {
            return self.observations.len();
        }
        self.alive.set(true);

        let mut registered = Vec::with_capacity(entries.len());
        for entry in entries {
            if registered.contains(&entry.anchor_id) {
                continue;
            }
            let gate = self.gated();
            let anchor_id = entry.anchor_id.clone();
            let on_change: Rc<dyn Fn(bool)> = Rc::new(move |visible| {
                gate(NavAction::Visibility {
                    anchor_id: anchor_id.clone(),
                    visible,
                })
            });
            match self.host.observe(&entry.anchor_id, &self.visibility, on_change) {
                Some(observation) => {
                    self.observations.push(observation);
                    registered.push(entry.anchor_id.clone());
                }
                None => debug!("no element for #{}, not observed", entry.anchor_id),
            }
        }

        info!(
            "section nav observing {} of {} sections",
            registered.len(),
            entries.len()
        );
        let restored = self
            .host
            .current_fragment()
            .filter(|fragment| registered.contains(fragment));
        (self.dispatch)(NavAction::Registered(registered));
        if let Some(fragment) = restored {
            (self.dispatch)(NavAction::Restored(fragment));
        }

        self.mounted = true;
        self.observations.len()
    }

    /// Handles activation of a link to `#anchor`. Returns whether a scroll
    /// was started; a missing target is a no-op.
    pub fn navigate(&mut self, anchor: &str) -> bool {
        if !self.mounted {
            return false;
        }
        let anchor_id = anchor.trim_start_matches('#');
        if anchor_id.is_empty() || !self.host.scroll_into_view(anchor_id) {
            debug!("no target for #{anchor_id}, ignoring click");
            return false;
        }

        if self.host.current_fragment().as_deref() != Some(anchor_id) {
            self.host.replace_fragment(anchor_id);
        }
        (self.dispatch)(NavAction::Clicked(anchor_id.to_owned()));

        // Supersede the timers of any scroll still in flight.
        self.timers.clear();
        let end_of_turn = self.gated();
        self.timers.push(
            self.scheduler
                .after(0, Box::new(move || end_of_turn(NavAction::TickEnded))),
        );
        let settled = self.gated();
        self.timers.push(self.scheduler.after(
            self.scroll_settle_ms,
            Box::new(move || settled(NavAction::ScrollSettled)),
        ));
        true
    }

    /// Releases every observation and pending timer. Safe to call more
    /// than once, and before `mount`.
    pub fn teardown(&mut self) {
        self.alive.set(false);
        self.observations.clear();
        self.timers.clear();
        if self.mounted {
            self.mounted = false;
            (self.dispatch)(NavAction::TornDown);
            info!("section nav torn down");
        }
    }
}

impl<H: SectionHost, S: Scheduler> Drop for SectionNavController<H, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
