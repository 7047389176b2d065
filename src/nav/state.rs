use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    /// No observers registered (before mount, after teardown).
    #[default]
    Idle,
    Observing,
    /// A click-initiated smooth scroll is still animating.
    Navigating,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Observers are live for these anchors.
    Registered(Vec<String>),
    /// A section crossed the visibility threshold in either direction.
    Visibility { anchor_id: String, visible: bool },
    /// The page loaded with this fragment already in the URL.
    Restored(String),
    /// The user activated a link whose target exists.
    Clicked(String),
    /// The event-loop turn that carried the last click is over.
    TickEnded,
    ScrollSettled,
    TornDown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    phase: NavPhase,
    active: Option<String>,
    // Set by a click and held until the turn ends; observer reports
    // cannot overwrite it meanwhile.
    pinned: Option<String>,
    registered: Vec<String>,
}

impl NavState {
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Registered(anchors) => {
                if self.phase == NavPhase::Idle {
                    self.phase = NavPhase::Observing;
                }
                self.registered = anchors;
            }
            NavAction::Visibility { anchor_id, visible } => {
                if !visible || self.phase == NavPhase::Idle {
                    return;
                }
                if !self.registered.contains(&anchor_id) {
                    return;
                }
                if let Some(pinned) = &self.pinned {
                    debug!("ignoring #{anchor_id} visibility, click on #{pinned} wins this turn");
                    return;
                }
                // Last enter wins, even when the previous section is
                // still partly on screen.
                self.active = Some(anchor_id);
            }
            NavAction::Restored(anchor_id) => {
                if self.phase != NavPhase::Idle && self.registered.contains(&anchor_id) {
                    self.active = Some(anchor_id);
                }
            }
            NavAction::Clicked(anchor_id) => {
                if self.phase == NavPhase::Idle {
                    return;
                }
                self.phase = NavPhase::Navigating;
                self.pinned = Some(anchor_id.clone());
                self.active = Some(anchor_id);
            }
            NavAction::TickEnded => {
                self.pinned = None;
            }
            NavAction::ScrollSettled => {
                if self.phase == NavPhase::Navigating {
                    self.phase = NavPhase::Observing;
                }
            }
            NavAction::TornDown => {
                *self = NavState::default();
            }
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing(anchors: &[&str]) -> NavState {
        let mut state = NavState::default();
        state.apply(NavAction::Registered(
            anchors.iter().map(|a| a.to_string()).collect(),
        ));
        state
    }

    fn enter(anchor: &str) -> NavAction {
        NavAction::Visibility {
            anchor_id: anchor.to_string(),
            visible: true,
        }
    }

    #[test]
    fn registration_moves_idle_to_observing() {
        let state = observing(&["about"]);
        assert_eq!(state.phase(), NavPhase::Observing);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn last_visibility_enter_wins() {
        let mut state = observing(&["about", "exp", "edu"]);
        state.apply(enter("about"));
        assert_eq!(state.active(), Some("about"));
        state.apply(enter("exp"));
        assert_eq!(state.active(), Some("exp"));
        // "about" going out of view does not clear the highlight
        state.apply(NavAction::Visibility {
            anchor_id: "about".into(),
            visible: false,
        });
        assert_eq!(state.active(), Some("exp"));
    }

    #[test]
    fn click_wins_over_observer_in_same_tick() {
        let mut state = observing(&["about", "exp", "edu"]);
        state.apply(enter("exp"));
        state.apply(NavAction::Clicked("edu".into()));
        state.apply(enter("exp"));
        assert_eq!(state.active(), Some("edu"));
        assert_eq!(state.phase(), NavPhase::Navigating);

        state.apply(NavAction::TickEnded);
        state.apply(enter("exp"));
        assert_eq!(state.active(), Some("exp"));
    }

    #[test]
    fn most_recent_click_wins_within_a_tick() {
        let sequences = vec![
            vec![
                NavAction::Clicked("about".into()),
                NavAction::Clicked("edu".into()),
            ],
            vec![
                NavAction::Visibility { anchor_id: "exp".into(), visible: true },
                NavAction::Clicked("about".into()),
                NavAction::Visibility { anchor_id: "exp".into(), visible: true },
                NavAction::Clicked("edu".into()),
                NavAction::Visibility { anchor_id: "about".into(), visible: true },
            ],
            vec![
                NavAction::Clicked("exp".into()),
                NavAction::Visibility { anchor_id: "about".into(), visible: true },
                NavAction::Clicked("edu".into()),
            ],
        ];
        for sequence in sequences {
            let mut state = observing(&["about", "exp", "edu"]);
            for action in sequence.iter().cloned() {
                state.apply(action);
            }
            assert_eq!(state.active(), Some("edu"), "sequence {sequence:?}");
        }
    }

    #[test]
    fn unregistered_sections_never_become_active() {
        let mut state = observing(&["about"]);
        state.apply(enter("missing"));
        state.apply(NavAction::Restored("missing".into()));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn scroll_settle_returns_to_observing() {
        let mut state = observing(&["about", "edu"]);
        state.apply(NavAction::Clicked("edu".into()));
        state.apply(NavAction::TickEnded);
        assert_eq!(state.phase(), NavPhase::Navigating);
        state.apply(NavAction::ScrollSettled);
        assert_eq!(state.phase(), NavPhase::Observing);
        assert_eq!(state.active(), Some("edu"));
    }

    #[test]
    fn events_after_teardown_are_ignored() {
        let mut state = observing(&["about"]);
        state.apply(enter("about"));
        state.apply(NavAction::TornDown);
        assert_eq!(state, NavState::default());

        state.apply(enter("about"));
        state.apply(NavAction::Clicked("about".into()));
        assert_eq!(state.active(), None);
        assert_eq!(state.phase(), NavPhase::Idle);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(observing(&["about"]));
        let next = state.clone().reduce(NavAction::TickEnded);
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(enter("about"));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.active(), Some("about"));
    }
}
