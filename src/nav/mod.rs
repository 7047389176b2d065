//! Section-aware navigation: scroll-spy highlighting and smooth-scroll
//! activation of page anchors.
//!
//! `NavState` is the reducer both event sources feed (visibility
//! callbacks and clicks). `SectionNavController` wires a `SectionHost`
//! (the DOM in the browser, a fake in tests) to that reducer, and
//! [`use_section_nav`] mounts it for the lifetime of a component.

mod controller;
mod dom;
mod hook;
mod state;
mod visibility;

pub use dom::{observe_element, DomObservation};
pub use hook::{use_section_nav, SectionNav};
pub use state::NavPhase;
pub use visibility::VisibilityConfig;

use serde::Deserialize;

use crate::components::icon::Icon;

/// One navigable section, in visual nav order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    #[serde(rename = "anchor")]
    pub anchor_id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<Icon>,
}

impl NavEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }
}
