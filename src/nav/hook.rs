use log::{info, warn};
use yew::prelude::*;

use super::controller::SectionNavController;
use super::dom::DomSectionHost;
use super::state::{NavPhase, NavState};
use crate::config::NavSettings;
use crate::timer::GlooScheduler;

/// Read side of the navigation controller, handed to the rendering layer.
#[derive(Clone, PartialEq)]
pub struct SectionNav {
    pub active: Option<String>,
    pub phase: NavPhase,
    /// Takes an anchor (`"edu"` or `"#edu"`) and smooth-scrolls to it.
    pub navigate: Callback<String>,
}

impl SectionNav {
    pub fn is_active(&self, anchor_id: &str) -> bool {
        self.active.as_deref() == Some(anchor_id)
    }
}

type DomController = SectionNavController<DomSectionHost, GlooScheduler>;

/// Mounts the section controller after the first render and tears it
/// down on unmount.
#[hook]
pub fn use_section_nav(settings: &NavSettings) -> SectionNav {
    let state = use_reducer_eq(NavState::default);
    let controller = use_mut_ref(|| None::<DomController>);

    {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |settings: &NavSettings| {
                match DomSectionHost::from_window() {
                    Some(host) => {
                        let mut nav = SectionNavController::new(
                            host,
                            GlooScheduler,
                            settings.visibility.clone(),
                            settings.scroll_settle_ms,
                            move |action| dispatcher.dispatch(action),
                        );
                        nav.mount(&settings.entries);
                        *controller.borrow_mut() = Some(nav);
                    }
                    None => warn!("no document available, section tracking disabled"),
                }
                move || {
                    let taken = controller.borrow_mut().take();
                    if let Some(mut nav) = taken {
                        nav.teardown();
                        info!("section tracking released");
                    }
                }
            },
            settings.clone(),
        );
    }

    // Stable across renders, so the handle only changes with the state.
    let navigate = {
        let controller = controller.clone();
        use_callback(
            move |anchor: String, _| {
                if let Some(nav) = controller.borrow_mut().as_mut() {
                    nav.navigate(&anchor);
                }
            },
            (),
        )
    };

    SectionNav {
        active: state.active().map(str::to_owned),
        phase: state.phase(),
        navigate,
    }
}
