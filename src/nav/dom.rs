use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::controller::SectionHost;
use super::visibility::VisibilityConfig;

/// An `IntersectionObserver` watching one element. Disconnects on drop.
pub struct DomObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObservation {
    /// Stops delivery while keeping the callback alive, so it is safe to
    /// call from inside that callback.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for DomObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `element`, reporting `true` whenever it becomes sufficiently
/// visible under `config` and `false` when it drops below.
pub fn observe_element(
    element: &Element,
    config: &VisibilityConfig,
    on_change: Rc<dyn Fn(bool)>,
) -> Option<DomObservation> {
    let threshold = config.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(threshold.counts_as_visible(entry.is_intersecting(), entry.intersection_ratio()));
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin());
    options.set_threshold(&JsValue::from_f64(config.threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(DomObservation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("could not create IntersectionObserver: {:?}", err);
            None
        }
    }
}

/// The live document.
#[derive(Clone)]
pub struct DomSectionHost {
    window: Window,
    document: Document,
}

impl DomSectionHost {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl SectionHost for DomSectionHost {
    type Observation = DomObservation;

    fn observe(
        &self,
        anchor_id: &str,
        config: &VisibilityConfig,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Option<DomObservation> {
        let element = self.document.get_element_by_id(anchor_id)?;
        observe_element(&element, config, on_change)
    }

    fn scroll_into_view(&self, anchor_id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(anchor_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn current_fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        (!fragment.is_empty()).then(|| fragment.to_string())
    }

    fn replace_fragment(&self, anchor_id: &str) {
        if let Ok(history) = self.window.history() {
            let url = format!("#{anchor_id}");
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str())) {
                warn!("could not update fragment to {url}: {:?}", err);
            }
        }
    }
}
