use std::rc::Rc;

use yew::prelude::*;

use crate::motion::{stagger_delay, Preset};
use crate::nav::{observe_element, DomObservation, VisibilityConfig};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub preset: Preset,
    /// Position in a staggered group; `None` starts without delay.
    #[prop_or_default]
    pub index: Option<usize>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its preset once, the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let observation = use_mut_ref(|| None::<DomObservation>);

    {
        let node = node.clone();
        let observation = observation.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_change: Rc<dyn Fn(bool)> = Rc::new(move |now_visible| {
                        if now_visible {
                            setter.set(true);
                        }
                    });
                    *observation.borrow_mut() =
                        observe_element(&element, &VisibilityConfig::reveal(), on_change);
                }
                move || {
                    observation.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        // once is enough; the observation itself lives until unmount
        let observation = observation.clone();
        use_effect_with_deps(
            move |seen: &bool| {
                if *seen {
                    if let Some(observation) = observation.borrow().as_ref() {
                        observation.disconnect();
                    }
                }
                || ()
            },
            *visible,
        );
    }

    let style = props
        .index
        .map(|i| format!("transition-delay: {}ms;", stagger_delay(i)));

    html! {
        <div ref={node}
            class={classes!("reveal", props.preset.class(), (*visible).then_some("is-visible"), props.class.clone())}
            style={style}>
            { for props.children.iter() }
        </div>
    }
}
