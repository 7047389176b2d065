use yew::prelude::*;

use crate::nav::SectionNav;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Target section id, with or without the leading `#`.
    pub anchor: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link routed through the section controller, so it scrolls
/// smoothly and updates the highlight like the header nav does.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let nav = use_context::<SectionNav>();
    let anchor = props.anchor.trim_start_matches('#').to_string();
    let href = format!("#{anchor}");

    let onclick = {
        let anchor = anchor.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(nav) = &nav {
                e.prevent_default();
                nav.navigate.emit(anchor.clone());
            }
        })
    };

    html! {
        <a href={href} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
