use serde::Deserialize;
use yew::prelude::*;

/// Stroke icons referenced by name from the site configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    User,
    Target,
    Briefcase,
    GraduationCap,
    Cpu,
    Code,
    Wrench,
    Laptop,
    Zap,
    Terminal,
    Wifi,
    Dashboard,
    Shirt,
    Globe,
    Shield,
    Send,
    Download,
    Linkedin,
    Mail,
    Phone,
    Lock,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Home => &["M3 11l9-8 9 8", "M5 10v10h14V10"],
            Icon::User => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
            Icon::Target => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
            Icon::Briefcase => &["M3 7h18v13H3z", "M16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2"],
            Icon::GraduationCap => &["M22 10L12 5 2 10l10 5 10-5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::Cpu => &["M6 6h12v12H6z", "M9 9h6v6H9z", "M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3"],
            Icon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Icon::Wrench => &["M14.7 6.3a4 4 0 0 0-5.4 5.4L3 18l3 3 6.3-6.3a4 4 0 0 0 5.4-5.4l-2.5 2.5-2.4-.6-.6-2.4z"],
            Icon::Laptop => &["M4 5h16v11H4z", "M2 20h20"],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Terminal => &["M4 17l6-6-6-6", "M12 19h8"],
            Icon::Wifi => &["M5 12.5a10 10 0 0 1 14 0", "M8.5 16a5 5 0 0 1 7 0", "M12 20h.01"],
            Icon::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Icon::Shirt => &["M20.4 6.6L16 3a4 4 0 0 1-8 0L3.6 6.6 5 11l2-1v11h10V10l2 1z"],
            Icon::Globe => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M2 12h20", "M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20z"],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
            Icon::Download => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
            Icon::Linkedin => &["M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z", "M2 9h4v12H2z", "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"],
            Icon::Mail => &["M4 4h16v16H4z", "M22 6l-10 7L2 6"],
            Icon::Phone => &["M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8.1 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z"],
            Icon::Lock => &["M5 11h14v10H5z", "M8 11V7a4 4 0 0 1 8 0v4"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg class={classes!("icon", props.class.clone())} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
