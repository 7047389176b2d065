use std::rc::Rc;

use chrono_tz::Tz;
use yew::prelude::*;

use crate::clock::{use_clock, ClockValue};
use crate::components::icon::{Icon, IconView};
use crate::config::{HudSettings, SiteConfig};
use crate::motion::MOTION_CSS;
use crate::nav::{use_section_nav, NavEntry, NavPhase, SectionNav};

#[derive(Properties, PartialEq)]
pub struct HudClockProps {
    pub time: ClockValue,
    pub zone: Tz,
}

#[function_component(HudClock)]
fn hud_clock(props: &HudClockProps) -> Html {
    html! {
        <span class="hud-clock">
            { format!("{} {}", props.time.hms_in(props.zone), props.time.zone_abbreviation(props.zone)) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    entries: Vec<NavEntry>,
    nav: SectionNav,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <nav class={classes!("hud-nav", (props.nav.phase == NavPhase::Navigating).then_some("navigating"))}>
            { for props.entries.iter().map(|entry| {
                let anchor = entry.anchor_id.clone();
                let navigate = props.nav.navigate.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    navigate.emit(anchor.clone());
                });
                let active = props.nav.is_active(&entry.anchor_id);
                html! {
                    <a key={entry.anchor_id.clone()}
                        href={entry.href()}
                        class={classes!("hud-nav-link", active.then_some("active"))}
                        aria-current={active.then_some("location")}
                        {onclick}>
                        <span class="hud-nav-caret">{">"}</span>
                        {
                            match entry.icon {
                                Some(icon) => html! { <IconView icon={icon} class={classes!("hud-nav-icon")} /> },
                                None => html! {},
                            }
                        }
                        { entry.label.clone() }
                    </a>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    hud: HudSettings,
}

#[function_component(HudFooter)]
fn hud_footer(props: &FooterProps) -> Html {
    html! {
        <footer class="hud-footer">
            <div>{ format!("COORDINATES: {}", props.hud.coordinates) }</div>
            <div class="hud-footer-right">
                <span>{ format!("VERSION {}", props.hud.version) }</span>
                <span class="text-primary">{ props.hud.status.clone() }</span>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// HUD shell: fixed header with clock and section nav, fixed footer.
/// Owns the section controller and shares it with the page by context.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let site = use_context::<Rc<SiteConfig>>().expect("Layout rendered outside the site context");
    let time = use_clock();
    let nav = use_section_nav(&site.nav);
    let zone = site.clock_zone().unwrap_or(Tz::UTC);

    html! {
        <div class="shell">
            <style>{ MOTION_CSS }</style>
            <style>{ LAYOUT_CSS }</style>
            <header class="hud-header">
                <div class="hud-status">
                    <div class="status-dot pulse" />
                    <span class="text-primary">{"SYSTEM ONLINE"}</span>
                    <HudClock time={time} zone={zone} />
                </div>
                <NavLinks entries={site.nav.entries.clone()} nav={nav.clone()} />
                <div class="secure-badge">
                    <span>{"SECURE_CONN"}</span>
                    <IconView icon={Icon::Lock} class={classes!("secure-badge-icon")} />
                </div>
            </header>

            <main class="shell-main">
                <div class="grid-lines" aria-hidden="true">
                    <div class="grid-line h top" />
                    <div class="grid-line h bottom" />
                    <div class="grid-line v left" />
                    <div class="grid-line v right" />
                </div>
                <ContextProvider<SectionNav> context={nav}>
                    <div class="shell-content">
                        { for props.children.iter() }
                    </div>
                </ContextProvider<SectionNav>>
            </main>

            <HudFooter hud={site.hud.clone()} />
        </div>
    }
}

const LAYOUT_CSS: &str = r#"
:root {
    --primary-rgb: 74, 222, 128;
    --background: #0a0c0a;
    --muted: rgba(255, 255, 255, 0.5);
    --font-mono: "JetBrains Mono", ui-monospace, monospace;
    --font-display: "Rajdhani", "Inter", sans-serif;
}
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: var(--background);
    color: #f4f4f5;
    font-family: "Inter", system-ui, sans-serif;
}
::selection { background: rgba(var(--primary-rgb), 0.3); }
.text-primary { color: rgb(var(--primary-rgb)); }
.shell { min-height: 100vh; }
.hud-header {
    position: fixed;
    top: 0; left: 0; right: 0;
    z-index: 50;
    height: 4rem;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(10, 12, 10, 0.8);
    backdrop-filter: blur(12px);
}
.hud-status {
    display: flex;
    align-items: center;
    gap: 1rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    letter-spacing: 0.2em;
}
.status-dot {
    width: 0.5rem; height: 0.5rem;
    border-radius: 50%;
    background: rgb(var(--primary-rgb));
}
.hud-clock { color: var(--muted); }
.hud-nav { display: flex; gap: 2rem; }
.hud-nav-link {
    position: relative;
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    color: var(--muted);
    text-decoration: none;
    transition: color 0.2s;
}
.hud-nav-link:hover, .hud-nav-link.active { color: rgb(var(--primary-rgb)); }
.hud-nav-caret {
    position: absolute;
    left: -0.9rem;
    opacity: 0;
    color: rgb(var(--primary-rgb));
}
.hud-nav-link:hover .hud-nav-caret, .hud-nav-link.active .hud-nav-caret { opacity: 1; }
.hud-nav-icon { width: 0.8rem; height: 0.8rem; }
.secure-badge {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-family: var(--font-mono);
    font-size: 0.75rem;
    color: rgb(var(--primary-rgb));
    border: 1px solid rgba(var(--primary-rgb), 0.3);
    background: rgba(var(--primary-rgb), 0.05);
    padding: 0.25rem 0.75rem;
}
.secure-badge-icon, .icon { width: 0.75rem; height: 0.75rem; }
.shell-main { position: relative; padding: 4rem 0 5rem; overflow: hidden; }
.shell-content { position: relative; z-index: 10; }
.grid-lines { position: fixed; inset: 0; pointer-events: none; opacity: 0.2; }
.grid-line { position: absolute; background: rgba(var(--primary-rgb), 0.2); }
.grid-line.h { left: 0; width: 100%; height: 1px; }
.grid-line.v { top: 0; height: 100%; width: 1px; }
.grid-line.top { top: 20%; }
.grid-line.bottom { top: 80%; }
.grid-line.left { left: 10%; }
.grid-line.right { right: 10%; }
.hud-footer {
    position: fixed;
    bottom: 0; left: 0; right: 0;
    z-index: 50;
    height: 2.5rem;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(10, 12, 10, 0.9);
    font-family: var(--font-mono);
    font-size: 10px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--muted);
}
.hud-footer-right { display: flex; gap: 1rem; }
@media (max-width: 768px) {
    .hud-nav, .hud-clock { display: none; }
}
"#;
