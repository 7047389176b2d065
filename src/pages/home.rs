use std::rc::Rc;

use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactForm;
use crate::components::icon::{Icon, IconView};
use crate::components::layout::Layout;
use crate::components::reveal::Reveal;
use crate::config::{Card, Project, SiteConfig};
use crate::motion::Preset;

#[derive(Properties, PartialEq)]
struct SideTitleProps {
    icon: Icon,
    title: String,
    #[prop_or_default]
    caption: Option<String>,
}

/// Sticky left-column title used by the two-column sections.
#[function_component(SideTitle)]
fn side_title(props: &SideTitleProps) -> Html {
    html! {
        <Reveal preset={Preset::FadeInLeft} class={classes!("side-title")}>
            <div class="side-title-row">
                <IconView icon={props.icon} class={classes!("section-icon")} />
                <h2>{ props.title.clone() }</h2>
            </div>
            <div class="accent-line" />
            {
                match &props.caption {
                    Some(caption) => html! { <p class="caption">{ caption.clone() }</p> },
                    None => html! {},
                }
            }
        </Reveal>
    }
}

fn card_view(card: &Card, index: usize) -> Html {
    html! {
        <Reveal index={index} class={classes!("card")}>
            <h3 class="card-title">{ card.title.clone() }</h3>
            {
                match &card.text {
                    Some(text) => html! { <p>{ text.clone() }</p> },
                    None => html! {},
                }
            }
            if !card.items.is_empty() {
                <ul class="card-items">
                    { for card.items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                </ul>
            }
        </Reveal>
    }
}

fn badges(tags: &[String], class: &'static str) -> Html {
    html! {
        <div class="badges">
            { for tags.iter().map(|tag| html! { <span class={classes!("badge", class)}>{ tag.clone() }</span> }) }
        </div>
    }
}

fn project_view(project: &Project, index: usize) -> Html {
    let status = project.status.as_ref().map(|status| {
        let pending = status.to_lowercase().contains("développement");
        html! {
            <span class={classes!("project-status", pending.then_some("pending"))}>{ status.clone() }</span>
        }
    });

    html! {
        <Reveal preset={Preset::ScaleIn} index={index} class={classes!("project")}>
            <div class="project-visual">
                <div class="float" style={format!("animation-delay: {}ms;", index * 400)}>
                    <IconView icon={project.icon} class={classes!("project-icon")} />
                </div>
                { for status }
            </div>
            <div class="project-body">
                <h3>{ project.title.clone() }</h3>
                <p>{ project.desc.clone() }</p>
                { badges(&project.tags, "secondary") }
            </div>
        </Reveal>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let site = use_context::<Rc<SiteConfig>>().expect("Hero rendered outside the site context");
    let profile = &site.profile;

    html! {
        <section id="top" class="hero">
            <div class="hero-inner">
                <Reveal index={0_usize} class={classes!("hero-tag")}>
                    <div class="hero-tag-line" />
                    <span>{ profile.tagline.clone() }</span>
                </Reveal>
                <Reveal index={1_usize}>
                    <h1 class="hero-title">
                        { profile.first_name.to_uppercase() }<br />
                        <span class="hero-title-alt">{ profile.last_name.to_uppercase() }</span>
                    </h1>
                </Reveal>
                <Reveal index={2_usize}>
                    <p class="hero-subtitle">{ profile.subtitle.clone() }</p>
                </Reveal>
                <Reveal preset={Preset::FadeInLeft} index={3_usize}>
                    <p class="hero-summary">{ profile.summary.clone() }</p>
                </Reveal>
                <Reveal index={4_usize} class={classes!("hero-actions")}>
                    <a class="btn btn-primary" href={profile.cv_href.clone()} download="">
                        <IconView icon={Icon::Download} />{"TÉLÉCHARGER MON CV"}
                    </a>
                    <a class="btn btn-outline" href={profile.linkedin_href.clone()} target="_blank" rel="noopener noreferrer">
                        <IconView icon={Icon::Linkedin} />{"LINKEDIN"}
                    </a>
                    <AnchorLink anchor="contact" class={classes!("btn", "btn-outline")}>
                        <IconView icon={Icon::Send} />{"PRENDRE CONTACT"}
                    </AnchorLink>
                </Reveal>
            </div>
            <Reveal preset={Preset::FadeInLeft} index={6_usize} class={classes!("hero-hud")}>
                { for profile.status_lines.iter().enumerate().map(|(i, (key, value))| html! {
                    <div class="hero-hud-row">
                        <span>{ key.clone() }</span>
                        <span class={classes!((i == 0).then(|| classes!("text-primary", "cursor-blink")))}>{ value.clone() }</span>
                    </div>
                }) }
            </Reveal>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_context::<Rc<SiteConfig>>().expect("Home rendered outside the site context");

    html! {
        <Layout>
            <style>{ HOME_CSS }</style>
            <Hero />

            <div class="sections">
                <section id="about" class="section two-col">
                    <SideTitle icon={Icon::User} title="Qui suis-je ?" />
                    <div class="stack">
                        <Reveal class={classes!("about-intro")}>
                            {
                                match &site.about.photo {
                                    Some(photo) => html! { <img class="portrait" src={photo.clone()} alt={site.full_name()} /> },
                                    None => html! {},
                                }
                            }
                            <p class="lead">{ site.about.intro.clone() }</p>
                        </Reveal>
                        <div class="grid-2">
                            { for site.about.cards.iter().enumerate().map(|(i, card)| card_view(card, i)) }
                        </div>
                    </div>
                </section>

                <section id="alternance" class="section two-col">
                    <SideTitle icon={Icon::Target} title="Alternance" caption={site.apprenticeship.period.clone()} />
                    <div class="stack">
                        <Reveal><p class={classes!("lead")}>{ site.apprenticeship.intro.clone() }</p></Reveal>
                        <div class="grid-2">
                            { for site.apprenticeship.motivations.iter().enumerate().map(|(i, card)| card_view(card, i)) }
                        </div>
                        <Reveal class={classes!("card")}>
                            <h3 class="card-title">{"Missions visées — Technicien Supérieur"}</h3>
                            { badges(&site.apprenticeship.missions, "outline") }
                        </Reveal>
                    </div>
                </section>

                <section id="exp" class="section two-col">
                    <SideTitle icon={Icon::Briefcase} title="Expériences" />
                    <div class="stack timeline">
                        { for site.experiences.iter().enumerate().map(|(i, exp)| html! {
                            <Reveal index={i} class={classes!("timeline-item")}>
                                <div class="timeline-head">
                                    <h3>{ exp.role.clone() }</h3>
                                    <span class="muted mono">{ exp.date.clone() }</span>
                                </div>
                                <div class="company">{ exp.company.clone() }</div>
                                <ul class="points">
                                    { for exp.points.iter().map(|p| html! { <li>{ p.clone() }</li> }) }
                                </ul>
                                { badges(&exp.tags, "outline") }
                                {
                                    match &exp.photo {
                                        Some(photo) => html! { <img class="timeline-photo" src={photo.clone()} alt={exp.role.clone()} /> },
                                        None => html! {},
                                    }
                                }
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="edu" class="section two-col">
                    <SideTitle icon={Icon::GraduationCap} title="Formations" />
                    <div class="stack">
                        { for site.education.iter().enumerate().map(|(i, edu)| html! {
                            <Reveal index={i} class={classes!("card")}>
                                <div class="timeline-head">
                                    <h3>{ edu.degree.clone() }</h3>
                                    <span class="muted mono">{ edu.period.clone() }</span>
                                </div>
                                <div class="company">{ edu.school.clone() }</div>
                                <p>{ edu.detail.clone() }</p>
                                if !edu.modules.is_empty() {
                                    <>
                                        <span class="caption">{"Matières clés"}</span>
                                        <ul class="grid-2 modules">
                                            { for edu.modules.iter().map(|m| html! { <li>{ m.clone() }</li> }) }
                                        </ul>
                                    </>
                                }
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="skills" class="section wide">
                    <Reveal class={classes!("centered-title")}>
                        <span class="caption">{"Capabilities Matrix"}</span>
                        <h2>{"Compétences"}</h2>
                    </Reveal>
                    <div class="grid-4">
                        { for site.skills.categories.iter().enumerate().map(|(i, category)| html! {
                            <Reveal preset={Preset::ScaleIn} index={i} class={classes!("card")}>
                                <div class="side-title-row">
                                    <IconView icon={category.icon} class={classes!("section-icon")} />
                                    <h3 class="card-title">{ category.label.clone() }</h3>
                                </div>
                                <ul class="skills">
                                    { for category.skills.iter().map(|skill| html! {
                                        <li>
                                            <span class="skill-name">{ skill.name.clone() }</span>
                                            <span class="skill-desc">{ skill.desc.clone() }</span>
                                        </li>
                                    }) }
                                </ul>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal class={classes!("soft-skills")}>
                        <IconView icon={Icon::Shield} />
                        <span class="caption">{"Savoir-être"}</span>
                        { badges(&site.skills.soft_skills, "outline") }
                    </Reveal>
                </section>

                <section id="projects" class="section wide">
                    <Reveal class={classes!("row-title")}>
                        <h2>{"Projets Académiques"}</h2>
                        <div class="rule" />
                    </Reveal>
                    <div class="grid-3">
                        { for site.academic_projects.iter().enumerate().map(|(i, p)| project_view(p, i)) }
                    </div>
                </section>

                <section id="perso" class="section wide">
                    <Reveal class={classes!("row-title")}>
                        <h2>{"Projets Personnels"}</h2>
                        <div class="rule" />
                        <span class="caption">{"Initiative propre"}</span>
                    </Reveal>
                    <div class="grid-3">
                        { for site.personal_projects.iter().enumerate().map(|(i, p)| project_view(p, i)) }
                    </div>
                </section>

                <section id="why" class="section why">
                    <Reveal class={classes!("centered-title")}>
                        <IconView icon={Icon::Globe} class={classes!("why-icon")} />
                        <h2>{"Pourquoi me choisir ?"}</h2>
                    </Reveal>
                    <div class="grid-2">
                        { for site.reasons.iter().enumerate().map(|(i, reason)| html! {
                            <Reveal index={i} class={classes!("reason")}>
                                <h3>
                                    <span class="text-primary mono">{ format!("{:02}", i + 1) }</span>
                                    <span>{ reason.title.clone() }</span>
                                </h3>
                                <p>{ reason.desc.clone() }</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="contact" class="section narrow">
                    <Reveal class={classes!("centered-title")}>
                        <h2>{"Uplink"}</h2>
                        <p class="muted">{"Canal de communication direct."}</p>
                        <div class="contact-links">
                            { for site.contact_links.iter().map(|link| html! {
                                <a class="contact-link" href={link.href.clone()}
                                    target={link.external.then_some("_blank")}
                                    rel={link.external.then_some("noopener noreferrer")}>
                                    <IconView icon={link.icon} />
                                    { link.label.clone() }
                                </a>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal preset={Preset::ScaleIn} class={classes!("contact-panel")}>
                        <p class="caption centered">{"— ou via le formulaire —"}</p>
                        <ContactForm />
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}

const HOME_CSS: &str = r#"
.mono { font-family: var(--font-mono); }
.muted { color: var(--muted); }
.caption {
    display: block;
    font-family: var(--font-mono);
    font-size: 10px;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: rgba(var(--primary-rgb), 0.7);
}
.centered { text-align: center; }
.hero {
    position: relative;
    min-height: 90vh;
    display: flex;
    align-items: center;
    padding: 0 4rem;
    scroll-margin-top: 6rem;
}
.hero-inner { max-width: 72rem; margin: 0 auto; width: 100%; }
.hero-tag { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem;
    font-family: var(--font-mono); font-size: 10px; letter-spacing: 0.4em;
    text-transform: uppercase; color: rgb(var(--primary-rgb)); }
.hero-tag-line { width: 48px; height: 1px; background: rgb(var(--primary-rgb)); }
.hero-title { font-family: var(--font-display); font-size: clamp(3.5rem, 10vw, 8rem);
    line-height: 0.9; letter-spacing: -0.04em; margin: 0 0 1rem; }
.hero-title-alt { color: rgba(var(--primary-rgb), 0.6); font-style: italic; font-weight: 300; }
.hero-subtitle { font-family: var(--font-mono); font-size: 0.75rem; color: var(--muted); letter-spacing: 0.2em; }
.hero-summary { font-size: 1.35rem; font-weight: 300; line-height: 1.6; max-width: 42rem;
    color: rgba(255, 255, 255, 0.75); border-left: 1px solid rgba(255, 255, 255, 0.1);
    padding-left: 2rem; margin-bottom: 3rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-hud { position: absolute; right: 5rem; bottom: 5rem; font-family: var(--font-mono);
    font-size: 10px; color: rgba(var(--primary-rgb), 0.55); }
.hero-hud-row { display: flex; justify-content: space-between; gap: 2rem; margin-top: 0.5rem; }
.btn { display: inline-flex; align-items: center; gap: 0.75rem; height: 3.5rem; padding: 0 2.5rem;
    font-weight: 700; letter-spacing: 0.1em; text-decoration: none; color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.2); background: transparent; cursor: pointer;
    transition: transform 0.2s, background 0.2s; }
.btn:hover { transform: scale(1.02); background: rgba(255, 255, 255, 0.05); }
.btn:active { transform: scale(0.97); }
.btn .icon { width: 1.25rem; height: 1.25rem; }
.btn-primary { background: rgb(var(--primary-rgb)); color: #0a0c0a; border-color: rgba(255, 255, 255, 0.1); }
.btn-primary:hover { background: rgba(var(--primary-rgb), 0.8); }
.btn-block { width: 100%; justify-content: center; }
.sections { display: flex; flex-direction: column; gap: 8rem; padding: 8rem 0; }
.section { margin: 0 auto; padding: 0 2rem; width: 100%; box-sizing: border-box; scroll-margin-top: 6rem; }
.section h2 { font-family: var(--font-display); text-transform: uppercase; letter-spacing: 0.15em; margin: 0; }
.two-col { max-width: 64rem; display: grid; grid-template-columns: 1fr 2fr; gap: 4rem; align-items: start; }
.wide { max-width: 72rem; }
.narrow { max-width: 42rem; }
.side-title { position: sticky; top: 8rem; }
.side-title-row { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
.section-icon { width: 1.25rem; height: 1.25rem; color: rgb(var(--primary-rgb)); }
.stack { display: flex; flex-direction: column; gap: 2rem; }
.lead { font-size: 1.25rem; font-weight: 300; line-height: 1.7; color: rgba(255, 255, 255, 0.8); }
.about-intro { display: flex; gap: 1.5rem; align-items: flex-start; }
.portrait { width: 8rem; height: 10rem; object-fit: cover; border: 1px solid rgba(255, 255, 255, 0.15); }
.grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin: 4rem 0 1rem; }
.card { padding: 1.5rem; border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05);
    transition: transform 0.2s; }
.card:hover { transform: translateY(-2px); }
.card-title { font-family: var(--font-mono); font-size: 0.75rem; letter-spacing: 0.2em;
    text-transform: uppercase; color: rgb(var(--primary-rgb)); margin: 0 0 0.75rem; }
.card-items, .points, .skills, .modules { list-style: none; padding: 0; margin: 0;
    font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }
.card-items li, .points li { padding: 0.25rem 0; }
.points li::before { content: '› '; color: rgb(var(--primary-rgb)); }
.badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
.badge { font-size: 10px; padding: 0.25rem 0.5rem; border: 1px solid rgba(255, 255, 255, 0.15); }
.badge.secondary { background: rgba(255, 255, 255, 0.08); border-color: transparent; }
.badge:hover { border-color: rgba(var(--primary-rgb), 0.3); }
.timeline-item { padding: 0 0 3rem 1.25rem; border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    border-left: 1px solid rgba(var(--primary-rgb), 0.3); }
.timeline-head { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
.timeline-head h3 { font-size: 1.5rem; margin: 0; }
.timeline-photo { width: 11rem; height: 13rem; object-fit: cover; margin-top: 1rem; }
.company { font-family: var(--font-mono); font-size: 0.75rem; letter-spacing: 0.2em;
    color: rgb(var(--primary-rgb)); margin: 0.5rem 0 1.5rem; }
.skill-name { display: block; font-weight: 600; }
.skill-desc { display: block; font-size: 0.75rem; color: var(--muted); margin-bottom: 0.75rem; }
.soft-skills { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem;
    padding: 1rem; border: 1px solid rgba(255, 255, 255, 0.05); background: rgba(255, 255, 255, 0.05); }
.soft-skills .badges { margin-top: 0; }
.centered-title { text-align: center; margin-bottom: 3rem; }
.row-title { display: flex; align-items: center; gap: 2rem; margin-bottom: 4rem; }
.rule { flex: 1; height: 1px; background: rgba(255, 255, 255, 0.05); }
.project { border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(255, 255, 255, 0.05);
    transition: border-color 0.3s; }
.project:hover { border-color: rgba(var(--primary-rgb), 0.4); }
.project-visual { position: relative; height: 10rem; display: flex; align-items: center; justify-content: center;
    border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
.project-icon { width: 2.5rem; height: 2.5rem; color: rgba(var(--primary-rgb), 0.4); }
.project:hover .project-icon { color: rgba(var(--primary-rgb), 0.7); }
.project-status { position: absolute; top: 0.75rem; right: 0.75rem; font-family: var(--font-mono);
    font-size: 9px; letter-spacing: 0.2em; text-transform: uppercase; padding: 0.25rem 0.5rem;
    border: 1px solid rgba(var(--primary-rgb), 0.4); color: rgb(var(--primary-rgb)); }
.project-status.pending { border-color: rgba(234, 179, 8, 0.4); color: rgb(234, 179, 8); }
.project-body { padding: 1.5rem; }
.project-body p { font-size: 0.875rem; line-height: 1.6; color: rgba(255, 255, 255, 0.7); }
.why { max-width: 56rem; padding: 6rem 2rem; background: rgba(var(--primary-rgb), 0.05);
    border-top: 1px solid rgba(var(--primary-rgb), 0.1); border-bottom: 1px solid rgba(var(--primary-rgb), 0.1); }
.why-icon { width: 2.5rem; height: 2.5rem; color: rgb(var(--primary-rgb)); margin-bottom: 2rem; }
.reason h3 { display: flex; gap: 0.75rem; align-items: center; }
.reason p { font-size: 0.875rem; font-weight: 300; line-height: 1.7; color: rgba(255, 255, 255, 0.7); }
.contact-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin: 2rem 0 3rem; }
.contact-link { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem;
    font-family: var(--font-mono); font-size: 0.75rem; color: rgba(255, 255, 255, 0.65);
    text-decoration: none; border: 1px solid rgba(255, 255, 255, 0.1); }
.contact-link:hover { color: rgb(var(--primary-rgb)); border-color: rgba(var(--primary-rgb), 0.3); }
.contact-panel { padding: 2rem; border: 1px solid rgba(255, 255, 255, 0.1);
    border-top: 1px solid rgba(var(--primary-rgb), 0.5); background: var(--background); }
.contact-form { display: flex; flex-direction: column; gap: 2rem; margin-top: 1.5rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.form-field { display: flex; flex-direction: column; gap: 0.5rem; }
.form-label { font-family: var(--font-mono); font-size: 10px; text-transform: uppercase; color: rgba(255, 255, 255, 0.6); }
.form-field input, .form-field textarea { background: rgba(255, 255, 255, 0.05); color: rgba(255, 255, 255, 0.9);
    border: 1px solid rgba(255, 255, 255, 0.1); padding: 0.75rem; font: inherit; }
.form-field input:focus, .form-field textarea:focus { outline: none; border-color: rgb(var(--primary-rgb)); }
.form-error { margin: 0; font-size: 0.75rem; color: #f87171; }
@media (max-width: 900px) {
    .two-col, .grid-2, .grid-3, .grid-4, .form-row { grid-template-columns: 1fr; }
    .hero { padding: 0 2rem; }
    .hero-hud { display: none; }
    .side-title { position: static; }
}
"#;
