use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod clock;
mod config;
mod contact;
mod motion;
mod nav;
mod timer;
mod components {
    pub mod anchor_link;
    pub mod contact_form;
    pub mod icon;
    pub mod layout;
    pub mod reveal;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use config::SiteConfig;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.site.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let site = match SiteConfig::load() {
        Ok(site) => site,
        Err(err) => {
            error!("Invalid site configuration: {err}");
            return;
        }
    };

    info!(
        "Starting portfolio for {} ({} nav sections)",
        site.full_name(),
        site.nav.entries.len()
    );
    yew::Renderer::<App>::with_props(AppProps {
        site: Rc::new(site),
    })
    .render();
}
