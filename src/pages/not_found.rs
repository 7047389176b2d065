use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0a0c0a;
                        color: #f4f4f5;
                        font-family: "JetBrains Mono", ui-monospace, monospace;
                        letter-spacing: 0.2em;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        margin: 0;
                        color: rgb(74, 222, 128);
                    }
                    .not-found a {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.75rem;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"SIGNAL PERDU // CIBLE INTROUVABLE"}</p>
            <Link<Route> to={Route::Home}>{"> RETOUR À LA BASE"}</Link<Route>>
        </div>
    }
}
