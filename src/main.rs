// Custom Mods
mod components;
mod requests;

#[cfg(test)]
mod tests;

use components::audio::AudioPlayer;
use components::episode::EpisodeDetail;
use components::gen_components::{ErrorMessage, Header};
use components::home::Home;
use components::routes::Route;
use yew_router::history::BrowserHistory;
use yew_router::history::History;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let on_home_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let history = BrowserHistory::new();
        history.push("/");
    });
    html! {
        <div class="not-found-container">
            <span class="material-icons not-found-icon">{"error_outline"}</span>
            <h1>{"404"}</h1>
            <p>{"This episode wandered off the feed."}</p>
            <button class="player-button" onclick={on_home_click}>
                {"Back to the episode list"}
            </button>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::EpisodeDetail { id } => html! { <EpisodeDetail id={id.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-wrapper">
                <main class="page-container">
                    <Header />
                    <Switch<Route> render={switch} />
                    <ErrorMessage />
                </main>
                <AudioPlayer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<Main>::new().render();
}
