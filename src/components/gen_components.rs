use crate::components::context::AppState;
use chrono::Utc;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yewdux::prelude::*;

pub enum AppStateMsg {
    ClearErrorMessage,
}

impl Reducer<AppState> for AppStateMsg {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        let state_mut = Rc::make_mut(&mut state);

        match self {
            AppStateMsg::ClearErrorMessage => {
                state_mut.error_message = None;
            }
        }

        state
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let history = BrowserHistory::new();
    let on_logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        history.push("/");
    });

    let today = Utc::now().format("%a, %-d %B").to_string();

    html! {
        <header class="app-header">
            <button class="logo-button" onclick={on_logo_click}>
                <span class="material-icons">{"podcasts"}</span>
                <strong>{"Podcaster"}</strong>
            </button>
            <p class="header-tagline">{"The best for you to hear, always"}</p>
            <span class="header-date">{ today }</span>
        </header>
    }
}

#[function_component(ErrorMessage)]
pub fn error_message() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let error_message = state.error_message.clone();

    // Any click dismisses the snackbar.
    {
        let dispatch = dispatch.clone();
        use_effect_with(error_message.clone(), move |error_message| {
            let listener = if error_message.is_some() {
                let document = web_sys::window()
                    .and_then(|window| window.document());
                if let Some(document) = document {
                    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                        dispatch.apply(AppStateMsg::ClearErrorMessage);
                    }) as Box<dyn Fn(web_sys::Event)>);
                    let _ = document
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                    Some((document, closure))
                } else {
                    None
                }
            } else {
                None
            };

            move || {
                if let Some((document, closure)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    if let Some(error) = error_message {
        html! {
            <div class="error-snackbar">{ error }</div>
        }
    } else {
        html! {}
    }
}
