use crate::components::context::{AppState, QueuedEpisode, UIState};
use crate::components::gen_funcs::{
    format_date, format_time, parse_date, sanitize_html_with_blank_target,
};
use crate::requests::pod_req;
use web_sys::console;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SafeHtmlProps {
    pub html: String,
}

// Injected markup goes through ammonia first; see gen_funcs.
#[function_component(SafeHtml)]
pub fn safe_html(props: &SafeHtmlProps) -> Html {
    let div = gloo_utils::document().create_element("div").unwrap();
    div.set_inner_html(&props.html.clone());

    Html::VRef(div.into())
}

#[derive(Properties, PartialEq)]
pub struct EpisodeDetailProps {
    pub id: String,
}

#[function_component(EpisodeDetail)]
pub fn episode_detail(props: &EpisodeDetailProps) -> Html {
    let episode = use_state(|| None::<pod_req::Episode>);
    let (state, dispatch) = use_store::<AppState>();
    let (_audio_state, audio_dispatch) = use_store::<UIState>();
    let history = BrowserHistory::new();

    {
        let episode = episode.clone();
        let dispatch = dispatch.clone();
        let server_name = state.server_name.clone();
        let episode_id = props.id.clone();
        use_effect_with((server_name.clone(), episode_id.clone()), move |_| {
            let episode_clone = episode.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pod_req::call_get_episode(&server_name, &episode_id).await {
                    Ok(fetched_episode) => {
                        episode_clone.set(Some(fetched_episode));
                    }
                    Err(e) => {
                        console::log_1(&format!("Failed to fetch episode: {:?}", e).into());
                        dispatch.reduce_mut(|state| {
                            state.error_message = Some(format!("Failed to fetch episode: {}", e))
                        });
                    }
                }
            });
            || ()
        });
    }

    let on_back_click = {
        let history = history.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            history.push("/");
        })
    };

    match episode.as_ref() {
        Some(episode) => {
            let on_play_click = {
                let queued_episode = QueuedEpisode::from(episode);
                let audio_dispatch = audio_dispatch.clone();
                Callback::from(move |_: MouseEvent| {
                    let queued_episode = queued_episode.clone();
                    audio_dispatch.reduce_mut(move |state| state.play(queued_episode));
                })
            };

            let description = sanitize_html_with_blank_target(&episode.description);

            html! {
                <div class="episode-container">
                    <div class="episode-thumbnail-container">
                        <button type="button" class="back-button" onclick={on_back_click}>
                            <span class="material-icons">{"arrow_back"}</span>
                        </button>
                        <img src={episode.thumbnail.clone()} alt={format!("Cover for {}", episode.title)} />
                        <button type="button" class="play-episode-button" onclick={on_play_click}>
                            <span class="material-icons">{"play_arrow"}</span>
                        </button>
                    </div>

                    <header class="episode-header">
                        <h1>{ &episode.title }</h1>
                        <span>{ &episode.members }</span>
                        <span>{ format_date(&parse_date(&episode.published_at)) }</span>
                        <span>{ format_time(episode.file.duration) }</span>
                    </header>

                    <div class="episode-description">
                        <SafeHtml html={description} />
                    </div>
                </div>
            }
        }
        None => {
            html! {
                <div class="episode-container">
                    <div class="episode-loading">
                        <p>{"Loading episode..."}</p>
                    </div>
                </div>
            }
        }
    }
}
