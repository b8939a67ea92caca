use crate::components::context::{AppState, QueuedEpisode, UIState};
use crate::components::episode::SafeHtml;
use crate::components::gen_funcs::{
    format_date, format_time, parse_date, strip_html_tags, truncate_description,
};
use crate::requests::pod_req;
use web_sys::console;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yewdux::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let episodes = use_state(|| Vec::new());
    let (state, dispatch) = use_store::<AppState>();
    let (_audio_state, audio_dispatch) = use_store::<UIState>();
    let history = BrowserHistory::new();

    // Fetch the feed once per server.
    {
        let episodes = episodes.clone();
        let dispatch = dispatch.clone();
        let server_name = state.server_name.clone();
        use_effect_with(server_name.clone(), move |_| {
            let episodes_clone = episodes.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pod_req::call_get_episodes(&server_name).await {
                    Ok(fetched_episodes) => {
                        episodes_clone.set(fetched_episodes);
                    }
                    Err(e) => {
                        console::log_1(&format!("Failed to fetch episodes: {:?}", e).into());
                        dispatch.reduce_mut(|state| {
                            state.error_message = Some(format!("Failed to fetch episodes: {}", e))
                        });
                    }
                }
            });
            || ()
        });
    }

    // Every play button hands the store the whole feed plus its own
    // position, so next/previous walk the full list.
    let on_play_click = |index: usize| {
        let episodes = episodes.clone();
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let list: Vec<QueuedEpisode> = episodes.iter().map(QueuedEpisode::from).collect();
            audio_dispatch.reduce_mut(move |state| state.play_list(list, index));
        })
    };

    let on_episode_click = |episode_id: String| {
        let history = history.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            history.push(format!("/episode/{}", episode_id));
        })
    };

    let latest_episodes = episodes
        .iter()
        .take(2)
        .enumerate()
        .map(|(index, episode)| {
            let (snippet, _) = truncate_description(strip_html_tags(&episode.description), 160);
            html! {
                <li class="latest-episode">
                    <img src={episode.thumbnail.clone()} alt={format!("Cover for {}", episode.title)} />
                    <div class="episode-details">
                        <a href={format!("/episode/{}", episode.id)} onclick={on_episode_click(episode.id.clone())}>
                            { &episode.title }
                        </a>
                        <p>{ &episode.members }</p>
                        <div class="episode-snippet">
                            <SafeHtml html={snippet} />
                        </div>
                        <span>{ format_date(&parse_date(&episode.published_at)) }</span>
                        <span class="episode-duration">{ format_time(episode.file.duration) }</span>
                    </div>
                    <button type="button" class="play-episode-button" onclick={on_play_click(index)}>
                        <span class="material-icons">{"play_arrow"}</span>
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let all_episodes = episodes
        .iter()
        .enumerate()
        .skip(2)
        .map(|(index, episode)| {
            html! {
                <tr>
                    <td class="episode-thumbnail-cell">
                        <img src={episode.thumbnail.clone()} alt={format!("Cover for {}", episode.title)} />
                    </td>
                    <td>
                        <a href={format!("/episode/{}", episode.id)} onclick={on_episode_click(episode.id.clone())}>
                            { &episode.title }
                        </a>
                    </td>
                    <td>{ &episode.members }</td>
                    <td class="episode-date-cell">{ format_date(&parse_date(&episode.published_at)) }</td>
                    <td>{ format_time(episode.file.duration) }</td>
                    <td>
                        <button type="button" class="play-episode-button" onclick={on_play_click(index)}>
                            <span class="material-icons">{"play_arrow"}</span>
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="episodes-container">
            {
                if episodes.is_empty() {
                    html! {
                        <div class="empty-episodes-container">
                            <span class="material-icons">{"podcasts"}</span>
                            <h1>{ "No episodes yet" }</h1>
                            <p>{"New episodes land here as soon as the feed has them."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <section class="latest-episodes">
                                <h2>{"Latest releases"}</h2>
                                <ul>
                                    { latest_episodes }
                                </ul>
                            </section>

                            <section class="all-episodes">
                                <h2>{"All episodes"}</h2>
                                <table cellspacing="0">
                                    <thead>
                                        <tr>
                                            <th></th>
                                            <th>{"Podcast"}</th>
                                            <th>{"Members"}</th>
                                            <th>{"Date"}</th>
                                            <th>{"Duration"}</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { all_episodes }
                                    </tbody>
                                </table>
                            </section>
                        </>
                    }
                }
            }
        </div>
    }
}
