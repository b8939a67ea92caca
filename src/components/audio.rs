use crate::components::context::UIState;
use crate::components::gen_funcs::format_time;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(AudioPlayer)]
pub fn audio_player() -> Html {
    let audio_ref = use_node_ref();
    let (audio_state, audio_dispatch) = use_store::<UIState>();

    let episode = audio_state.current_episode().cloned();
    let src = episode
        .as_ref()
        .map(|episode| episode.url.clone())
        .unwrap_or_default();

    // Reconcile the element with playback intent. Keyed on the source too,
    // so switching episodes picks the new track up without another toggle.
    {
        let audio_ref = audio_ref.clone();
        use_effect_with(
            (audio_state.audio_playing, src.clone()),
            move |(audio_playing, _)| {
                if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                    if *audio_playing {
                        let _ = audio_element.play();
                    } else {
                        let _ = audio_element.pause();
                    }
                }
                || ()
            },
        );
    }

    // Loop-on-end belongs to the element; while it loops, `ended` never
    // fires and play_next stays out of the picture.
    {
        let audio_ref = audio_ref.clone();
        use_effect_with(audio_state.audio_looping, move |audio_looping| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                audio_element.set_loop(*audio_looping);
            }
            || ()
        });
    }

    let on_loaded_metadata = {
        let audio_ref = audio_ref.clone();
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: Event| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                audio_element.set_current_time(0.0);
            }
            audio_dispatch.reduce_mut(|state| state.update_current_time(0.0));
        })
    };

    let on_time_update = {
        let audio_ref = audio_ref.clone();
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: Event| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                let time_in_seconds = audio_element.current_time();
                audio_dispatch.reduce_mut(move |state| state.update_current_time(time_in_seconds));
            }
        })
    };

    let on_ended = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: Event| {
            audio_dispatch.reduce_mut(UIState::play_next);
        })
    };

    // The element can start or stop on its own (autoplay, OS media keys);
    // write that back so the buttons stay honest.
    let on_play = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: Event| {
            audio_dispatch.reduce_mut(|state| state.set_playing_state(true));
        })
    };

    let on_pause = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: Event| {
            audio_dispatch.reduce_mut(|state| state.set_playing_state(false));
        })
    };

    // Seek moves the element and the displayed progress in the same step
    // instead of waiting for the next timeupdate.
    let on_seek = {
        let audio_ref = audio_ref.clone();
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<f64>() {
                    if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                        audio_element.set_current_time(value);
                    }
                    audio_dispatch.reduce_mut(move |state| state.update_current_time(value));
                }
            }
        })
    };

    let toggle_playback = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            audio_dispatch.reduce_mut(UIState::toggle_playback);
        })
    };

    let toggle_loop = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            audio_dispatch.reduce_mut(UIState::toggle_loop);
        })
    };

    let toggle_shuffle = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            audio_dispatch.reduce_mut(UIState::toggle_shuffle);
        })
    };

    let on_play_next = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            audio_dispatch.reduce_mut(UIState::play_next);
        })
    };

    let on_play_previous = {
        let audio_dispatch = audio_dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            audio_dispatch.reduce_mut(UIState::play_previous);
        })
    };

    let progress = if episode.is_some() {
        audio_state.current_time_seconds
    } else {
        0
    };
    let total = episode.as_ref().map(|episode| episode.duration).unwrap_or(0);

    html! {
        <div class="player-container">
            <header class="player-header">
                <span class="material-icons">{"headphones"}</span>
                <strong>{"Now playing"}</strong>
            </header>

            {
                if let Some(episode) = episode.as_ref() {
                    html! {
                        <div class="current-episode">
                            <img src={episode.thumbnail.clone()} alt={format!("Cover for {}", episode.title)} />
                            <strong>{ &episode.title }</strong>
                            <span>{ &episode.members }</span>
                        </div>
                    }
                } else {
                    html! {
                        <div class="empty-player">
                            <strong>{"Pick an episode to listen to"}</strong>
                        </div>
                    }
                }
            }

            <footer class={classes!("player-footer", episode.is_none().then_some("empty"))}>
                <div class="player-progress">
                    <span class="progress-time">{ format_time(progress) }</span>
                    {
                        if let Some(episode) = episode.as_ref() {
                            html! {
                                <input
                                    type="range"
                                    class="player-slider"
                                    min="0"
                                    max={episode.duration.to_string()}
                                    value={progress.to_string()}
                                    oninput={on_seek.clone()}
                                />
                            }
                        } else {
                            html! { <div class="empty-slider" /> }
                        }
                    }
                    <span class="progress-time">{ format_time(total) }</span>
                </div>

                {
                    if !src.is_empty() {
                        html! {
                            <audio
                                ref={audio_ref.clone()}
                                src={src.clone()}
                                autoplay={true}
                                onplay={on_play}
                                onpause={on_pause}
                                onended={on_ended}
                                onloadedmetadata={on_loaded_metadata}
                                ontimeupdate={on_time_update}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="player-buttons">
                    <button
                        type="button"
                        class={classes!("player-button", audio_state.audio_shuffling.then_some("is-active"))}
                        disabled={episode.is_none() || audio_state.episode_list.len() == 1}
                        onclick={toggle_shuffle}
                    >
                        <span class="material-icons">{"shuffle"}</span>
                    </button>
                    <button
                        type="button"
                        class="player-button"
                        disabled={episode.is_none() || !audio_state.has_previous()}
                        onclick={on_play_previous}
                    >
                        <span class="material-icons">{"skip_previous"}</span>
                    </button>
                    <button
                        type="button"
                        class="player-button play-button"
                        disabled={episode.is_none()}
                        onclick={toggle_playback}
                    >
                        <span class="material-icons">
                            { if audio_state.audio_playing { "pause" } else { "play_arrow" } }
                        </span>
                    </button>
                    <button
                        type="button"
                        class="player-button"
                        disabled={episode.is_none() || !audio_state.has_next()}
                        onclick={on_play_next}
                    >
                        <span class="material-icons">{"skip_next"}</span>
                    </button>
                    <button
                        type="button"
                        class={classes!("player-button", audio_state.audio_looping.then_some("is-active"))}
                        disabled={episode.is_none()}
                        onclick={toggle_loop}
                    >
                        <span class="material-icons">{"repeat"}</span>
                    </button>
                </div>
            </footer>
        </div>
    }
}
