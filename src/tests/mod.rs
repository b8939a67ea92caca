// src/tests/mod.rs
use crate::components::context::{AppState, QueuedEpisode, UIState};
use crate::components::gen_funcs::{
    format_date, format_time, parse_date, sanitize_html_with_blank_target, strip_html_tags,
    truncate_description,
};
use crate::components::routes::Route;

fn sample_episode(id: &str) -> QueuedEpisode {
    QueuedEpisode {
        id: id.to_string(),
        title: format!("Episode {}", id),
        thumbnail: format!("http://localhost:3333/covers/{}.jpg", id),
        members: "Ana, Diego".to_string(),
        duration: 200,
        url: format!("http://localhost:3333/audio/{}.mp3", id),
    }
}

fn sample_queue(n: usize) -> Vec<QueuedEpisode> {
    (0..n).map(|i| sample_episode(&i.to_string())).collect()
}

#[test]
fn test_default_state_has_nothing_playing() {
    let state = UIState::default();
    assert!(state.episode_list.is_empty());
    assert_eq!(state.current_episode_index, 0);
    assert!(state.current_episode().is_none());
    assert!(!state.audio_playing);
    assert!(!state.has_next());
    assert!(!state.has_previous());
}

#[test]
fn test_play_replaces_queue_with_single_episode() {
    let mut state = UIState::default();
    state.play_list(sample_queue(4), 2);
    state.audio_looping = true;
    state.audio_shuffling = true;
    state.audio_playing = false;

    state.play(sample_episode("solo"));

    assert_eq!(state.episode_list.len(), 1);
    assert_eq!(state.current_episode_index, 0);
    assert_eq!(state.current_episode().unwrap().id, "solo");
    assert!(state.audio_playing);
    // Loop and shuffle are independent of what got played.
    assert!(state.audio_looping);
    assert!(state.audio_shuffling);
}

#[test]
fn test_play_list_sets_queue_index_and_playing() {
    let mut state = UIState::default();
    state.play_list(sample_queue(5), 3);

    assert_eq!(state.episode_list.len(), 5);
    assert_eq!(state.current_episode_index, 3);
    assert_eq!(state.current_episode().unwrap().id, "3");
    assert!(state.audio_playing);
}

#[test]
fn test_play_list_clamps_out_of_range_index() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 17);

    assert_eq!(state.current_episode_index, 2);
    assert_eq!(state.current_episode().unwrap().id, "2");
}

#[test]
fn test_play_list_with_empty_list_clears_playback() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 1);
    state.play_list(Vec::new(), 5);

    assert!(state.episode_list.is_empty());
    assert_eq!(state.current_episode_index, 0);
    assert!(state.current_episode().is_none());
}

#[test]
fn test_toggles_are_self_inverse_and_leave_queue_alone() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 1);
    let queue_before = state.episode_list.clone();
    let playing_before = state.audio_playing;

    state.toggle_loop();
    assert!(state.audio_looping);
    state.toggle_loop();
    assert!(!state.audio_looping);

    state.toggle_shuffle();
    assert!(state.audio_shuffling);
    state.toggle_shuffle();
    assert!(!state.audio_shuffling);

    state.toggle_playback();
    state.toggle_playback();
    assert_eq!(state.audio_playing, playing_before);

    assert_eq!(state.episode_list, queue_before);
    assert_eq!(state.current_episode_index, 1);
}

#[test]
fn test_set_playing_state_is_explicit_assignment() {
    let mut state = UIState::default();
    state.play_list(sample_queue(2), 0);

    state.set_playing_state(false);
    assert!(!state.audio_playing);
    state.set_playing_state(false);
    assert!(!state.audio_playing);
    state.set_playing_state(true);
    assert!(state.audio_playing);
}

#[test]
fn test_has_next_is_true_whenever_shuffling() {
    let mut state = UIState::default();
    state.play_list(sample_queue(1), 0);
    assert!(!state.has_next());

    state.toggle_shuffle();
    assert!(state.has_next());
}

#[test]
fn test_has_previous_is_false_only_at_index_zero() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 0);
    assert!(!state.has_previous());

    state.play_next();
    assert!(state.has_previous());
    state.play_next();
    assert!(state.has_previous());
}

#[test]
fn test_play_next_walks_queue_then_clears() {
    let mut state = UIState::default();
    state.play_list(sample_queue(2), 0);

    state.play_next();
    assert_eq!(state.current_episode_index, 1);
    assert_eq!(state.current_episode().unwrap().id, "1");

    // Running off the end of a non-looping, non-shuffling queue lands in
    // the terminal "nothing playing" state.
    state.play_next();
    assert!(state.episode_list.is_empty());
    assert_eq!(state.current_episode_index, 0);
    assert!(state.current_episode().is_none());
}

#[test]
fn test_play_next_is_monotonic_until_the_end() {
    let mut state = UIState::default();
    state.play_list(sample_queue(5), 0);

    let mut last_index = state.current_episode_index;
    while !state.episode_list.is_empty() {
        state.play_next();
        if !state.episode_list.is_empty() {
            assert!(state.current_episode_index > last_index);
            last_index = state.current_episode_index;
        }
    }
    assert_eq!(last_index, 4);
}

#[test]
fn test_play_previous_is_noop_at_index_zero() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 0);

    state.play_previous();
    assert_eq!(state.current_episode_index, 0);
    assert_eq!(state.episode_list.len(), 3);
}

#[test]
fn test_play_previous_never_wraps_even_when_looping() {
    let mut state = UIState::default();
    state.play_list(sample_queue(3), 0);
    state.toggle_loop();

    state.play_previous();
    assert_eq!(state.current_episode_index, 0);

    state.play_next();
    state.play_previous();
    state.play_previous();
    assert_eq!(state.current_episode_index, 0);
}

#[test]
fn test_shuffled_play_next_always_stays_in_range() {
    let mut state = UIState::default();
    state.play_list(sample_queue(5), 0);
    state.toggle_shuffle();

    for _ in 0..100 {
        state.play_next();
        assert_eq!(state.episode_list.len(), 5);
        assert!(state.current_episode_index < 5);
        assert!(state.current_episode().is_some());
    }
}

#[test]
fn test_seek_updates_progress_immediately() {
    let mut state = UIState::default();
    state.play(sample_episode("seek"));

    state.update_current_time(45.0);
    assert_eq!(state.current_time_seconds, 45);

    // Fractional element positions floor to whole seconds.
    state.update_current_time(119.87);
    assert_eq!(state.current_time_seconds, 119);
}

#[test]
fn test_default_app_state_points_at_local_api() {
    let state = AppState::default();
    assert!(state.server_name.starts_with("http"));
    assert!(state.error_message.is_none());
}

#[test]
fn test_format_time_pads_and_carries_hours() {
    assert_eq!(format_time(0), "00:00");
    assert_eq!(format_time(5), "00:05");
    assert_eq!(format_time(125), "02:05");
    assert_eq!(format_time(3599), "59:59");
    assert_eq!(format_time(3600), "1:00:00");
    assert_eq!(format_time(7325), "2:02:05");
}

#[test]
fn test_parse_and_format_date() {
    let date = parse_date("2021-04-08");
    assert_eq!(format_date(&date), "8 Apr 21");
}

#[test]
fn test_sanitize_keeps_anchors_and_drops_scripts() {
    let dirty = r#"<p>hello <a href="https://example.com">there</a><script>alert(1)</script></p>"#;
    let clean = sanitize_html_with_blank_target(dirty);

    assert!(clean.contains(r#"href="https://example.com""#));
    assert!(clean.contains(r#"target="_blank""#));
    assert!(!clean.contains("script"));
}

#[test]
fn test_strip_html_tags_leaves_text_only() {
    let stripped = strip_html_tags("<p>plain <strong>text</strong></p>");
    assert!(!stripped.contains('<'));
    assert!(stripped.contains("plain"));
    assert!(stripped.contains("text"));
}

#[test]
fn test_truncate_description() {
    let (text, truncated) = truncate_description("short".to_string(), 10);
    assert_eq!(text, "short");
    assert!(!truncated);

    let (text, truncated) = truncate_description("a much longer description".to_string(), 6);
    assert_eq!(text, "a much...");
    assert!(truncated);
}

// Test route variants
#[test]
fn test_route_variants() {
    let episode_route = Route::EpisodeDetail {
        id: "a-importancia-da-contribuicao-em-open-source".to_string(),
    };

    match episode_route {
        Route::EpisodeDetail { id } => {
            assert_eq!(id, "a-importancia-da-contribuicao-em-open-source")
        }
        _ => panic!("Wrong route type"),
    }

    let routes = vec![Route::Home, Route::NotFound];
    assert!(!routes.is_empty());
}
