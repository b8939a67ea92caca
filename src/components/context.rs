use crate::requests::pod_req;
use rand::Rng;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Store)]
pub struct AppState {
    pub server_name: String,
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            server_name: option_env!("PODCASTER_API_URL")
                .unwrap_or("http://localhost:3333")
                .to_string(),
            error_message: None,
        }
    }
}

// The shape the player queue carries. Pages convert fetched episodes into
// these; the store itself never reaches back to the network.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    pub duration: u32,
    pub url: String,
}

impl From<&pod_req::Episode> for QueuedEpisode {
    fn from(episode: &pod_req::Episode) -> Self {
        QueuedEpisode {
            id: episode.id.clone(),
            title: episode.title.clone(),
            thumbnail: episode.thumbnail.clone(),
            members: episode.members.clone(),
            duration: episode.file.duration,
            url: episode.file.url.clone(),
        }
    }
}

/// Shared playback state. `current_episode_index` stays in range as long
/// as `episode_list` is non-empty; an empty list is the "nothing playing"
/// state and `current_episode` returns `None` there.
#[derive(Default, Clone, PartialEq, Store)]
pub struct UIState {
    pub episode_list: Vec<QueuedEpisode>,
    pub current_episode_index: usize,
    pub audio_playing: bool,
    pub audio_looping: bool,
    pub audio_shuffling: bool,
    pub current_time_seconds: u32,
}

impl UIState {
    pub fn current_episode(&self) -> Option<&QueuedEpisode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn has_next(&self) -> bool {
        self.audio_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index >= 1
    }

    pub fn play(&mut self, episode: QueuedEpisode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.audio_playing = true;
    }

    // An out-of-range start index is clamped to the last episode; an empty
    // list clears playback outright.
    pub fn play_list(&mut self, list: Vec<QueuedEpisode>, index: usize) {
        if list.is_empty() {
            self.clear_player_state();
            return;
        }
        self.current_episode_index = index.min(list.len() - 1);
        self.episode_list = list;
        self.audio_playing = true;
    }

    pub fn toggle_playback(&mut self) {
        self.audio_playing = !self.audio_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.audio_looping = !self.audio_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.audio_shuffling = !self.audio_shuffling;
    }

    // The audio element reports play/pause it initiated itself (autoplay,
    // OS media keys) through here, as opposed to the user-intent toggle.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.audio_playing = playing;
    }

    pub fn play_next(&mut self) {
        if self.audio_shuffling && !self.episode_list.is_empty() {
            // Uniform draw over the whole queue; repeating the current
            // episode is allowed.
            self.current_episode_index = rand::rng().random_range(0..self.episode_list.len());
        } else if self.current_episode_index + 1 < self.episode_list.len() {
            self.current_episode_index += 1;
        } else {
            self.clear_player_state();
        }
    }

    // No wrap-to-end on previous, looping or not.
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    pub fn update_current_time(&mut self, time_in_seconds: f64) {
        self.current_time_seconds = time_in_seconds.floor() as u32;
    }

    fn clear_player_state(&mut self) {
        self.episode_list = Vec::new();
        self.current_episode_index = 0;
    }
}
