use anyhow::Error;
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeFile {
    pub url: String,
    pub duration: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    pub description: String,
    pub file: EpisodeFile,
}

pub async fn call_get_episodes(server_name: &str) -> Result<Vec<Episode>, Error> {
    let url = format!(
        "{}/episodes?_limit=12&_sort=published_at&_order=desc",
        server_name
    );

    let response = Request::get(&url).send().await?;

    if response.ok() {
        let episodes: Vec<Episode> = response.json().await?;
        Ok(episodes)
    } else {
        Err(Error::msg(format!(
            "Failed to get episodes: {}",
            response.status()
        )))
    }
}

pub async fn call_get_episode(server_name: &str, episode_id: &str) -> Result<Episode, Error> {
    let url = format!(
        "{}/episodes/{}",
        server_name,
        urlencoding::encode(episode_id)
    );

    let response = Request::get(&url).send().await?;

    if response.ok() {
        let episode: Episode = response.json().await?;
        Ok(episode)
    } else {
        Err(Error::msg(format!(
            "Failed to get episode {}: {}",
            episode_id,
            response.status()
        )))
    }
}
