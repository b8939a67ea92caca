use yew_router::Routable;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/episode/:id")]
    EpisodeDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
