use yew::prelude::*;

use crate::models::media::MediaView;

#[derive(Properties, PartialEq)]
pub struct MediaProps {
    /// Resolved rendering route; `None` renders no media element.
    pub view: Option<MediaView>,
    /// Alt text for image and thumbnail elements.
    pub alt: String,
    /// Height of the embedded player in pixels.
    pub embed_height: u32,
}

/// Renders one entry's media by its resolved route. Shared by the gallery
/// grid and the detail modal so the branching lives in one place.
#[function_component(Media)]
pub fn media(props: &MediaProps) -> Html {
    match &props.view {
        Some(MediaView::Image { src }) => html! {
            <img src={src.clone()} alt={props.alt.clone()} />
        },
        Some(MediaView::ThumbnailLink { href, thumbnail }) => html! {
            <a href={href.clone()} target="_blank">
                <img src={thumbnail.clone()} alt={format!("{} (video)", props.alt)} />
            </a>
        },
        Some(MediaView::Embed { src }) => html! {
            <iframe
                src={src.clone()}
                width="100%"
                height={props.embed_height.to_string()}
                allow="fullscreen"
            />
        },
        None => html! {},
    }
}
