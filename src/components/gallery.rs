use yew::prelude::*;

use crate::components::media::Media;
use crate::config::Config;
use crate::hooks::use_feed::DataState;
use crate::models::entry::{DateRange, Entry};
use crate::models::media::MediaView;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub state: DataState,
    /// Currently applied range; `None` shows the whole feed.
    pub range: Option<DateRange>,
    pub on_select: Callback<Entry>,
}

/// The grid view. Every render fully replaces the previous content: loading
/// indicator, error message, empty placeholder, or one cell per entry in
/// feed order.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let body = match &props.state {
        DataState::Loading => html! {
            <div class="loading-message">{"Loading space photos…"}</div>
        },
        DataState::Error(_) => html! {
            <p class="error-message">{"Failed to fetch space images. Please try again."}</p>
        },
        DataState::Loaded(feed) => {
            let entries = feed.filter_by_range(props.range.as_ref());

            if entries.is_empty() {
                html! {
                    <p class="empty-message">{"No space images found for this date range."}</p>
                }
            } else {
                entries
                    .into_iter()
                    .map(|entry| {
                        let view = MediaView::preview(&entry);
                        let on_click = {
                            let entry = entry.clone();
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(entry.clone()))
                        };

                        html! {
                            <div class="gallery-item" onclick={on_click}>
                                <Media
                                    {view}
                                    alt={entry.title.clone()}
                                    embed_height={Config::GALLERY_EMBED_HEIGHT}
                                />
                                <p class="item-title">{format!("Title: {}", entry.title)}</p>
                                <p class="item-date">{format!("Date: {}", entry.date)}</p>
                            </div>
                        }
                    })
                    .collect::<Html>()
            }
        }
    };

    html! {
        <div class="gallery">{body}</div>
    }
}
