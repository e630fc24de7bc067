use yew::prelude::*;

use crate::components::media::Media;
use crate::config::Config;
use crate::models::entry::Entry;
use crate::models::media::MediaView;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    /// The selected entry; `None` keeps the modal closed.
    pub entry: Option<Entry>,
    pub on_close: Callback<()>,
}

/// Enlarged single-entry overlay. Selecting another item while open replaces
/// the content without passing through a closed state. Clicks on the overlay
/// background close it; clicks inside the content area do not.
#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let Some(entry) = &props.entry else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let view = MediaView::detail(entry);

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="close-btn" onclick={close} aria-label="Close">{"×"}</button>
                <div class="modal-media">
                    <Media
                        {view}
                        alt={entry.title.clone()}
                        embed_height={Config::MODAL_EMBED_HEIGHT}
                    />
                </div>
                <h2 class="modal-title">{&entry.title}</h2>
                <p class="modal-date">{format!("Date: {}", entry.date)}</p>
                <p class="modal-explanation">{&entry.explanation}</p>
            </div>
        </div>
    }
}
