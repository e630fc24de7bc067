use std::rc::Rc;
use yew::prelude::*;

use crate::models::entry::Feed;
use crate::services::api::fetch_feed;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Feed>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the feed if it is loaded
    pub fn data(&self) -> Option<&Rc<Feed>> {
        match self {
            DataState::Loaded(feed) => Some(feed),
            _ => None,
        }
    }
}

/// Fetches the feed exactly once per page load. The collection is fixed for
/// the rest of the session; on failure the error state stays up until the
/// next load.
#[hook]
pub fn use_feed() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_feed().await {
                    Ok(feed) => state.set(DataState::Loaded(Rc::new(feed))),
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching feed: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || () // Cleanup
        });
    }

    state
}
