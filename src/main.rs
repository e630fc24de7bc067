use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;

use components::fact_sidebar::FactSidebar;
use components::filter_bar::FilterBar;
use components::gallery::Gallery;
use components::modal::DetailModal;
use hooks::use_feed::use_feed;
use models::entry::{DateRange, Entry};

#[function_component(App)]
fn app() -> Html {
    let state = use_feed();
    let range = use_state(|| None::<DateRange>);
    let selected = use_state(|| None::<Entry>);

    let on_apply = {
        let range = range.clone();
        Callback::from(move |new_range| range.set(new_range))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |entry| selected.set(Some(entry)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Space Photo Gallery"}</h1>
            </header>

            <FactSidebar />

            <main class="app-main">
                <section class="filter-section">
                    <FilterBar {on_apply} />
                </section>

                <section class="gallery-section">
                    <Gallery
                        state={(*state).clone()}
                        range={(*range).clone()}
                        {on_select}
                    />
                </section>
            </main>

            <DetailModal entry={(*selected).clone()} {on_close} />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
