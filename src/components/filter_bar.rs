use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::entry::DateRange;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    /// Fired with the parsed range on every button press; `None` when either
    /// input is missing or unparseable.
    pub on_apply: Callback<Option<DateRange>>,
}

/// Date-range controls: two date inputs and a trigger button. The range only
/// takes effect on the button press, not while typing.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let on_click = {
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        let on_apply = props.on_apply.clone();

        Callback::from(move |_: MouseEvent| {
            let start = start_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let end = end_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            on_apply.emit(DateRange::from_inputs(&start, &end));
        })
    };

    html! {
        <div class="filter-bar">
            <input ref={start_ref} type="date" aria-label="Start date" />
            <input ref={end_ref} type="date" aria-label="End date" />
            <button class="filter-button" onclick={on_click}>{"Get Space Images"}</button>
        </div>
    }
}
