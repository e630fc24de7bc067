use yew::prelude::*;

/// Fixed pool of facts for the sidebar. Display only; shares no state with
/// the rest of the application.
pub const SPACE_FACTS: &[&str] = &[
    "Did you know? The largest volcano in the solar system is Olympus Mons on Mars!",
    "Did you know? Neutron stars can spin at a rate of 600 times per second!",
    "Did you know? A day on Venus is longer than its year.",
    "Did you know? There are more stars in the universe than grains of sand on Earth.",
    "Did you know? Jupiter has 95 known moons!",
    "Did you know? The Sun accounts for 99.86% of the mass in our solar system.",
    "Did you know? Saturn could float in water because it is mostly made of gas.",
    "Did you know? The footprints on the Moon will remain for millions of years.",
    "Did you know? Light from the Sun takes about 8 minutes to reach Earth.",
    "Did you know? The Milky Way galaxy is about 100,000 light-years across!",
    "Did you know? Mercury has no atmosphere, so its sky is always black.",
    "Did you know? The Great Red Spot on Jupiter is a giant storm bigger than Earth.",
    "Did you know? Uranus rotates on its side, unlike any other planet.",
    "Did you know? The International Space Station travels at 28,000 km/h.",
    "Did you know? Pluto is smaller than Earth's Moon.",
    "Did you know? The hottest planet in our solar system is Venus.",
    "Did you know? Comets are made of ice, dust, and rocky material.",
    "Did you know? The first living creatures in space were fruit flies.",
    "Did you know? The Andromeda Galaxy will collide with the Milky Way in about 4 billion years.",
    "Did you know? A spoonful of a neutron star would weigh about a billion tons!",
];

/// Maps a uniform sample in `[0, 1)` to a list index.
pub fn fact_index(sample: f64, len: usize) -> usize {
    ((sample * len as f64) as usize).min(len.saturating_sub(1))
}

fn pick_fact() -> &'static str {
    SPACE_FACTS[fact_index(js_sys::Math::random(), SPACE_FACTS.len())]
}

/// Shows one fact chosen uniformly at random, picked once per page load.
#[function_component(FactSidebar)]
pub fn fact_sidebar() -> Html {
    let fact = use_state(pick_fact);

    html! {
        <aside class="fact-sidebar">
            <p class="space-fact">{*fact}</p>
        </aside>
    }
}
