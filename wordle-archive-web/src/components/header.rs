use wordle_archive_game::Day;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day: Day,
    /// ✔ / ✘ / empty for the day's stored outcome.
    #[prop_or_default]
    pub marker: AttrValue,
    pub on_settings: Callback<()>,
    pub on_share: Callback<()>,
    pub on_info: Callback<()>,
}

fn relay(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="header">
            <button id="settings-open-btn" type="button" aria-label="Settings" onclick={relay(&p.on_settings)}>
                {"⚙"}
            </button>
            <h1 class="header__title">
                { format!("WORDLE ARCHIVE {} {}", p.day, p.marker).trim_end().to_string() }
            </h1>
            <button id="share-open-btn" type="button" aria-label="Results" onclick={relay(&p.on_share)}>
                {"⇪"}
            </button>
            <button id="info-open-btn" type="button" aria-label="How to play" onclick={relay(&p.on_info)}>
                {"?"}
            </button>
        </header>
    }
}
