use std::rc::Rc;

use wordle_archive_game::{Day, DaySummary, ROWS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day: Day,
    /// Menu rows, oldest first.
    pub summaries: Rc<Vec<DaySummary>>,
    pub on_first: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_random: Callback<()>,
    pub on_next: Callback<()>,
    pub on_last: Callback<()>,
    pub on_select: Callback<Day>,
}

fn nav_button(id: &'static str, label: &'static str, cb: &Callback<()>) -> Html {
    let cb = cb.clone();
    let onclick = Callback::from(move |_| cb.emit(()));
    html! {
        <button {id} type="button" class="nav-button" {onclick}>{ label }</button>
    }
}

fn menu_item(summary: &DaySummary, current: Day, on_select: &Callback<Day>) -> Html {
    let day = summary.day;
    let class = classes!(
        "archive-menu__item",
        summary.state.as_str(),
        summary.cleared.then_some("cleared"),
        (day == current).then_some("current"),
    );
    let label = format!("{day} {}", summary.marker()).trim_end().to_string();
    let score = summary
        .score
        .map(|rows| format!("{rows}/{ROWS}"))
        .unwrap_or_default();
    let onclick = {
        let cb = on_select.clone();
        Callback::from(move |_| cb.emit(day))
    };
    html! {
        <li key={day}>
            <button type="button" {class} {onclick}>
                <span>{ label }</span>
                <span class="archive-menu__score">{ score }</span>
            </button>
        </li>
    }
}

#[function_component(DayNav)]
pub fn day_nav(p: &Props) -> Html {
    let menu_open = use_state(|| false);
    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let on_select = {
        let menu_open = menu_open.clone();
        let cb = p.on_select.clone();
        Callback::from(move |day: Day| {
            menu_open.set(false);
            cb.emit(day);
        })
    };

    html! {
        <nav class="day-nav" aria-label="Archive navigation">
            <div class="day-nav__row">
                { nav_button("nav-previous", "Previous", &p.on_previous) }
                { nav_button("nav-random", "Random", &p.on_random) }
                { nav_button("nav-next", "Next", &p.on_next) }
            </div>
            <div class="day-nav__row">
                { nav_button("nav-first", "First", &p.on_first) }
                <div class="archive-menu">
                    <button id="nav-choose" type="button" class="nav-button" aria-expanded={menu_open.to_string()} onclick={toggle}>
                        {"Choose"}
                    </button>
                    if *menu_open {
                        <ul class="archive-menu__items">
                            { for p.summaries.iter().map(|summary| menu_item(summary, p.day, &on_select)) }
                        </ul>
                    }
                </div>
                { nav_button("nav-last", "Last", &p.on_last) }
            </div>
        </nav>
    }
}
