use wordle_archive_game::Status;
use yew::prelude::*;

use super::modal::Modal;
use super::status_class;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub colorblind: bool,
}

fn example(word: &str, highlight: usize, status: Status, colorblind: bool) -> Html {
    html! {
        <div class="info__example">
            { for word.chars().enumerate().map(|(idx, ch)| {
                let class = if idx == highlight {
                    classes!("cell", status_class(status, colorblind))
                } else {
                    classes!("cell", "status-unguessed")
                };
                html! { <span {class} key={idx}>{ ch.to_string() }</span> }
            }) }
        </div>
    }
}

/// Rules overlay; shown automatically on a first visit.
#[function_component(InfoModal)]
pub fn info_modal(p: &Props) -> Html {
    html! {
        <Modal open={p.open} title="How to play" on_close={p.on_close.clone()}>
            <p>{"Guess the word in 6 tries. Each guess must be a valid five-letter word. Hit enter to submit."}</p>
            <p>{"After each guess the tiles change colour to show how close you were."}</p>
            { example("WEARY", 0, Status::Green, p.colorblind) }
            <p>{"W is in the word and in the correct spot."}</p>
            { example("PILLS", 1, Status::Yellow, p.colorblind) }
            <p>{"I is in the word but in the wrong spot."}</p>
            { example("VAGUE", 3, Status::Gray, p.colorblind) }
            <p>{"U is not in the word in any spot."}</p>
            <p>{"Every past puzzle is here. Use the arrows to move between days, or pick one from the list."}</p>
        </Modal>
    }
}
