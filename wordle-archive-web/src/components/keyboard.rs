use wordle_archive_game::{LetterStatuses, Status};
use yew::prelude::*;

use super::status_class;
use crate::input::KeyInput;

const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub letters: LetterStatuses,
    pub on_key: Callback<KeyInput>,
    #[prop_or_default]
    pub colorblind: bool,
    /// No further input accepted for this day.
    #[prop_or_default]
    pub disabled: bool,
    /// Showing a saved win; offers to clear it.
    #[prop_or_default]
    pub solved: bool,
    #[prop_or_default]
    pub on_clear: Callback<()>,
}

fn key_button(props: &Props, input: KeyInput) -> Html {
    let class = match input {
        KeyInput::Letter(ch) => {
            let status = props.letters.get(ch);
            if status == Status::Unguessed {
                classes!("key")
            } else {
                classes!("key", status_class(status, props.colorblind))
            }
        }
        KeyInput::Enter | KeyInput::Delete => classes!("key", "key--wide"),
    };
    let onclick = {
        let cb = props.on_key.clone();
        Callback::from(move |_| cb.emit(input))
    };
    html! {
        <button type="button" {class} {onclick} disabled={props.disabled}>
            { input.label() }
        </button>
    }
}

#[function_component(Keyboard)]
pub fn keyboard(props: &Props) -> Html {
    let on_clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="keyboard" aria-label="Keyboard">
            { for ROWS.iter().enumerate().map(|(idx, row)| {
                let letters = row.chars().map(|ch| key_button(props, KeyInput::Letter(ch)));
                html! {
                    <div class="keyboard__row" key={idx}>
                        if idx == 2 { { key_button(props, KeyInput::Enter) } }
                        { for letters }
                        if idx == 2 { { key_button(props, KeyInput::Delete) } }
                    </div>
                }
            }) }
            if props.solved {
                <div class="keyboard__row">
                    <button type="button" id="clear-solution" class="key key--wide" onclick={on_clear}>
                        { "Clear solution" }
                    </button>
                </div>
            }
        </div>
    }
}
