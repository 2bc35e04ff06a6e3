use wordle_archive_game::{Day, GameState, Streaks};
use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub day: Day,
    pub state: GameState,
    pub answer: AttrValue,
    pub streaks: Streaks,
    /// Emoji grid for the clipboard.
    pub share_text: AttrValue,
    pub on_close: Callback<()>,
    pub on_play_again: Callback<()>,
    pub on_share: Callback<AttrValue>,
}

#[function_component(EndGameSummary)]
pub fn end_game_summary(p: &Props) -> Html {
    let headline = match p.state {
        GameState::Won => "Congrats!",
        GameState::Lost => "Oops, better luck next time!",
        GameState::Playing => "Still playing",
    };
    let on_play_again = {
        let cb = p.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_share = {
        let cb = p.on_share.clone();
        let text = p.share_text.clone();
        Callback::from(move |_| cb.emit(text.clone()))
    };

    html! {
        <Modal open={p.open} title={AttrValue::from(format!("Wordle Archive {}", p.day))} on_close={p.on_close.clone()}>
            <div class="end-game">
                <p class="end-game__headline">{ headline }</p>
                if p.state.is_terminal() {
                    <p class="end-game__answer">
                        {"The answer was "}<strong>{ p.answer.clone() }</strong>
                    </p>
                }
                <dl class="end-game__streaks">
                    <dt>{"Current streak"}</dt>
                    <dd id="current-streak">{ p.streaks.current }</dd>
                    <dt>{"Longest streak"}</dt>
                    <dd id="longest-streak">{ p.streaks.longest }</dd>
                </dl>
                <pre class="end-game__share">{ p.share_text.clone() }</pre>
                <div class="end-game__actions">
                    <button type="button" id="share-results" onclick={on_share}>{"Share"}</button>
                    <button type="button" id="play-again" onclick={on_play_again}>{"Play again"}</button>
                </div>
            </div>
        </Modal>
    }
}
