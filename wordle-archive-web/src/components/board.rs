use wordle_archive_game::{Board, COLS, ROWS, RowStatuses};
use yew::prelude::*;

use super::status_class;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Board,
    pub statuses: [RowStatuses; ROWS],
    /// Row still being typed; `None` once resolved or read-only.
    #[prop_or_default]
    pub active_row: Option<usize>,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub colorblind: bool,
}

fn cell_class(props: &Props, row: usize, col: usize) -> Classes {
    let letter = props.board.cell(row, col);
    if props.active_row == Some(row) {
        return match letter {
            Some(_) if props.invalid => classes!("cell", "cell--typed", "cell--invalid"),
            Some(_) => classes!("cell", "cell--typed"),
            None => classes!("cell", "cell--empty"),
        };
    }
    classes!("cell", status_class(props.statuses[row][col], props.colorblind))
}

#[function_component(BoardGrid)]
pub fn board_grid(props: &Props) -> Html {
    html! {
        <div class="board" role="grid" aria-label="Guesses">
            { for (0..ROWS).map(|row| html! {
                <div class="board__row" role="row" key={row}>
                    { for (0..COLS).map(|col| {
                        let letter = props.board.cell(row, col).map(String::from).unwrap_or_default();
                        html! {
                            <span class={cell_class(props, row, col)} role="gridcell" key={col}>
                                { letter }
                            </span>
                        }
                    }) }
                </div>
            }) }
        </div>
    }
}
