use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub dark_mode: bool,
    pub colorblind: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_toggle_colorblind: Callback<()>,
    pub on_close: Callback<()>,
}

fn toggle_row(id: &'static str, label: &'static str, checked: bool, cb: &Callback<()>) -> Html {
    let cb = cb.clone();
    let onchange = Callback::from(move |_: Event| cb.emit(()));
    html! {
        <label class="settings__row" for={id}>
            <span>{ label }</span>
            <input {id} type="checkbox" role="switch" {checked} {onchange} />
        </label>
    }
}

#[function_component(SettingsModal)]
pub fn settings_modal(p: &Props) -> Html {
    html! {
        <Modal open={p.open} title="Settings" on_close={p.on_close.clone()}>
            { toggle_row("dark-mode-toggle", "Dark mode", p.dark_mode, &p.on_toggle_dark) }
            { toggle_row("colorblind-toggle", "Colorblind mode", p.colorblind, &p.on_toggle_colorblind) }
        </Modal>
    }
}
