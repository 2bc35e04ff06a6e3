//! Top-level page: owns the controller and wires components to it.
use rand::Rng;
use wordle_archive_game::{
    ArchiveController, ArchiveError, ArchiveStorage, Day, GameState, GuessRejected,
};
use yew::prelude::*;

use crate::input::KeyInput;
#[cfg(target_arch = "wasm32")]
use crate::routing::Route;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// A request from the day navigation bar or archive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Random,
    Next,
    Last,
    Select(Day),
}

/// Route one key press into the controller.
///
/// Returns the rejection when an enter press did not score the row.
pub fn apply_key<S>(controller: &mut ArchiveController<S>, input: KeyInput) -> Option<GuessRejected>
where
    S: ArchiveStorage + Clone,
{
    match input {
        KeyInput::Letter(ch) => {
            controller.add_letter(ch);
            None
        }
        KeyInput::Delete => {
            controller.delete_letter();
            None
        }
        KeyInput::Enter => match controller.submit_row() {
            Ok(_) => None,
            Err(rejected) => {
                log::debug!("guess rejected: {rejected}");
                Some(rejected)
            }
        },
    }
}

/// Switch days per `action`, returning the day now shown.
///
/// # Errors
///
/// Returns an error if the stored records cannot be read.
pub fn apply_nav<S, R>(
    controller: &mut ArchiveController<S>,
    action: NavAction,
    rng: &mut R,
) -> Result<Day, ArchiveError>
where
    S: ArchiveStorage + Clone,
    R: Rng + ?Sized,
{
    match action {
        NavAction::First => controller.play_first(),
        NavAction::Previous => controller.play_previous(),
        NavAction::Random => controller.play_random(rng),
        NavAction::Next => controller.play_next(),
        NavAction::Last => controller.play_last(),
        NavAction::Select(day) => controller.switch_day(day),
    }
}

/// Any won day can be cleared, whether it was just solved or reopened.
pub fn offers_clear_solution<S>(controller: &ArchiveController<S>) -> bool
where
    S: ArchiveStorage + Clone,
{
    controller.session().state() == GameState::Won
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let home = crate::paths::router_base().unwrap_or_else(|| "/".to_string());
    html! {
        <main class="not-found">
            <h1>{"Nothing here"}</h1>
            <a href={home}>{"Back to the archive"}</a>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::Play => html! { <page::ArchivePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(target_arch = "wasm32")]
mod page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wordle_archive_game::{ArchiveController, Day, GameState, Preferences, SUMMARY_DELAY_MS};
    use yew::prelude::*;

    use super::{NavAction, apply_key, apply_nav, offers_clear_solution};
    use crate::components::board::BoardGrid;
    use crate::components::day_nav::DayNav;
    use crate::components::end_game::EndGameSummary;
    use crate::components::header::Header;
    use crate::components::info::InfoModal;
    use crate::components::keyboard::Keyboard;
    use crate::components::settings::SettingsModal;
    use crate::input::KeyInput;
    use crate::storage::{WebArchiveStorage, create_web_engine};
    use crate::{dom, routing};

    type Controller = ArchiveController<WebArchiveStorage>;
    type SharedController = Rc<RefCell<Option<Controller>>>;

    fn boot_controller() -> Option<Controller> {
        let engine = create_web_engine();
        let mut controller = match engine.open_today() {
            Ok(controller) => controller,
            Err(err) => {
                dom::console_error(&format!("could not open the archive: {err:#}"));
                return None;
            }
        };
        let requested = routing::parse_day_query(&dom::location_search(), controller.today());
        match controller.switch_day(requested) {
            Ok(day) => routing::push_day(day),
            Err(err) => log::warn!("could not open day {requested}: {err}"),
        }
        Some(controller)
    }

    fn boot_preferences() -> Preferences {
        create_web_engine().preferences().unwrap_or_else(|err| {
            log::warn!("could not read preferences: {err}");
            Preferences::default()
        })
    }

    fn entropy_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(js_sys::Date::now().to_bits())
    }

    #[hook]
    fn use_document_keys(on_key: Callback<KeyInput>) {
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if event.ctrl_key() || event.meta_key() || event.alt_key() {
                        return;
                    }
                    if let Some(input) = KeyInput::from_key(&event.key()) {
                        on_key.emit(input);
                    }
                },
            );
            let document = dom::document();
            if let Some(doc) = document.as_ref() {
                let _ = doc.add_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(doc) = document.as_ref() {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    #[function_component(ArchivePage)]
    pub fn archive_page() -> Html {
        let controller: SharedController = use_mut_ref(boot_controller);
        let refresh = use_force_update();
        let prefs = use_state(boot_preferences);
        let info_open = use_state(|| prefs.first_time);
        let settings_open = use_state(|| false);
        let summary_open = use_state(|| false);

        {
            let dark = prefs.dark_mode;
            use_effect_with(dark, |dark| {
                dom::set_root_class("dark", *dark);
                || {}
            });
        }

        let on_key = {
            let controller = controller.clone();
            let refresh = refresh.clone();
            Callback::from(move |input: KeyInput| {
                if let Some(ctl) = controller.borrow_mut().as_mut() {
                    apply_key(ctl, input);
                }
                refresh.force_update();
            })
        };
        use_document_keys(on_key.clone());

        let on_nav = {
            let controller = controller.clone();
            let refresh = refresh.clone();
            let summary_open = summary_open.clone();
            Callback::from(move |action: NavAction| {
                if let Some(ctl) = controller.borrow_mut().as_mut() {
                    match apply_nav(ctl, action, &mut entropy_rng()) {
                        Ok(day) => routing::push_day(day),
                        Err(err) => log::warn!("navigation failed: {err}"),
                    }
                }
                summary_open.set(false);
                refresh.force_update();
            })
        };
        let nav = |action: NavAction| {
            let on_nav = on_nav.clone();
            Callback::from(move |()| on_nav.emit(action))
        };

        let on_clear = {
            let controller = controller.clone();
            let refresh = refresh.clone();
            Callback::from(move |()| {
                if let Some(ctl) = controller.borrow_mut().as_mut()
                    && let Err(err) = ctl.clear_solution()
                {
                    log::warn!("could not clear solution: {err}");
                }
                refresh.force_update();
            })
        };

        let update_prefs = |edit: fn(&mut Preferences)| {
            let prefs = prefs.clone();
            Callback::from(move |()| {
                let mut next = *prefs;
                edit(&mut next);
                if let Err(err) = create_web_engine().save_preferences(&next) {
                    log::warn!("could not save preferences: {err}");
                }
                prefs.set(next);
            })
        };
        let on_toggle_dark = update_prefs(Preferences::toggle_dark_mode);
        let on_toggle_colorblind = update_prefs(Preferences::toggle_colorblind_mode);
        let on_info_close = {
            let info_open = info_open.clone();
            let dismiss = update_prefs(Preferences::dismiss_intro);
            Callback::from(move |()| {
                info_open.set(false);
                dismiss.emit(());
            })
        };

        let close_summary = {
            let controller = controller.clone();
            let summary_open = summary_open.clone();
            Callback::from(move |()| {
                if let Some(ctl) = controller.borrow_mut().as_mut() {
                    ctl.acknowledge_summary();
                }
                summary_open.set(false);
            })
        };
        let on_share = Callback::from(|text: AttrValue| dom::copy_to_clipboard(&text));

        {
            let summary_open = summary_open.clone();
            let key = controller.borrow().as_ref().map(|ctl| {
                let session = ctl.session();
                (session.day(), session.state(), session.should_show_summary())
            });
            use_effect_with(key, move |key| {
                if matches!(key, Some((_, _, true))) {
                    wasm_bindgen_futures::spawn_local(async move {
                        let delay = i32::try_from(SUMMARY_DELAY_MS).unwrap_or(i32::MAX);
                        if dom::sleep_ms(delay).await.is_ok() {
                            summary_open.set(true);
                        }
                    });
                }
                || {}
            });
        }

        let guard = controller.borrow();
        let Some(ctl) = guard.as_ref() else {
            return html! {
                <main class="boot-error">{"The archive could not be loaded."}</main>
            };
        };
        let session = ctl.session();
        let day: Day = session.day();

        let active_row = (!session.is_saved_solution() && session.state() == GameState::Playing)
            .then_some(session.cursor().row);
        let summaries = Rc::new(ctl.day_summaries(ctl.today()));
        let share_text = AttrValue::from(ctl.share_text(prefs.colorblind_mode));
        let marker = AttrValue::from(ctl.record(day).marker());
        let show_summary = {
            let summary_open = summary_open.clone();
            Callback::from(move |()| summary_open.set(true))
        };
        let open_settings = {
            let settings_open = settings_open.clone();
            Callback::from(move |()| settings_open.set(true))
        };
        let close_settings = {
            let settings_open = settings_open.clone();
            Callback::from(move |()| settings_open.set(false))
        };
        let open_info = {
            let info_open = info_open.clone();
            Callback::from(move |()| info_open.set(true))
        };

        html! {
            <div class="app">
                <Header {day} {marker} on_settings={open_settings} on_share={show_summary} on_info={open_info} />
                <DayNav
                    {day}
                    {summaries}
                    on_first={nav(NavAction::First)}
                    on_previous={nav(NavAction::Previous)}
                    on_random={nav(NavAction::Random)}
                    on_next={nav(NavAction::Next)}
                    on_last={nav(NavAction::Last)}
                    on_select={on_nav.reform(NavAction::Select)}
                />
                <main id="main">
                    <BoardGrid
                        board={*session.board()}
                        statuses={*session.cell_statuses()}
                        {active_row}
                        invalid={session.submitted_invalid()}
                        colorblind={prefs.colorblind_mode}
                    />
                </main>
                <Keyboard
                    letters={*session.letter_statuses()}
                    {on_key}
                    colorblind={prefs.colorblind_mode}
                    disabled={session.state().is_terminal()}
                    solved={offers_clear_solution(ctl)}
                    {on_clear}
                />
                <InfoModal open={*info_open} on_close={on_info_close} colorblind={prefs.colorblind_mode} />
                <SettingsModal
                    open={*settings_open}
                    dark_mode={prefs.dark_mode}
                    colorblind={prefs.colorblind_mode}
                    {on_toggle_dark}
                    {on_toggle_colorblind}
                    on_close={close_settings}
                />
                <EndGameSummary
                    open={*summary_open}
                    {day}
                    state={session.state()}
                    answer={AttrValue::from(session.answer().to_string())}
                    streaks={ctl.streaks()}
                    {share_text}
                    on_close={close_summary.clone()}
                    on_play_again={close_summary}
                    {on_share}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use wordle_archive_game::{BundledData, GameEngine, MemoryStorage, SubmitOutcome};

    fn controller(day: Day) -> ArchiveController<MemoryStorage> {
        GameEngine::new(BundledData, MemoryStorage::new())
            .open(20, day)
            .unwrap()
    }

    fn press_all(controller: &mut ArchiveController<MemoryStorage>, keys: &str) {
        for ch in keys.chars() {
            apply_key(controller, KeyInput::Letter(ch));
        }
    }

    #[test]
    fn enter_reports_rejections() {
        let mut ctl = controller(10);
        press_all(&mut ctl, "BRI");
        assert_eq!(
            apply_key(&mut ctl, KeyInput::Enter),
            Some(GuessRejected::Incomplete { letters: 3 })
        );
        assert!(ctl.session().submitted_invalid());
        apply_key(&mut ctl, KeyInput::Delete);
        assert!(!ctl.session().submitted_invalid());
        assert_eq!(ctl.session().board().row_text(0), "BR");
    }

    #[test]
    fn enter_scores_dictionary_words() {
        let mut ctl = controller(10);
        press_all(&mut ctl, "BRINE");
        assert_eq!(apply_key(&mut ctl, KeyInput::Enter), None);
        assert_eq!(
            ctl.submit_row(),
            Ok(SubmitOutcome::Ignored),
            "resolved sessions ignore further submits"
        );
    }

    #[test]
    fn fresh_win_can_be_cleared_and_replayed() {
        let mut ctl = controller(10);
        assert!(!offers_clear_solution(&ctl));
        press_all(&mut ctl, "BRINE");
        apply_key(&mut ctl, KeyInput::Enter);
        assert!(!ctl.session().is_saved_solution());
        assert!(offers_clear_solution(&ctl));

        assert!(ctl.clear_solution().unwrap());
        assert!(!offers_clear_solution(&ctl));
        assert_eq!(ctl.session().state(), GameState::Playing);
    }

    #[test]
    fn lost_day_offers_no_clear() {
        let mut ctl = controller(10);
        for _ in 0..6 {
            press_all(&mut ctl, "ERROR");
            apply_key(&mut ctl, KeyInput::Enter);
        }
        assert_eq!(ctl.session().state(), GameState::Lost);
        assert!(!offers_clear_solution(&ctl));
    }

    #[test]
    fn oversized_query_opens_last_archived_day() {
        use wordle_archive_game::DataLoader;

        let last = BundledData.load_answers().unwrap().last_day();
        let mut ctl = controller(10);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let requested = crate::routing::parse_day_query("?99999999999999", ctl.today());
        let day = apply_nav(&mut ctl, NavAction::Select(requested), &mut rng).unwrap();
        assert_eq!(day, last);
        assert_eq!(ctl.session().day(), last);
    }

    #[test]
    fn nav_actions_stay_in_range() {
        let mut ctl = controller(10);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(apply_nav(&mut ctl, NavAction::Next, &mut rng).unwrap(), 11);
        assert_eq!(apply_nav(&mut ctl, NavAction::Last, &mut rng).unwrap(), 20);
        assert_eq!(apply_nav(&mut ctl, NavAction::First, &mut rng).unwrap(), 1);
        assert_eq!(apply_nav(&mut ctl, NavAction::Previous, &mut rng).unwrap(), 1);
        assert_eq!(apply_nav(&mut ctl, NavAction::Select(0), &mut rng).unwrap(), 1);
        let random = apply_nav(&mut ctl, NavAction::Random, &mut rng).unwrap();
        assert!((1..20).contains(&random));
    }
}
