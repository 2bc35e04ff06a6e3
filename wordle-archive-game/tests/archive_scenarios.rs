use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordle_archive_game::store::DAY_STATE_KEY;
use wordle_archive_game::streak::{CURRENT_STREAK_KEY, LONGEST_STREAK_KEY};
use wordle_archive_game::{
    ArchiveController, BundledData, Cursor, DataLoader, Day, GameEngine, GameState,
    LetterStatuses, MemoryStorage, Status, SubmitOutcome, Word, evaluate_guess,
    update_letter_statuses,
};

fn open(storage: &MemoryStorage, today: Day, day: Day) -> ArchiveController<MemoryStorage> {
    GameEngine::new(BundledData, storage.clone())
        .open(today, day)
        .unwrap()
}

fn enter(controller: &mut ArchiveController<MemoryStorage>, word: &str) -> SubmitOutcome {
    for ch in word.chars() {
        controller.add_letter(ch);
    }
    controller.submit_row().unwrap()
}

fn miss_for(controller: &ArchiveController<MemoryStorage>) -> &'static str {
    let answer = controller.session().answer().to_string();
    if answer == "CRANE" { "SLATE" } else { "CRANE" }
}

#[test]
fn abandoned_progress_is_discarded_on_day_switch() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 5);
    let miss = miss_for(&ctl);
    enter(&mut ctl, miss);
    ctl.add_letter('A');
    assert_eq!(ctl.session().cursor(), Cursor { row: 1, col: 1 });

    ctl.switch_day(6).unwrap();
    ctl.switch_day(5).unwrap();
    assert_eq!(ctl.session().cursor(), Cursor { row: 0, col: 0 });
    assert_eq!(ctl.session().board().filled_rows(), 0);
    assert_eq!(ctl.record(5).state, GameState::Playing);
}

#[test]
fn cleared_solution_reopens_as_fresh_game() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 10);
    assert_eq!(enter(&mut ctl, "brine"), SubmitOutcome::Won { row: 0 });

    let mut reopened = open(&storage, 10, 10);
    assert!(reopened.session().is_saved_solution());
    assert!(reopened.clear_solution().unwrap());
    assert_eq!(reopened.record(10).state, GameState::Won);
    assert!(reopened.record(10).board.is_none());

    let fresh = open(&storage, 10, 10);
    assert!(!fresh.session().is_saved_solution());
    assert_eq!(fresh.session().state(), GameState::Playing);
}

#[test]
fn six_misses_lose_without_saving_board() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 3);
    let miss = miss_for(&ctl);
    let mut outcome = SubmitOutcome::Ignored;
    for _ in 0..6 {
        outcome = enter(&mut ctl, miss);
    }
    assert_eq!(outcome, SubmitOutcome::Lost);
    let record = ctl.record(3);
    assert_eq!(record.state, GameState::Lost);
    assert!(record.board.is_none());

    let raw = storage.snapshot(DAY_STATE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[2]["board"], serde_json::Value::Null);

    let reopened = open(&storage, 10, 3);
    assert_eq!(reopened.session().state(), GameState::Playing);
}

#[test]
fn lost_day_can_be_won_later() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 10);
    for _ in 0..6 {
        enter(&mut ctl, "crane");
    }
    assert_eq!(ctl.streaks().current, 0);

    ctl.switch_day(10).unwrap();
    enter(&mut ctl, "brine");
    assert!(ctl.record(10).has_saved_solution());
    assert_eq!(ctl.streaks().current, 1);
}

#[test]
fn streak_settles_once_per_resolution() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 10);
    enter(&mut ctl, "brine");
    assert!(ctl.settle_streak().is_none());
    assert!(ctl.settle_streak().is_none());
    assert_eq!(enter(&mut ctl, "brine"), SubmitOutcome::Ignored);
    assert_eq!(storage.snapshot(CURRENT_STREAK_KEY).as_deref(), Some("1"));
    assert_eq!(storage.snapshot(LONGEST_STREAK_KEY).as_deref(), Some("1"));

    ctl.switch_day(10).unwrap();
    assert!(ctl.settle_streak().is_none());
    assert_eq!(ctl.streaks().current, 1);
}

#[test]
fn share_text_follows_scored_rows() {
    let storage = MemoryStorage::new();
    let mut ctl = open(&storage, 10, 10);
    enter(&mut ctl, "error");
    enter(&mut ctl, "brine");
    assert_eq!(
        ctl.share_text(false),
        "Wordle Archive 10 2/6\n\n🟨🟩⬛⬛⬛\n🟩🟩🟩🟩🟩"
    );
}

#[test]
fn highlighted_letters_never_exceed_answer_counts() {
    let archive = BundledData.load_archive().unwrap();
    let pool = archive.dictionary.sorted_words();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    for _ in 0..2_000 {
        let answer = *pool.choose(&mut rng).unwrap();
        let guess = if rng.gen_bool(0.05) {
            answer
        } else {
            *pool.choose(&mut rng).unwrap()
        };
        let statuses = evaluate_guess(&guess, &answer);
        for letter in guess.letters() {
            let highlighted = guess
                .letters()
                .zip(statuses)
                .filter(|&(l, s)| l == letter && s != Status::Gray)
                .count();
            assert!(
                highlighted <= answer.count(letter),
                "{guess} vs {answer}: {statuses:?}"
            );
        }
        if guess == answer {
            assert_eq!(statuses, [Status::Green; 5]);
        }
    }
}

#[test]
fn letter_statuses_never_lose_green() {
    let archive = BundledData.load_archive().unwrap();
    let pool = archive.dictionary.sorted_words();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let answer: Word = *pool.choose(&mut rng).unwrap();
        let mut statuses = LetterStatuses::default();
        for _ in 0..6 {
            let guess = pool.choose(&mut rng).unwrap();
            let next = update_letter_statuses(guess, &answer, &statuses);
            for (letter, before) in statuses.iter() {
                if before == Status::Green {
                    assert_eq!(next.get(letter), Status::Green);
                }
            }
            statuses = next;
        }
    }
}
