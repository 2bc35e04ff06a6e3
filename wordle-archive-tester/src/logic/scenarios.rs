//! Named invariant checks, each run once per seed and iteration.
use anyhow::{Context, Result, ensure};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordle_archive_game::store::{DAY_STATE_KEY, StoredShape};
use wordle_archive_game::{
    ArchiveController, ArchiveStorage, Day, FIRST_DAY, GameState, MemoryStorage, ROWS, Status,
    Streaks, evaluate_guess, is_solved,
};

use super::player::{PlayStyle, SimulatedPlayer, TesterAssets};

type Check = fn(&TesterAssets, u64) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    check: Check,
}

impl Scenario {
    pub fn run(&self, assets: &TesterAssets, seed: u64) -> Result<()> {
        (self.check)(assets, seed)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish_non_exhaustive()
    }
}

static CATALOG: [Scenario; 7] = [
    Scenario {
        key: "smoke",
        name: "Smoke",
        description: "Solve one random day and check what was stored",
        check: smoke,
    },
    Scenario {
        key: "evaluation-bounds",
        name: "Evaluation Bounds",
        description: "Highlights never exceed the answer's letter counts",
        check: evaluation_bounds,
    },
    Scenario {
        key: "letter-monotonic",
        name: "Letter Monotonic",
        description: "Keyboard letters only ever move up in status",
        check: letter_monotonic,
    },
    Scenario {
        key: "persistence",
        name: "Persistence",
        description: "Wins reopen read-only, clears and losses reopen fresh",
        check: persistence,
    },
    Scenario {
        key: "migration",
        name: "Legacy Migration",
        description: "Legacy state lists convert to day records exactly once",
        check: migration,
    },
    Scenario {
        key: "streak-guard",
        name: "Streak Guard",
        description: "Streaks count each resolution once, never on revisits",
        check: streak_guard,
    },
    Scenario {
        key: "navigation",
        name: "Navigation",
        description: "Day navigation stays inside the archive",
        check: navigation,
    },
];

pub fn catalog() -> &'static [Scenario] {
    &CATALOG
}

pub fn find_scenario(key: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|scenario| scenario.key.eq_ignore_ascii_case(key))
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|scenario| (scenario.key, scenario.description))
}

fn open(
    assets: &TesterAssets,
    storage: &MemoryStorage,
    today: Day,
    day: Day,
) -> Result<ArchiveController<MemoryStorage>> {
    ArchiveController::new(assets.archive.clone(), storage.clone(), today, day)
        .with_context(|| format!("opening day {day}"))
}

fn random_day<R: Rng + ?Sized>(assets: &TesterAssets, rng: &mut R) -> Day {
    rng.gen_range(FIRST_DAY..=assets.last_day())
}

fn smoke(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = MemoryStorage::new();
    let day = random_day(assets, &mut rng);
    let mut ctl = open(assets, &storage, assets.last_day(), day)?;

    let played = SimulatedPlayer::new(assets, PlayStyle::Solver).play(&mut ctl, &mut rng)?;
    ensure!(played.outcome.is_terminal(), "day {day} did not resolve");
    ensure!(played.rows_used() <= ROWS, "used {} rows", played.rows_used());

    let stored = ctl.record(day);
    ensure!(
        stored.state == played.outcome,
        "stored {} but played {}",
        stored.state,
        played.outcome
    );
    match played.outcome {
        GameState::Won => ensure!(
            stored.score() == Some(played.rows_used()),
            "score {:?} for a {}-row win",
            stored.score(),
            played.rows_used()
        ),
        _ => ensure!(stored.board.is_none(), "a loss kept its board"),
    }
    Ok(())
}

fn evaluation_bounds(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..250 {
        let (Some(guess), Some(answer)) = (
            assets.guesses.choose(&mut rng).copied(),
            assets.answers.choose(&mut rng).copied(),
        ) else {
            anyhow::bail!("word lists are empty");
        };
        let statuses = evaluate_guess(&guess, &answer);

        for letter in guess.letters() {
            let highlighted = guess
                .letters()
                .zip(statuses)
                .filter(|&(ch, status)| ch == letter && status >= Status::Yellow)
                .count();
            ensure!(
                highlighted <= answer.count(letter),
                "{guess} vs {answer}: {highlighted} highlighted {letter}"
            );
        }
        for (idx, status) in statuses.iter().enumerate() {
            let same = guess.letter(idx) == answer.letter(idx);
            ensure!(
                same == (*status == Status::Green),
                "{guess} vs {answer}: position {idx} is {status}"
            );
        }
        ensure!(
            is_solved(&statuses) == (guess == answer),
            "{guess} vs {answer}: solved flag disagrees"
        );
    }
    Ok(())
}

fn letter_monotonic(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = MemoryStorage::new();
    let day = random_day(assets, &mut rng);
    let mut ctl = open(assets, &storage, assets.last_day(), day)?;

    while ctl.session().state() == GameState::Playing {
        let before = *ctl.session().letter_statuses();
        let Some(guess) = assets.guesses.choose(&mut rng).copied() else {
            anyhow::bail!("dictionary is empty");
        };
        for letter in guess.letters() {
            ctl.add_letter(letter);
        }
        ctl.submit_row()
            .map_err(|rejected| anyhow::anyhow!("{guess}: {rejected}"))?;
        let after = ctl.session().letter_statuses();
        for (letter, status) in before.iter() {
            ensure!(
                after.get(letter) >= status,
                "{letter} dropped from {status} to {} after {guess}",
                after.get(letter)
            );
        }
        for letter in guess.letters() {
            ensure!(
                after.get(letter) != Status::Unguessed,
                "{letter} still unguessed after {guess}"
            );
        }
    }
    Ok(())
}

fn persistence(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = MemoryStorage::new();
    let today = assets.last_day();
    let day = random_day(assets, &mut rng);
    let style = *PlayStyle::ALL.choose(&mut rng).unwrap_or(&PlayStyle::Solver);
    let mut ctl = open(assets, &storage, today, day)?;
    let played = SimulatedPlayer::new(assets, style).play(&mut ctl, &mut rng)?;

    let mut reopened = open(assets, &storage, today, day)?;
    match played.outcome {
        GameState::Won => {
            let session = reopened.session();
            ensure!(session.is_saved_solution(), "win on day {day} not shown read-only");
            ensure!(session.board() == ctl.session().board(), "saved board differs");
            ensure!(
                session.cell_statuses() == ctl.session().cell_statuses(),
                "rehydrated statuses differ"
            );
            ensure!(reopened.clear_solution()?, "nothing to clear on day {day}");
            ensure!(
                reopened.session().state() == GameState::Playing,
                "cleared day did not reopen fresh"
            );
            ensure!(reopened.record(day).is_cleared(), "clear lost the win");
        }
        GameState::Lost => {
            ensure!(
                reopened.session().state() == GameState::Playing,
                "lost day {day} is not replayable"
            );
            ensure!(reopened.record(day).state == GameState::Lost, "loss forgotten");
        }
        GameState::Playing => anyhow::bail!("day {day} never resolved"),
    }
    Ok(())
}

fn migration(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = rng.gen_range(1..=40_usize);
    let states: Vec<GameState> = (0..len)
        .map(|_| match rng.gen_range(0..3) {
            0 => GameState::Won,
            1 => GameState::Lost,
            _ => GameState::Playing,
        })
        .collect();
    let storage =
        MemoryStorage::new().with_entry(DAY_STATE_KEY, &serde_json::to_string(&states)?);

    let ctl = open(assets, &storage, assets.last_day(), FIRST_DAY)?;
    for (day, state) in (FIRST_DAY..).zip(&states) {
        let record = ctl.record(day);
        ensure!(record.state == *state, "day {day}: {} became {}", state, record.state);
        if *state == GameState::Won {
            let answer = assets
                .archive
                .answers
                .answer_for(day)
                .context("answer for migrated win")?;
            let first_row = record.board.map(|board| board.row_text(0));
            ensure!(
                first_row.as_deref() == Some(answer.to_string().as_str()),
                "day {day} board {first_row:?} does not show {answer}"
            );
            ensure!(record.score_unknown, "day {day} claims a known score");
        }
    }

    let raw = storage
        .read(DAY_STATE_KEY)?
        .context("migrated list was not written")?;
    ensure!(
        matches!(StoredShape::detect(&raw)?, StoredShape::Current(_)),
        "stored list is still legacy"
    );
    let again = open(assets, &storage, assets.last_day(), FIRST_DAY)?;
    ensure!(
        storage.read(DAY_STATE_KEY)?.as_deref() == Some(raw.as_str()),
        "second open rewrote migrated data"
    );
    ensure!(again.record(FIRST_DAY) == ctl.record(FIRST_DAY), "reload changed day 1");
    Ok(())
}

fn streak_guard(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = MemoryStorage::new();
    let today = assets.last_day();
    let days = (FIRST_DAY..=today).choose_multiple(&mut rng, 8);
    let mut ctl = open(assets, &storage, today, FIRST_DAY)?;
    let mut expected = Streaks::default();
    let mut wins = Vec::new();

    for day in days {
        ctl.switch_day(day)?;
        let style = if rng.gen_bool(0.7) {
            PlayStyle::Solver
        } else {
            PlayStyle::Stubborn
        };
        let played = SimulatedPlayer::new(assets, style).play(&mut ctl, &mut rng)?;
        expected.record(played.outcome);
        if played.outcome == GameState::Won {
            wins.push(day);
        }
        ensure!(ctl.streaks() == expected, "after day {day}: {:?} != {expected:?}", ctl.streaks());
        ensure!(ctl.settle_streak().is_none(), "day {day} settled twice");
    }

    for day in wins {
        ctl.switch_day(day)?;
        ensure!(ctl.settle_streak().is_none(), "revisiting day {day} settled a streak");
    }
    let reopened = open(assets, &storage, today, FIRST_DAY)?;
    ensure!(reopened.streaks() == expected, "streaks not persisted");
    Ok(())
}

fn navigation(assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = MemoryStorage::new();
    let last = assets.last_day();
    let today = random_day(assets, &mut rng);
    let mut ctl = open(assets, &storage, today, today)?;
    let mut expected = today;

    for _ in 0..60 {
        let day = match rng.gen_range(0..6) {
            0 => {
                expected = FIRST_DAY;
                ctl.play_first()?
            }
            1 => {
                expected = expected.saturating_sub(1).max(FIRST_DAY);
                ctl.play_previous()?
            }
            2 => {
                expected = expected.saturating_add(1).min(last);
                ctl.play_next()?
            }
            3 => {
                expected = today;
                ctl.play_last()?
            }
            4 => {
                let day = ctl.play_random(&mut rng)?;
                ensure!(
                    day == FIRST_DAY || day < today,
                    "random pick {day} not before today {today}"
                );
                expected = day;
                day
            }
            _ => {
                let requested = rng.gen_range(0..=last + 5);
                expected = requested.clamp(FIRST_DAY, last);
                ctl.switch_day(requested)?
            }
        };
        ensure!(day == expected, "landed on {day}, expected {expected}");
        ensure!(ctl.session().day() == day, "session shows {}", ctl.session().day());
        ensure!((FIRST_DAY..=last).contains(&day), "day {day} out of range");
    }
    Ok(())
}
