//! Seeded stand-in for a person at the keyboard.
use anyhow::{Context, Result, anyhow, bail};
use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use serde::Serialize;
use wordle_archive_game::{
    Archive, ArchiveController, ArchiveStorage, BundledData, DataLoader, Day, GameState, ROWS,
    SubmitOutcome, Word, evaluate_guess,
};

/// Word lists loaded once and shared by every scenario run.
#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub archive: Archive,
    /// Dictionary in sorted order so seeded picks are reproducible.
    pub guesses: Vec<Word>,
    pub answers: Vec<Word>,
}

impl TesterAssets {
    pub fn load_default() -> Result<Self> {
        let archive = BundledData
            .load_archive()
            .context("loading bundled word lists")?;
        Ok(Self::from_archive(archive))
    }

    #[must_use]
    pub fn from_archive(archive: Archive) -> Self {
        let guesses = archive.dictionary.sorted_words();
        let answers = archive.answers.iter().copied().collect();
        Self {
            archive,
            guesses,
            answers,
        }
    }

    #[must_use]
    pub fn last_day(&self) -> Day {
        self.archive.last_day()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayStyle {
    /// Only guesses answers still consistent with every clue so far.
    Solver,
    /// Random dictionary words, ignoring clues.
    Wanderer,
    /// Never guesses the answer, so always loses.
    Stubborn,
}

impl PlayStyle {
    pub const ALL: [Self; 3] = [Self::Solver, Self::Wanderer, Self::Stubborn];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solver => "solver",
            Self::Wanderer => "wanderer",
            Self::Stubborn => "stubborn",
        }
    }
}

/// What happened when a player sat down at one day.
#[derive(Debug, Clone, Serialize)]
pub struct PlayRecord {
    pub day: Day,
    pub style: PlayStyle,
    pub outcome: GameState,
    pub guesses: Vec<String>,
}

impl PlayRecord {
    #[must_use]
    pub fn rows_used(&self) -> usize {
        self.guesses.len()
    }
}

pub struct SimulatedPlayer<'a> {
    assets: &'a TesterAssets,
    style: PlayStyle,
}

impl<'a> SimulatedPlayer<'a> {
    #[must_use]
    pub const fn new(assets: &'a TesterAssets, style: PlayStyle) -> Self {
        Self { assets, style }
    }

    /// Type and submit guesses until the open day resolves.
    ///
    /// A day showing a saved solution is returned as-is with no guesses.
    pub fn play<S, R>(&self, controller: &mut ArchiveController<S>, rng: &mut R) -> Result<PlayRecord>
    where
        S: ArchiveStorage + Clone,
        R: Rng + ?Sized,
    {
        let answer = controller.session().answer();
        let mut candidates = self.assets.answers.clone();
        let mut guesses = Vec::new();

        while controller.session().state() == GameState::Playing
            && !controller.session().is_saved_solution()
        {
            if guesses.len() >= ROWS {
                bail!("day {} still open after {ROWS} guesses", controller.day());
            }
            let guess = self.next_guess(&candidates, answer, rng);
            for letter in guess.letters() {
                controller.add_letter(letter);
            }
            let outcome = controller
                .submit_row()
                .map_err(|rejected| anyhow!("{guess} rejected: {rejected}"))?;
            if outcome == SubmitOutcome::Ignored {
                bail!("{guess} was ignored on an open day");
            }
            let row = guesses.len();
            let clues = controller.session().cell_statuses()[row];
            candidates.retain(|candidate| evaluate_guess(&guess, candidate) == clues);
            guesses.push(guess.to_string());
        }

        log::debug!(
            "{} played day {} -> {} in {} rows",
            self.style.label(),
            controller.day(),
            controller.session().state(),
            guesses.len()
        );
        Ok(PlayRecord {
            day: controller.day(),
            style: self.style,
            outcome: controller.session().state(),
            guesses,
        })
    }

    fn next_guess<R: Rng + ?Sized>(&self, candidates: &[Word], answer: Word, rng: &mut R) -> Word {
        match self.style {
            PlayStyle::Solver => candidates.choose(rng).copied().unwrap_or(answer),
            PlayStyle::Wanderer => self.assets.guesses.choose(rng).copied().unwrap_or(answer),
            PlayStyle::Stubborn => self
                .assets
                .guesses
                .iter()
                .filter(|word| **word != answer)
                .choose(rng)
                .copied()
                .unwrap_or(answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use wordle_archive_game::MemoryStorage;

    fn assets() -> TesterAssets {
        TesterAssets::load_default().expect("bundled data")
    }

    #[test]
    fn stubborn_player_uses_every_row_and_loses() {
        let assets = assets();
        let mut ctl = ArchiveController::new(assets.archive.clone(), MemoryStorage::new(), 30, 12).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let record = SimulatedPlayer::new(&assets, PlayStyle::Stubborn)
            .play(&mut ctl, &mut rng)
            .unwrap();
        assert_eq!(record.outcome, GameState::Lost);
        assert_eq!(record.rows_used(), ROWS);
    }

    #[test]
    fn solver_always_resolves_the_day() {
        let assets = assets();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for day in [1, 10, 25] {
            let mut ctl =
                ArchiveController::new(assets.archive.clone(), MemoryStorage::new(), 30, day).unwrap();
            let record = SimulatedPlayer::new(&assets, PlayStyle::Solver)
                .play(&mut ctl, &mut rng)
                .unwrap();
            assert!(record.outcome.is_terminal());
            assert!(record.rows_used() <= ROWS);
        }
    }

    #[test]
    fn saved_solution_is_left_alone() {
        let assets = assets();
        let storage = MemoryStorage::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ctl = ArchiveController::new(assets.archive.clone(), storage.clone(), 30, 10).unwrap();
        for letter in "BRINE".chars() {
            ctl.add_letter(letter);
        }
        ctl.submit_row().unwrap();

        let mut reopened = ArchiveController::new(assets.archive.clone(), storage, 30, 10).unwrap();
        let record = SimulatedPlayer::new(&assets, PlayStyle::Wanderer)
            .play(&mut reopened, &mut rng)
            .unwrap();
        assert_eq!(record.outcome, GameState::Won);
        assert!(record.guesses.is_empty());
    }
}
