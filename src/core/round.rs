//! Round state machine
//!
//! A [`Round`] is a value: every operation consumes it and hands back the next
//! round together with what happened. Lives, the mask, and the win/lose status
//! are all derived from a single log of guess and hint events.
//!
//! ```text
//! Idle --start--> InProgress --last blank revealed--> Won
//!                     |
//!                     +------lives reach 0----------> Lost
//! ```

use super::{Mask, Word};
use thiserror::Error;

/// Lives at the start of every round
pub const STARTING_LIVES: u8 = 5;

/// One entry in a round's event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundEvent {
    /// A lowercase ASCII letter was guessed
    Guess(u8),
    /// The hint was revealed
    Hint,
}

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No round has been started yet
    Idle,
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Status of an optional round; `Idle` when none has been started
    #[must_use]
    pub fn of(round: Option<&Round>) -> Self {
        round.map_or(Self::Idle, Round::status)
    }

    /// True for the terminal states
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of guessing a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` slots were uncovered
    Hit { revealed: usize },
    /// The letter is not in the word; one life was lost
    Miss,
    /// The letter was already revealed; nothing changed
    AlreadyGuessed,
    /// The round is finished; nothing changed
    Ignored(Status),
}

/// Result of asking for the hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// The hint is now visible; one life was lost
    Revealed,
    /// The hint was already shown this round; nothing changed
    AlreadyUsed,
    /// The round is finished; nothing changed
    Ignored(Status),
}

/// Errors raised by round operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// One play-through from word selection to Won/Lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: Word,
    events: Vec<RoundEvent>,
}

impl Round {
    /// Start a fresh round: full lives, nothing revealed, hint hidden
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Round, Status, Word, STARTING_LIVES};
    ///
    /// let round = Round::start(Word::new("ocean", "Vast blue expanse").unwrap());
    /// assert_eq!(round.lives(), STARTING_LIVES);
    /// assert_eq!(round.status(), Status::InProgress);
    /// assert_eq!(round.mask().to_string(), "_ _ _ _ _");
    /// ```
    #[must_use]
    pub fn start(word: Word) -> Self {
        tracing::debug!(len = word.len(), "round started");
        Self {
            word,
            events: Vec::new(),
        }
    }

    /// Guess a letter (case-insensitive)
    ///
    /// Reveals every matching slot, or costs a life when the letter is absent.
    /// Every miss is logged, so guessing the same absent letter again costs
    /// another life. Guessing a revealed letter changes nothing.
    ///
    /// # Errors
    /// Returns `RoundError::InvalidLetter` if `letter` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, Word};
    ///
    /// let round = Round::start(Word::new("kitten", "").unwrap());
    /// let (round, outcome) = round.guess('T').unwrap();
    /// assert_eq!(outcome, GuessOutcome::Hit { revealed: 2 });
    /// assert_eq!(round.mask().to_string(), "_ _ t t _ _");
    /// ```
    pub fn guess(mut self, letter: char) -> Result<(Self, GuessOutcome), RoundError> {
        if !letter.is_ascii_alphabetic() {
            return Err(RoundError::InvalidLetter(letter));
        }
        let status = self.status();
        if status.is_over() {
            return Ok((self, GuessOutcome::Ignored(status)));
        }

        let letter = letter.to_ascii_lowercase() as u8;
        let outcome = if self.word.has_letter(letter) {
            if self.is_revealed(letter) {
                return Ok((self, GuessOutcome::AlreadyGuessed));
            }
            GuessOutcome::Hit {
                revealed: self.word.positions_of(letter).len(),
            }
        } else {
            GuessOutcome::Miss
        };

        self.events.push(RoundEvent::Guess(letter));
        self.trace_transition(status);
        Ok((self, outcome))
    }

    /// Reveal the hint at the cost of one life
    ///
    /// The hint can be used once per round.
    #[must_use]
    pub fn use_hint(mut self) -> (Self, HintOutcome) {
        let status = self.status();
        if status.is_over() {
            return (self, HintOutcome::Ignored(status));
        }
        if self.hint_used() {
            return (self, HintOutcome::AlreadyUsed);
        }

        self.events.push(RoundEvent::Hint);
        self.trace_transition(status);
        (self, HintOutcome::Revealed)
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The event log, oldest first
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Number of events that cost a life (misses and hint use)
    #[must_use]
    pub fn penalties(&self) -> usize {
        self.events
            .iter()
            .filter(|event| match event {
                RoundEvent::Guess(letter) => !self.word.has_letter(*letter),
                RoundEvent::Hint => true,
            })
            .count()
    }

    /// Remaining lives, also the hangman drawing stage
    #[must_use]
    pub fn lives(&self) -> u8 {
        let penalties = u8::try_from(self.penalties()).unwrap_or(u8::MAX);
        STARTING_LIVES.saturating_sub(penalties)
    }

    /// The masked word as currently revealed
    #[must_use]
    pub fn mask(&self) -> Mask {
        Mask::reveal(&self.word, &self.correct_letters())
    }

    /// Current status; never `Idle` for a started round
    #[must_use]
    pub fn status(&self) -> Status {
        if self.mask().is_complete() {
            Status::Won
        } else if self.lives() == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Distinct guessed letters in the order they were first guessed
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<u8> {
        let mut letters = Vec::new();
        for event in &self.events {
            if let RoundEvent::Guess(letter) = event
                && !letters.contains(letter)
            {
                letters.push(*letter);
            }
        }
        letters
    }

    /// Distinct guessed letters that are in the word
    #[must_use]
    pub fn correct_letters(&self) -> Vec<u8> {
        self.guessed_letters()
            .into_iter()
            .filter(|letter| self.word.has_letter(*letter))
            .collect()
    }

    /// Distinct guessed letters that are not in the word
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<u8> {
        self.guessed_letters()
            .into_iter()
            .filter(|letter| !self.word.has_letter(*letter))
            .collect()
    }

    /// True if the letter has been guessed this round (hit or miss)
    #[must_use]
    pub fn has_guessed(&self, letter: u8) -> bool {
        self.events.contains(&RoundEvent::Guess(letter.to_ascii_lowercase()))
    }

    /// True once the hint has been revealed
    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.events.contains(&RoundEvent::Hint)
    }

    /// The hint text, visible only after it has been used
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint_used().then(|| self.word.hint())
    }

    /// The full word spaced like the mask, shown when the round is lost
    #[must_use]
    pub fn solution(&self) -> String {
        Mask::reveal(&self.word, self.word.letters()).to_string()
    }

    fn is_revealed(&self, letter: u8) -> bool {
        self.events.contains(&RoundEvent::Guess(letter))
    }

    fn trace_transition(&self, before: Status) {
        let after = self.status();
        if after != before {
            match after {
                Status::Won => tracing::info!(word = %self.word, lives = self.lives(), "round won"),
                Status::Lost => tracing::info!(word = %self.word, "round lost"),
                Status::Idle | Status::InProgress => {}
            }
        }
    }
}
