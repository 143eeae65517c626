use std::ops::RangeInclusive;

use crate::games::SessionRng;

pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not an integer in range. Does not count as an attempt.
    Invalid,
    Higher,
    Lower,
    Correct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessNumberSnapshot {
    pub attempts: u32,
    pub finished: bool,
    pub last_outcome: Option<GuessOutcome>,
    pub hint: String,
}

/// Number guessing round. The secret stays private until it is guessed.
pub struct GuessNumberGame {
    rng: SessionRng,
    secret: u32,
    attempts: u32,
    finished: bool,
    last_outcome: Option<GuessOutcome>,
}

impl GuessNumberGame {
    pub fn new(seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let secret = rng.random_range(SECRET_RANGE);
        Self {
            rng,
            secret,
            attempts: 0,
            finished: false,
            last_outcome: None,
        }
    }

    pub fn restart(&mut self) {
        self.secret = self.rng.random_range(SECRET_RANGE);
        self.attempts = 0;
        self.finished = false;
        self.last_outcome = None;
    }

    /// `None` once the number has been found.
    pub fn guess(&mut self, input: &str) -> Option<GuessOutcome> {
        if self.finished {
            return None;
        }

        let outcome = match parse_guess(input) {
            None => GuessOutcome::Invalid,
            Some(value) => {
                self.attempts += 1;
                if value == self.secret {
                    self.finished = true;
                    GuessOutcome::Correct
                } else if value < self.secret {
                    GuessOutcome::Higher
                } else {
                    GuessOutcome::Lower
                }
            }
        };
        self.last_outcome = Some(outcome);
        Some(outcome)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn hint(&self) -> String {
        match self.last_outcome {
            None => format!(
                "I picked a number from {} to {}. Try to guess it.",
                SECRET_RANGE.start(),
                SECRET_RANGE.end()
            ),
            Some(GuessOutcome::Invalid) => format!(
                "Enter a whole number from {} to {}.",
                SECRET_RANGE.start(),
                SECRET_RANGE.end()
            ),
            Some(GuessOutcome::Higher) => "My number is higher.".to_string(),
            Some(GuessOutcome::Lower) => "My number is lower.".to_string(),
            Some(GuessOutcome::Correct) => format!(
                "Correct! It was {}. Attempts: {}.",
                self.secret, self.attempts
            ),
        }
    }

    pub fn snapshot(&self) -> GuessNumberSnapshot {
        GuessNumberSnapshot {
            attempts: self.attempts,
            finished: self.finished,
            last_outcome: self.last_outcome,
            hint: self.hint(),
        }
    }

    #[cfg(test)]
    fn secret(&self) -> u32 {
        self.secret
    }
}

/// Any finite number with a whole value counts, so `5.0` and `1e1` are guesses.
fn parse_guess(input: &str) -> Option<u32> {
    let value = input.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    let min = f64::from(*SECRET_RANGE.start());
    let max = f64::from(*SECRET_RANGE.end());
    (min..=max).contains(&value).then_some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_in_range_for_many_seeds() {
        for seed in 0..200 {
            let game = GuessNumberGame::new(seed);
            assert!(SECRET_RANGE.contains(&game.secret()));
        }
    }

    #[test]
    fn test_invalid_input_not_counted() {
        let mut game = GuessNumberGame::new(1);
        for input in ["", "abc", "0", "101", "-5", "4.5"] {
            assert_eq!(game.guess(input), Some(GuessOutcome::Invalid));
        }
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.hint(), "Enter a whole number from 1 to 100.");
    }

    #[test]
    fn test_whole_valued_numbers_accepted() {
        assert_eq!(parse_guess("5.0"), Some(5));
        assert_eq!(parse_guess("1e1"), Some(10));
        assert_eq!(parse_guess(" +42 "), Some(42));
        assert_eq!(parse_guess("100.000"), Some(100));
        for input in ["4.5", "inf", "NaN", "1e3", "0.0", "100.5"] {
            assert_eq!(parse_guess(input), None, "{}", input);
        }

        let mut game = GuessNumberGame::new(1);
        assert_ne!(game.guess("5.0"), Some(GuessOutcome::Invalid));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_higher_lower_correct() {
        let mut game = GuessNumberGame::new(7);
        let secret = game.secret();

        if secret > 1 {
            assert_eq!(game.guess("1"), Some(GuessOutcome::Higher));
        }
        if secret < 100 {
            assert_eq!(game.guess("100"), Some(GuessOutcome::Lower));
        }
        assert_eq!(game.guess(&format!(" {} ", secret)), Some(GuessOutcome::Correct));
        assert!(game.is_finished());
        assert_eq!(
            game.hint(),
            format!("Correct! It was {}. Attempts: {}.", secret, game.attempts())
        );
    }

    #[test]
    fn test_guesses_after_finish_ignored() {
        let mut game = GuessNumberGame::new(7);
        let secret = game.secret().to_string();
        game.guess(&secret);
        let attempts = game.attempts();

        assert_eq!(game.guess("50"), None);
        assert_eq!(game.attempts(), attempts);
    }

    #[test]
    fn test_binary_search_finds_secret() {
        let mut game = GuessNumberGame::new(42);
        let (mut low, mut high) = (1, 100);
        loop {
            let mid = (low + high) / 2;
            match game.guess(&mid.to_string()) {
                Some(GuessOutcome::Higher) => low = mid + 1,
                Some(GuessOutcome::Lower) => high = mid - 1,
                Some(GuessOutcome::Correct) => break,
                other => panic!("unexpected outcome {:?}", other),
            }
        }
        assert!(game.attempts() <= 7);
    }

    #[test]
    fn test_restart_clears_round() {
        let mut game = GuessNumberGame::new(3);
        let secret = game.secret().to_string();
        game.guess(&secret);
        game.restart();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.attempts, 0);
        assert!(!snapshot.finished);
        assert_eq!(snapshot.last_outcome, None);
    }
}
