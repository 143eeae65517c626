use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Clone, Copy)]
pub enum GameType {
    TicTacToe,
    Labyrinth,
    Clicker,
    Reaction,
    GuessNumber,
    Adventure,
    ContactForm,
}

impl GameType {
    pub const ALL: [GameType; 7] = [
        GameType::TicTacToe,
        GameType::Labyrinth,
        GameType::Clicker,
        GameType::Reaction,
        GameType::GuessNumber,
        GameType::Adventure,
        GameType::ContactForm,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameType::TicTacToe => "Tic-Tac-Toe",
            GameType::Labyrinth => "Labyrinth",
            GameType::Clicker => "Clicker",
            GameType::Reaction => "Reaction Test",
            GameType::GuessNumber => "Guess the Number",
            GameType::Adventure => "Adventure Generator",
            GameType::ContactForm => "Contact Form",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            GameType::TicTacToe => "tictactoe",
            GameType::Labyrinth => "labyrinth",
            GameType::Clicker => "clicker",
            GameType::Reaction => "reaction",
            GameType::GuessNumber => "guess-number",
            GameType::Adventure => "adventure",
            GameType::ContactForm => "contact-form",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        GameType::ALL
            .iter()
            .copied()
            .find(|game| game.slug() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = GameType::ALL.iter().map(|g| g.slug()).collect();
                format!("Unknown game '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_slug_variants() {
        assert_eq!("labyrinth".parse::<GameType>(), Ok(GameType::Labyrinth));
        assert_eq!("Guess_Number".parse::<GameType>(), Ok(GameType::GuessNumber));
    }

    #[test]
    fn test_parse_unknown_lists_known_games() {
        let err = "chess".parse::<GameType>().unwrap_err();
        assert!(err.contains("tictactoe"));
    }
}
