use common::contact_form::ContactFormSession;
use common::games::adventure::AdventureGenerator;
use common::games::clicker::ClickerSession;
use common::games::guess_number::GuessNumberGame;
use common::games::labyrinth::LabyrinthSession;
use common::games::reaction::ReactionSession;
use common::games::tictactoe::TicTacToeSession;
use common::games::{GameBroadcaster, GameStateUpdate};
use common::log;
use common::storage::SharedStorage;
use tokio::sync::mpsc;

use crate::state::{
    AdventureCommand, AppState, ClickerCommand, ClientCommand, ContactFormCommand, GameCommand,
    GuessNumberCommand, LabyrinthCommand, MenuCommand, ReactionCommand, SharedState,
    TicTacToeCommand,
};

use super::{LocalBroadcaster, LocalGameSettings};

/// Every game lives for the whole run, so a clicker round keeps counting while another
/// screen is open.
struct LocalGames {
    broadcaster: LocalBroadcaster,
    tictactoe: TicTacToeSession<LocalBroadcaster>,
    labyrinth: LabyrinthSession<LocalBroadcaster>,
    clicker: ClickerSession<LocalBroadcaster>,
    reaction: ReactionSession<LocalBroadcaster>,
    guess_number: GuessNumberGame,
    adventure: AdventureGenerator,
    contact_form: ContactFormSession<LocalBroadcaster>,
}

impl LocalGames {
    fn new(
        settings: LocalGameSettings,
        storage: SharedStorage,
        broadcaster: LocalBroadcaster,
    ) -> Self {
        Self {
            tictactoe: TicTacToeSession::new(
                settings.tictactoe,
                rand::random(),
                broadcaster.clone(),
            ),
            labyrinth: LabyrinthSession::new(settings.labyrinth, broadcaster.clone()),
            clicker: ClickerSession::new(
                settings.clicker_duration_sec,
                storage.clone(),
                broadcaster.clone(),
            ),
            reaction: ReactionSession::new(settings.reaction, rand::random(), broadcaster.clone()),
            guess_number: GuessNumberGame::new(rand::random()),
            adventure: AdventureGenerator::new(rand::random(), storage),
            contact_form: ContactFormSession::new(broadcaster.clone()),
            broadcaster,
        }
    }

    async fn publish_all(&self) {
        self.tictactoe.publish().await;
        self.labyrinth.publish().await;
        self.clicker.publish().await;
        self.reaction.publish().await;
        self.contact_form.publish().await;
        self.publish_guess_number().await;
        self.publish_adventure().await;
    }

    async fn publish_guess_number(&self) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::GuessNumber(self.guess_number.snapshot()))
            .await;
    }

    async fn publish_adventure(&self) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::Adventure(self.adventure.snapshot()))
            .await;
    }

    async fn handle(&mut self, command: GameCommand, shared_state: &SharedState) {
        match command {
            GameCommand::TicTacToe(command) => match command {
                TicTacToeCommand::PlaceMark { index } => {
                    self.tictactoe.place_mark(index).await;
                }
                TicTacToeCommand::Restart => self.tictactoe.restart().await,
                TicTacToeCommand::SetVsCpu { enabled } => self.tictactoe.set_vs_cpu(enabled).await,
            },

            GameCommand::Labyrinth(command) => match command {
                LabyrinthCommand::Start => self.labyrinth.start().await,
                LabyrinthCommand::Restart => self.labyrinth.restart().await,
                LabyrinthCommand::Move { direction } => {
                    self.labyrinth.try_move(direction).await;
                }
            },

            GameCommand::Clicker(command) => match command {
                ClickerCommand::Start => {
                    self.clicker.start().await;
                }
                ClickerCommand::Click => {
                    self.clicker.click().await;
                }
                ClickerCommand::Reset => self.clicker.reset().await,
            },

            GameCommand::Reaction(command) => match command {
                ReactionCommand::Start => {
                    self.reaction.start().await;
                }
                ReactionCommand::Hit => {
                    self.reaction.hit().await;
                }
                ReactionCommand::Reset => self.reaction.reset().await,
            },

            GameCommand::GuessNumber(command) => {
                match command {
                    GuessNumberCommand::Guess { input } => {
                        self.guess_number.guess(&input);
                    }
                    GuessNumberCommand::Restart => self.guess_number.restart(),
                }
                self.publish_guess_number().await;
            }

            GameCommand::Adventure(command) => {
                match command {
                    AdventureCommand::Generate => {
                        self.adventure.generate();
                    }
                    AdventureCommand::Save => {
                        if let Err(e) = self.adventure.save_current() {
                            shared_state.set_error(format!("Could not save adventure: {}", e));
                        }
                    }
                    AdventureCommand::Clear => {
                        if let Err(e) = self.adventure.clear_saved() {
                            shared_state.set_error(format!("Could not clear adventures: {}", e));
                        }
                    }
                }
                self.publish_adventure().await;
            }

            GameCommand::ContactForm(command) => match command {
                ContactFormCommand::Submit {
                    name,
                    email,
                    message,
                } => {
                    self.contact_form.submit(&name, &email, &message).await;
                }
                ContactFormCommand::Reset => self.contact_form.reset().await,
            },
        }
    }
}

pub async fn local_game_task(
    settings: LocalGameSettings,
    storage: SharedStorage,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let mut games = LocalGames::new(settings, storage, broadcaster);
    games.publish_all().await;

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Menu(MenuCommand::OpenGame(game)) => {
                log!("Opening {}", game);
                shared_state.set_state(AppState::InGame { game });
            }

            ClientCommand::Menu(MenuCommand::BackToMenu) => {
                shared_state.set_state(AppState::Menu);
            }

            ClientCommand::Game(command) => games.handle(command, &shared_state).await,
        }
    }

    log!("Command channel closed, stopping local games");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use common::config::MemoryContentConfigProvider;
    use common::games::GameType;
    use common::games::labyrinth::{Direction, GameStatus, Position};
    use common::storage::LocalStorage;
    use std::time::Duration;

    fn spawn_task() -> (SharedState, mpsc::UnboundedSender<ClientCommand>) {
        let settings = LocalGameSettings::from_config(&Config::default()).unwrap();
        let storage = LocalStorage::new(MemoryContentConfigProvider::new()).into_shared();
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(local_game_task(settings, storage, shared_state.clone(), rx));
        (shared_state, tx)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_game_publishes_initial_state() {
        let (shared_state, _tx) = spawn_task();
        settle().await;

        for game in GameType::ALL {
            assert!(shared_state.get_game_state(game).is_some(), "{} has no state", game);
        }
        assert_eq!(shared_state.get_state(), AppState::Menu);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_game_and_back() {
        let (shared_state, tx) = spawn_task();
        tx.send(ClientCommand::Menu(MenuCommand::OpenGame(GameType::Labyrinth))).unwrap();
        settle().await;
        assert_eq!(shared_state.get_state(), AppState::InGame { game: GameType::Labyrinth });

        tx.send(ClientCommand::Menu(MenuCommand::BackToMenu)).unwrap();
        settle().await;
        assert_eq!(shared_state.get_state(), AppState::Menu);
    }

    #[tokio::test(start_paused = true)]
    async fn test_labyrinth_commands_reach_session() {
        let (shared_state, tx) = spawn_task();
        tx.send(ClientCommand::Game(GameCommand::Labyrinth(LabyrinthCommand::Start))).unwrap();
        tx.send(ClientCommand::Game(GameCommand::Labyrinth(LabyrinthCommand::Move {
            direction: Direction::Right,
        })))
        .unwrap();
        settle().await;

        let Some(GameStateUpdate::Labyrinth(snapshot)) =
            shared_state.get_game_state(GameType::Labyrinth)
        else {
            panic!("labyrinth state missing");
        };
        assert_eq!(snapshot.game_state.status, GameStatus::Active);
        assert_eq!(snapshot.game_state.player, Position::new(1, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_guess_updates_snapshot() {
        let (shared_state, tx) = spawn_task();
        tx.send(ClientCommand::Game(GameCommand::GuessNumber(GuessNumberCommand::Guess {
            input: "not a number".to_string(),
        })))
        .unwrap();
        settle().await;

        let Some(GameStateUpdate::GuessNumber(snapshot)) =
            shared_state.get_game_state(GameType::GuessNumber)
        else {
            panic!("guess number state missing");
        };
        assert_eq!(snapshot.attempts, 0);
        assert_eq!(snapshot.hint, "Enter a whole number from 1 to 100.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clicker_round_lands_in_result_log() {
        let (shared_state, tx) = spawn_task();
        tx.send(ClientCommand::Game(GameCommand::Clicker(ClickerCommand::Start))).unwrap();
        tx.send(ClientCommand::Game(GameCommand::Clicker(ClickerCommand::Click))).unwrap();
        tokio::time::sleep(Duration::from_secs(31)).await;

        let results = shared_state.get_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].game, GameType::Clicker);
        assert_eq!(results[0].summary, "Time's up! Score: 1. New record!");
    }
}
