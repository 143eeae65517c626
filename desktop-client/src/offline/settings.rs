use common::games::labyrinth::LabyrinthSessionSettings;
use common::games::reaction::ReactionSessionSettings;
use common::games::tictactoe::TicTacToeSessionSettings;
use std::time::Duration;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct LocalGameSettings {
    pub tictactoe: TicTacToeSessionSettings,
    pub labyrinth: LabyrinthSessionSettings,
    pub clicker_duration_sec: u32,
    pub reaction: ReactionSessionSettings,
}

impl LocalGameSettings {
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let layout = config.labyrinth.parse_layout()?;
        Ok(Self {
            tictactoe: TicTacToeSessionSettings {
                vs_cpu: config.tictactoe.vs_cpu,
                cpu_move_delay: Duration::from_millis(config.tictactoe.cpu_move_delay_ms),
            },
            labyrinth: LabyrinthSessionSettings {
                layout,
                clock_tick: Duration::from_millis(config.labyrinth.clock_tick_ms),
            },
            clicker_duration_sec: config.clicker.duration_sec,
            reaction: config.reaction.session_settings(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::labyrinth::Position;

    #[test]
    fn test_default_config_maps_to_default_sessions() {
        let settings = LocalGameSettings::from_config(&Config::default()).unwrap();
        assert_eq!(settings.tictactoe, TicTacToeSessionSettings::default());
        assert_eq!(settings.labyrinth.clock_tick, Duration::from_millis(100));
        assert_eq!(settings.labyrinth.layout.start(), Position::new(1, 1));
        assert_eq!(settings.clicker_duration_sec, 30);
        assert_eq!(settings.reaction, ReactionSessionSettings::default());
    }

    #[test]
    fn test_broken_layout_is_reported() {
        let mut config = Config::default();
        config.labyrinth.layout = vec!["S#".to_string()];
        assert!(LocalGameSettings::from_config(&config).is_err());
    }
}
