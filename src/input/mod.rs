//! # Input Module
//!
//! Turns typed commands into player inputs and player inputs into game
//! commands.
//!
//! Keys mean different things in different modes: `s` digs south in the
//! mine but watches the saloon show in town, and `h` is a vi-style move in
//! the mine but the hospital in town.

pub mod commands;

pub use commands::*;

use crate::game::{Direction, Equipment, GameMode, GameSession, Outcome, SaloonOption};
use crate::utils::RandomSource;

/// Input handler for processing player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl) in the mine
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::{Direction, GameMode, InputHandler, PlayerInput};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(
    ///     input_handler.parse_line("s", GameMode::Mine),
    ///     Some(PlayerInput::Move(Direction::South))
    /// );
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Parses one line of input in the context of the current mode.
    ///
    /// Returns None for blank or unrecognised input.
    pub fn parse_line(&self, line: &str, mode: GameMode) -> Option<PlayerInput> {
        let line = line.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let argument = words.next();

        if let Some(input) = Self::parse_general(command) {
            return Some(input);
        }
        match mode {
            GameMode::Mine => self.parse_mine(command),
            GameMode::Town => Self::parse_town(command, argument),
            GameMode::Victory | GameMode::GameOver => match command {
                "r" => Some(PlayerInput::Restart),
                "q" => Some(PlayerInput::Quit),
                _ => None,
            },
        }
    }

    fn parse_general(command: &str) -> Option<PlayerInput> {
        match command {
            "status" | "?" => Some(PlayerInput::Status),
            "help" => Some(PlayerInput::Help),
            "restart" | "new" => Some(PlayerInput::Restart),
            "quit" | "exit" => Some(PlayerInput::Quit),
            _ => None,
        }
    }

    fn parse_mine(&self, command: &str) -> Option<PlayerInput> {
        let direction = match command {
            "w" | "up" | "north" => Some(Direction::North),
            "s" | "down" | "south" => Some(Direction::South),
            "a" | "left" | "west" => Some(Direction::West),
            "d" | "right" | "east" => Some(Direction::East),
            "k" if self.vi_keys_enabled => Some(Direction::North),
            "j" if self.vi_keys_enabled => Some(Direction::South),
            "h" if self.vi_keys_enabled => Some(Direction::West),
            "l" if self.vi_keys_enabled => Some(Direction::East),
            _ => None,
        };
        if let Some(direction) = direction {
            return Some(PlayerInput::Move(direction));
        }
        match command {
            "t" | "elevator" => Some(PlayerInput::Elevator),
            "x" | "leave" | "town" => Some(PlayerInput::LeaveMine),
            _ => None,
        }
    }

    fn parse_town(command: &str, argument: Option<&str>) -> Option<PlayerInput> {
        if let Ok(slot) = command.parse::<usize>() {
            return Equipment::from_slot(slot).map(PlayerInput::Buy);
        }
        match command {
            "buy" => {
                let argument = argument?;
                argument
                    .parse::<usize>()
                    .ok()
                    .and_then(Equipment::from_slot)
                    .or_else(|| Equipment::from_name(argument))
                    .map(PlayerInput::Buy)
            }
            "b" | "sell" | "bank" => Some(PlayerInput::Sell),
            "h" | "heal" | "hospital" => Some(PlayerInput::Heal),
            "s" | "show" => Some(PlayerInput::Saloon(SaloonOption::Show)),
            "n" | "night" => Some(PlayerInput::Saloon(SaloonOption::Night)),
            "saloon" => match argument {
                Some("night") => Some(PlayerInput::Saloon(SaloonOption::Night)),
                Some("show") | None => Some(PlayerInput::Saloon(SaloonOption::Show)),
                Some(_) => None,
            },
            "e" | "enter" | "mine" => Some(PlayerInput::EnterMine),
            _ => None,
        }
    }

    /// Runs the game command behind an input.
    ///
    /// Inputs that only concern the driver (status, help, quit) return None.
    pub fn apply<R: RandomSource>(
        &self,
        input: PlayerInput,
        session: &mut GameSession<R>,
    ) -> Option<Outcome> {
        let outcome = match input {
            PlayerInput::Move(direction) => session.attempt_move(direction),
            PlayerInput::Elevator => session.use_elevator(),
            PlayerInput::LeaveMine => session.leave_mine(),
            PlayerInput::EnterMine => session.enter_mine(),
            PlayerInput::Buy(item) => session.buy_equipment(item),
            PlayerInput::Sell => session.sell_minerals(),
            PlayerInput::Heal => session.heal_player(),
            PlayerInput::Saloon(option) => session.visit_saloon(option),
            PlayerInput::Restart => session.restart(),
            PlayerInput::Status | PlayerInput::Help | PlayerInput::Quit => return None,
        };
        Some(outcome)
    }
}

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move or dig one cell
    Move(Direction),
    /// Ride the elevator
    Elevator,
    /// Go back to town
    LeaveMine,
    /// Pay the fee and go down
    EnterMine,
    /// Buy a tool
    Buy(Equipment),
    /// Sell minerals at the bank
    Sell,
    /// Heal at the hospital
    Heal,
    /// Visit the saloon
    Saloon(SaloonOption),
    /// Show the player's status
    Status,
    /// Show help information
    Help,
    /// Start a new game
    Restart,
    /// Quit the game
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationConfig;
    use crate::utils::ScriptedRandom;

    #[test]
    fn test_same_key_depends_on_mode() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.parse_line("s", GameMode::Mine),
            Some(PlayerInput::Move(Direction::South))
        );
        assert_eq!(
            handler.parse_line("s", GameMode::Town),
            Some(PlayerInput::Saloon(SaloonOption::Show))
        );
        assert_eq!(
            handler.parse_line("h", GameMode::Mine),
            Some(PlayerInput::Move(Direction::West))
        );
        assert_eq!(handler.parse_line("h", GameMode::Town), Some(PlayerInput::Heal));
    }

    #[test]
    fn test_vi_keys_can_be_disabled() {
        let handler = InputHandler {
            vi_keys_enabled: false,
        };
        assert_eq!(handler.parse_line("j", GameMode::Mine), None);
        assert_eq!(
            handler.parse_line("DOWN", GameMode::Mine),
            Some(PlayerInput::Move(Direction::South))
        );
    }

    #[test]
    fn test_buy_forms() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.parse_line("3", GameMode::Town),
            Some(PlayerInput::Buy(Equipment::Drill))
        );
        assert_eq!(
            handler.parse_line("buy bucket", GameMode::Town),
            Some(PlayerInput::Buy(Equipment::Bucket))
        );
        assert_eq!(
            handler.parse_line("buy 7", GameMode::Town),
            Some(PlayerInput::Buy(Equipment::Dynamite))
        );
        assert_eq!(handler.parse_line("8", GameMode::Town), None);
        assert_eq!(handler.parse_line("buy", GameMode::Town), None);
        assert_eq!(handler.parse_line("3", GameMode::Mine), None);
    }

    #[test]
    fn test_general_and_terminal_commands() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse_line("  ", GameMode::Town), None);
        assert_eq!(handler.parse_line("status", GameMode::Mine), Some(PlayerInput::Status));
        assert_eq!(handler.parse_line("r", GameMode::Victory), Some(PlayerInput::Restart));
        assert_eq!(handler.parse_line("q", GameMode::GameOver), Some(PlayerInput::Quit));
        assert_eq!(handler.parse_line("w", GameMode::GameOver), None);
        assert_eq!(
            handler.parse_line("saloon night", GameMode::Town),
            Some(PlayerInput::Saloon(SaloonOption::Night))
        );
    }

    #[test]
    fn test_apply_runs_session_commands() {
        let handler = InputHandler::new();
        let mut session =
            GameSession::with_rng(ScriptedRandom::new(), GenerationConfig::without_veins(5, 8))
                .unwrap();

        let outcome = handler.apply(PlayerInput::LeaveMine, &mut session);
        assert!(matches!(outcome, Some(Ok(_))));
        assert_eq!(session.mode(), GameMode::Town);
        assert_eq!(handler.apply(PlayerInput::Status, &mut session), None);
    }
}
