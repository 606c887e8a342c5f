//! # Command Definitions
//!
//! The key bindings shown to the player, per mode.

use crate::game::{Equipment, GameMode};

/// One line of the help screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Keys or words that trigger the command
    pub keys: &'static str,
    /// What the command does
    pub description: &'static str,
}

impl Command {
    /// Creates a help entry.
    pub const fn new(keys: &'static str, description: &'static str) -> Self {
        Self { keys, description }
    }
}

/// Commands available underground.
pub const MINE_COMMANDS: [Command; 4] = [
    Command::new("w a s d / up down left right", "move or dig"),
    Command::new("h j k l", "move or dig (vi keys)"),
    Command::new("t / elevator", "ride the elevator up, or to town from the top row"),
    Command::new("x / leave", "return to town"),
];

/// Commands available in town, besides buying.
pub const TOWN_COMMANDS: [Command; 5] = [
    Command::new("b / sell", "sell minerals at the bank"),
    Command::new("h / heal", "heal to full at the hospital ($2 per HP)"),
    Command::new("s / saloon show", "watch the show (needs $10000)"),
    Command::new("n / saloon night", "spend the night at the saloon (needs $5000)"),
    Command::new("e / enter", "ride the elevator down ($30)"),
];

/// Commands available everywhere.
pub const GENERAL_COMMANDS: [Command; 4] = [
    Command::new("status", "show money, health and minerals"),
    Command::new("help", "show this help"),
    Command::new("restart", "start a new game"),
    Command::new("quit", "leave the game"),
];

/// Help text for the given mode.
pub fn help_text(mode: GameMode) -> String {
    let mut lines = Vec::new();
    match mode {
        GameMode::Mine => lines.extend(MINE_COMMANDS.iter().map(format_command)),
        GameMode::Town => {
            for (slot, item) in Equipment::ALL.iter().enumerate() {
                lines.push(format!(
                    "  {:<30} buy {} ${} ({})",
                    slot + 1,
                    item,
                    item.price(),
                    item.description()
                ));
            }
            lines.extend(TOWN_COMMANDS.iter().map(format_command));
        }
        GameMode::Victory | GameMode::GameOver => {
            lines.push(format_command(&Command::new("r", "play again")));
            lines.push(format_command(&Command::new("q", "quit")));
        }
    }
    lines.extend(GENERAL_COMMANDS.iter().map(format_command));
    lines.join("\n")
}

fn format_command(command: &Command) -> String {
    format!("  {:<30} {}", command.keys, command.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_town_help_lists_store() {
        let help = help_text(GameMode::Town);
        assert!(help.contains("buy drill $250"));
        assert!(help.contains("sell minerals"));
        assert!(!help.contains("vi keys"));
    }

    #[test]
    fn test_mine_help() {
        let help = help_text(GameMode::Mine);
        assert!(help.contains("elevator"));
        assert!(help.contains("restart"));
        assert_eq!(help.lines().count(), 8);
    }
}
