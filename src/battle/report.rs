//! Rendering a finished battle for the hosting bot.
//!
//! The bot uploads `log` as a text file named `LOG_FILE_NAME` and posts
//! `summary` as the message body.

use super::event::AttackEvent;
use super::roster::BattleResult;
use crate::core::participant::{Participant, Side, SideMap};

/// File name the battle log is uploaded under.
pub const LOG_FILE_NAME: &str = "battle.log";

/// Text output of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub result: BattleResult,
    /// Side the winner played on.
    pub winning_side: Side,
    /// One line per attack, each terminated by `\n`.
    pub log: String,
    /// `"{author} vs {opponent}\nWinner: {winner}"`.
    pub summary: String,
}

impl BattleReport {
    /// Build a report from a drained battle.
    #[must_use]
    pub fn new(
        participants: &SideMap<Participant>,
        events: &[AttackEvent],
        result: BattleResult,
    ) -> Self {
        let winning_side = if participants[Side::A].id == result.winner {
            Side::A
        } else {
            Side::B
        };

        let mut log = String::new();
        for event in events {
            log.push_str(&event.to_string());
            log.push('\n');
        }

        let summary = format!(
            "{} vs {}\nWinner: {}",
            participants[Side::A],
            participants[Side::B],
            participants[winning_side],
        );

        Self {
            result,
            winning_side,
            log,
            summary,
        }
    }

    /// Number of logged attacks.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.log.lines().count()
    }
}
