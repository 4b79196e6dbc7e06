use alloc::vec::Vec;
use log::info;

use crate::{
    common::{GameError, ShotResult},
    fleet::Fleet,
    position::Position,
};

/// Ordered record of one shooter's shots. Each entry carries its hit flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotLog {
    shots: Vec<Position>,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shot and its outcome.
    pub fn record(&mut self, target: Position, result: ShotResult) {
        self.shots.push(target.with_hit(result.is_hit()));
    }

    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.shots.iter().filter(|p| p.is_hit()).count()
    }

    /// Outcome of the latest shot at `target`, if it was fired at.
    pub fn lookup(&self, target: &Position) -> Option<bool> {
        self.shots
            .iter()
            .rev()
            .find(|p| p.same_cell(target))
            .map(Position::is_hit)
    }
}

/// Current status of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game session: the player's fleet against the opponent's fleet.
///
/// The session owns both fleets and both shot logs. It has no notion of
/// whose turn it is; callers alternate `player_shot` and `opponent_shot`.
#[derive(Debug, Clone)]
pub struct Game {
    player_fleet: Fleet,
    enemy_fleet: Fleet,
    player_shots: ShotLog,
    opponent_shots: ShotLog,
}

impl Game {
    /// Start a session. Both fleets must be fully placed.
    pub fn new(player_fleet: Fleet, enemy_fleet: Fleet) -> Result<Self, GameError> {
        for fleet in [&player_fleet, &enemy_fleet] {
            if let Some(ship) = fleet.ships().iter().find(|s| !s.is_valid()) {
                return Err(GameError::FleetIncomplete(ship.name()));
            }
        }
        info!("game started");
        Ok(Self {
            player_fleet,
            enemy_fleet,
            player_shots: ShotLog::new(),
            opponent_shots: ShotLog::new(),
        })
    }

    pub fn player_fleet(&self) -> &Fleet {
        &self.player_fleet
    }

    pub fn enemy_fleet(&self) -> &Fleet {
        &self.enemy_fleet
    }

    /// Shots the player fired at the enemy fleet.
    pub fn player_shots(&self) -> &ShotLog {
        &self.player_shots
    }

    /// Shots the opponent fired at the player's fleet.
    pub fn opponent_shots(&self) -> &ShotLog {
        &self.opponent_shots
    }

    /// Handle a player shot against the enemy fleet.
    pub fn player_shot(&mut self, target: Position) -> ShotResult {
        let result = self.enemy_fleet.resolve_shot(&target);
        self.player_shots.record(target, result);
        info!("player shot {}: {:?}", target, result);
        result
    }

    /// Handle an opponent shot against the player's fleet.
    pub fn opponent_shot(&mut self, target: Position) -> ShotResult {
        let result = self.player_fleet.resolve_shot(&target);
        self.opponent_shots.record(target, result);
        info!("opponent shot {}: {:?}", target, result);
        result
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.enemy_fleet.is_defeated() {
            GameStatus::Won
        } else if self.player_fleet.is_defeated() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
