use rand::rngs::SmallRng;

use crate::{ai::TargetSelector, common::ShotResult, fleet::Fleet, position::Position};

/// Interface implemented by different player types.
pub trait Player {
    /// Place all ships of the provided fleet.
    fn place_fleet(&mut self, rng: &mut SmallRng, fleet: &mut Fleet) -> anyhow::Result<()>;

    /// Choose the next target coordinate.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Position>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Position, _result: ShotResult, _enemy: &Fleet) {}

    /// Inform the player of an opponent shot against its fleet.
    fn handle_opponent_shot(&mut self, _target: Position, _result: ShotResult, _own: &Fleet) {}
}

/// Computer player: random placement and non-repeating random targeting.
#[derive(Debug, Default)]
pub struct ComputerPlayer {
    selector: TargetSelector,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targeting state, for inspection.
    pub fn selector(&self) -> &TargetSelector {
        &self.selector
    }
}

impl Player for ComputerPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, fleet: &mut Fleet) -> anyhow::Result<()> {
        fleet.place_randomly(rng);
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Position> {
        Ok(self.selector.next(rng)?)
    }
}
