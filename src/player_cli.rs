#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use anyhow::{anyhow, Context};
use rand::rngs::SmallRng;

use crate::{
    common::ShotResult,
    config::BOARD_SIZE,
    fleet::Fleet,
    game::ShotLog,
    player::Player,
    position::{parse_position, Column, Position},
};

/// Interactive player reading positions line by line.
pub struct CliPlayer<I> {
    input: I,
}

impl CliPlayer<StdinLock<'static>> {
    /// Player reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<I: BufRead> CliPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(line)
    }
}

impl<I: BufRead> Player for CliPlayer<I> {
    fn place_fleet(&mut self, _rng: &mut SmallRng, fleet: &mut Fleet) -> anyhow::Result<()> {
        println!("Please position your fleet (Game board size is from A to H and 1 to 8) :");
        for index in 0..fleet.ships().len() {
            let (name, size) = {
                let ship = &fleet.ships()[index];
                (ship.name(), ship.size())
            };
            println!();
            println!("Please enter the positions for the {} (size: {})", name, size);
            for slot in 1..=size {
                loop {
                    print!("Enter position {} of {} (i.e A3): ", slot, size);
                    let line = self.read_line()?;
                    let placed = parse_position(&line)
                        .map_err(anyhow::Error::from)
                        .and_then(|pos| Ok(fleet.place_position(index, pos)?));
                    match placed {
                        Ok(()) => break,
                        Err(e) => println!("✗ {}. Please try again.", e),
                    }
                }
            }
        }
        print_fleet(fleet, None, true);
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Position> {
        loop {
            print!("\nEnter coordinates for your shot: ");
            let line = self.read_line()?;
            match parse_position(&line) {
                Ok(pos) => return Ok(pos),
                Err(e) => println!("✗ {}. Please try again.", e),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Position, result: ShotResult, enemy: &Fleet) {
        match result {
            ShotResult::Hit => println!("\nYeah ! Nice hit at {} !", target),
            ShotResult::Miss => println!("\nMiss at {}.", target),
            ShotResult::Sink(name) => {
                println!("\nYou have sunk an enemy ship!\n→ {}", name);
                print_remaining_ships(enemy);
            }
        }
    }

    fn handle_opponent_shot(&mut self, target: Position, result: ShotResult, own: &Fleet) {
        match result {
            ShotResult::Hit => println!("Computer shot in {} and has hit your ship !", target),
            ShotResult::Miss => println!("Computer shot in {} and miss", target),
            ShotResult::Sink(name) => {
                println!("The computer has sunk one of your ships :(\n→ {}", name);
                print_remaining_ships(own);
            }
        }
    }
}

/// List the ships that still have an unhit position.
pub fn print_remaining_ships(fleet: &Fleet) {
    println!("\nRemaining ships:");
    for ship in fleet.remaining_ships() {
        println!("  • {} ({}/{} hit)", ship.name(), ship.hits(), ship.size());
    }
}

/// Print a fleet's board. Misses come from `shots` when given.
pub fn print_fleet(fleet: &Fleet, shots: Option<&ShotLog>, reveal: bool) {
    print!("    ");
    for column in Column::ALL {
        print!(" {}", column);
    }
    println!();
    for row in 1..=BOARD_SIZE {
        print!("  {:2}", row);
        for column in Column::ALL {
            let cell = Position::new(column, row).ok();
            let ship_cell = cell.and_then(|pos| {
                fleet
                    .ships()
                    .iter()
                    .flat_map(|s| s.positions())
                    .find(|p| p.same_cell(&pos))
            });
            let fired = cell.and_then(|pos| shots.and_then(|log| log.lookup(&pos)));
            let ch = match (ship_cell, fired) {
                (Some(p), _) if p.is_hit() => 'X',
                (Some(_), _) if reveal => 'S',
                (_, Some(false)) => 'o',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
    if reveal {
        println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
    } else {
        println!("    Legend: X=Hit  o=Miss  .=Unknown");
    }
}
