use broadside::{init_logging, ComputerPlayer, Fleet, Game, GameStatus, Player};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    status: GameStatus,
    shots: usize,
    hits: usize,
}

#[derive(Serialize)]
struct Summary {
    player1: SideSummary,
    player2: SideSummary,
    winner: Option<&'static str>,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed1> <seed2>", program);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = ComputerPlayer::new();
    let mut p2 = ComputerPlayer::new();
    let mut f1 = Fleet::new();
    let mut f2 = Fleet::new();
    p1.place_fleet(&mut rng1, &mut f1)?;
    p2.place_fleet(&mut rng2, &mut f2)?;

    let mut game = Game::new(f1, f2)?;
    while game.status() == GameStatus::InProgress {
        let target = p1.select_target(&mut rng1)?;
        game.player_shot(target);
        if game.status() != GameStatus::InProgress {
            break;
        }
        let target = p2.select_target(&mut rng2)?;
        game.opponent_shot(target);
    }

    let status = game.status();
    let winner = match status {
        GameStatus::Won => Some("player1"),
        GameStatus::Lost => Some("player2"),
        GameStatus::InProgress => None,
    };
    let other = match status {
        GameStatus::Won => GameStatus::Lost,
        GameStatus::Lost => GameStatus::Won,
        GameStatus::InProgress => GameStatus::InProgress,
    };

    let summary = Summary {
        player1: SideSummary {
            status,
            shots: game.player_shots().len(),
            hits: game.player_shots().hits(),
        },
        player2: SideSummary {
            status: other,
            shots: game.opponent_shots().len(),
            hits: game.opponent_shots().hits(),
        },
        winner,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
