#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, print_fleet, CliPlayer, ComputerPlayer, Fleet, Game, GameStatus, Player,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet randomly instead of entering positions")]
        auto_place: bool,
        #[arg(long, help = "Place the computer's fleet randomly instead of the fixed layout")]
        random_enemy: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            auto_place,
            random_enemy,
        } => {
            println!("Welcome to Battleship");
            let mut rng = make_rng(seed);
            let mut computer = ComputerPlayer::new();
            let enemy_fleet = if random_enemy {
                let mut fleet = Fleet::new();
                computer.place_fleet(&mut rng, &mut fleet)?;
                fleet
            } else {
                Fleet::preset()
            };

            let mut human = CliPlayer::stdin();
            let mut player_fleet = Fleet::new();
            if auto_place {
                ComputerPlayer::new().place_fleet(&mut rng, &mut player_fleet)?;
                print_fleet(&player_fleet, None, true);
            } else {
                human.place_fleet(&mut rng, &mut player_fleet)?;
            }

            let game = Game::new(player_fleet, enemy_fleet)?;
            run_game(game, &mut human, &mut computer, &mut rng, true)?;
        }
        Commands::Watch { seed } => {
            println!("Starting computer vs computer game...");
            let mut rng = make_rng(seed);
            let mut first = ComputerPlayer::new();
            let mut second = ComputerPlayer::new();
            let mut fleet1 = Fleet::new();
            let mut fleet2 = Fleet::new();
            first.place_fleet(&mut rng, &mut fleet1)?;
            second.place_fleet(&mut rng, &mut fleet2)?;

            let game = Game::new(fleet1, fleet2)?;
            run_game(game, &mut first, &mut second, &mut rng, false)?;
        }
    }
    Ok(())
}

/// Alternate shots, player first, until one fleet is defeated.
#[cfg(feature = "std")]
fn run_game(
    mut game: Game,
    player: &mut dyn Player,
    opponent: &mut dyn Player,
    rng: &mut SmallRng,
    interactive: bool,
) -> anyhow::Result<()> {
    loop {
        if interactive {
            println!("\nPlayer, it's your turn");
            print_fleet(game.enemy_fleet(), Some(game.player_shots()), false);
        }
        let target = player.select_target(rng)?;
        let result = game.player_shot(target);
        player.handle_shot_result(target, result, game.enemy_fleet());
        if !interactive {
            println!("Player 1 shot {}: {:?}", target, result);
        }
        if game.status() != GameStatus::InProgress {
            break;
        }

        let target = opponent.select_target(rng)?;
        let result = game.opponent_shot(target);
        player.handle_opponent_shot(target, result, game.player_fleet());
        if !interactive {
            println!("Player 2 shot {}: {:?}", target, result);
        }
        if game.status() != GameStatus::InProgress {
            break;
        }
    }

    println!("\nGAME OVER\n");
    print_fleet(game.player_fleet(), Some(game.opponent_shots()), true);
    match game.status() {
        GameStatus::Won => println!("\nYOU WON! All enemy ships have been sunk."),
        GameStatus::Lost => println!("\nYOU LOST. All your ships have been destroyed."),
        GameStatus::InProgress => {}
    }
    println!(
        "Shots fired: {} ({} hits), shots taken: {} ({} hits)",
        game.player_shots().len(),
        game.player_shots().hits(),
        game.opponent_shots().len(),
        game.opponent_shots().hits()
    );
    Ok(())
}
