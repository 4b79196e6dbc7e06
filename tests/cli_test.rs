#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::{parse_position, CliPlayer, Fleet, Player};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_cli_placement_reprompts_on_errors() {
        let mut rng = SmallRng::seed_from_u64(12345);
        // Bad input, overlap, gap and diagonal are rejected and re-prompted.
        let script = "\
            z9\nA1\nA2\nA3\nA4\nA5\n\
            A5\nB1\nB3\nB2\nB3\nB4\n\
            C1\nD2\nC2\nC3\n\
            D1\nD2\nD3\n\
            H8\nH7\n";
        let mut player = CliPlayer::new(Cursor::new(script));
        let mut fleet = Fleet::new();
        player.place_fleet(&mut rng, &mut fleet).unwrap();

        assert!(fleet.is_complete());
        let carrier: Vec<String> = fleet.ships()[0]
            .positions()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(carrier, vec!["A1", "A2", "A3", "A4", "A5"]);
        let battleship: Vec<String> = fleet.ships()[1]
            .positions()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(battleship, vec!["B1", "B2", "B3", "B4"]);
    }

    #[test]
    fn test_cli_target_skips_invalid_lines() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::new(Cursor::new("\n  \nI9\n  e4 \n"));
        let target = player.select_target(&mut rng).unwrap();
        assert_eq!(target, parse_position("E4").unwrap());
    }

    #[test]
    fn test_cli_errors_when_input_closes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::new(Cursor::new("A1\n"));
        let mut fleet = Fleet::new();
        assert!(player.place_fleet(&mut rng, &mut fleet).is_err());
        assert!(player.select_target(&mut rng).is_err());
    }
}
