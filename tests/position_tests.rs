use broadside::{parse_optional_position, parse_position, Column, Position, PositionError};

#[test]
fn test_parse_valid_position() -> Result<(), PositionError> {
    let pos = parse_position("B3")?;
    assert_eq!(pos, Position::new(Column::B, 3)?);
    assert_eq!(pos.column(), Column::B);
    assert_eq!(pos.row(), 3);
    assert!(!pos.is_hit());
    Ok(())
}

#[test]
fn test_parse_round_trips_every_cell() -> Result<(), PositionError> {
    for column in Column::ALL {
        for row in 1..=8 {
            let pos = Position::new(column, row)?;
            let text = pos.to_string();
            assert_eq!(text.len(), 2);
            assert_eq!(parse_position(&text)?, pos);
            assert_eq!(text.parse::<Position>()?, pos);
        }
    }
    Ok(())
}

#[test]
fn test_parse_is_case_insensitive_and_trims() -> Result<(), PositionError> {
    assert_eq!(parse_position("  h8  ")?, parse_position("H8")?);
    assert_eq!(parse_position("\tb3\n")?, Position::new(Column::B, 3)?);
    Ok(())
}

#[test]
fn test_parse_out_of_bounds() {
    for input in ["A0", "A9", "Z1", "I3", "A10", "A20", "123", "AA1", "3A", "A 1", "A1ß000", "ß1"] {
        assert_eq!(
            parse_position(input),
            Err(PositionError::OutOfBounds),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_parse_invalid_input() {
    assert_eq!(parse_position(""), Err(PositionError::InvalidInput));
    assert_eq!(parse_position("   "), Err(PositionError::InvalidInput));
    assert_eq!(parse_optional_position(None), Err(PositionError::InvalidInput));
    assert_eq!(
        parse_optional_position(Some("c7")).map(|p| p.to_string()),
        Ok("C7".to_string())
    );
}

#[test]
fn test_equality_ignores_hit_flag() -> Result<(), PositionError> {
    let mut hit = Position::new(Column::E, 5)?;
    hit.mark_hit();
    assert!(hit.is_hit());
    assert_eq!(hit, Position::new(Column::E, 5)?);
    assert_ne!(hit, Position::new(Column::E, 6)?);
    Ok(())
}

#[test]
fn test_column_ordinals() {
    for (i, column) in Column::ALL.iter().enumerate() {
        let ordinal = i as u8 + 1;
        assert_eq!(column.ordinal(), ordinal);
        assert_eq!(Column::from_ordinal(ordinal), Some(*column));
        assert_eq!(Column::from_letter(column.letter()), Some(*column));
        assert_eq!(
            Column::from_letter(column.letter().to_ascii_lowercase()),
            Some(*column)
        );
    }
    assert_eq!(Column::from_ordinal(0), None);
    assert_eq!(Column::from_ordinal(9), None);
    assert_eq!(Column::from_letter('I'), None);
    assert_eq!(Column::from_letter('1'), None);
}

#[test]
fn test_new_rejects_rows_off_board() {
    assert_eq!(Position::new(Column::A, 0), Err(PositionError::OutOfBounds));
    assert_eq!(Position::new(Column::A, 9), Err(PositionError::OutOfBounds));
    assert_eq!(Position::from_ordinals(9, 1), Err(PositionError::OutOfBounds));
}

#[test]
fn test_adjacency() -> Result<(), PositionError> {
    let c4 = parse_position("C4")?;
    assert!(c4.is_adjacent(&parse_position("C5")?));
    assert!(c4.is_adjacent(&parse_position("B4")?));
    assert!(!c4.is_adjacent(&parse_position("D5")?));
    assert!(!c4.is_adjacent(&parse_position("C6")?));
    assert!(!c4.is_adjacent(&c4));
    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn test_decoding_checks_row_range() {
    let decoded: Position =
        serde_json::from_str(r#"{"column":"D","row":6,"is_hit":true}"#).unwrap();
    assert_eq!(decoded, Position::new(Column::D, 6).unwrap());
    assert!(decoded.is_hit());

    let unhit: Position = serde_json::from_str(r#"{"column":"H","row":8}"#).unwrap();
    assert!(!unhit.is_hit());

    for row in [0, 9, 200] {
        let json = format!(r#"{{"column":"A","row":{},"is_hit":false}}"#, row);
        assert!(
            serde_json::from_str::<Position>(&json).is_err(),
            "row {} decoded",
            row
        );
    }
}
