use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random samples the target selector draws before falling back to a scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
