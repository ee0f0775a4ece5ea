//! Shared test data.

use crate::{Tile, TileStyle, WorkSpeed, Worker};

/// Four tiles, 40 950 cm², production cost 9.4616.
pub(crate) fn sample_tiles() -> Vec<Tile> {
    vec![
        Tile::new(TileStyle::Raw, 200, 200),
        Tile::new(TileStyle::Ornate, 20, 20),
        Tile::new(TileStyle::FancyColor, 21, 25),
        Tile::new(TileStyle::Polished, 5, 5),
    ]
}

/// 530 tiles, 2 052 000 cm², production cost 444.4416.
pub(crate) fn large_tile_set() -> Vec<Tile> {
    let mut tiles = vec![Tile::new(TileStyle::Polished, 45, 75); 140];
    tiles.extend(vec![Tile::new(TileStyle::Raw, 45, 90); 390]);
    tiles
}

/// Crews used across the estimate tests. Unknown sets are empty.
pub(crate) fn sample_workers(set: u8) -> Vec<Worker> {
    match set {
        1 => vec![
            Worker::new("Franz Felser", WorkSpeed::Regular),
            Worker::new("Marlene Marmor", WorkSpeed::Fast),
            Worker::new("Ludwig Langsam", WorkSpeed::Slow),
        ],
        2 => vec![
            Worker::new("Franz Felser", WorkSpeed::Fast),
            Worker::new("Marlene Marmor", WorkSpeed::Regular),
        ],
        3 => vec![
            Worker::new("Franz Felser", WorkSpeed::Slow),
            Worker::new("Marlene Marmor", WorkSpeed::Regular),
        ],
        4 => vec![Worker::new("Franz Felser", WorkSpeed::Slow)],
        _ => Vec::new(),
    }
}
