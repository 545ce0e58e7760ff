//! Test utilities for the Disha integration suite.

#![allow(dead_code)]

use disha::arena::{Arena, ContinuousRobot};
use disha::core::LatticeCoord;
use disha::lattice::{CellMap, GridCell, GridNavigator, LatticeMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 200x200 arena, radius 10, speed 1, at the centre facing +X.
pub fn open_arena_robot() -> ContinuousRobot {
    ContinuousRobot::new(Arena::new(200.0, 200.0), 10.0, 1.0).unwrap()
}

/// Navigator on an empty `size` lattice with `obstacles` authored.
pub fn navigator_with_obstacles(
    size: usize,
    footprint: usize,
    obstacles: &[(i32, i32)],
) -> GridNavigator {
    let mut nav = GridNavigator::new(size, footprint).unwrap();
    for &(row, col) in obstacles {
        assert!(
            nav.set_cell(LatticeCoord::new(row, col), GridCell::Obstacle)
                .is_applied(),
            "obstacle ({row}, {col}) rejected"
        );
    }
    nav
}

/// Random lattice with obstacles at `density`, keeping the centre block clear.
pub fn random_lattice(rng: &mut StdRng, size: usize, footprint: usize, density: f64) -> LatticeMap {
    let mid = (size / 2) as i32;
    let half = (footprint / 2) as i32;
    let mut map = LatticeMap::new(size);
    for row in 0..size as i32 {
        for col in 0..size as i32 {
            let under_start = (row - mid).abs() <= half && (col - mid).abs() <= half;
            if !under_start && rng.random_bool(density) {
                map.set(LatticeCoord::new(row, col), GridCell::Obstacle);
            }
        }
    }
    map
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every cell of `map` as `(coord, cell)`.
pub fn cells(map: &LatticeMap) -> Vec<(LatticeCoord, GridCell)> {
    let n = map.size() as i32;
    (0..n)
        .flat_map(|row| (0..n).map(move |col| LatticeCoord::new(row, col)))
        .filter_map(|c| map.get(c).map(|cell| (c, cell)))
        .collect()
}
