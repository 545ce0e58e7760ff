//! Grid navigator scenarios and move-sequence properties.

mod common;

use std::collections::HashSet;

use common::{cells, navigator_with_obstacles, random_lattice, seeded};
use disha::core::{Direction, LatticeCoord};
use disha::lattice::{BlockReason, CellMap, GridCell, GridNavigator, LatticeMap, MoveOutcome};
use rand::Rng;

/// Cells one step past each edge of a footprint (corners excluded).
fn perimeter(centre: LatticeCoord, footprint: usize) -> HashSet<LatticeCoord> {
    let half = (footprint / 2) as i32;
    let out = half + 1;
    let mut set = HashSet::new();
    for i in -half..=half {
        set.insert(centre.offset(-out, i));
        set.insert(centre.offset(out, i));
        set.insert(centre.offset(i, -out));
        set.insert(centre.offset(i, out));
    }
    set
}

fn footprint_cells(centre: LatticeCoord, footprint: usize) -> HashSet<LatticeCoord> {
    let half = (footprint / 2) as i32;
    (-half..=half)
        .flat_map(|dr| (-half..=half).map(move |dc| centre.offset(dr, dc)))
        .collect()
}

#[test]
fn test_repeated_left_maps_obstacle() {
    let mut nav = navigator_with_obstacles(25, 3, &[(10, 10)]);
    assert_eq!(nav.robot().centre(), LatticeCoord::new(12, 12));

    let outcome = nav.move_robot(Direction::Left);
    assert_eq!(outcome.mapped(), &[LatticeCoord::new(10, 10)]);
    assert_eq!(nav.map().get(LatticeCoord::new(10, 10)), Some(GridCell::Mapped));

    // Keep driving left until the lattice edge stops the robot
    let mut moves = 1;
    loop {
        match nav.move_robot(Direction::Left) {
            MoveOutcome::Moved { mapped, .. } => {
                assert!(mapped.is_empty());
                moves += 1;
            }
            MoveOutcome::Blocked(reason) => {
                assert_eq!(reason, BlockReason::OutOfBounds);
                break;
            }
        }
    }
    assert_eq!(moves, 11);
    assert_eq!(nav.robot().centre(), LatticeCoord::new(12, 1));
    assert_eq!(nav.map().get(LatticeCoord::new(10, 10)), Some(GridCell::Mapped));
}

#[test]
fn test_obstacle_on_leading_edge_blocks() {
    let mut nav = navigator_with_obstacles(25, 3, &[(11, 10)]);
    let before = nav.map().clone();

    assert_eq!(
        nav.move_robot(Direction::Left),
        MoveOutcome::Blocked(BlockReason::Obstacle(LatticeCoord::new(11, 10)))
    );
    assert_eq!(nav.map(), &before);
    assert_eq!(nav.robot().heading(), Direction::Up);
}

#[test]
fn test_text_dump_after_mapping() {
    let mut nav = navigator_with_obstacles(7, 3, &[(0, 2)]);
    nav.move_robot(Direction::Up);
    assert_eq!(
        nav.map().to_string(),
        concat!(
            ". . x . . . .\n",
            ". . o o o . .\n",
            ". . o o o . .\n",
            ". . o o o . .\n",
            ". . . . . . .\n",
            ". . . . . . .\n",
            ". . . . . . .\n",
        )
    );
}

#[test]
fn test_random_moves_keep_footprint_inside_and_clear() {
    let mut rng = seeded(7);
    for trial in 0..20 {
        let footprint = [1, 3, 5][trial % 3];
        let map = random_lattice(&mut rng, 15, footprint, 0.2);
        let mut nav = GridNavigator::with_map(map, footprint).unwrap();

        for _ in 0..200 {
            let dir = Direction::ALL[rng.random_range(0..4)];
            nav.move_robot(dir);

            let centre = nav.robot().centre();
            let expected = footprint_cells(centre, footprint);
            for c in &expected {
                assert!(nav.map().contains(*c), "footprint cell {c} outside lattice");
                assert_eq!(nav.map().get(*c), Some(GridCell::RobotOccupied));
            }
            let robot_cells: HashSet<_> = nav.map().find(GridCell::RobotOccupied).into_iter().collect();
            assert_eq!(robot_cells, expected);
        }
    }
}

#[test]
fn test_random_moves_map_exactly_the_swept_obstacles() {
    let mut rng = seeded(42);
    let footprint = 3;
    let map = random_lattice(&mut rng, 21, footprint, 0.15);
    let mut nav: GridNavigator<LatticeMap> = GridNavigator::with_map(map, footprint).unwrap();

    for _ in 0..500 {
        let before = nav.map().clone();
        let from = nav.robot().centre();
        let dir = Direction::ALL[rng.random_range(0..4)];

        match nav.move_robot(dir) {
            MoveOutcome::Blocked(_) => {
                assert_eq!(nav.map(), &before, "blocked move changed the lattice");
                assert_eq!(nav.robot().centre(), from);
            }
            MoveOutcome::Moved { to, mapped, .. } => {
                let ring = perimeter(to, footprint);
                let swept: HashSet<_> = footprint_cells(from, footprint)
                    .union(&footprint_cells(to, footprint))
                    .copied()
                    .collect();

                for (c, old) in cells(&before) {
                    let new = nav.map().get(c).unwrap();
                    if swept.contains(&c) {
                        continue;
                    }
                    if ring.contains(&c) && old == GridCell::Obstacle {
                        assert_eq!(new, GridCell::Mapped, "{c} not mapped");
                        assert!(mapped.contains(&c));
                    } else {
                        assert_eq!(new, old, "{c} changed unexpectedly");
                    }
                }
            }
        }
    }
}
