//! Continuous robot and explorer scenarios.

mod common;

use approx::assert_relative_eq;
use common::{open_arena_robot, seeded};
use disha::arena::{Clamp, RotationTick};
use disha::core::GridCoord;
use disha::explore::{Explorer, ExplorerConfig, ExplorerState, StepAction};
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

#[test]
fn test_sensor_reads_ninety_from_centre() {
    let robot = open_arena_robot();
    assert_eq!(robot.x(), 100.0);
    assert_eq!(robot.y(), 100.0);
    assert_eq!(robot.sensor(), 90);
}

#[test]
fn test_sensor_strictly_decreases_toward_wall() {
    let mut robot = open_arena_robot();
    let mut last = robot.sensor();
    while robot.move_forward() == Clamp::Exact {
        let reading = robot.sensor();
        assert!(reading < last, "{reading} !< {last} at x = {}", robot.x());
        last = reading;
    }
    assert_eq!(robot.x(), 190.0);
    assert_eq!(robot.sensor(), 0);
}

#[test]
fn test_sensor_is_deterministic() {
    let mut robot = open_arena_robot();
    robot.set_direction(0.7);
    assert_eq!(robot.sensor(), robot.sensor());
}

#[test]
fn test_clamp_is_idempotent() {
    let mut rng = seeded(3);
    let mut robot = open_arena_robot();
    for _ in 0..1000 {
        let x = rng.random_range(-500.0..500.0);
        let y = rng.random_range(-500.0..500.0);
        robot.set_x(x);
        robot.set_y(y);
        let (sx, sy) = (robot.x(), robot.y());
        assert!((10.0..=190.0).contains(&sx));
        assert!((10.0..=190.0).contains(&sy));

        assert_eq!(robot.set_x(sx), Clamp::Exact);
        assert_eq!(robot.set_y(sy), Clamp::Exact);
        assert_eq!((robot.x(), robot.y()), (sx, sy));
    }
}

#[test]
fn test_turn_left_ninety_is_hundred_sub_steps() {
    let mut robot = open_arena_robot();
    robot.turn_left(90.0);

    let mut ticks = 0;
    loop {
        match robot.tick() {
            RotationTick::Turning { .. } => ticks += 1,
            RotationTick::Finished => {
                ticks += 1;
                break;
            }
            RotationTick::Idle => panic!("rotation ended without Finished"),
        }
    }
    assert_eq!(ticks, 100);
    assert_relative_eq!(robot.heading(), FRAC_PI_2, epsilon = 1e-5);
    assert_eq!(robot.tick(), RotationTick::Idle);
}

#[test]
fn test_explorer_advances_then_turns_then_advances() {
    let mut robot = open_arena_robot();
    let mut explorer = Explorer::new(ExplorerConfig::default(), &robot).unwrap();

    // Straight run toward +X until the sensor reads 5
    let mut advances = 0;
    loop {
        let step = explorer.step(&mut robot);
        match step.action {
            StepAction::Advanced { .. } => advances += 1,
            StepAction::TurnStarted => break,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(advances, 85);
    assert_eq!(robot.x(), 185.0);
    assert_eq!(robot.sensor(), 5);
    assert_eq!(explorer.cursor(), GridCoord::new(18, 10));
    assert_eq!(explorer.grid().visited_count(), 8);

    // Evasive 90° left turn
    let mut sub_steps = 0;
    loop {
        let step = explorer.step(&mut robot);
        sub_steps += 1;
        if step.action == StepAction::TurnFinished {
            assert_eq!(step.state, ExplorerState::Advancing);
            break;
        }
    }
    assert_eq!(sub_steps, 100);
    assert_relative_eq!(robot.heading(), FRAC_PI_2, epsilon = 1e-5);

    // Advancing again, now toward +Y
    for _ in 0..5 {
        let step = explorer.step(&mut robot);
        assert!(matches!(step.action, StepAction::Advanced { .. }));
    }
    assert_relative_eq!(robot.y(), 105.0, epsilon = 1e-4);
    assert_relative_eq!(robot.x(), 185.0, epsilon = 1e-3);
    assert_eq!(explorer.cursor(), GridCoord::new(18, 11));
    assert_eq!(explorer.grid().is_visited(GridCoord::new(18, 10)), Some(true));
}

#[test]
fn test_explorer_keeps_robot_inside_over_long_run() {
    let mut robot = open_arena_robot();
    let mut explorer = Explorer::new(ExplorerConfig::default(), &robot).unwrap();
    for _ in 0..20_000 {
        explorer.step(&mut robot);
        assert!((10.0..=190.0).contains(&robot.x()));
        assert!((10.0..=190.0).contains(&robot.y()));
    }
    assert!(explorer.grid().visited_count() > 8);
}
