//! Default value functions for serde deserialization.

pub fn lattice_size() -> usize {
    25
}

pub fn footprint() -> usize {
    3
}

pub fn arena_size() -> f32 {
    200.0
}

pub fn robot_radius() -> f32 {
    10.0
}

pub fn robot_speed() -> f32 {
    1.0
}

pub fn clearance_threshold() -> u32 {
    5
}

pub fn evasive_turn_degrees() -> f32 {
    90.0
}

pub fn rotation_steps() -> u32 {
    100
}

pub fn rotation_step_delay_ms() -> u64 {
    1
}

pub fn manual_turn_degrees() -> f32 {
    5.0
}

pub fn log_level() -> String {
    "info".to_string()
}
