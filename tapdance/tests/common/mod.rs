use std::collections::HashMap;

use tapdance::action::KeyStep;
use tapdance::keycode::KeyCode;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub(crate) const KC_LSHIFT: u8 = 1 << 1;

/// Net press count of every key touched by `steps`
pub fn net_presses(steps: &[KeyStep]) -> HashMap<KeyCode, i32> {
    let mut net = HashMap::new();
    for step in steps {
        let delta = if step.is_press() { 1 } else { -1 };
        *net.entry(step.key).or_insert(0) += delta;
    }
    net
}

/// Returns `true` if every pressed key is released again
pub fn is_balanced(steps: &[KeyStep]) -> bool {
    net_presses(steps).values().all(|&n| n == 0)
}
