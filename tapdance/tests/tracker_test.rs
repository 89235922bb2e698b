pub mod common;

use embassy_time::{Duration, Instant};
use tapdance::action::KeyStep;
use tapdance::dance::DanceOutcome;
use tapdance::event::KeyboardEvent;
use tapdance::keycode::KeyCode;
use tapdance::symbol_layer::{SymbolDance, symbol_tap_dances};
use tapdance::tracker::WindowPhase;
use tapdance::{DanceState, RecordingExecutor, TapDanceConfig, TapDanceId, TapDanceTracker, TapDances};

use crate::common::is_balanced;

struct TrackerTest {
    dances: TapDances,
    tracker: TapDanceTracker,
    exec: RecordingExecutor<64>,
}

impl TrackerTest {
    fn new() -> Self {
        Self {
            dances: symbol_tap_dances().unwrap(),
            tracker: TapDanceTracker::default(),
            exec: RecordingExecutor::new(),
        }
    }

    fn with_tapping_term(ms: u64) -> Self {
        Self {
            tracker: TapDanceTracker::new(&TapDanceConfig::with_tapping_term_ms(ms)),
            ..Self::new()
        }
    }

    fn td(&mut self, dance: SymbolDance, pressed: bool, ms: u64) {
        self.tracker
            .tick(Instant::from_millis(ms), &mut self.dances, &mut self.exec)
            .unwrap();
        self.tracker
            .process_event(
                KeyboardEvent::tap_dance(dance.id(), pressed, Instant::from_millis(ms)),
                &mut self.dances,
                &mut self.exec,
            )
            .unwrap();
    }

    fn other(&mut self, pressed: bool, ms: u64) {
        self.tracker
            .tick(Instant::from_millis(ms), &mut self.dances, &mut self.exec)
            .unwrap();
        self.tracker
            .process_event(
                KeyboardEvent::other(pressed, Instant::from_millis(ms)),
                &mut self.dances,
                &mut self.exec,
            )
            .unwrap();
    }

    fn tick(&mut self, ms: u64) {
        self.tracker
            .tick(Instant::from_millis(ms), &mut self.dances, &mut self.exec)
            .unwrap();
    }

    fn state(&self, dance: SymbolDance) -> DanceState {
        self.dances.state(dance.id()).unwrap()
    }
}

#[test]
fn test_single_tap() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::SemicolonColon, true, 0);
    t.td(SymbolDance::SemicolonColon, false, 60);
    t.tick(199);
    assert!(t.exec.steps().is_empty());
    t.tick(200);
    assert_eq!(
        t.exec.steps(),
        &[KeyStep::press(KeyCode::Semicolon), KeyStep::release(KeyCode::Semicolon)]
    );
    assert!(t.tracker.is_idle());
}

#[test]
fn test_single_hold() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::SemicolonColon, true, 0);
    t.tick(300);
    assert_eq!(t.state(SymbolDance::SemicolonColon), DanceState::Resolved(DanceOutcome::SingleHold));
    assert_eq!(
        t.exec.take().as_slice(),
        &[KeyStep::press(KeyCode::LShift), KeyStep::press(KeyCode::Semicolon)]
    );
    t.td(SymbolDance::SemicolonColon, false, 800);
    assert_eq!(
        t.exec.steps(),
        &[KeyStep::release(KeyCode::LShift), KeyStep::release(KeyCode::Semicolon)]
    );
    assert_eq!(t.state(SymbolDance::SemicolonColon), DanceState::Idle);
}

#[test]
fn test_double_tap() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::EqualPlus, true, 0);
    t.td(SymbolDance::EqualPlus, false, 50);
    t.td(SymbolDance::EqualPlus, true, 150);
    t.td(SymbolDance::EqualPlus, false, 200);
    // The second press restarted the tapping term
    t.tick(300);
    assert!(t.exec.steps().is_empty());
    t.tick(350);
    assert_eq!(
        t.exec.steps(),
        &[
            KeyStep::press(KeyCode::LShift),
            KeyStep::press(KeyCode::Equal),
            KeyStep::release(KeyCode::LShift),
            KeyStep::release(KeyCode::Equal)
        ]
    );
}

#[test]
fn test_double_single_tap_by_interruption() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::SlashBackslash, true, 0);
    t.td(SymbolDance::SlashBackslash, false, 30);
    t.td(SymbolDance::SlashBackslash, true, 60);
    t.other(true, 80);
    assert_eq!(
        t.state(SymbolDance::SlashBackslash),
        DanceState::Resolved(DanceOutcome::DoubleSingleTap)
    );
    t.other(false, 100);
    t.td(SymbolDance::SlashBackslash, false, 120);
    assert_eq!(
        t.exec.steps(),
        &[
            KeyStep::press(KeyCode::Slash),
            KeyStep::release(KeyCode::Slash),
            KeyStep::press(KeyCode::Slash),
            KeyStep::release(KeyCode::Slash)
        ]
    );
    assert!(t.tracker.is_idle());
}

#[test]
fn test_interruption_after_release() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::QEscape, true, 0);
    t.td(SymbolDance::QEscape, false, 30);
    t.other(true, 40);
    // Key is already up, so the outcome is released at once
    assert_eq!(
        t.exec.steps(),
        &[KeyStep::press(KeyCode::Q), KeyStep::release(KeyCode::Q)]
    );
    assert_eq!(t.state(SymbolDance::QEscape), DanceState::Idle);
    assert!(t.tracker.is_idle());
}

#[test]
fn test_another_tap_dance_interrupts() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::Parenthesis, true, 0);
    t.td(SymbolDance::Parenthesis, false, 40);
    t.td(SymbolDance::Braces, true, 80);
    assert_eq!(
        t.exec.take().as_slice(),
        &[
            KeyStep::press(KeyCode::LShift),
            KeyStep::press(KeyCode::Kc9),
            KeyStep::release(KeyCode::LShift),
            KeyStep::release(KeyCode::Kc9)
        ]
    );
    let window = t.tracker.window(SymbolDance::Braces.id()).unwrap();
    assert_eq!(window.phase, WindowPhase::Counting);
    assert!(!window.interrupted);

    t.td(SymbolDance::Braces, false, 100);
    t.tick(280);
    assert_eq!(
        t.exec.steps(),
        &[KeyStep::press(KeyCode::LeftBracket), KeyStep::release(KeyCode::LeftBracket)]
    );
}

#[test]
fn test_triple_tap_is_unbound() {
    let mut t = TrackerTest::new();
    for i in 0..3 {
        t.td(SymbolDance::ZCapslock, true, i * 100);
        t.td(SymbolDance::ZCapslock, false, i * 100 + 40);
    }
    t.tick(1000);
    assert!(t.exec.steps().is_empty());
    assert!(t.tracker.is_idle());
}

#[test]
fn test_count_saturates() {
    let mut t = TrackerTest::new();
    for i in 0..300u64 {
        t.td(SymbolDance::ZCapslock, true, i * 10);
        t.td(SymbolDance::ZCapslock, false, i * 10 + 5);
    }
    assert_eq!(t.tracker.window(SymbolDance::ZCapslock.id()).unwrap().count, u8::MAX);
    t.tick(10_000);
    assert!(t.exec.steps().is_empty());
}

#[test]
fn test_custom_tapping_term() {
    let mut t = TrackerTest::with_tapping_term(120);
    assert_eq!(t.tracker.tapping_term(), Duration::from_millis(120));
    t.td(SymbolDance::GraveTilde, true, 0);
    assert_eq!(t.tracker.next_deadline(), Some(Instant::from_millis(120)));
    t.tick(120);
    assert_eq!(t.state(SymbolDance::GraveTilde), DanceState::Resolved(DanceOutcome::SingleHold));
}

#[test]
fn test_symbol_identity() {
    assert_eq!(TapDanceId::from(SymbolDance::AmpersandPipe), TapDanceId(0));
    assert_eq!(SymbolDance::ZCapslock.id(), TapDanceId(14));
}

#[test]
fn test_concurrent_holds_are_balanced() {
    let mut t = TrackerTest::new();
    t.td(SymbolDance::AmpersandPipe, true, 0);
    t.tick(250);
    t.td(SymbolDance::CurlyBraces, true, 300);
    t.td(SymbolDance::CurlyBraces, false, 320);
    t.td(SymbolDance::CurlyBraces, true, 340);
    t.tick(600);
    assert_eq!(t.state(SymbolDance::AmpersandPipe), DanceState::Resolved(DanceOutcome::SingleHold));
    assert_eq!(t.state(SymbolDance::CurlyBraces), DanceState::Resolved(DanceOutcome::DoubleHold));
    t.td(SymbolDance::AmpersandPipe, false, 700);
    t.td(SymbolDance::CurlyBraces, false, 710);
    assert!(is_balanced(t.exec.steps()));
    assert!(t.tracker.is_idle());
    for dance in SymbolDance::iter() {
        assert_eq!(t.state(dance), DanceState::Idle);
    }
}
