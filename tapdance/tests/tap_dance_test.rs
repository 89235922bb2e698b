pub mod common;

use tapdance::action::KeyStep;
use tapdance::dance::{DanceOutcome, Observation};
use tapdance::keycode::KeyCode;
use tapdance::symbol_layer::{SymbolDance, symbol_tap_dances};
use tapdance::{ActionTable, DanceActions, DanceState, RecordingExecutor, TapDance, TapDanceError, TapDances, td};

use crate::common::is_balanced;

#[test]
fn test_ampersand_tap_and_release() {
    let table = ActionTable::new()
        .with(DanceOutcome::SingleTap, tapdance::hold!(LShift, Kc7).unwrap())
        .unwrap();
    let mut dance = TapDance::new(td!(0), table);
    let mut exec: RecordingExecutor = RecordingExecutor::new();

    dance.resolve(Observation::new(1, true, false), &mut exec);
    assert_eq!(
        exec.take().as_slice(),
        &[KeyStep::press(KeyCode::LShift), KeyStep::press(KeyCode::Kc7)]
    );
    dance.release(&mut exec);
    assert_eq!(
        exec.steps(),
        &[KeyStep::release(KeyCode::LShift), KeyStep::release(KeyCode::Kc7)]
    );
    assert_eq!(dance.current_outcome(), DanceOutcome::None);
}

#[test]
fn test_unbound_double_hold() {
    let table = ActionTable::new()
        .with(DanceOutcome::SingleHold, tapdance::hold!(B).unwrap())
        .unwrap()
        .with(DanceOutcome::DoubleTap, tapdance::hold!(C).unwrap())
        .unwrap();
    let mut dance = TapDance::new(td!(1), table);
    let mut exec: RecordingExecutor = RecordingExecutor::new();

    assert_eq!(
        dance.resolve(Observation::new(2, false, true), &mut exec),
        DanceOutcome::DoubleHold
    );
    assert_eq!(dance.state(), DanceState::Resolved(DanceOutcome::DoubleHold));
    dance.release(&mut exec);
    assert_eq!(dance.state(), DanceState::Idle);
    assert!(exec.steps().is_empty());
}

#[test]
fn test_unknown_count_never_emits() {
    let mut dances = symbol_tap_dances().unwrap();
    let mut exec: RecordingExecutor = RecordingExecutor::new();
    for dance in SymbolDance::iter() {
        for (interrupted, pressed) in [(true, true), (true, false), (false, true), (false, false)] {
            let outcome = dances
                .resolve(dance.id(), Observation::new(5, interrupted, pressed), &mut exec)
                .unwrap();
            assert_eq!(outcome, DanceOutcome::Unknown);
            dances.release(dance.id(), &mut exec).unwrap();
        }
    }
    assert!(exec.steps().is_empty());
}

#[test]
fn test_symbol_layer_balanced() {
    let mut dances = symbol_tap_dances().unwrap();
    for dance in SymbolDance::iter() {
        for count in 1..=3u8 {
            for (interrupted, pressed) in [(true, true), (true, false), (false, true), (false, false)] {
                let mut exec: RecordingExecutor = RecordingExecutor::new();
                let outcome = dances
                    .resolve(dance.id(), Observation::new(count, interrupted, pressed), &mut exec)
                    .unwrap();
                dances.release(dance.id(), &mut exec).unwrap();
                assert!(
                    is_balanced(exec.steps()),
                    "{:?} {:?} leaves keys held: {:?}",
                    dance,
                    outcome,
                    exec.steps()
                );
                assert_eq!(dances.state(dance.id()), Ok(DanceState::Idle));
            }
        }
    }
}

#[test]
fn test_symbol_layer_authored_actions() {
    let mut dances = symbol_tap_dances().unwrap();
    let mut exec: RecordingExecutor = RecordingExecutor::new();
    let pipe = SymbolDance::AmpersandPipe.id();

    dances.resolve(pipe, Observation::new(2, false, false), &mut exec).unwrap();
    assert_eq!(
        exec.take().as_slice(),
        &[KeyStep::press(KeyCode::LShift), KeyStep::press(KeyCode::Backslash)]
    );
    dances.release(pipe, &mut exec).unwrap();
    exec.clear();

    let circle = SymbolDance::AsteriskCircle.id();
    dances.resolve(circle, Observation::new(2, false, false), &mut exec).unwrap();
    assert_eq!(
        exec.take().as_slice(),
        &[KeyStep::press(KeyCode::LShift), KeyStep::press(KeyCode::Kc6)]
    );
    dances.release(circle, &mut exec).unwrap();
    exec.clear();

    // `//` is a tap followed by a held slash
    let slash = SymbolDance::SlashBackslash.id();
    dances.resolve(slash, Observation::new(2, true, true), &mut exec).unwrap();
    assert_eq!(
        exec.take().as_slice(),
        &[
            KeyStep::press(KeyCode::Slash),
            KeyStep::release(KeyCode::Slash),
            KeyStep::press(KeyCode::Slash)
        ]
    );
    dances.release(slash, &mut exec).unwrap();
    assert_eq!(exec.take().as_slice(), &[KeyStep::release(KeyCode::Slash)]);

    // `''` is two complete taps, nothing left for the release
    let quote = SymbolDance::QuoteDoublequote.id();
    dances.resolve(quote, Observation::new(2, true, false), &mut exec).unwrap();
    assert_eq!(exec.take().len(), 4);
    dances.release(quote, &mut exec).unwrap();
    assert!(exec.steps().is_empty());
}

#[test]
fn test_instances_are_independent() {
    let mut dances = symbol_tap_dances().unwrap();
    let mut exec: RecordingExecutor = RecordingExecutor::new();
    let q = SymbolDance::QEscape.id();
    let z = SymbolDance::ZCapslock.id();

    dances.resolve(q, Observation::new(1, false, true), &mut exec).unwrap();
    dances.resolve(z, Observation::new(1, true, true), &mut exec).unwrap();
    assert_eq!(dances.state(q), Ok(DanceState::Resolved(DanceOutcome::SingleHold)));
    assert_eq!(dances.state(z), Ok(DanceState::Resolved(DanceOutcome::SingleTap)));

    dances.release(z, &mut exec).unwrap();
    assert_eq!(dances.state(q), Ok(DanceState::Resolved(DanceOutcome::SingleHold)));
    assert_eq!(
        exec.steps(),
        &[
            KeyStep::press(KeyCode::Escape),
            KeyStep::press(KeyCode::Z),
            KeyStep::release(KeyCode::Z)
        ]
    );
}

#[test]
fn test_unknown_identity() {
    let mut dances = symbol_tap_dances().unwrap();
    let mut exec: RecordingExecutor = RecordingExecutor::new();
    assert_eq!(
        dances.resolve(td!(15), Observation::new(1, false, false), &mut exec),
        Err(TapDanceError::UnknownInstance(td!(15)))
    );
    assert_eq!(dances.release(td!(200), &mut exec), Err(TapDanceError::UnknownInstance(td!(200))));
    assert!(exec.steps().is_empty());
}

#[test]
fn test_registry_from_tables() {
    let dances: TapDances<2> = TapDances::from_tables([
        (td!(3), ActionTable::new()),
        (
            td!(7),
            ActionTable::new()
                .with(DanceOutcome::TripleHold, DanceActions::tap_then_hold(KeyCode::Dot))
                .unwrap(),
        ),
    ])
    .unwrap();
    assert_eq!(dances.len(), 2);
    assert!(dances.get(td!(3)).unwrap().table().is_empty());
    assert_eq!(
        dances.get(td!(7)).unwrap().table().outcomes().collect::<Vec<_>>(),
        vec![DanceOutcome::TripleHold]
    );
}
