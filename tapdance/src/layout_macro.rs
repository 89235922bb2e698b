/// Create a tap-dance identity. For example, `td!(3)` represents `TapDanceId(3)`
#[macro_export]
macro_rules! td {
    ($x: expr) => {
        $crate::tap_dance::TapDanceId($x)
    };
}

/// Create a key press step. For example, `press!(A)` represents `KeyStep::press(KeyCode::A)`
#[macro_export]
macro_rules! press {
    ($k: ident) => {
        $crate::action::KeyStep::press($crate::keycode::KeyCode::$k)
    };
}

/// Create a key release step
#[macro_export]
macro_rules! release {
    ($k: ident) => {
        $crate::action::KeyStep::release($crate::keycode::KeyCode::$k)
    };
}

/// Press keys in order when resolved, release them in the same order afterwards.
///
/// `hold!(LShift, Kc7)` sends `&`. Evaluates to `Result<DanceActions, TapDanceError>`.
#[macro_export]
macro_rules! hold {
    ($($k: ident),+ $(,)?) => {
        $crate::tap_dance::DanceActions::hold(&[$($crate::keycode::KeyCode::$k),+])
    };
}

/// One complete tap of the key, then press it again until release
#[macro_export]
macro_rules! tap_then_hold {
    ($k: ident) => {
        $crate::tap_dance::DanceActions::tap_then_hold($crate::keycode::KeyCode::$k)
    };
}

/// Two complete taps of the key
#[macro_export]
macro_rules! two_taps {
    ($k: ident) => {
        $crate::tap_dance::DanceActions::two_taps($crate::keycode::KeyCode::$k)
    };
}
