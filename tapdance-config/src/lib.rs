use std::collections::HashSet;
use std::path::Path;

use serde::de;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;
use tapdance::action::KeyStep;
use tapdance::dance::DanceOutcome;
use tapdance::{
    ActionTable, DEFAULT_TAPPING_TERM, DanceActions, TAP_DANCE_MAX_NUM, TAP_DANCE_MAX_STEPS, TapDanceId, TapDances,
};

pub mod error;
pub mod keycode_alias;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::{KEYCODE_ALIAS, parse_keycode};

/// Content of a `tapdance.toml`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapDanceTomlConfig {
    #[serde(default)]
    pub tap_dance: TapDanceSection,
}

/// The `[tap_dance]` section
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapDanceSection {
    /// Window for counting presses of the same key
    #[serde_inline_default(DurationMillis(DEFAULT_TAPPING_TERM.as_millis()))]
    pub tapping_term: DurationMillis,
    #[serde(default)]
    pub instances: Vec<InstanceConfig>,
}

impl Default for TapDanceSection {
    fn default() -> Self {
        Self {
            tapping_term: DurationMillis(DEFAULT_TAPPING_TERM.as_millis()),
            instances: Vec::new(),
        }
    }
}

/// One `[[tap_dance.instances]]` entry.
///
/// Outcomes which are left out do nothing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfig {
    pub name: String,
    pub single_tap: Option<ActionConfig>,
    pub single_hold: Option<ActionConfig>,
    pub double_tap: Option<ActionConfig>,
    pub double_hold: Option<ActionConfig>,
    pub double_single_tap: Option<ActionConfig>,
    pub triple_tap: Option<ActionConfig>,
    pub triple_hold: Option<ActionConfig>,
}

impl InstanceConfig {
    fn bindings(&self) -> [(DanceOutcome, Option<&ActionConfig>); 7] {
        [
            (DanceOutcome::SingleTap, self.single_tap.as_ref()),
            (DanceOutcome::SingleHold, self.single_hold.as_ref()),
            (DanceOutcome::DoubleTap, self.double_tap.as_ref()),
            (DanceOutcome::DoubleHold, self.double_hold.as_ref()),
            (DanceOutcome::DoubleSingleTap, self.double_single_tap.as_ref()),
            (DanceOutcome::TripleTap, self.triple_tap.as_ref()),
            (DanceOutcome::TripleHold, self.triple_hold.as_ref()),
        ]
    }
}

/// Key steps sent when the outcome is resolved (`press`) and when the key is released (`release`)
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionConfig {
    #[serde(default)]
    pub press: Vec<StepConfig>,
    #[serde(default)]
    pub release: Vec<StepConfig>,
}

/// `{ down = "A" }`, `{ up = "A" }` or `{ tap = "A" }`, a tap being a down followed by an up
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepConfig {
    Down(String),
    Up(String),
    Tap(String),
}

/// Duration in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct DurationMillis(#[serde(deserialize_with = "parse_duration_millis")] pub u64);

fn parse_duration_millis<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let input: String = de::Deserialize::deserialize(deserializer)?;
    let num = input.trim_end_matches(|c: char| !c.is_numeric());
    let unit = &input[num.len()..];
    let num: u64 = num.parse().map_err(|_| {
        de::Error::custom(format!(
            "Invalid number \"{num}\" in duration: number part must be a u64"
        ))
    })?;

    match unit {
        "s" => num.checked_mul(1000).ok_or_else(|| {
            de::Error::custom(format!("Duration \"{input}\" is out of range"))
        }),
        "ms" => Ok(num),
        other => Err(de::Error::custom(format!(
            "Invalid duration unit \"{other}\": unit part must be either \"s\" or \"ms\""
        ))),
    }
}

/// Tap dances loaded from a configuration file, ready to be used by the engine
#[derive(Clone, Debug)]
pub struct TapDanceConfig {
    pub tapping_term_ms: u64,
    /// Instances in file order, the position is the identity
    pub instances: Vec<(String, ActionTable)>,
}

impl TapDanceConfig {
    /// Identity of the instance called `name`
    pub fn id_of(&self, name: &str) -> Option<TapDanceId> {
        self.instances
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| TapDanceId(i as u8))
    }

    /// Behavior config of the tracker
    pub fn behavior_config(&self) -> tapdance::TapDanceConfig {
        tapdance::TapDanceConfig::with_tapping_term_ms(self.tapping_term_ms)
    }

    /// Build a registry with every instance
    pub fn into_registry<const N: usize>(self) -> ConfigResult<TapDances<N>> {
        let tables = self
            .instances
            .into_iter()
            .enumerate()
            .map(|(i, (_, table))| (TapDanceId(i as u8), table));
        Ok(TapDances::from_tables(tables)?)
    }
}

impl TapDanceTomlConfig {
    /// Read and parse a `tapdance.toml`
    pub fn new_from_toml_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse the content of a `tapdance.toml`, `path` only labels errors
    pub fn from_toml_str(content: &str, path: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Resolve key names and build the action tables
    pub fn get_tap_dance_config(&self) -> ConfigResult<TapDanceConfig> {
        let section = &self.tap_dance;
        if section.instances.len() > TAP_DANCE_MAX_NUM {
            return Err(ConfigError::TooManyInstances { max: TAP_DANCE_MAX_NUM });
        }

        let mut names = HashSet::new();
        let mut instances = Vec::with_capacity(section.instances.len());
        for instance in &section.instances {
            if !names.insert(instance.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: instance.name.clone(),
                });
            }
            instances.push((instance.name.clone(), instance_table(instance)?));
        }

        Ok(TapDanceConfig {
            tapping_term_ms: section.tapping_term.0,
            instances,
        })
    }
}

/// Load a `tapdance.toml` and build its action tables
pub fn load_tap_dance_config<P: AsRef<Path>>(path: P) -> ConfigResult<TapDanceConfig> {
    TapDanceTomlConfig::new_from_toml_path(path)?.get_tap_dance_config()
}

fn instance_table(instance: &InstanceConfig) -> ConfigResult<ActionTable> {
    let mut table = ActionTable::new();
    for (outcome, action) in instance.bindings() {
        if let Some(action) = action {
            let on_resolve = expand_steps(&instance.name, &action.press)?;
            let on_release = expand_steps(&instance.name, &action.release)?;
            let actions = DanceActions::new(&on_resolve, &on_release).map_err(|_| ConfigError::TooManySteps {
                instance: instance.name.clone(),
                max: TAP_DANCE_MAX_STEPS,
            })?;
            table.insert(outcome, actions)?;
        }
    }
    Ok(table)
}

fn expand_steps(instance: &str, steps: &[StepConfig]) -> ConfigResult<Vec<KeyStep>> {
    let mut expanded = Vec::new();
    for step in steps {
        match step {
            StepConfig::Down(name) => expanded.push(KeyStep::press(keycode(instance, name)?)),
            StepConfig::Up(name) => expanded.push(KeyStep::release(keycode(instance, name)?)),
            StepConfig::Tap(name) => {
                let key = keycode(instance, name)?;
                expanded.push(KeyStep::press(key));
                expanded.push(KeyStep::release(key));
            }
        }
    }
    Ok(expanded)
}

fn keycode(instance: &str, name: &str) -> ConfigResult<tapdance::keycode::KeyCode> {
    parse_keycode(name).ok_or_else(|| ConfigError::UnknownKeycode {
        instance: instance.to_string(),
        name: name.to_string(),
    })
}
