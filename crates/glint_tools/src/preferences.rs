//! Tool preferences.
//!
//! Preferences live in a flat key/value store owned by the host. Missing
//! keys are created with their defaults on first use; existing values are
//! only overwritten by an explicit reset or save.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::gesture::Modifier;

pub const AFFECT_TRANSLATION_KEY: &str = "place_reflection_affect_translation";
pub const AFFECT_ROTATION_KEY: &str = "place_reflection_affect_rotation";
pub const INVERT_AXIS_KEY: &str = "place_reflection_invert_axis";
pub const AXIS_KEY: &str = "place_reflection_axis";
pub const SLOW_SPEED_KEY: &str = "place_reflection_speed_slow";
pub const FAST_SPEED_KEY: &str = "place_reflection_speed_fast";

pub const DEFAULT_SLOW_SPEED: f32 = 0.001;
pub const DEFAULT_FAST_SPEED: f32 = 0.01;

/// A single stored preference value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl PrefValue {
    /// Booleans may also be stored as 0/1 integers.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(b),
            PrefValue::Int(i) => Some(i != 0),
            PrefValue::Float(_) => None,
        }
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            PrefValue::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(self) -> Option<f64> {
        match self {
            PrefValue::Float(f) => Some(f),
            PrefValue::Int(i) => Some(i as f64),
            PrefValue::Bool(_) => None,
        }
    }
}

/// Flat key/value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<PrefValue>;

    fn set(&mut self, key: &str, value: PrefValue);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store, for hosts that persist preferences themselves.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Store backed by a flat TOML file.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl FilePreferences {
    /// Open the preference file; a missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let values: BTreeMap<String, PrefValue> = toml::from_str(&content)?;
            log::info!("Loaded {} preferences from {:?}", values.len(), path);
            values
        } else {
            log::debug!("No preference file at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Write all values back to the file, creating parent directories.
    pub fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        std::fs::write(&self.path, content)?;
        log::info!("Saved preferences to {:?}", self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default preferences path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("glint");
            p.push("preferences.toml");
            p
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Object axis aimed along the reflection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AimAxis {
    X = 0,
    Y = 1,
    #[default]
    Z = 2,
}

impl TryFrom<i64> for AimAxis {
    type Error = PreferenceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AimAxis::X),
            1 => Ok(AimAxis::Y),
            2 => Ok(AimAxis::Z),
            other => Err(PreferenceError::InvalidValue {
                key: AXIS_KEY.to_string(),
                reason: format!("axis index {} is not 0, 1 or 2", other),
            }),
        }
    }
}

/// Settings of the reflection placement tool.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementPreferences {
    /// Axis aimed at the reflection point
    pub axis: AimAxis,
    /// Point the axis away from the reflection point instead
    pub invert_axis: bool,
    pub affect_translation: bool,
    pub affect_rotation: bool,
    /// Move speed with ctrl held
    pub slow_speed: f32,
    /// Move speed with shift held
    pub fast_speed: f32,
}

impl Default for PlacementPreferences {
    fn default() -> Self {
        Self {
            axis: AimAxis::Z,
            invert_axis: true,
            affect_translation: true,
            affect_rotation: true,
            slow_speed: DEFAULT_SLOW_SPEED,
            fast_speed: DEFAULT_FAST_SPEED,
        }
    }
}

impl PlacementPreferences {
    /// Write the defaults for every missing key, or for all keys on reset.
    pub fn ensure_defaults(store: &mut dyn PreferenceStore, reset: bool) {
        let defaults = Self::default();
        for (key, value) in defaults.entries() {
            if reset || !store.contains(key) {
                store.set(key, value);
            }
        }
    }

    /// Read the settings, creating missing keys first. Invalid values are
    /// replaced by their default with a warning.
    pub fn load(store: &mut dyn PreferenceStore) -> Self {
        Self::ensure_defaults(store, false);
        let defaults = Self::default();

        let axis = match store.get(AXIS_KEY).and_then(PrefValue::as_int) {
            Some(index) => AimAxis::try_from(index).unwrap_or_else(|e| {
                log::warn!("{}, using {:?}", e, defaults.axis);
                defaults.axis
            }),
            None => {
                log::warn!("Preference '{}' is not an integer, using {:?}", AXIS_KEY, defaults.axis);
                defaults.axis
            }
        };

        let prefs = Self {
            axis,
            invert_axis: read_bool(store, INVERT_AXIS_KEY, defaults.invert_axis),
            affect_translation: read_bool(store, AFFECT_TRANSLATION_KEY, defaults.affect_translation),
            affect_rotation: read_bool(store, AFFECT_ROTATION_KEY, defaults.affect_rotation),
            slow_speed: read_speed(store, SLOW_SPEED_KEY, defaults.slow_speed),
            fast_speed: read_speed(store, FAST_SPEED_KEY, defaults.fast_speed),
        };
        log::debug!("Loaded placement preferences: {:?}", prefs);
        prefs
    }

    /// Store every setting.
    pub fn save(&self, store: &mut dyn PreferenceStore) {
        for (key, value) in self.entries() {
            store.set(key, value);
        }
    }

    /// Check the invariants: speeds must be positive and finite.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        for (key, speed) in [(SLOW_SPEED_KEY, self.slow_speed), (FAST_SPEED_KEY, self.fast_speed)] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(PreferenceError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("speed must be positive, got {}", speed),
                });
            }
        }
        Ok(())
    }

    /// Move speed for the held modifier: shift is fast, ctrl is slow.
    pub fn speed(&self, modifier: Modifier) -> Option<f32> {
        match modifier {
            Modifier::Shift => Some(self.fast_speed),
            Modifier::Ctrl => Some(self.slow_speed),
            Modifier::None => None,
        }
    }

    fn entries(&self) -> [(&'static str, PrefValue); 6] {
        [
            (AFFECT_TRANSLATION_KEY, PrefValue::Bool(self.affect_translation)),
            (AFFECT_ROTATION_KEY, PrefValue::Bool(self.affect_rotation)),
            (INVERT_AXIS_KEY, PrefValue::Bool(self.invert_axis)),
            (AXIS_KEY, PrefValue::Int(self.axis as i64)),
            (SLOW_SPEED_KEY, PrefValue::Float(self.slow_speed as f64)),
            (FAST_SPEED_KEY, PrefValue::Float(self.fast_speed as f64)),
        ]
    }
}

fn read_bool(store: &dyn PreferenceStore, key: &str, default: bool) -> bool {
    store.get(key).and_then(PrefValue::as_bool).unwrap_or_else(|| {
        log::warn!("Preference '{}' is not a boolean, using {}", key, default);
        default
    })
}

fn read_speed(store: &dyn PreferenceStore, key: &str, default: f32) -> f32 {
    match store.get(key).and_then(PrefValue::as_float) {
        Some(speed) if speed.is_finite() && speed > 0.0 => speed as f32,
        other => {
            log::warn!("Preference '{}' has invalid speed {:?}, using {}", key, other, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_created_on_first_load() {
        let mut store = MemoryPreferences::new();
        let prefs = PlacementPreferences::load(&mut store);

        assert_eq!(prefs, PlacementPreferences::default());
        assert_eq!(store.len(), 6);
        assert_eq!(store.get(AXIS_KEY), Some(PrefValue::Int(2)));
        assert_eq!(store.get(INVERT_AXIS_KEY), Some(PrefValue::Bool(true)));
    }

    #[test]
    fn test_existing_values_are_not_overwritten() {
        let mut store = MemoryPreferences::new();
        store.set(AXIS_KEY, PrefValue::Int(0));
        store.set(INVERT_AXIS_KEY, PrefValue::Int(0));

        let prefs = PlacementPreferences::load(&mut store);
        assert_eq!(prefs.axis, AimAxis::X);
        assert!(!prefs.invert_axis);
        assert_eq!(store.get(AXIS_KEY), Some(PrefValue::Int(0)));
    }

    #[test]
    fn test_reset_overwrites_everything() {
        let mut store = MemoryPreferences::new();
        store.set(AXIS_KEY, PrefValue::Int(1));
        store.set(FAST_SPEED_KEY, PrefValue::Float(0.5));

        PlacementPreferences::ensure_defaults(&mut store, true);
        assert_eq!(PlacementPreferences::load(&mut store), PlacementPreferences::default());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let mut store = MemoryPreferences::new();
        store.set(AXIS_KEY, PrefValue::Int(7));
        store.set(SLOW_SPEED_KEY, PrefValue::Float(-1.0));
        store.set(AFFECT_ROTATION_KEY, PrefValue::Float(1.0));

        let prefs = PlacementPreferences::load(&mut store);
        assert_eq!(prefs.axis, AimAxis::Z);
        assert_eq!(prefs.slow_speed, DEFAULT_SLOW_SPEED);
        assert!(prefs.affect_rotation);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryPreferences::new();
        let prefs = PlacementPreferences {
            axis: AimAxis::Y,
            invert_axis: false,
            affect_translation: false,
            affect_rotation: true,
            slow_speed: 0.002,
            fast_speed: 0.05,
        };
        prefs.save(&mut store);
        assert_eq!(PlacementPreferences::load(&mut store), prefs);
    }

    #[test]
    fn test_speed_mapping() {
        let prefs = PlacementPreferences::default();
        assert_eq!(prefs.speed(Modifier::Shift), Some(DEFAULT_FAST_SPEED));
        assert_eq!(prefs.speed(Modifier::Ctrl), Some(DEFAULT_SLOW_SPEED));
        assert_eq!(prefs.speed(Modifier::None), None);
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let prefs = PlacementPreferences {
            fast_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(PreferenceError::InvalidValue { .. })
        ));
        assert!(PlacementPreferences::default().validate().is_ok());
    }
}
