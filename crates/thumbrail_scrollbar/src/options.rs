//! Scrollbar configuration
//!
//! Options mirror the construction input of the widget: per-axis enable flags,
//! an optional externally supplied scroll range, and per-axis track offsets.
//! Reading is forgiving. Missing fields take their defaults, and a field with
//! the wrong type falls back to its default instead of failing the whole read.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use thumbrail_animation::FlingConfig;
use thumbrail_core::{Rect, Size};

use crate::error::{OptionsError, Result};

/// Empirical interaction constants
///
/// Behavior parity depends on these exact values, so they are exposed as
/// configuration rather than derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tuning {
    /// Content must exceed the container by more than this (px) to activate
    /// an axis
    pub activation_epsilon: f64,
    /// Delay before a requested offset is committed (ms)
    pub debounce_ms: f64,
    /// Fling tick interval (ms)
    pub fling_interval_ms: f64,
    /// Fling displacement per tick = velocity (px/ms) * multiplier
    pub fling_multiplier: f64,
    /// Fling velocity factor per tick
    pub fling_decay: f64,
    /// Fling stops once both velocities are below this (px/ms)
    pub fling_stop_threshold: f64,
    /// Arrow key step (px)
    pub arrow_step: f64,
    /// Wheel line-mode multiplier (px per line)
    pub wheel_line_multiplier: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        let fling = FlingConfig::default();
        Self {
            activation_epsilon: 0.5,
            debounce_ms: 10.0,
            fling_interval_ms: fling.interval_ms,
            fling_multiplier: fling.multiplier,
            fling_decay: fling.decay,
            fling_stop_threshold: fling.stop_threshold,
            arrow_step: 40.0,
            wheel_line_multiplier: 10.0,
        }
    }
}

impl Tuning {
    /// Replace each unusable value with its default
    ///
    /// Every value must be finite. On top of that the activation epsilon may
    /// not be negative, the fling interval and stop threshold must be
    /// positive, and the decay must lie in `[0, 1)` so a fling always settles.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let keep = |value: f64, valid: bool, default: f64| {
            if value.is_finite() && valid {
                value
            } else {
                default
            }
        };

        Self {
            activation_epsilon: keep(
                self.activation_epsilon,
                self.activation_epsilon >= 0.0,
                defaults.activation_epsilon,
            ),
            debounce_ms: keep(self.debounce_ms, true, defaults.debounce_ms),
            fling_interval_ms: keep(
                self.fling_interval_ms,
                self.fling_interval_ms > 0.0,
                defaults.fling_interval_ms,
            ),
            fling_multiplier: keep(self.fling_multiplier, true, defaults.fling_multiplier),
            fling_decay: keep(
                self.fling_decay,
                (0.0..1.0).contains(&self.fling_decay),
                defaults.fling_decay,
            ),
            fling_stop_threshold: keep(
                self.fling_stop_threshold,
                self.fling_stop_threshold > 0.0,
                defaults.fling_stop_threshold,
            ),
            arrow_step: keep(self.arrow_step, true, defaults.arrow_step),
            wheel_line_multiplier: keep(
                self.wheel_line_multiplier,
                true,
                defaults.wheel_line_multiplier,
            ),
        }
    }

    pub fn fling_config(&self) -> FlingConfig {
        FlingConfig {
            interval_ms: self.fling_interval_ms,
            multiplier: self.fling_multiplier,
            decay: self.fling_decay,
            stop_threshold: self.fling_stop_threshold,
        }
    }
}

/// Externally supplied geometry for range-scroll mode
///
/// When present, the host's native scroll box is not the source of truth:
/// committed offsets are never written back to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRange {
    /// Logical container rectangle in host-local pixels
    pub container_rect: Rect,
    /// Total scrollable content size
    pub content_size: Size,
}

impl ScrollRange {
    pub fn new(container_rect: Rect, content_size: Size) -> Self {
        Self {
            container_rect,
            content_size,
        }
    }
}

/// Scrollbar construction options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollbarOptions {
    /// Enable the horizontal axis
    #[serde(deserialize_with = "enabled_unless_false")]
    pub xscroll: bool,
    /// Enable the vertical axis
    #[serde(deserialize_with = "enabled_unless_false")]
    pub yscroll: bool,
    /// Range-scroll geometry; `None` reads geometry from the host
    #[serde(deserialize_with = "or_default")]
    pub scroll_range: Option<ScrollRange>,
    /// Offset of the horizontal track from the container's bottom edge (px)
    #[serde(deserialize_with = "or_default")]
    pub track_x_offset: f64,
    /// Offset of the vertical track from the container's right edge (px)
    #[serde(deserialize_with = "or_default")]
    pub track_y_offset: f64,
    #[serde(deserialize_with = "or_default")]
    pub tuning: Tuning,
}

impl Default for ScrollbarOptions {
    fn default() -> Self {
        Self {
            xscroll: true,
            yscroll: true,
            scroll_range: None,
            track_x_offset: 0.0,
            track_y_offset: 0.0,
            tuning: Tuning::default(),
        }
    }
}

impl ScrollbarOptions {
    /// Parse options from JSON. `null` yields the defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        match object_or_null(input)? {
            Some(value) => Ok(Self::deserialize(value)?.sanitized()),
            None => Ok(Self::default()),
        }
    }

    /// These options with unusable tuning values reset to their defaults
    pub fn sanitized(mut self) -> Self {
        self.tuning = self.tuning.sanitized();
        self
    }

    /// True when geometry comes from [`ScrollRange`] instead of the host
    pub fn is_range_scroll(&self) -> bool {
        self.scroll_range.is_some()
    }

    /// Merge a patch into these options
    pub fn apply(&mut self, patch: OptionsPatch) {
        if let Some(xscroll) = patch.xscroll {
            self.xscroll = xscroll;
        }
        if let Some(yscroll) = patch.yscroll {
            self.yscroll = yscroll;
        }
        if let Some(scroll_range) = patch.scroll_range {
            self.scroll_range = scroll_range;
        }
        if let Some(offset) = patch.track_x_offset {
            self.track_x_offset = offset;
        }
        if let Some(offset) = patch.track_y_offset {
            self.track_y_offset = offset;
        }
        if let Some(tuning) = patch.tuning {
            self.tuning = tuning.sanitized();
        }
    }
}

/// A partial update for [`ScrollbarOptions`]
///
/// `None` leaves a field unchanged. For `scroll_range`, `Some(None)` switches
/// back to reading geometry from the host (JSON `null`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    #[serde(deserialize_with = "some_if_valid")]
    pub xscroll: Option<bool>,
    #[serde(deserialize_with = "some_if_valid")]
    pub yscroll: Option<bool>,
    #[serde(deserialize_with = "nullable_if_valid")]
    pub scroll_range: Option<Option<ScrollRange>>,
    #[serde(deserialize_with = "some_if_valid")]
    pub track_x_offset: Option<f64>,
    #[serde(deserialize_with = "some_if_valid")]
    pub track_y_offset: Option<f64>,
    #[serde(deserialize_with = "some_if_valid")]
    pub tuning: Option<Tuning>,
}

impl OptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from JSON. `null` yields an empty patch.
    pub fn from_json(input: &str) -> Result<Self> {
        match object_or_null(input)? {
            Some(value) => Ok(Self::deserialize(value)?),
            None => Ok(Self::default()),
        }
    }

    pub fn xscroll(mut self, enabled: bool) -> Self {
        self.xscroll = Some(enabled);
        self
    }

    pub fn yscroll(mut self, enabled: bool) -> Self {
        self.yscroll = Some(enabled);
        self
    }

    pub fn scroll_range(mut self, range: ScrollRange) -> Self {
        self.scroll_range = Some(Some(range));
        self
    }

    pub fn clear_scroll_range(mut self) -> Self {
        self.scroll_range = Some(None);
        self
    }

    pub fn track_offsets(mut self, x: f64, y: f64) -> Self {
        self.track_x_offset = Some(x);
        self.track_y_offset = Some(y);
        self
    }

    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn object_or_null(input: &str) -> Result<Option<Value>> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => Ok(Some(value)),
        Value::Bool(_) => Err(OptionsError::NotAnObject("boolean")),
        Value::Number(_) => Err(OptionsError::NotAnObject("number")),
        Value::String(_) => Err(OptionsError::NotAnObject("string")),
        Value::Array(_) => Err(OptionsError::NotAnObject("array")),
    }
}

/// Only a literal `false` disables an axis
fn enabled_unless_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(!matches!(value, Value::Bool(false)))
}

fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn some_if_valid<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn nullable_if_valid<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(Some(None));
    }
    Ok(T::deserialize(value).ok().map(Some))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ScrollbarOptions::default();
        assert!(options.xscroll);
        assert!(options.yscroll);
        assert!(!options.is_range_scroll());
        assert_eq!(options.tuning.activation_epsilon, 0.5);
        assert_eq!(options.tuning.debounce_ms, 10.0);
        assert_eq!(options.tuning.fling_decay, 0.8);
    }

    #[test]
    fn test_null_and_empty_object_are_defaults() {
        assert_eq!(
            ScrollbarOptions::from_json("null").unwrap(),
            ScrollbarOptions::default()
        );
        assert_eq!(
            ScrollbarOptions::from_json("{}").unwrap(),
            ScrollbarOptions::default()
        );
    }

    #[test]
    fn test_only_literal_false_disables_axis() {
        let options = ScrollbarOptions::from_json(r#"{"xscroll": false, "yscroll": 0}"#).unwrap();
        assert!(!options.xscroll);
        assert!(options.yscroll);
    }

    #[test]
    fn test_scroll_range_enables_range_mode() {
        let options = ScrollbarOptions::from_json(
            r#"{
                "scrollRange": {
                    "containerRect": {"left": 10, "top": 20, "width": 100, "height": 50},
                    "contentSize": {"width": 400, "height": 50}
                },
                "trackXOffset": 4
            }"#,
        )
        .unwrap();

        assert!(options.is_range_scroll());
        let range = options.scroll_range.unwrap();
        assert_eq!(range.container_rect, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(range.content_size, Size::new(400.0, 50.0));
        assert_eq!(options.track_x_offset, 4.0);
    }

    #[test]
    fn test_malformed_fields_fall_back() {
        let options = ScrollbarOptions::from_json(
            r#"{"scrollRange": {"containerRect": "oops"}, "trackYOffset": "wide", "tuning": 3}"#,
        )
        .unwrap();

        assert!(!options.is_range_scroll());
        assert_eq!(options.track_y_offset, 0.0);
        assert_eq!(options.tuning, Tuning::default());
    }

    #[test]
    fn test_partial_tuning_keeps_other_defaults() {
        let options = ScrollbarOptions::from_json(r#"{"tuning": {"debounceMs": 0}}"#).unwrap();
        assert_eq!(options.tuning.debounce_ms, 0.0);
        assert_eq!(options.tuning.arrow_step, 40.0);
    }

    #[test]
    fn test_unusable_tuning_falls_back_per_field() {
        let options = ScrollbarOptions::from_json(
            r#"{"tuning": {
                "flingDecay": 1,
                "flingIntervalMs": 0,
                "flingStopThreshold": -0.5,
                "activationEpsilon": -1,
                "arrowStep": 25
            }}"#,
        )
        .unwrap();

        let defaults = Tuning::default();
        assert_eq!(options.tuning.fling_decay, defaults.fling_decay);
        assert_eq!(options.tuning.fling_interval_ms, defaults.fling_interval_ms);
        assert_eq!(options.tuning.fling_stop_threshold, defaults.fling_stop_threshold);
        assert_eq!(options.tuning.activation_epsilon, defaults.activation_epsilon);
        assert_eq!(options.tuning.arrow_step, 25.0);
    }

    #[test]
    fn test_sanitized_rejects_non_finite_and_keeps_valid() {
        let tuning = Tuning {
            debounce_ms: f64::NAN,
            fling_multiplier: f64::INFINITY,
            fling_decay: 0.0,
            wheel_line_multiplier: 16.0,
            ..Tuning::default()
        }
        .sanitized();

        assert_eq!(tuning.debounce_ms, 10.0);
        assert_eq!(tuning.fling_multiplier, Tuning::default().fling_multiplier);
        assert_eq!(tuning.fling_decay, 0.0);
        assert_eq!(tuning.wheel_line_multiplier, 16.0);
    }

    #[test]
    fn test_patch_tuning_is_sanitized() {
        let mut options = ScrollbarOptions::default();
        options.apply(OptionsPatch::new().tuning(Tuning {
            fling_decay: 1.5,
            debounce_ms: 0.0,
            ..Tuning::default()
        }));
        assert_eq!(options.tuning.fling_decay, 0.8);
        assert_eq!(options.tuning.debounce_ms, 0.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            ScrollbarOptions::from_json("{xscroll"),
            Err(OptionsError::Json(_))
        ));
        assert!(matches!(
            ScrollbarOptions::from_json("[1, 2]"),
            Err(OptionsError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut options = ScrollbarOptions::default();
        let range = ScrollRange::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(20.0, 20.0));

        options.apply(OptionsPatch::new().xscroll(false).scroll_range(range));
        assert!(!options.xscroll);
        assert!(options.yscroll);
        assert_eq!(options.scroll_range, Some(range));

        options.apply(OptionsPatch::new().clear_scroll_range());
        assert!(!options.is_range_scroll());
        assert!(!options.xscroll);
    }

    #[test]
    fn test_patch_from_json_null_range_clears() {
        let patch = OptionsPatch::from_json(r#"{"scrollRange": null, "yscroll": "no"}"#).unwrap();
        assert_eq!(patch.scroll_range, Some(None));
        assert_eq!(patch.yscroll, None);
        assert!(OptionsPatch::from_json("null").unwrap().is_empty());
    }
}
