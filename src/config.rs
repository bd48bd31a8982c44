//! Picker configuration: palette plus timing and motion knobs.

use std::time::Duration;

use crate::constants;
use crate::palette::{Palette, PaletteError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be longer than zero")]
    ZeroDuration(&'static str),
    #[error("{0} must be a positive finite number")]
    NotPositive(&'static str),
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Settings for [`folder_picker_with`](crate::folder_picker_with).
///
/// `Default` reproduces the stock widget: seven colors, a 500 ms flight
/// committed after 500 ms, a 100-unit jump, and a 300 ms folder blend.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub palette: Palette,
    pub flight_duration: Duration,
    pub commit_delay: Duration,
    pub arc_height: f64,
    pub color_transition: Duration,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            flight_duration: constants::FLIGHT_DURATION,
            commit_delay: constants::COMMIT_DELAY,
            arc_height: constants::ARC_HEIGHT,
            color_transition: constants::COLOR_TRANSITION,
            spring_stiffness: constants::SPRING_STIFFNESS,
            spring_damping: constants::SPRING_DAMPING,
        }
    }
}

impl PickerConfig {
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn flight_duration(mut self, duration: Duration) -> Self {
        self.flight_duration = duration;
        self
    }

    pub fn commit_delay(mut self, delay: Duration) -> Self {
        self.commit_delay = delay;
        self
    }

    pub fn arc_height(mut self, height: f64) -> Self {
        self.arc_height = height;
        self
    }

    pub fn color_transition(mut self, duration: Duration) -> Self {
        self.color_transition = duration;
        self
    }

    /// Stiffness and damping of the selection ring's spring.
    pub fn spring(mut self, stiffness: f64, damping: f64) -> Self {
        self.spring_stiffness = stiffness;
        self.spring_damping = damping;
        self
    }

    /// Check every knob; the palette is already valid by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flight_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("flight_duration"));
        }
        if self.commit_delay.is_zero() {
            return Err(ConfigError::ZeroDuration("commit_delay"));
        }
        if self.color_transition.is_zero() {
            return Err(ConfigError::ZeroDuration("color_transition"));
        }
        if !(self.spring_stiffness.is_finite() && self.spring_stiffness > 0.0) {
            return Err(ConfigError::NotPositive("spring_stiffness"));
        }
        if !(self.spring_damping.is_finite() && self.spring_damping > 0.0) {
            return Err(ConfigError::NotPositive("spring_damping"));
        }
        Ok(())
    }

    /// Build a config around a palette given as `(id, hex)` pairs.
    pub fn with_hex_palette(entries: &[(u32, &str)]) -> Result<Self, ConfigError> {
        let config = Self::default().palette(Palette::from_hex(entries)?);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let config = PickerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.flight_duration, Duration::from_millis(500));
        assert_eq!(config.commit_delay, Duration::from_millis(500));
        assert_eq!(config.arc_height, 100.0);
    }

    #[test]
    fn zero_durations_are_rejected() {
        let config = PickerConfig::default().commit_delay(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("commit_delay"))
        );
        let config = PickerConfig::default().spring(0.0, 30.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("spring_stiffness"))
        );
    }

    #[test]
    fn palette_errors_convert() {
        let err = PickerConfig::with_hex_palette(&[]).unwrap_err();
        assert_eq!(err, ConfigError::Palette(PaletteError::Empty));
        let config = PickerConfig::with_hex_palette(&[(10, "#000"), (11, "#fff")]).unwrap();
        assert_eq!(config.palette.len(), 2);
    }
}
