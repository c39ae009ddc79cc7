use std::env;

use serde::Serialize;

use crate::ValidationError;

pub const WIDTH_ENV: &str = "FOCUSLINE_WIDTH";
pub const FOCUS_HEIGHT_ENV: &str = "FOCUSLINE_FOCUS_HEIGHT";
pub const CONTEXT_HEIGHT_ENV: &str = "FOCUSLINE_CONTEXT_HEIGHT";

/// Space reserved around a chart's plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer sizes and margins of the focus and context charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartConfig {
    pub width: f64,
    pub focus_height: f64,
    pub context_height: f64,
    pub focus_margin: Margin,
    pub context_margin: Margin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            focus_height: 500.0,
            context_height: 80.0,
            focus_margin: Margin {
                top: 10.0,
                right: 25.0,
                bottom: 100.0,
                left: 25.0,
            },
            context_margin: Margin {
                top: 10.0,
                right: 25.0,
                bottom: 30.0,
                left: 25.0,
            },
        }
    }
}

impl ChartConfig {
    /// Defaults with `FOCUSLINE_*` environment overrides applied.
    ///
    /// Unset, empty or unparseable variables leave the default in place.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(width) = read_env_f64(WIDTH_ENV) {
            config.width = width;
        }
        if let Some(height) = read_env_f64(FOCUS_HEIGHT_ENV) {
            config.focus_height = height;
        }
        if let Some(height) = read_env_f64(CONTEXT_HEIGHT_ENV) {
            config.context_height = height;
        }
        config
    }

    /// Horizontal extent of both plotting areas.
    pub fn plot_width(&self) -> f64 {
        self.width - self.focus_margin.left - self.focus_margin.right
    }

    pub fn focus_plot_height(&self) -> f64 {
        self.focus_height - self.focus_margin.top - self.focus_margin.bottom
    }

    pub fn context_plot_height(&self) -> f64 {
        self.context_height - self.context_margin.top - self.context_margin.bottom
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let dimensions = [
            ("plot_width", self.plot_width()),
            ("focus_plot_height", self.focus_plot_height()),
            ("context_plot_height", self.context_plot_height()),
        ];
        for (dimension, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidLayout {
                    dimension,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn read_env_f64(key: &str) -> Option<f64> {
    let raw = env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = trimmed, "ignoring unparseable chart size");
            None
        }
    }
}
