use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};

/// Drawing constants shared by every layer of a diagram.
///
/// # Fields
/// - `vertical_spacing`   — distance between the centres of consecutive layers
/// - `horizontal_spacing` — distance between neighbouring neurons of one layer
/// - `neuron_radius`      — circle radius; edges are trimmed by this much at
///                          both ends so they meet the circle outlines
/// - `label_font_size`    — font size (points) of the per-layer labels
///
/// Missing fields fall back to the defaults when deserializing, so a spec file
/// may override only the values it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub vertical_spacing: f64,
    pub horizontal_spacing: f64,
    pub neuron_radius: f64,
    pub label_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            vertical_spacing: 6.0,
            horizontal_spacing: 2.0,
            neuron_radius: 0.5,
            label_font_size: 12.0,
        }
    }
}

impl LayoutConfig {
    /// Rejects non-finite or non-positive constants, and radii that would make
    /// neighbouring circles touch or overlap. Edges are trimmed by the radius at
    /// both ends, so a diameter reaching the spacing would turn them inside out.
    pub fn validate(&self) -> DiagramResult<()> {
        let fields = [
            ("vertical_spacing", self.vertical_spacing),
            ("horizontal_spacing", self.horizontal_spacing),
            ("neuron_radius", self.neuron_radius),
            ("label_font_size", self.label_font_size),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(DiagramError::InvalidLayout(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        let closest = self.horizontal_spacing.min(self.vertical_spacing);
        if 2.0 * self.neuron_radius >= closest {
            return Err(DiagramError::InvalidLayout(format!(
                "neuron_radius {} must be less than half the smallest spacing ({closest})",
                self.neuron_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        assert_eq!(config.vertical_spacing, 6.0);
        assert_eq!(config.horizontal_spacing, 2.0);
        assert_eq!(config.neuron_radius, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        let config = LayoutConfig { horizontal_spacing: 0.0, ..LayoutConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("horizontal_spacing"));
    }

    #[test]
    fn test_rejects_nan_radius() {
        let config = LayoutConfig { neuron_radius: f64::NAN, ..LayoutConfig::default() };
        assert!(matches!(config.validate(), Err(DiagramError::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_radius_reaching_half_spacing() {
        let touching = LayoutConfig { neuron_radius: 1.0, ..LayoutConfig::default() };
        let err = touching.validate().unwrap_err();
        assert!(err.to_string().contains("neuron_radius"), "{err}");

        let tight_rows = LayoutConfig { vertical_spacing: 0.8, ..LayoutConfig::default() };
        assert!(matches!(tight_rows.validate(), Err(DiagramError::InvalidLayout(_))));

        let just_below = LayoutConfig { neuron_radius: 0.99, ..LayoutConfig::default() };
        assert!(just_below.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "neuron_radius": 0.25 }"#).unwrap();
        assert_eq!(config.neuron_radius, 0.25);
        assert_eq!(config.vertical_spacing, 6.0);
    }
}
