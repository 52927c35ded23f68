//! Machine parameters and the material table
//!
//! These are immutable display/derivation inputs supplied by the host. The
//! tool diameter feeds the rendered marker and groove sizes; everything else
//! is read out verbatim in the status overlay.

use serde::{Deserialize, Serialize};

/// Workpiece material.
///
/// Unknown material names map to [`Material::Other`], which renders with the
/// default workpiece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Aluminum,
    Steel,
    Brass,
    Copper,
    Wood,
    Acrylic,
    Foam,
    Other,
}

impl Material {
    /// Parse a material name, case-insensitively. Unknown names become
    /// [`Material::Other`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "aluminum" | "aluminium" => Self::Aluminum,
            "steel" => Self::Steel,
            "brass" => Self::Brass,
            "copper" => Self::Copper,
            "wood" => Self::Wood,
            "acrylic" => Self::Acrylic,
            "foam" => Self::Foam,
            _ => Self::Other,
        }
    }

    /// Human-readable name for the status overlay.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aluminum => "Aluminum",
            Self::Steel => "Steel",
            Self::Brass => "Brass",
            Self::Copper => "Copper",
            Self::Wood => "Wood",
            Self::Acrylic => "Acrylic",
            Self::Foam => "Foam",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Machining job parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineParams {
    /// Spindle speed in RPM.
    pub spindle_speed: f64,
    /// Feed rate in mm/min.
    pub feed_rate: f64,
    /// Plunge rate in mm/min.
    pub plunge_rate: f64,
    /// Safe travel height in millimeters.
    pub safe_height: f64,
    /// Workpiece material.
    pub material: Material,
    /// Tool diameter in millimeters.
    pub tool_diameter: f64,
}

impl Default for MachineParams {
    fn default() -> Self {
        Self {
            spindle_speed: 10_000.0,
            feed_rate: 600.0,
            plunge_rate: 200.0,
            safe_height: 5.0,
            material: Material::Aluminum,
            tool_diameter: 3.175,
        }
    }
}

impl MachineParams {
    /// Returns true if all numeric parameters are finite.
    pub fn is_finite(&self) -> bool {
        self.spindle_speed.is_finite()
            && self.feed_rate.is_finite()
            && self.plunge_rate.is_finite()
            && self.safe_height.is_finite()
            && self.tool_diameter.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(Material::from_name("aluminum"), Material::Aluminum);
        assert_eq!(Material::from_name("Aluminium"), Material::Aluminum);
        assert_eq!(Material::from_name(" STEEL "), Material::Steel);
        assert_eq!(Material::from_name("wood"), Material::Wood);
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        assert_eq!(Material::from_name("unobtainium"), Material::Other);
        assert_eq!(Material::from_name(""), Material::Other);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Material::Brass).unwrap();
        assert_eq!(json, "\"brass\"");
        let back: Material = serde_json::from_str("\"copper\"").unwrap();
        assert_eq!(back, Material::Copper);
    }

    #[test]
    fn test_default_preset_is_finite() {
        let params = MachineParams::default();
        assert!(params.is_finite());
        assert_eq!(params.material, Material::Aluminum);
    }

    #[test]
    fn test_non_finite_params_detected() {
        let params = MachineParams {
            tool_diameter: f64::NAN,
            ..Default::default()
        };
        assert!(!params.is_finite());
    }
}
