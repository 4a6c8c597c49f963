//! FieldConfig - Field Config Loader output
//!
//! Selects the field symmetry used when flipping trajectories, either by
//! season or as an explicit custom field.

use serde::{Deserialize, Serialize};

use crate::{ContractError, FieldSymmetry, Season, Symmetry};

/// Config version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Top-level field configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Config version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Field settings
    #[serde(default)]
    pub field: FieldSection,
}

/// `[field]` table
///
/// A custom `symmetry` (with both dimensions) takes precedence over `season`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSection {
    /// Season whose field layout to use (defaults to the latest known season)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,

    /// Custom symmetry kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry: Option<Symmetry>,

    /// Custom field length (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,

    /// Custom field width (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_m: Option<f64>,
}

impl FieldConfig {
    /// Config for a season's field
    pub fn for_season(season: Season) -> Self {
        Self {
            version: ConfigVersion::V1,
            field: FieldSection {
                season: Some(season),
                ..Default::default()
            },
        }
    }

    /// Resolve to the flipper used for trajectories
    ///
    /// # Errors
    /// `ConfigValidation` when a custom symmetry is missing a dimension.
    pub fn resolve(&self) -> Result<FieldSymmetry, ContractError> {
        let field = &self.field;
        match field.symmetry {
            Some(symmetry) => {
                let length = field.length_m.ok_or_else(|| {
                    ContractError::config_validation(
                        "field.length_m",
                        "required when field.symmetry is set",
                    )
                })?;
                let width = field.width_m.ok_or_else(|| {
                    ContractError::config_validation(
                        "field.width_m",
                        "required when field.symmetry is set",
                    )
                })?;
                Ok(FieldSymmetry::new(symmetry, length, width))
            }
            None => Ok(FieldSymmetry::for_season(field.season.unwrap_or_default())),
        }
    }
}
