//! # Field Config
//!
//! Loads the field configuration that decides how trajectories are flipped
//! for the opposite alliance.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate custom field dimensions
//! - Resolve to a [`FieldSymmetry`]
//!
//! # Example
//!
//! ```no_run
//! use field_config::FieldConfigLoader;
//! use std::path::Path;
//!
//! let field = FieldConfigLoader::load_symmetry(Path::new("field.toml")).unwrap();
//! println!("Symmetry: {}", field.symmetry);
//! ```

mod parser;
mod validator;

pub use contracts::{FieldConfig, FieldSymmetry};
pub use parser::ConfigFormat;

use contracts::ContractError;
use std::path::Path;

/// Field configuration loader
pub struct FieldConfigLoader;

impl FieldConfigLoader {
    /// Load configuration from a file path
    ///
    /// The format is detected from the extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<FieldConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        let config = Self::load_from_str(&content, format)?;

        tracing::info!(
            path = %path.display(),
            season = ?config.field.season,
            symmetry = ?config.field.symmetry,
            "Field config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a string
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<FieldConfig, ContractError> {
        Self::parse_and_validate(content, format)
    }

    /// Load a file and resolve it straight to the flipper
    pub fn load_symmetry(path: &Path) -> Result<FieldSymmetry, ContractError> {
        Self::load_from_path(path)?.resolve()
    }

    pub fn to_toml(config: &FieldConfig) -> Result<String, ContractError> {
        toml::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    pub fn to_json(config: &FieldConfig) -> Result<String, ContractError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl FieldConfigLoader {
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn parse_and_validate(
        content: &str,
        format: ConfigFormat,
    ) -> Result<FieldConfig, ContractError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }
}
