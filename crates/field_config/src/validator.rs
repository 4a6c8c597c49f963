//! 配置校验模块
//!
//! 校验规则：
//! - 自定义场地尺寸为有限值且 > 0
//! - 指定 symmetry 时 length_m / width_m 必须齐全
//! - 未指定 symmetry 时不允许单独给出尺寸

use contracts::{ContractError, FieldConfig};

/// 校验 FieldConfig
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(config: &FieldConfig) -> Result<(), ContractError> {
    validate_dimension("field.length_m", config.field.length_m)?;
    validate_dimension("field.width_m", config.field.width_m)?;
    validate_custom_field(config)?;
    Ok(())
}

fn validate_dimension(field: &str, value: Option<f64>) -> Result<(), ContractError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ContractError::config_validation(
            field,
            format!("must be a finite value > 0, got {v}"),
        )),
        _ => Ok(()),
    }
}

fn validate_custom_field(config: &FieldConfig) -> Result<(), ContractError> {
    let field = &config.field;
    let has_dimensions = field.length_m.is_some() || field.width_m.is_some();

    if field.symmetry.is_none() && has_dimensions {
        return Err(ContractError::config_validation(
            "field.symmetry",
            "length_m/width_m given without a symmetry",
        ));
    }

    // 缺失尺寸时返回与 resolve() 相同的错误
    if field.symmetry.is_some() {
        config.resolve()?;
    }

    Ok(())
}
