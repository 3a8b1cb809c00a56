//! String-typed edit parameters, as received from form fields or the CLI.
//!
//! Every parameter is validated here before any pixel work starts, so a bad
//! request fails with [`EditError::Parameter`] and never reaches the decoder.

use serde_json::{Map, Value};
use sprite_ops::{ColorKey, PaddingSpec, ScaleFactor, Tolerance};

use crate::error::EditError;

pub const DEFAULT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_FEATHER: &str = "0";
pub const DEFAULT_PADDING: &str = "{}";
pub const DEFAULT_SCALE: &str = "1";

/// A fully parsed edit operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    RemoveBackground { key: ColorKey, tolerance: Tolerance },
    Pad(PaddingSpec),
    Resize(ScaleFactor),
}

impl Edit {
    /// Parse `color` (`#RRGGBB`) and `feather` (non-negative integer).
    pub fn remove_background(color: &str, feather: &str) -> Result<Self, EditError> {
        Ok(Edit::RemoveBackground {
            key: parse_color(color)?,
            tolerance: parse_feather(feather)?,
        })
    }

    /// Parse a JSON object with `left`, `right`, `up` and `down`.
    pub fn set_padding(padding: &str) -> Result<Self, EditError> {
        parse_padding(padding).map(Edit::Pad)
    }

    /// Parse a positive floating-point scale.
    pub fn resize(scale: &str) -> Result<Self, EditError> {
        parse_scale(scale).map(Edit::Resize)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Edit::RemoveBackground { .. } => "remove-background",
            Edit::Pad(_) => "set-padding",
            Edit::Resize(_) => "resize",
        }
    }
}

pub fn parse_color(color: &str) -> Result<ColorKey, EditError> {
    color
        .parse()
        .map_err(|e: sprite_ops::ParseColorError| EditError::parameter(e.to_string()))
}

pub fn parse_feather(feather: &str) -> Result<Tolerance, EditError> {
    let value = parse_non_negative("feather", feather.trim())?;
    // Anything past 255 already matches every pixel.
    Ok(Tolerance(u32::try_from(value).unwrap_or(u32::MAX)))
}

pub fn parse_scale(scale: &str) -> Result<ScaleFactor, EditError> {
    let value: f64 = scale.trim().parse().map_err(|_| {
        EditError::parameter(format!("scale must be a number, got {scale:?}"))
    })?;
    ScaleFactor::new(value).map_err(EditError::from)
}

pub fn parse_padding(padding: &str) -> Result<PaddingSpec, EditError> {
    let object: Map<String, Value> = serde_json::from_str(padding).map_err(|e| {
        EditError::parameter(format!("padding must be a JSON object: {e}"))
    })?;

    let side = |name: &'static str| -> Result<u32, EditError> {
        let value = object
            .get(name)
            .ok_or_else(|| EditError::parameter(format!("padding is missing {name:?}")))?;
        let amount = match value {
            Value::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(v), _) => v,
                (None, Some(_)) => return Err(negative(name)),
                (None, None) => return Err(not_integer(name, value)),
            },
            Value::String(s) => parse_non_negative(name, s.trim())?,
            other => return Err(not_integer(name, other)),
        };
        u32::try_from(amount)
            .map_err(|_| EditError::parameter(format!("padding {name:?} is too large: {amount}")))
    };

    Ok(PaddingSpec {
        left: side("left")?,
        right: side("right")?,
        up: side("up")?,
        down: side("down")?,
    })
}

fn parse_non_negative(name: &str, raw: &str) -> Result<u64, EditError> {
    match raw.parse::<i64>() {
        Ok(v) if v < 0 => Err(negative(name)),
        Ok(v) => Ok(v as u64),
        // Digits past u64::MAX saturate; callers clamp to their own range.
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(raw.parse::<u64>().unwrap_or(u64::MAX))
        }
        Err(_) => Err(EditError::parameter(format!(
            "{name} must be an integer, got {raw:?}"
        ))),
    }
}

fn negative(name: &str) -> EditError {
    EditError::parameter(format!("{name} must not be negative"))
}

fn not_integer(name: &str, value: &Value) -> EditError {
    EditError::parameter(format!("{name} must be an integer, got {value}"))
}
