//! Static parameter schema of the transition filters, for hosts that generate UI from it.

use crate::foundation::error::{PushfxError, PushfxResult};
use crate::transitions::kind::TransitionKind;
use crate::transitions::spread;

/// Category every filter is listed under.
pub const CATEGORY_TRANSITION: &str = "transition";

/// Value type of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamClass {
    /// A number, usually normalized.
    Scalar,
    /// An on/off flag.
    Boolean,
    /// A point in extent coordinates.
    Position,
    /// A rectangle in extent coordinates.
    Rectangle,
    /// An image input.
    Image,
}

/// Default or identity value of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar value.
    Scalar(f64),
    /// Flag value.
    Boolean(bool),
    /// Point value.
    Position {
        /// Horizontal coordinate.
        x: f64,
        /// Vertical coordinate.
        y: f64,
    },
    /// Rectangle value.
    Rectangle {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
}

/// Description of one filter parameter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParamDescriptor {
    /// Parameter name.
    pub key: &'static str,
    /// Value type.
    pub class: ParamClass,
    /// Value used when the caller sets nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
    /// Value for which the filter has no visible effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ParamValue>,
    /// Hard lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Hard upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Suggested slider lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_min: Option<f64>,
    /// Suggested slider upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_max: Option<f64>,
}

impl ParamDescriptor {
    fn bare(key: &'static str, class: ParamClass) -> Self {
        Self {
            key,
            class,
            default: None,
            identity: None,
            min: None,
            max: None,
            slider_min: None,
            slider_max: None,
        }
    }
}

/// Self-description of a filter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FilterAttributes {
    /// Stable filter name.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Categories the filter belongs to.
    pub categories: Vec<&'static str>,
    /// Parameters in declaration order.
    pub params: Vec<ParamDescriptor>,
}

impl FilterAttributes {
    /// Look up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.key == key)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> PushfxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PushfxError::serde(e.to_string()))
    }
}

pub(crate) fn attributes_for(kind: TransitionKind) -> FilterAttributes {
    let zero_rect = ParamValue::Rectangle {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    let mut params = vec![
        ParamDescriptor {
            default: Some(ParamValue::Scalar(0.0)),
            identity: Some(ParamValue::Scalar(0.0)),
            min: Some(0.0),
            max: Some(1.0),
            slider_min: Some(0.0),
            slider_max: Some(1.0),
            ..ParamDescriptor::bare("time", ParamClass::Scalar)
        },
        ParamDescriptor {
            default: Some(zero_rect),
            identity: Some(zero_rect),
            ..ParamDescriptor::bare("extent", ParamClass::Rectangle)
        },
    ];
    if kind == TransitionKind::Spread {
        params.push(ParamDescriptor {
            default: Some(ParamValue::Position {
                x: spread::DEFAULT_CENTER.x,
                y: spread::DEFAULT_CENTER.y,
            }),
            identity: Some(ParamValue::Position { x: 0.0, y: 0.0 }),
            ..ParamDescriptor::bare("center", ParamClass::Position)
        });
    }
    params.extend([
        ParamDescriptor::bare("source", ParamClass::Image),
        ParamDescriptor::bare("destination", ParamClass::Image),
        ParamDescriptor {
            default: Some(ParamValue::Boolean(false)),
            ..ParamDescriptor::bare("is_reverse_transition", ParamClass::Boolean)
        },
    ]);

    FilterAttributes {
        name: kind.name(),
        display_name: kind.display_name(),
        categories: vec![CATEGORY_TRANSITION],
        params,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/schema.rs"]
mod tests;
