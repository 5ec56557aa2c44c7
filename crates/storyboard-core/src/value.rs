//! Value: runtime instances of the blendable kinds understood by storyboards.
//! All numeric components use f32.

use serde::{Deserialize, Serialize};

use crate::interp::functions::{lerp_array, lerp_f32, nlerp_quat};
use crate::interp::Blend;

/// Lightweight kind enum for pattern-matching and quick dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Quat,
    ColorRgba,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// 2D vector
    Vec2([f32; 2]),

    /// 3D vector
    Vec3([f32; 3]),

    /// 4D vector
    Vec4([f32; 4]),

    /// Quaternion (x, y, z, w)
    Quat([f32; 4]),

    /// RGBA color (linear by convention)
    ColorRgba([f32; 4]),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Quat(_) => ValueKind::Quat,
            Value::ColorRgba(_) => ValueKind::ColorRgba,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    pub fn vec2(x: f32, y: f32) -> Self {
        Value::Vec2([x, y])
    }

    pub fn vec3(x: f32, y: f32, z: f32) -> Self {
        Value::Vec3([x, y, z])
    }

    pub fn quat(x: f32, y: f32, z: f32, w: f32) -> Self {
        Value::Quat([x, y, z, w])
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Value::ColorRgba([r, g, b, a])
    }
}

impl Blend for Value {
    /// Linear blend across kinds (quats use NLERP). Mismatched kinds prefer
    /// the left operand (fail-soft).
    fn blend(a: &Self, b: &Self, t: f32) -> Self {
        match (a, b) {
            (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, t)),
            (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_array(va, vb, t)),
            (Value::Vec3(va), Value::Vec3(vb)) => Value::Vec3(lerp_array(va, vb, t)),
            (Value::Vec4(va), Value::Vec4(vb)) => Value::Vec4(lerp_array(va, vb, t)),
            (Value::Quat(qa), Value::Quat(qb)) => Value::Quat(nlerp_quat(*qa, *qb, t)),
            (Value::ColorRgba(ca), Value::ColorRgba(cb)) => {
                Value::ColorRgba(lerp_array(ca, cb, t))
            }
            _ => a.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_dispatch() {
        assert_eq!(Value::f(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::vec3(0.0, 0.0, 0.0).kind(), ValueKind::Vec3);
        assert_eq!(Value::quat(0.0, 0.0, 0.0, 1.0).kind(), ValueKind::Quat);
    }

    #[test]
    fn mismatched_kinds_prefer_left() {
        let a = Value::f(2.0);
        let b = Value::vec2(1.0, 1.0);
        assert_eq!(Value::blend(&a, &b, 0.5), a);
    }

    #[test]
    fn serde_roundtrip() {
        let v = Value::rgba(0.25, 0.5, 0.75, 1.0);
        let s = serde_json::to_string(&v).unwrap();
        let v2: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v, v2);
    }
}
