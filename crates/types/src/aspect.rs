//! Aspect-ratio alignment policies for viewport scaling.

use crate::geometry::{Rect, Size, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectAlign {
    None,
    XMinYMin,
    XMidYMin,
    XMaxYMin,
    XMinYMid,
    #[default]
    XMidYMid,
    XMaxYMid,
    XMinYMax,
    XMidYMax,
    XMaxYMax,
}

impl AspectAlign {
    /// Fraction of the spare space placed before the content on each axis.
    pub fn factors(self) -> (f32, f32) {
        match self {
            AspectAlign::None | AspectAlign::XMinYMin => (0.0, 0.0),
            AspectAlign::XMidYMin => (0.5, 0.0),
            AspectAlign::XMaxYMin => (1.0, 0.0),
            AspectAlign::XMinYMid => (0.0, 0.5),
            AspectAlign::XMidYMid => (0.5, 0.5),
            AspectAlign::XMaxYMid => (1.0, 0.5),
            AspectAlign::XMinYMax => (0.0, 1.0),
            AspectAlign::XMidYMax => (0.5, 1.0),
            AspectAlign::XMaxYMax => (1.0, 1.0),
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        let align = match s {
            "none" => AspectAlign::None,
            "xMinYMin" => AspectAlign::XMinYMin,
            "xMidYMin" => AspectAlign::XMidYMin,
            "xMaxYMin" => AspectAlign::XMaxYMin,
            "xMinYMid" => AspectAlign::XMinYMid,
            "xMidYMid" => AspectAlign::XMidYMid,
            "xMaxYMid" => AspectAlign::XMaxYMid,
            "xMinYMax" => AspectAlign::XMinYMax,
            "xMidYMax" => AspectAlign::XMidYMax,
            "xMaxYMax" => AspectAlign::XMaxYMax,
            _ => return None,
        };
        Some(align)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectMeet {
    #[default]
    Meet,
    Slice,
}

/// How a viewport maps into the box that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AspectRatio {
    pub align: AspectAlign,
    pub meet: AspectMeet,
}

/// The two supported scaling policies, plus the identity fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    Uniform(AspectAlign),
    NonUniform,
    Identity,
}

impl AspectRatio {
    pub fn new(align: AspectAlign, meet: AspectMeet) -> Self {
        Self { align, meet }
    }

    /// Parses `"<align> [meet|slice]"`, e.g. `"xMidYMid meet"` or `"none"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let align = AspectAlign::from_keyword(parts.next()?)?;
        let meet = match parts.next() {
            None | Some("meet") => AspectMeet::Meet,
            Some("slice") => AspectMeet::Slice,
            Some(_) => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { align, meet })
    }

    pub fn scaling(&self) -> Scaling {
        if self.align == AspectAlign::None {
            Scaling::NonUniform
        } else if self.meet == AspectMeet::Meet {
            Scaling::Uniform(self.align)
        } else {
            Scaling::Identity
        }
    }
}

impl Scaling {
    pub fn transform(self, available: Size, view: Rect) -> Transform {
        match self {
            Scaling::Uniform(align) => Transform::uniform_scaling(available, view, align),
            Scaling::NonUniform => Transform::non_uniform_scaling(available, view),
            Scaling::Identity => Transform::identity(),
        }
    }
}
