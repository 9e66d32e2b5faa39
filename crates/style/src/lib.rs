pub mod effective;
pub mod font;
pub mod layer;
pub mod parsers;
pub mod position;
pub mod property;
pub mod stack;
pub mod text;
pub mod variables;

pub use effective::EffectiveStyle;
pub use font::{Font, FontStyle, FontWeight};
pub use layer::{StyleLayer, StyleLayerBuilder, StyleMap, StyleState};
pub use parsers::StyleParseError;
pub use position::PositionMode;
pub use property::{Priority, StyleEntry, StyleKey, StyleValue, VarRef};
pub use stack::{StyleError, StyleStack};
pub use text::{TextAlign, TextOptions};
pub use variables::VariableSet;

#[cfg(test)]
mod cascade_test;
