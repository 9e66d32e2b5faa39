//! The services layout depends on: font metrics, output names and the resource table.

pub mod font;
pub mod ids;
pub mod resource;

pub use font::{
    FaceMetrics, FontError, FontMetrics, FontMetricsProvider, InMemoryFontMetrics, NoFontMetrics,
};
pub use ids::{IdGenerator, ObjectKind, SequentialIds};
pub use resource::{InMemoryResourceTable, ResourceError, ResourceTable, Upsert};
