use folio_style::StyleError;
use folio_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("Cannot add to region {0:?}: it has already been closed.")]
    RegionClosed(RegionId),
    #[error("Cannot add to line {0:?}: it has already been closed.")]
    LineClosed(LineId),
    #[error("Region {0:?} was closed while a nested region was still open.")]
    UnbalancedRegion(RegionId),
    #[error("The page has no open block to lay content into.")]
    NoOpenBlock,
    #[error("Handle {0} does not refer to an item in this layout.")]
    InvalidHandle(String),
    #[error("Reusable content for '{0}' was used before it was closed, named and transformed.")]
    ContentNotFinalized(String),
    #[error("Style stack depth is {found} after laying out a page; expected {expected}.")]
    StyleDepth { expected: usize, found: usize },
}

pub mod arena;
pub mod component;
pub mod config;
pub mod content;
pub mod engine;
#[cfg(feature = "system-fonts")]
pub mod fonts;
pub mod interface;
pub mod node_kind;
pub mod nodes;
pub mod page;
pub mod position;

pub use self::arena::{BlockId, LayoutArena, LineId, RegionId, Run, TextRun};
pub use self::component::{Component, Document};
pub use self::config::LayoutConfig;
pub use self::content::{ContentHandle, ContentId, ReusableContent};
pub use self::engine::LayoutEngine;
#[cfg(feature = "system-fonts")]
pub use self::fonts::FontLibrary;
pub use self::interface::{LayoutContext, LayoutEnvironment, LayoutNode};
pub use self::node_kind::NodeKind;
pub use self::page::{DocumentLayout, Page};
pub use self::position::PositionOptions;

#[cfg(test)]
mod test_utils;
