//! The page being laid out, and the finished layout of a document.

use crate::LayoutError;
use crate::arena::{BlockId, LayoutArena};
use crate::content::{ContentHandle, ContentId};
use folio_traits::InMemoryResourceTable;
use folio_types::{ComponentId, Rect, Size};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct Page {
    pub index: usize,
    pub size: Size,
    pub arena: LayoutArena,
    pub blocks: Vec<BlockId>,
    /// Reusable content registered on this page, keyed by owning component.
    pub resources: BTreeMap<ComponentId, ContentId>,
}

impl Page {
    /// Creates a page with a single block covering the whole page.
    pub fn new(index: usize, size: Size) -> Self {
        let mut arena = LayoutArena::new();
        let root = arena.new_block(Rect::from_origin_size(Default::default(), size));
        Self {
            index,
            size,
            arena,
            blocks: vec![root],
            resources: BTreeMap::new(),
        }
    }

    pub fn last_open_block(&self) -> Result<BlockId, LayoutError> {
        self.blocks
            .iter()
            .rev()
            .copied()
            .find(|id| self.arena.block(*id).is_ok_and(|b| !b.closed))
            .ok_or(LayoutError::NoOpenBlock)
    }

    /// Closes the last open block and starts a new one covering `bounds`.
    pub fn begin_block(&mut self, bounds: Rect) -> Result<BlockId, LayoutError> {
        if let Ok(open) = self.last_open_block() {
            self.arena.close_block(open)?;
        }
        let id = self.arena.new_block(bounds);
        self.blocks.push(id);
        Ok(id)
    }

    pub fn register(&mut self, component: ComponentId, content: ContentId) {
        self.resources.insert(component, content);
    }

    /// Handles for every piece of reusable content registered on this page.
    pub fn content_handles(&self) -> Result<Vec<ContentHandle>, LayoutError> {
        self.resources
            .values()
            .map(|id| self.arena.content(*id)?.handle(self.index))
            .collect()
    }

    /// Fails if a positioned region is still open. The blocks' flow regions may stay open
    /// between top-level components.
    pub fn check_balanced(&self) -> Result<(), LayoutError> {
        match self.arena.open_positioned_regions().next() {
            Some(region) => Err(LayoutError::UnbalancedRegion(region)),
            None => Ok(()),
        }
    }

    /// Closes every block. Afterwards nothing on the page is open.
    pub fn close(&mut self) -> Result<(), LayoutError> {
        self.check_balanced()?;
        for block in self.blocks.clone() {
            self.arena.close_block(block)?;
        }
        log::debug!(
            "Closed page {} with {} blocks and {} reusable contents",
            self.index,
            self.blocks.len(),
            self.resources.len()
        );
        Ok(())
    }
}

/// The result of laying out a whole document.
#[derive(Debug, Default)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
    /// Document-wide resources, one entry per `(type, key)`.
    pub resources: InMemoryResourceTable<ContentHandle>,
}
