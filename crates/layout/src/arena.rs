//! The block/region/line tree of a page, stored in index-addressed vectors.
//!
//! Traversal code holds only the small `Copy` handles defined here. Opening and closing
//! items flips flags on the stored entries; nothing is ever removed, so a handle stays
//! valid for the lifetime of the page.

use crate::LayoutError;
use crate::content::{ContentId, ReusableContent};
use folio_style::{Font, PositionMode};
use folio_types::{ComponentId, Rect, Size};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) usize);

/// A vertical slice of the page holding a sequence of regions, one open at a time.
#[derive(Debug, Clone)]
pub struct Block {
    pub bounds: Rect,
    pub regions: Vec<RegionId>,
    pub current: Option<RegionId>,
    pub closed: bool,
}

/// A rectangle that content flows into line by line.
///
/// Flow regions belong to a block. Positioned regions additionally have a parent region
/// and are laid out independently of the parent's flow.
#[derive(Debug, Clone)]
pub struct Region {
    pub bounds: Rect,
    pub mode: PositionMode,
    pub block: BlockId,
    pub parent: Option<RegionId>,
    pub owner: Option<ComponentId>,
    pub lines: Vec<LineId>,
    pub open_line: Option<LineId>,
    pub positioned: Vec<RegionId>,
    /// Height consumed by closed lines, measured from the region's top.
    pub used_height: f32,
    /// When false the region's height is taken from its content on close.
    pub explicit_height: bool,
    pub closed: bool,
}

#[derive(Debug, Clone)]
pub struct Line {
    pub region: RegionId,
    pub runs: Vec<Run>,
    /// Offset of the line's top edge from the region's top.
    pub top: f32,
    pub height: f32,
    pub closed: bool,
}

/// A piece of text placed on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: Arc<str>,
    pub font: Font,
    /// Offset from the line's left edge.
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    Text(TextRun),
    /// A reference to reusable content, drawn at this point of the line.
    Content(ContentId),
    /// A relatively positioned region that takes up space in the flow.
    Region(RegionId),
}

#[derive(Debug, Default)]
pub struct LayoutArena {
    blocks: Vec<Block>,
    regions: Vec<Region>,
    lines: Vec<Line>,
    contents: Vec<ReusableContent>,
}

impl LayoutArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self, id: BlockId) -> Result<&Block, LayoutError> {
        self.blocks
            .get(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    fn block_mut(&mut self, id: BlockId) -> Result<&mut Block, LayoutError> {
        self.blocks
            .get_mut(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    pub fn region(&self, id: RegionId) -> Result<&Region, LayoutError> {
        self.regions
            .get(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    fn region_mut(&mut self, id: RegionId) -> Result<&mut Region, LayoutError> {
        self.regions
            .get_mut(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    pub fn line(&self, id: LineId) -> Result<&Line, LayoutError> {
        self.lines
            .get(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, LayoutError> {
        self.lines
            .get_mut(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    pub fn content(&self, id: ContentId) -> Result<&ReusableContent, LayoutError> {
        self.contents
            .get(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    pub fn content_mut(&mut self, id: ContentId) -> Result<&mut ReusableContent, LayoutError> {
        self.contents
            .get_mut(id.0)
            .ok_or_else(|| LayoutError::InvalidHandle(format!("{:?}", id)))
    }

    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks.iter().enumerate().map(|(i, b)| (BlockId(i), b))
    }

    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions.iter().enumerate().map(|(i, r)| (RegionId(i), r))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    pub fn contents(&self) -> impl Iterator<Item = (ContentId, &ReusableContent)> {
        self.contents
            .iter()
            .enumerate()
            .map(|(i, c)| (ContentId(i), c))
    }

    /// Creates a block covering `bounds` with one open flow region.
    pub fn new_block(&mut self, bounds: Rect) -> BlockId {
        let id = BlockId(self.blocks.len());
        self.blocks.push(Block {
            bounds,
            regions: Vec::new(),
            current: None,
            closed: false,
        });
        let region = self.push_region(Region {
            bounds,
            mode: PositionMode::Static,
            block: id,
            parent: None,
            owner: None,
            lines: Vec::new(),
            open_line: None,
            positioned: Vec::new(),
            used_height: 0.0,
            explicit_height: true,
            closed: false,
        });
        let block = &mut self.blocks[id.0];
        block.regions.push(region);
        block.current = Some(region);
        id
    }

    fn push_region(&mut self, region: Region) -> RegionId {
        let id = RegionId(self.regions.len());
        self.regions.push(region);
        id
    }

    pub fn current_region(&self, block: BlockId) -> Result<RegionId, LayoutError> {
        let block = self.block(block)?;
        match block.current {
            Some(region) if !block.closed => Ok(region),
            _ => Err(LayoutError::NoOpenBlock),
        }
    }

    /// Closes the block's current region and opens a new one below it, filling the rest
    /// of the block.
    pub fn begin_new_region(&mut self, block: BlockId) -> Result<RegionId, LayoutError> {
        let previous = self.current_region(block)?;
        self.close_region(previous)?;

        let prev = self.region(previous)?;
        let bounds = self.block(block)?.bounds;
        let top = prev.bounds.y + prev.used_height;
        let region = self.push_region(Region {
            bounds: Rect::new(bounds.x, top, bounds.width, (bounds.bottom() - top).max(0.0)),
            mode: PositionMode::Static,
            block,
            parent: None,
            owner: None,
            lines: Vec::new(),
            open_line: None,
            positioned: Vec::new(),
            used_height: 0.0,
            explicit_height: true,
            closed: false,
        });

        let block = self.block_mut(block)?;
        block.regions.push(region);
        block.current = Some(region);
        Ok(region)
    }

    /// Closes the block and its current region. Closing twice is a no-op.
    pub fn close_block(&mut self, block: BlockId) -> Result<(), LayoutError> {
        if self.block(block)?.closed {
            return Ok(());
        }
        if let Some(region) = self.block(block)?.current {
            self.close_region(region)?;
        }
        self.block_mut(block)?.closed = true;
        Ok(())
    }

    pub fn current_line(&self, region: RegionId) -> Result<Option<LineId>, LayoutError> {
        Ok(self.region(region)?.open_line)
    }

    /// Closes any open line in `region` and starts a new one below it.
    pub fn begin_new_line(&mut self, region: RegionId) -> Result<LineId, LayoutError> {
        if self.region(region)?.closed {
            return Err(LayoutError::RegionClosed(region));
        }
        self.close_current_item(region)?;

        let id = LineId(self.lines.len());
        let top = self.region(region)?.used_height;
        self.lines.push(Line {
            region,
            runs: Vec::new(),
            top,
            height: 0.0,
            closed: false,
        });
        let r = self.region_mut(region)?;
        r.lines.push(id);
        r.open_line = Some(id);
        Ok(id)
    }

    /// Closes the region's open line, if any.
    pub fn close_current_item(&mut self, region: RegionId) -> Result<(), LayoutError> {
        match self.region(region)?.open_line {
            Some(line) => self.close_line(line),
            None => Ok(()),
        }
    }

    /// Closes a line, fixing its height and advancing its region's flow. Closing twice is
    /// a no-op.
    pub fn close_line(&mut self, line: LineId) -> Result<(), LayoutError> {
        if self.line(line)?.closed {
            return Ok(());
        }
        let extent = self.line_extent(line)?;
        let l = self.line_mut(line)?;
        l.height = extent.height;
        l.closed = true;
        let (region, bottom) = (l.region, l.top + l.height);

        let r = self.region_mut(region)?;
        r.used_height = r.used_height.max(bottom);
        if r.open_line == Some(line) {
            r.open_line = None;
        }
        Ok(())
    }

    /// Appends a run to an open line.
    pub fn add_run(&mut self, line: LineId, run: Run) -> Result<(), LayoutError> {
        let l = self.line_mut(line)?;
        if l.closed {
            return Err(LayoutError::LineClosed(line));
        }
        l.runs.push(run);
        Ok(())
    }

    /// The width and height of a line's runs, as laid out so far.
    pub fn line_extent(&self, line: LineId) -> Result<Size, LayoutError> {
        let l = self.line(line)?;
        if l.closed {
            let width = l
                .runs
                .iter()
                .map(|run| self.run_size(run).map(|s| s.width))
                .sum::<Result<f32, _>>()?;
            return Ok(Size::new(width, l.height));
        }
        let mut extent = Size::zero();
        for run in &l.runs {
            let size = self.run_size(run)?;
            extent.width += size.width;
            extent.height = extent.height.max(size.height);
        }
        Ok(extent)
    }

    fn run_size(&self, run: &Run) -> Result<Size, LayoutError> {
        Ok(match run {
            Run::Text(text) => Size::new(text.width, text.height),
            Run::Content(content) => self.content(*content)?.output_size,
            Run::Region(region) => self.region(*region)?.bounds.size(),
        })
    }

    /// Opens a region positioned inside `parent`, independent of the parent's flow.
    ///
    /// Without an explicit height the region grows to fit its content when closed.
    pub fn begin_positioned_region(
        &mut self,
        parent: RegionId,
        bounds: Rect,
        mode: PositionMode,
        explicit_height: bool,
    ) -> Result<RegionId, LayoutError> {
        let p = self.region(parent)?;
        if p.closed {
            return Err(LayoutError::RegionClosed(parent));
        }
        let block = p.block;
        let id = self.push_region(Region {
            bounds,
            mode,
            block,
            parent: Some(parent),
            owner: None,
            lines: Vec::new(),
            open_line: None,
            positioned: Vec::new(),
            used_height: 0.0,
            explicit_height,
            closed: false,
        });
        self.region_mut(parent)?.positioned.push(id);
        log::trace!("Opened {:?} region {:?} in {:?} at {:?}", mode, id, parent, bounds);
        Ok(id)
    }

    pub fn set_region_owner(&mut self, region: RegionId, owner: ComponentId) -> Result<(), LayoutError> {
        self.region_mut(region)?.owner = Some(owner);
        Ok(())
    }

    /// Makes sure at least `height` of the region is consumed from the top.
    pub fn reserve_height(&mut self, region: RegionId, height: f32) -> Result<(), LayoutError> {
        let r = self.region_mut(region)?;
        if r.closed {
            return Err(LayoutError::RegionClosed(region));
        }
        r.used_height = r.used_height.max(height);
        Ok(())
    }

    /// Closes a region and its open line. Closing twice is a no-op.
    ///
    /// Fails if a positioned region nested inside it is still open.
    pub fn close_region(&mut self, region: RegionId) -> Result<(), LayoutError> {
        let r = self.region(region)?;
        if r.closed {
            return Ok(());
        }
        for nested in &r.positioned {
            if !self.region(*nested)?.closed {
                return Err(LayoutError::UnbalancedRegion(region));
            }
        }
        self.close_current_item(region)?;

        let r = self.region_mut(region)?;
        if !r.explicit_height {
            r.bounds.height = r.used_height;
        }
        r.closed = true;
        Ok(())
    }

    /// Positioned regions that are still open, in creation order.
    pub fn open_positioned_regions(&self) -> impl Iterator<Item = RegionId> {
        self.regions()
            .filter(|(_, r)| r.parent.is_some() && !r.closed)
            .map(|(id, _)| id)
    }

    pub(crate) fn push_content(&mut self, content: ReusableContent) -> ContentId {
        let id = ContentId(self.contents.len());
        self.contents.push(content);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(width: f32, height: f32) -> Run {
        Run::Text(TextRun {
            text: "x".into(),
            font: Font::default(),
            x: 0.0,
            width,
            height,
        })
    }

    fn arena_with_block() -> (LayoutArena, BlockId, RegionId) {
        let mut arena = LayoutArena::new();
        let block = arena.new_block(Rect::new(0.0, 0.0, 200.0, 400.0));
        let region = arena.current_region(block).expect("open block");
        (arena, block, region)
    }

    #[test]
    fn test_lines_stack_in_region() {
        let (mut arena, _, region) = arena_with_block();

        let first = arena.begin_new_line(region).expect("line");
        arena.add_run(first, text(50.0, 14.0)).expect("run");
        let second = arena.begin_new_line(region).expect("line");

        assert!(arena.line(first).expect("line").closed);
        assert_eq!(arena.line(second).expect("line").top, 14.0);
        assert_eq!(arena.current_line(region).expect("region"), Some(second));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut arena, block, region) = arena_with_block();
        let line = arena.begin_new_line(region).expect("line");

        arena.close_line(line).expect("first close");
        arena.close_line(line).expect("second close");
        arena.close_region(region).expect("first close");
        arena.close_region(region).expect("second close");
        arena.close_block(block).expect("first close");
        arena.close_block(block).expect("second close");

        assert_eq!(arena.region(region).expect("region").lines.len(), 1);
    }

    #[test]
    fn test_closed_items_reject_content() {
        let (mut arena, _, region) = arena_with_block();
        let line = arena.begin_new_line(region).expect("line");
        arena.close_line(line).expect("close");

        assert_eq!(arena.add_run(line, text(1.0, 1.0)), Err(LayoutError::LineClosed(line)));

        arena.close_region(region).expect("close");
        assert_eq!(arena.begin_new_line(region), Err(LayoutError::RegionClosed(region)));
    }

    #[test]
    fn test_open_nested_region_is_unbalanced() {
        let (mut arena, _, region) = arena_with_block();
        let nested = arena
            .begin_positioned_region(region, Rect::new(10.0, 10.0, 50.0, 0.0), PositionMode::Absolute, false)
            .expect("nested");

        assert_eq!(arena.close_region(region), Err(LayoutError::UnbalancedRegion(region)));

        let line = arena.begin_new_line(nested).expect("line");
        arena.add_run(line, text(20.0, 30.0)).expect("run");
        arena.close_region(nested).expect("close nested");
        assert_eq!(arena.region(nested).expect("region").bounds.height, 30.0);
        arena.close_region(region).expect("close outer");
    }

    #[test]
    fn test_begin_new_region_continues_below() {
        let (mut arena, block, first) = arena_with_block();
        let line = arena.begin_new_line(first).expect("line");
        arena.add_run(line, text(10.0, 40.0)).expect("run");

        let second = arena.begin_new_region(block).expect("region");

        assert!(arena.region(first).expect("region").closed);
        let bounds = arena.region(second).expect("region").bounds;
        assert_eq!(bounds.y, 40.0);
        assert_eq!(bounds.height, 360.0);
        assert_eq!(arena.current_region(block), Ok(second));
    }

    #[test]
    fn test_invalid_handle() {
        let arena = LayoutArena::new();
        assert!(matches!(arena.region(RegionId(3)), Err(LayoutError::InvalidHandle(_))));
    }
}
