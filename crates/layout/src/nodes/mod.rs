pub mod canvas;
pub mod panel;
pub mod text;

pub use self::canvas::CanvasNode;
pub use self::panel::PanelNode;
pub use self::text::TextNode;

use crate::LayoutError;
use crate::arena::{RegionId, Run};
use crate::interface::{LayoutContext, LayoutNode};
use crate::node_kind::NodeKind;
use crate::position::PositionOptions;
use folio_style::PositionMode;
use folio_types::{ComponentId, Rect};

static PANEL: PanelNode = PanelNode;
static CANVAS: CanvasNode = CanvasNode;
static TEXT: TextNode = TextNode;

/// Selects the layout node for a kind of component.
pub fn node_for(kind: NodeKind) -> &'static dyn LayoutNode {
    match kind {
        NodeKind::Page | NodeKind::Panel => &PANEL,
        NodeKind::Canvas => &CANVAS,
        NodeKind::Text => &TEXT,
    }
}

/// Opens a region for an out-of-flow component.
///
/// Relative regions sit where the next run of the current line would go and take up
/// space on that line. Absolute regions are offset from the current region, fixed ones
/// from the page.
pub(crate) fn open_positioned_region(
    ctx: &mut LayoutContext<'_>,
    owner: &ComponentId,
    position: &PositionOptions,
) -> Result<RegionId, LayoutError> {
    let x = position.x.unwrap_or(0.0);
    let y = position.y.unwrap_or(0.0);

    let (parent, origin_x, origin_y, available, anchor) = match position.mode {
        PositionMode::Static | PositionMode::Relative => {
            let parent = ctx.current_region()?;
            let line = ctx.ensure_line(parent)?;
            let bounds = ctx.page.arena.region(parent)?.bounds;
            let used = ctx.page.arena.line_extent(line)?.width;
            let top = ctx.page.arena.line(line)?.top;
            (
                parent,
                bounds.x + used + x,
                bounds.y + top + y,
                bounds.width - used,
                Some(line),
            )
        }
        PositionMode::Absolute => {
            let parent = ctx.current_region()?;
            let bounds = ctx.page.arena.region(parent)?.bounds;
            (parent, bounds.x + x, bounds.y + y, bounds.width - x, None)
        }
        PositionMode::Fixed => {
            let parent = ctx.flow_region()?;
            (parent, x, y, ctx.page.size.width - x, None)
        }
    };

    let bounds = Rect::new(
        origin_x,
        origin_y,
        position.width.unwrap_or(available.max(0.0)),
        position.height.unwrap_or(0.0),
    );
    let arena = &mut ctx.page.arena;
    let region =
        arena.begin_positioned_region(parent, bounds, position.mode, position.height.is_some())?;
    arena.set_region_owner(region, owner.clone())?;
    if let Some(line) = anchor {
        arena.add_run(line, Run::Region(region))?;
    }
    Ok(region)
}
