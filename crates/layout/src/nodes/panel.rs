use crate::LayoutError;
use crate::component::Component;
use crate::interface::{LayoutContext, LayoutNode};
use crate::nodes::open_positioned_region;
use crate::position::PositionOptions;
use folio_style::EffectiveStyle;

/// A plain box. In the flow it starts and ends on its own line; out of the flow it gets
/// a positioned region of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelNode;

impl LayoutNode for PanelNode {
    fn layout_component(
        &self,
        ctx: &mut LayoutContext<'_>,
        component: &Component,
        _style: &EffectiveStyle,
        position: &PositionOptions,
    ) -> Result<(), LayoutError> {
        layout_box(self, ctx, component, position)
    }
}

/// Lays out `component`'s children as a box, with `node` receiving each child.
pub(crate) fn layout_box(
    node: &dyn LayoutNode,
    ctx: &mut LayoutContext<'_>,
    component: &Component,
    position: &PositionOptions,
) -> Result<(), LayoutError> {
    if position.mode.is_out_of_flow() {
        let region = open_positioned_region(ctx, &component.id, position)?;
        ctx.enter_region(region);
        ctx.layout_children(component, node)?;
        ctx.leave_region(region)?;
        return ctx.page.arena.close_region(region);
    }

    let region = ctx.current_region()?;
    ctx.page.arena.close_current_item(region)?;
    let top = ctx.page.arena.region(region)?.used_height;

    ctx.layout_children(component, node)?;

    ctx.page.arena.close_current_item(region)?;
    if let Some(height) = position.height {
        ctx.page.arena.reserve_height(region, top + height)?;
    }
    Ok(())
}
