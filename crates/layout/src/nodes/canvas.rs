//! Canvases: panels that can establish their own coordinate space.
//!
//! A canvas with a viewport rectangle lays its children out into a separate region whose
//! coordinates are those of the viewport. The result becomes reusable content, drawn into
//! the page flow through a transform that maps the viewport onto the canvas's box.

use crate::LayoutError;
use crate::arena::Run;
use crate::component::Component;
use crate::content::ReusableContent;
use crate::interface::{LayoutContext, LayoutNode};
use crate::nodes::panel::layout_box;
use crate::nodes::node_for;
use crate::position::PositionOptions;
use folio_style::{EffectiveStyle, PositionMode, StyleKey, StyleValue};
use folio_traits::ObjectKind;
use folio_types::Rect;

/// Resource type under which canvas content is registered.
pub const XOBJECT_RESOURCE: &str = "XObject";

#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasNode;

impl LayoutNode for CanvasNode {
    fn layout_component(
        &self,
        ctx: &mut LayoutContext<'_>,
        component: &Component,
        style: &EffectiveStyle,
        position: &PositionOptions,
    ) -> Result<(), LayoutError> {
        let Some(viewport) = position.viewport else {
            return layout_box(self, ctx, component, position);
        };

        let style = style.with_values([
            (StyleKey::X, StyleValue::Length(viewport.x)),
            (StyleKey::Y, StyleValue::Length(viewport.y)),
            (StyleKey::Width, StyleValue::Length(viewport.width)),
            (StyleKey::Height, StyleValue::Length(viewport.height)),
        ]);
        let inner = position.with_box(viewport);

        let container = ctx.current_region()?;
        let line = ctx.ensure_line(container)?;
        let arena = &mut ctx.page.arena;
        let region = arena.begin_positioned_region(
            container,
            Rect::new(
                inner.x.unwrap_or(0.0),
                inner.y.unwrap_or(0.0),
                inner.width.unwrap_or(0.0),
                inner.height.unwrap_or(0.0),
            ),
            PositionMode::Relative,
            true,
        )?;
        arena.set_region_owner(region, component.id.clone())?;
        let content = arena.push_content(ReusableContent::new(
            component.id.clone(),
            region,
            viewport,
            position.width,
            position.height,
        ));
        arena.add_run(line, Run::Content(content))?;

        ctx.enter_region(region);
        ctx.layout_children(component, self)?;
        ctx.leave_region(region)?;
        ctx.page.arena.close_region(region)?;

        let name = ctx.env.ids.next_id(ObjectKind::CanvasXObject);
        let arena = &mut ctx.page.arena;
        let entry = arena.content_mut(content)?;
        entry.close();
        let output_size = entry.output_size;
        arena.close_line(line)?;

        let entry = arena.content_mut(content)?;
        entry.assign_name(name);
        entry.set_matrix(style.scaling().transform(output_size, viewport));
        entry.set_clip(Rect::new(
            position.x.unwrap_or(0.0),
            position.y.unwrap_or(0.0),
            output_size.width,
            output_size.height,
        ));
        let handle = entry.handle(ctx.page.index)?;

        log::debug!(
            "Canvas '{}' -> {} ({}x{}, matrix {:?})",
            component.id,
            handle.name,
            output_size.width,
            output_size.height,
            handle.matrix
        );

        ctx.page.register(component.id.clone(), content);
        ctx.resources
            .ensure_resource(XOBJECT_RESOURCE, component.id.as_str(), handle)?;
        Ok(())
    }

    /// Children of a canvas never stack statically: anything not explicitly absolute is
    /// placed relative to the canvas. Relative children that name their baseline rather
    /// than their top edge are moved up by the font's ascent.
    fn layout_child(
        &self,
        ctx: &mut LayoutContext<'_>,
        child: &Component,
        mut style: EffectiveStyle,
        mut position: PositionOptions,
    ) -> Result<(), LayoutError> {
        if position.mode != PositionMode::Absolute {
            position.mode = PositionMode::Relative;
            style = style.with_value(StyleKey::PositionMode, PositionMode::Relative);
        }

        if position.mode == PositionMode::Relative && !style.text_options().draw_from_top {
            let font = style.font();
            let y = position.y.unwrap_or(0.0) - ctx.env.ascent(&font);
            position.y = Some(y);
            style = style.with_value(StyleKey::Y, StyleValue::Length(y));
        }

        node_for(child.kind).layout_component(ctx, child, &style, &position)
    }
}
