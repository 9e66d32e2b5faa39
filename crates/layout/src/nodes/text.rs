use crate::LayoutError;
use crate::arena::{LineId, RegionId, Run, TextRun};
use crate::component::Component;
use crate::interface::{LayoutContext, LayoutNode};
use crate::nodes::open_positioned_region;
use crate::position::PositionOptions;
use folio_style::{EffectiveStyle, Font};
use std::sync::Arc;

/// A run of text. In the flow it continues the current line, wrapping at word boundaries
/// when the region is too narrow.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNode;

impl LayoutNode for TextNode {
    fn layout_component(
        &self,
        ctx: &mut LayoutContext<'_>,
        component: &Component,
        style: &EffectiveStyle,
        position: &PositionOptions,
    ) -> Result<(), LayoutError> {
        let text = component.text.as_deref().unwrap_or("");

        if !position.mode.is_out_of_flow() {
            let region = ctx.current_region()?;
            place_text(ctx, region, text, style)?;
            return ctx.layout_children(component, self);
        }

        let region = open_positioned_region(ctx, &component.id, position)?;
        ctx.enter_region(region);
        place_text(ctx, region, text, style)?;
        ctx.layout_children(component, self)?;
        ctx.leave_region(region)?;
        ctx.page.arena.close_region(region)
    }
}

fn place_text(
    ctx: &mut LayoutContext<'_>,
    region: RegionId,
    text: &str,
    style: &EffectiveStyle,
) -> Result<(), LayoutError> {
    let font = style.font();
    let options = style.text_options();
    let char_width = ctx.env.average_char_width(&font);
    let line_height = options
        .line_height
        .unwrap_or(font.size * ctx.env.config.line_height_ratio);
    // Zero width means the region is sized by its content.
    let max_width = ctx.page.arena.region(region)?.bounds.width;

    let mut line = ctx.ensure_line(region)?;
    let mut x = ctx.page.arena.line_extent(line)?.width;
    let mut start = x;
    let mut segment = String::new();

    for word in text.split_whitespace() {
        let word_width = word.chars().count() as f32 * char_width;
        let needed = if segment.is_empty() {
            word_width
        } else {
            word_width + char_width
        };

        if max_width > 0.0 && x > 0.0 && x + needed > max_width {
            flush(ctx, line, &mut segment, &font, start, x - start, line_height)?;
            line = ctx.page.arena.begin_new_line(region)?;
            start = 0.0;
            x = 0.0;
            segment.push_str(word);
            x += word_width;
            continue;
        }

        if !segment.is_empty() {
            segment.push(' ');
        }
        segment.push_str(word);
        x += needed;
    }

    flush(ctx, line, &mut segment, &font, start, x - start, line_height)
}

#[allow(clippy::too_many_arguments)]
fn flush(
    ctx: &mut LayoutContext<'_>,
    line: LineId,
    segment: &mut String,
    font: &Font,
    x: f32,
    width: f32,
    height: f32,
) -> Result<(), LayoutError> {
    if segment.is_empty() {
        return Ok(());
    }
    let text: Arc<str> = std::mem::take(segment).into();
    ctx.page.arena.add_run(
        line,
        Run::Text(TextRun {
            text,
            font: font.clone(),
            x,
            width,
            height,
        }),
    )
}
