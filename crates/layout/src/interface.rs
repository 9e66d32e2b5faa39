use crate::LayoutError;
use crate::arena::{LineId, RegionId};
use crate::component::Component;
use crate::config::LayoutConfig;
use crate::content::ContentHandle;
use crate::nodes;
use crate::page::Page;
use crate::position::PositionOptions;
use folio_style::{EffectiveStyle, Font, StyleStack};
use folio_traits::{FontMetricsProvider, IdGenerator, ResourceTable};
use std::fmt::Debug;

/// Read-only services shared across the layout pass.
#[derive(Clone, Copy)]
pub struct LayoutEnvironment<'a> {
    pub fonts: &'a dyn FontMetricsProvider,
    pub ids: &'a dyn IdGenerator,
    pub config: &'a LayoutConfig,
}

impl LayoutEnvironment<'_> {
    /// The distance from the top of a line box to the baseline for `font`.
    pub fn ascent(&self, font: &Font) -> f32 {
        match self.fonts.metrics(font) {
            Some(metrics) => metrics.ascent,
            None => font.size * self.config.baseline_ratio,
        }
    }

    pub fn average_char_width(&self, font: &Font) -> f32 {
        self.fonts
            .metrics(font)
            .and_then(|m| m.average_char_width)
            .unwrap_or(font.size * self.config.average_char_width)
    }
}

/// The mutable state of one page's layout pass.
pub struct LayoutContext<'a> {
    pub env: LayoutEnvironment<'a>,
    pub styles: StyleStack,
    pub page: &'a mut Page,
    pub resources: &'a mut dyn ResourceTable<ContentHandle>,
    /// Positioned regions entered by the components currently being laid out.
    regions: Vec<RegionId>,
}

impl<'a> LayoutContext<'a> {
    pub fn new(
        env: LayoutEnvironment<'a>,
        styles: StyleStack,
        page: &'a mut Page,
        resources: &'a mut dyn ResourceTable<ContentHandle>,
    ) -> Self {
        Self {
            env,
            styles,
            page,
            resources,
            regions: Vec::new(),
        }
    }

    /// The region new content goes into: the innermost positioned region entered, or the
    /// current flow region of the page's open block.
    pub fn current_region(&self) -> Result<RegionId, LayoutError> {
        match self.regions.last() {
            Some(region) => Ok(*region),
            None => self.flow_region(),
        }
    }

    /// The current flow region of the page's open block.
    pub fn flow_region(&self) -> Result<RegionId, LayoutError> {
        let block = self.page.last_open_block()?;
        self.page.arena.current_region(block)
    }

    pub fn enter_region(&mut self, region: RegionId) {
        self.regions.push(region);
    }

    /// Leaves `region`, which must be the innermost region entered.
    pub fn leave_region(&mut self, region: RegionId) -> Result<(), LayoutError> {
        match self.regions.pop() {
            Some(top) if top == region => Ok(()),
            _ => Err(LayoutError::UnbalancedRegion(region)),
        }
    }

    pub fn region_depth(&self) -> usize {
        self.regions.len()
    }

    /// The region's open line, opening one if it has none.
    pub fn ensure_line(&mut self, region: RegionId) -> Result<LineId, LayoutError> {
        match self.page.arena.current_line(region)? {
            Some(line) => Ok(line),
            None => self.page.arena.begin_new_line(region),
        }
    }

    /// Lays out one component: pushes its style layer, resolves its style and position,
    /// hands it to its parent node (or its own node at the top level), then pops.
    pub fn layout_component(
        &mut self,
        component: &Component,
        parent: Option<&dyn LayoutNode>,
    ) -> Result<(), LayoutError> {
        self.styles.push(component.style.clone());
        let style = self.styles.build();
        let position = PositionOptions::from_style(&style);
        log::trace!(
            "Laying out {} '{}' ({:?}) at depth {}",
            component.kind.as_str(),
            component.id,
            position.mode,
            self.styles.len()
        );

        let result = match parent {
            Some(parent) => parent.layout_child(self, component, style, position),
            None => nodes::node_for(component.kind).layout_component(
                self,
                component,
                &style,
                &position,
            ),
        };
        self.styles.pop()?;
        result
    }

    pub fn layout_children(
        &mut self,
        component: &Component,
        parent: &dyn LayoutNode,
    ) -> Result<(), LayoutError> {
        for child in &component.children {
            self.layout_component(child, Some(parent))?;
        }
        Ok(())
    }
}

/// The layout behaviour of one kind of component.
pub trait LayoutNode: Debug + Sync {
    /// Places `component` using its resolved style and position, recursing into its
    /// children through [`LayoutContext::layout_children`].
    fn layout_component(
        &self,
        ctx: &mut LayoutContext<'_>,
        component: &Component,
        style: &EffectiveStyle,
        position: &PositionOptions,
    ) -> Result<(), LayoutError>;

    /// Called for each child of a component this node lays out. Nodes override this to
    /// adjust a child's style or position before it is placed.
    fn layout_child(
        &self,
        ctx: &mut LayoutContext<'_>,
        child: &Component,
        style: EffectiveStyle,
        position: PositionOptions,
    ) -> Result<(), LayoutError> {
        nodes::node_for(child.kind).layout_component(ctx, child, &style, &position)
    }
}
