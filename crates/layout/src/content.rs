//! Reusable content: a self-contained coordinate space created for a viewport.
//!
//! The content is laid out once into its own region and referenced from the page flow by
//! name, the way a PDF form XObject is drawn with `Do`.

use crate::LayoutError;
use crate::arena::RegionId;
use folio_types::{ComponentId, OutputName, Rect, Size, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub struct ReusableContent {
    pub component: ComponentId,
    /// The region the content's children were laid out into.
    pub region: RegionId,
    pub viewport: Rect,
    /// The size the content occupies where it is drawn.
    pub output_size: Size,
    name: Option<OutputName>,
    matrix: Option<Transform>,
    clip: Option<Rect>,
    closed: bool,
}

impl ReusableContent {
    /// Creates open content for `viewport`. The output size comes from the component's
    /// declared width and height, each falling back to the viewport's.
    pub fn new(
        component: ComponentId,
        region: RegionId,
        viewport: Rect,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Self {
        Self {
            component,
            region,
            viewport,
            output_size: Size::new(
                width.unwrap_or(viewport.width),
                height.unwrap_or(viewport.height),
            ),
            name: None,
            matrix: None,
            clip: None,
            closed: false,
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn name(&self) -> Option<&OutputName> {
        self.name.as_ref()
    }

    pub fn matrix(&self) -> Option<Transform> {
        self.matrix
    }

    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    pub fn assign_name(&mut self, name: OutputName) {
        self.name = Some(name);
    }

    pub fn set_matrix(&mut self, matrix: Transform) {
        self.matrix = Some(matrix);
    }

    pub fn set_clip(&mut self, clip: Rect) {
        self.clip = Some(clip);
    }

    /// Takes a handle for the serializer. The content must be closed, named and have a
    /// transform.
    pub fn handle(&self, page: usize) -> Result<ContentHandle, LayoutError> {
        let not_ready = || LayoutError::ContentNotFinalized(self.component.to_string());
        if !self.closed {
            return Err(not_ready());
        }
        let name = self.name.clone().ok_or_else(not_ready)?;
        let matrix = self.matrix.ok_or_else(not_ready)?;
        Ok(ContentHandle {
            component: self.component.clone(),
            name,
            size: self.output_size,
            matrix,
            clip: self
                .clip
                .unwrap_or_else(|| Rect::from_origin_size(Default::default(), self.output_size)),
            page,
            region: self.region,
        })
    }
}

/// Everything the serializer needs to emit a piece of reusable content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentHandle {
    pub component: ComponentId,
    pub name: OutputName,
    pub size: Size,
    pub matrix: Transform,
    pub clip: Rect,
    pub page: usize,
    pub region: RegionId,
}
