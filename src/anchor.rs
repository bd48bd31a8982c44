//! Position handles shared between views.
//!
//! A view that others need to locate owns an [`Anchor`] and writes its
//! window-space rect into it on every layout pass. Readers get a snapshot.

use std::cell::Cell;
use std::rc::Rc;

use floem::kurbo::{Point, Rect};
use floem::taffy::prelude::Size;

use crate::math;

/// Last laid-out window rect of a view; `None` until the first layout.
#[derive(Debug, Clone, Default)]
pub struct Anchor {
    rect: Rc<Cell<Option<Rect>>>,
}

impl Anchor {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    /// Record the layout being computed: the view's window origin and its
    /// size from this pass.
    pub(crate) fn set_layout(&self, window_origin: Point, size: Size<f32>) {
        self.set(Rect::from_origin_size(
            window_origin,
            (size.width as f64, size.height as f64),
        ));
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect.get()
    }

    /// Center of the rect, if the view has a non-empty layout.
    pub fn center(&self) -> Option<Point> {
        self.rect
            .get()
            .filter(|r| r.width() > 0.0 && r.height() > 0.0)
            .map(math::rect_center)
    }
}
