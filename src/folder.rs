//! Folder icon filled with the committed color.
//!
//! The body and its darker tab are drawn from the outlines in
//! [`constants`], scaled from their 256×192 design box to the laid-out
//! size. Color changes blend over the configured transition.

use std::time::{Duration, Instant};

use floem::kurbo::{BezPath, Point, Rect};
use floem::peniko::Color;
use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::anchor::Anchor;
use crate::color::SolidColor;
use crate::constants;
use crate::motion::ColorTransition;
use crate::ticker::FrameTicker;

struct FolderColor(SolidColor);

pub(crate) struct Folder {
    id: ViewId,
    anchor: Anchor,
    transition: ColorTransition,
    started: Instant,
    ticker: FrameTicker,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates the folder icon.
///
/// - `color_fn`: returns the committed color; tracked reactively.
/// - `anchor`: receives the folder's window rect on every layout.
pub(crate) fn folder(
    color_fn: impl Fn() -> SolidColor + 'static,
    anchor: Anchor,
    transition: Duration,
) -> Folder {
    let id = ViewId::new();
    let initial = color_fn();

    create_effect(move |_| {
        let c = color_fn();
        id.update_state(FolderColor(c));
    });

    Folder {
        id,
        anchor,
        transition: ColorTransition::settled(initial, transition),
        started: Instant::now(),
        ticker: FrameTicker::default(),
        size: Default::default(),
    }
    .style(|s| {
        s.width(constants::FOLDER_WIDTH)
            .height(constants::FOLDER_HEIGHT)
    })
}

/// Closed path through `points`, mapped from the design box to `w`×`h`.
fn outline(points: &[(f64, f64)], w: f64, h: f64) -> BezPath {
    let sx = w / constants::FOLDER_WIDTH as f64;
    let sy = h / constants::FOLDER_HEIGHT as f64;
    let mut path = BezPath::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let pt = Point::new(x * sx, y * sy);
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

impl View for Folder {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<FolderColor>() {
            let FolderColor(target) = *update;
            if target == self.transition.target() {
                return;
            }
            self.transition = self.transition.retarget(self.started.elapsed(), target);
            self.started = Instant::now();
            self.ticker.wake(self.id);
            self.id.request_paint();
        }
    }

    fn compute_layout(&mut self, cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        self.anchor.set_layout(cx.window_origin(), self.size);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let elapsed = self.started.elapsed();
        let fill = self.transition.sample(elapsed);
        self.ticker.keep_alive(!self.transition.is_finished(elapsed));

        let body = outline(&constants::FOLDER_OUTLINE, w, h);
        cx.fill(&body, fill.to_peniko(), 0.0);

        let tab = outline(&constants::FOLDER_TAB, w, h);
        cx.fill(&tab, Color::rgba(0.0, 0.0, 0.0, constants::TAB_SHADE), 0.0);
    }
}
