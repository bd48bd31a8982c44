//! Round swatch button.
//!
//! Paints a filled circle that eases larger on hover and smaller while
//! pressed, and keeps its [`Anchor`] current so the flight can start from it.

use std::time::Instant;

use floem::kurbo::{Circle, Point, Rect};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::anchor::Anchor;
use crate::constants;
use crate::motion::Tween;
use crate::palette::Swatch;
use crate::ticker::FrameTicker;

pub(crate) struct SwatchButton {
    id: ViewId,
    swatch: Swatch,
    anchor: Anchor,
    hovered: bool,
    pressed: bool,
    scale: Tween,
    scale_started: Instant,
    ticker: FrameTicker,
    size: floem::taffy::prelude::Size<f32>,
    on_select: Box<dyn Fn(&Swatch, &Anchor)>,
}

/// Creates a swatch button; `on_select` fires on click with the swatch and
/// its position handle.
pub(crate) fn swatch_button(
    swatch: Swatch,
    anchor: Anchor,
    on_select: impl Fn(&Swatch, &Anchor) + 'static,
) -> SwatchButton {
    SwatchButton {
        id: ViewId::new(),
        swatch,
        anchor,
        hovered: false,
        pressed: false,
        scale: Tween::settled(1.0, constants::SWATCH_SCALE_TRANSITION),
        scale_started: Instant::now(),
        ticker: FrameTicker::default(),
        size: Default::default(),
        on_select: Box::new(on_select),
    }
    .style(|s| {
        s.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

/// Resting scale for the pointer state; press wins over hover.
fn target_scale(hovered: bool, pressed: bool) -> f64 {
    if pressed {
        constants::SWATCH_PRESS_SCALE
    } else if hovered {
        constants::SWATCH_HOVER_SCALE
    } else {
        1.0
    }
}

impl SwatchButton {
    /// Ease toward the scale for the current pointer state.
    fn rescale(&mut self) {
        let to = target_scale(self.hovered, self.pressed);
        if to == self.scale.target() {
            return;
        }
        let now = Instant::now();
        self.scale = self
            .scale
            .retarget(now.duration_since(self.scale_started), to);
        self.scale_started = now;
        self.ticker.wake(self.id);
        self.id.request_paint();
    }

    fn contains(&self, pos: Point) -> bool {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        Rect::new(0.0, 0.0, w, h).contains(pos)
    }
}

impl View for SwatchButton {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(_) => {
                cx.update_active(self.id());
                self.pressed = true;
                self.rescale();
                EventPropagation::Stop
            }
            Event::PointerUp(e) => {
                let clicked = self.pressed && self.contains(e.pos);
                self.pressed = false;
                self.rescale();
                if clicked {
                    (self.on_select)(&self.swatch, &self.anchor);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerMove(e) => {
                let hovered = self.contains(e.pos);
                if hovered != self.hovered {
                    self.hovered = hovered;
                    self.rescale();
                }
                EventPropagation::Continue
            }
            Event::PointerLeave | Event::FocusLost => {
                self.hovered = false;
                self.pressed = false;
                self.rescale();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
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
        let elapsed = self.scale_started.elapsed();
        let radius = w.min(h) / 2.0 * self.scale.sample(elapsed);
        let circle = Circle::new((w / 2.0, h / 2.0), radius);
        cx.fill(&circle, self.swatch.color().to_peniko(), 0.0);
        self.ticker.keep_alive(!self.scale.is_finished(elapsed));
    }
}
