//! Overlay that paints the selection ring and the flying dot.
//!
//! Sits over the whole picker in window space. Both the ring and the dot
//! are positioned from [`Anchor`]s, so the overlay only needs its own
//! origin to convert window points to local ones.

use std::rc::Rc;
use std::time::{Duration, Instant};

use floem::action::exec_after;
use floem::kurbo::{Circle, Point, Rect, Stroke};
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
use crate::motion::{FlightPath, Spring};
use crate::state::{Flight, RequestId};
use crate::ticker::FrameTicker;

/// The overlay covers the whole picker and is stacked last, so if it took
/// part in hit testing it would swallow every click meant for a swatch.
const HIT_TESTED: bool = false;

/// Snapshot the overlay needs from the picker state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StageInput {
    pub(crate) selected: u32,
    pub(crate) selected_color: SolidColor,
    pub(crate) flight: Option<Flight>,
}

struct ActiveFlight {
    id: RequestId,
    path: Option<FlightPath>,
    color: SolidColor,
    started: Instant,
}

pub(crate) struct Stage {
    id: ViewId,
    origin: Point,
    swatches: Vec<(u32, Anchor)>,
    selected: u32,
    ring_color: SolidColor,
    ring: Option<Spring>,
    spring_params: (f64, f64),
    last_frame: Instant,
    flight: Option<ActiveFlight>,
    flight_duration: Duration,
    on_flight_end: Rc<dyn Fn(RequestId)>,
    ticker: FrameTicker,
}

/// Creates the overlay.
///
/// - `input_fn`: returns the current selection and flight; tracked reactively.
/// - `swatches`: position handle of each swatch by id.
/// - `on_flight_end`: called once a flight's duration has elapsed.
pub(crate) fn stage(
    input_fn: impl Fn() -> StageInput + 'static,
    swatches: Vec<(u32, Anchor)>,
    spring: (f64, f64),
    flight_duration: Duration,
    on_flight_end: impl Fn(RequestId) + 'static,
) -> Stage {
    let id = ViewId::new();
    id.pointer_events(HIT_TESTED);
    let initial = input_fn();

    create_effect(move |_| {
        let input = input_fn();
        id.update_state(input);
    });

    Stage {
        id,
        origin: Point::ZERO,
        swatches,
        selected: initial.selected,
        ring_color: initial.selected_color,
        ring: None,
        spring_params: spring,
        last_frame: Instant::now(),
        flight: None,
        flight_duration,
        on_flight_end: Rc::new(on_flight_end),
        ticker: FrameTicker::default(),
    }
    .style(|s| s.absolute().inset_top(0.0).inset_left(0.0).size_full())
}

impl Stage {
    fn swatch_center(&self, id: u32) -> Option<Point> {
        self.swatches
            .iter()
            .find(|(swatch, _)| *swatch == id)
            .and_then(|(_, anchor)| anchor.center())
    }

    fn start_flight(&mut self, flight: &Flight) {
        if self.flight.as_ref().is_some_and(|f| f.id == flight.id()) {
            return;
        }
        self.flight = Some(ActiveFlight {
            id: flight.id(),
            path: flight.path().copied(),
            color: flight.swatch().color(),
            started: Instant::now(),
        });

        let request = flight.id();
        let on_end = self.on_flight_end.clone();
        exec_after(self.flight_duration, move |_| on_end(request));

        self.last_frame = Instant::now();
        self.ticker.wake(self.id);
    }

    /// Advance the ring spring and return its center, if any swatch is laid out.
    fn ring_center(&mut self) -> Option<Point> {
        let target = self.swatch_center(self.selected)?;
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        let (stiffness, damping) = self.spring_params;
        let spring = self
            .ring
            .get_or_insert_with(|| Spring::new(target, stiffness, damping));
        spring.set_target(target);
        Some(spring.tick(delta))
    }
}

impl View for Stage {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(input) = state.downcast::<StageInput>() {
            if input.selected != self.selected {
                self.selected = input.selected;
                self.last_frame = Instant::now();
                self.ticker.wake(self.id);
            }
            self.ring_color = input.selected_color;
            match &input.flight {
                Some(flight) => self.start_flight(flight),
                None => self.flight = None,
            }
            self.id.request_paint();
        }
    }

    fn compute_layout(&mut self, cx: &mut ComputeLayoutCx) -> Option<Rect> {
        self.origin = cx.window_origin();
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let offset = self.origin.to_vec2();
        let mut live = false;

        if let Some(center) = self.ring_center() {
            live |= self.ring.is_some_and(|s| !s.is_settled());
            let radius = constants::SWATCH_SIZE as f64 / 2.0 + constants::RING_INSET
                - constants::RING_WIDTH / 2.0;
            let ring = Circle::new(center - offset, radius);
            cx.stroke(
                &ring,
                self.ring_color.to_peniko(),
                &Stroke::new(constants::RING_WIDTH),
            );
        }

        if let Some(flight) = &self.flight {
            let elapsed = flight.started.elapsed();
            if let Some(path) = &flight.path {
                let frame = path.sample(elapsed);
                let radius = constants::DOT_RADIUS * frame.scale;
                if radius > 0.0 {
                    let dot = Circle::new(frame.center - offset, radius);
                    cx.fill(&dot, flight.color.to_peniko(), 0.0);
                }
                live |= !path.is_finished(elapsed);
            }
        }

        self.ticker.keep_alive(live);
    }
}
