//! Picker layout: folder above a row of swatches, with the overlay on top.
//!
//! [`PickerModel`] owns the [`PickerState`] signal and keeps it in step with
//! the caller's selection signal; [`picker`] lays out the views around it and
//! schedules the delayed commits.

use std::time::Duration;

use floem::action::exec_after;
use floem::kurbo::Point;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith};
use tracing::{debug, trace, warn};

use crate::anchor::Anchor;
use crate::config::PickerConfig;
use crate::constants;
use crate::folder::folder;
use crate::motion::FlightPath;
use crate::palette::{Palette, Swatch};
use crate::stage::{stage, StageInput};
use crate::state::{PickerState, RequestId};
use crate::swatch::swatch_button;

/// Reactive half of the picker, independent of any view.
#[derive(Clone, Copy)]
pub(crate) struct PickerModel {
    state: RwSignal<PickerState>,
    selected: RwSignal<Swatch>,
}

impl PickerModel {
    /// Binds to `selected`, replacing it with the palette's first swatch if
    /// it names anything else.
    pub(crate) fn new(palette: &Palette, selected: RwSignal<Swatch>) -> Self {
        // Selection always names a palette member.
        let initial = {
            let requested = selected.get_untracked();
            if palette.contains(&requested) {
                requested
            } else {
                warn!(
                    id = requested.id(),
                    value = requested.value(),
                    "selected swatch is not in the palette, using the first swatch"
                );
                let first = palette.initial().clone();
                selected.set(first.clone());
                first
            }
        };
        let state = RwSignal::new(PickerState::new(initial));

        // External selection -> state
        let palette = palette.clone();
        create_effect(move |_| {
            let requested = selected.get();
            if state.with_untracked(|s| s.selected() == &requested) {
                return;
            }
            if palette.contains(&requested) {
                debug!(id = requested.id(), "selection set from outside the picker");
                state.update(|s| s.set_selected(requested));
            } else {
                warn!(id = requested.id(), "ignoring selection outside the palette");
                selected.set(state.with_untracked(|s| s.selected().clone()));
            }
        });

        Self { state, selected }
    }

    pub(crate) fn state(&self) -> RwSignal<PickerState> {
        self.state
    }

    /// Start a flight from `from` to `to`. The flight has no path when either
    /// view is not laid out yet; the selection still goes ahead.
    pub(crate) fn select(
        &self,
        swatch: &Swatch,
        from: &Anchor,
        to: &Anchor,
        arc_height: f64,
        flight_duration: Duration,
    ) -> RequestId {
        let path = match (from.center(), to.center()) {
            (Some(start), Some(end)) => {
                Some(FlightPath::new(start, end, arc_height, flight_duration))
            }
            _ => {
                debug!(id = swatch.id(), "swatch or folder not laid out, flying without a path");
                None
            }
        };

        let mut request = 0;
        self.state
            .update(|s| request = s.begin_flight(swatch.clone(), path));
        debug!(
            id = swatch.id(),
            value = swatch.value(),
            request,
            start = ?path.map(|p| p.start()).unwrap_or(Point::ZERO),
            end = ?path.map(|p| p.end()).unwrap_or(Point::ZERO),
            "color selected"
        );
        request
    }

    /// Delayed commit of `request`, mirrored into the selection signal.
    /// Returns `false` when a later selection superseded it.
    pub(crate) fn commit(&self, request: RequestId) -> bool {
        let mut committed = None;
        self.state.update(|s| committed = s.commit(request).cloned());
        match committed {
            Some(swatch) => {
                debug!(id = swatch.id(), request, "color committed");
                self.selected.set(swatch);
                true
            }
            None => {
                trace!(request, "superseded commit ignored");
                false
            }
        }
    }

    pub(crate) fn finish_flight(&self, request: RequestId) -> bool {
        let mut finished = false;
        self.state.update(|s| finished = s.finish_flight(request));
        if finished {
            trace!(request, "flight finished");
        }
        finished
    }
}

/// Builds the picker. `config` must already be validated.
pub(crate) fn picker(config: PickerConfig, selected: RwSignal<Swatch>) -> impl IntoView {
    let PickerConfig {
        palette,
        flight_duration,
        commit_delay,
        arc_height,
        color_transition,
        spring_stiffness,
        spring_damping,
    } = config;

    let model = PickerModel::new(&palette, selected);
    let state = model.state();

    let folder_anchor = Anchor::new();
    let swatch_anchors: Vec<(u32, Anchor)> =
        palette.iter().map(|s| (s.id(), Anchor::new())).collect();

    let select = {
        let folder_anchor = folder_anchor.clone();
        move |swatch: &Swatch, from: &Anchor| {
            let request = model.select(swatch, from, &folder_anchor, arc_height, flight_duration);
            exec_after(commit_delay, move |_| {
                model.commit(request);
            });
        }
    };

    let row = h_stack_from_iter(palette.iter().zip(swatch_anchors.iter()).map(
        |(swatch, (_, anchor))| {
            let select = select.clone();
            swatch_button(swatch.clone(), anchor.clone(), move |s, a| select(s, a))
        },
    ))
    .style(|s| s.gap(constants::SWATCH_GAP).items_center());

    let body = v_stack((
        folder(
            move || state.with(|s| s.selected().color()),
            folder_anchor,
            color_transition,
        ),
        row,
    ))
    .style(|s| {
        let (r, g, b) = constants::BACKGROUND;
        s.size_full()
            .items_center()
            .justify_center()
            .gap(constants::SECTION_GAP)
            .background(Color::rgb8(r, g, b))
    });

    let overlay = stage(
        move || {
            state.with(|s| StageInput {
                selected: s.selected().id(),
                selected_color: s.selected().color(),
                flight: s.flight().cloned(),
            })
        },
        swatch_anchors,
        (spring_stiffness, spring_damping),
        flight_duration,
        move |request| {
            model.finish_flight(request);
        },
    );

    stack((body, overlay)).style(|s| s.size_full())
}
