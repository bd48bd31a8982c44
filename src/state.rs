//! Selection and flight state of the picker.
//!
//! `Idle → Flying → Idle`: a selection starts a flight tagged with a fresh
//! request id; the delayed commit and the end of the flight only take
//! effect while their id is still the latest one.

use crate::motion::FlightPath;
use crate::palette::Swatch;

/// Sequence number issued per selection.
pub type RequestId = u64;

/// The in-progress flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    id: RequestId,
    swatch: Swatch,
    path: Option<FlightPath>,
}

impl Flight {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// `None` when the swatch or folder had no layout at click time.
    pub fn path(&self) -> Option<&FlightPath> {
        self.path.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    selected: Swatch,
    flight: Option<Flight>,
    /// Swatch awaiting its delayed commit; outlives the flight itself.
    pending: Option<(RequestId, Swatch)>,
    latest: RequestId,
}

impl PickerState {
    pub fn new(initial: Swatch) -> Self {
        Self {
            selected: initial,
            flight: None,
            pending: None,
            latest: 0,
        }
    }

    /// The committed swatch.
    pub fn selected(&self) -> &Swatch {
        &self.selected
    }

    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    /// Color code driving the current flight, if any.
    pub fn animating_value(&self) -> Option<&str> {
        self.flight.as_ref().map(|f| f.swatch.value())
    }

    pub fn is_selected(&self, swatch: &Swatch) -> bool {
        self.selected.id() == swatch.id()
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest
    }

    /// Start a flight toward `swatch`, replacing any flight in progress.
    pub fn begin_flight(&mut self, swatch: Swatch, path: Option<FlightPath>) -> RequestId {
        self.latest += 1;
        self.pending = Some((self.latest, swatch.clone()));
        self.flight = Some(Flight {
            id: self.latest,
            swatch,
            path,
        });
        self.latest
    }

    /// Apply the delayed commit of request `id`.
    ///
    /// Returns the newly committed swatch, or `None` when a later selection
    /// has superseded this request.
    pub fn commit(&mut self, id: RequestId) -> Option<&Swatch> {
        match self.pending.take() {
            Some((pending, swatch)) if pending == id && id == self.latest => {
                self.selected = swatch;
                self.finish_flight(id);
                Some(&self.selected)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Clear the flight if it is still request `id`. Returns whether it was.
    pub fn finish_flight(&mut self, id: RequestId) -> bool {
        match &self.flight {
            Some(flight) if flight.id == id => {
                self.flight = None;
                true
            }
            _ => false,
        }
    }

    /// Overwrite the selection from outside the widget.
    ///
    /// Pending commits are invalidated so they cannot undo the write.
    pub fn set_selected(&mut self, swatch: Swatch) {
        self.latest += 1;
        self.flight = None;
        self.pending = None;
        self.selected = swatch;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use floem::kurbo::Point;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::palette::Palette;

    fn swatch(palette: &Palette, id: u32) -> Swatch {
        palette.get(id).cloned().unwrap()
    }

    fn path() -> Option<FlightPath> {
        Some(FlightPath::new(
            Point::new(20.0, 300.0),
            Point::new(128.0, 96.0),
            100.0,
            Duration::from_millis(500),
        ))
    }

    #[test]
    fn starts_idle_on_red() {
        let palette = Palette::default();
        let state = PickerState::new(palette.initial().clone());
        assert_eq!(state.selected().id(), 1);
        assert_eq!(state.selected().value(), "#ef4444");
        assert_eq!(state.animating_value(), None);
    }

    #[test]
    fn folder_changes_only_after_commit() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());

        let id = state.begin_flight(swatch(&palette, 4), path());
        assert_eq!(state.animating_value(), Some("#0ea5e9"));
        assert_eq!(state.selected().value(), "#ef4444");

        let committed = state.commit(id).cloned();
        assert_eq!(committed, Some(swatch(&palette, 4)));
        assert_eq!(state.selected().id(), 4);
        assert_eq!(state.selected().value(), "#0ea5e9");
        assert_eq!(state.animating_value(), None);
    }

    #[test]
    fn every_swatch_can_be_committed() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());
        for s in palette.iter() {
            let id = state.begin_flight(s.clone(), None);
            assert_eq!(state.animating_value(), Some(s.value()));
            assert!(state.commit(id).is_some());
            assert_eq!(state.selected(), s);
            assert!(palette.contains(state.selected()));
            assert_eq!(state.flight(), None);
        }
    }

    #[test]
    fn only_the_latest_request_commits() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());

        let first = state.begin_flight(swatch(&palette, 7), path());
        assert_eq!(state.animating_value(), Some("#171717"));
        let second = state.begin_flight(swatch(&palette, 7), path());
        assert_eq!(state.animating_value(), Some("#171717"));
        assert_ne!(first, second);

        assert_eq!(state.commit(first), None);
        assert_eq!(state.selected().id(), 1);
        assert_eq!(state.flight().map(Flight::id), Some(second));

        assert!(state.commit(second).is_some());
        assert_eq!(state.selected().id(), 7);
    }

    #[test]
    fn superseded_selection_never_lands() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());

        let blue = state.begin_flight(swatch(&palette, 4), path());
        let green = state.begin_flight(swatch(&palette, 5), path());
        assert!(state.commit(green).is_some());
        assert_eq!(state.commit(blue), None);
        assert_eq!(state.selected().id(), 5);
    }

    #[test]
    fn finishing_a_flight_is_idempotent_with_commit() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());

        let id = state.begin_flight(swatch(&palette, 2), path());
        assert!(state.finish_flight(id));
        assert!(!state.finish_flight(id));
        assert_eq!(state.animating_value(), None);
        // Selection still lands even though the dot is already gone.
        assert!(state.commit(id).is_some());
        assert_eq!(state.selected().id(), 2);
    }

    #[test]
    fn stale_flight_end_keeps_the_new_flight() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());

        let old = state.begin_flight(swatch(&palette, 3), path());
        let new = state.begin_flight(swatch(&palette, 6), path());
        assert!(!state.finish_flight(old));
        assert_eq!(state.flight().map(Flight::id), Some(new));
    }

    #[test]
    fn exactly_one_swatch_is_selected() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());
        let id = state.begin_flight(swatch(&palette, 6), None);
        state.commit(id);
        let selected: Vec<u32> = palette
            .iter()
            .filter(|s| state.is_selected(s))
            .map(Swatch::id)
            .collect();
        assert_eq!(selected, vec![6]);
    }

    #[test]
    fn external_selection_cancels_pending_commit() {
        let palette = Palette::default();
        let mut state = PickerState::new(palette.initial().clone());
        let id = state.begin_flight(swatch(&palette, 4), path());
        state.set_selected(swatch(&palette, 3));
        assert_eq!(state.commit(id), None);
        assert_eq!(state.selected().id(), 3);
        assert_eq!(state.flight(), None);
    }
}
