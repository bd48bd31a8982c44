//! Repaint driver for views with time-based motion.

use std::cell::Cell;
use std::rc::Rc;

use floem::action::exec_after;
use floem::ViewId;

use crate::constants;

/// Requests a repaint every frame interval while the owning view has
/// motion left to show.
///
/// The view calls [`wake`](Self::wake) when motion starts and reports from
/// `paint` whether more frames are needed via [`keep_alive`](Self::keep_alive).
#[derive(Clone, Default)]
pub(crate) struct FrameTicker {
    live: Rc<Cell<bool>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameTicker {
    pub(crate) fn wake(&self, id: ViewId) {
        self.live.set(true);
        self.schedule(id);
    }

    pub(crate) fn keep_alive(&self, live: bool) {
        self.live.set(live);
    }

    fn schedule(&self, id: ViewId) {
        if self.scheduled.replace(true) {
            return;
        }
        let ticker = self.clone();
        exec_after(constants::FRAME_INTERVAL, move |_| {
            ticker.scheduled.set(false);
            id.request_paint();
            if ticker.live.get() {
                ticker.schedule(id);
            }
        });
    }
}
