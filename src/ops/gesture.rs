use std::time::{Duration, Instant};

use crate::model::cell::CellKey;

/// Pointer gesture phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// Pointer is down and the long-press timer is running
    PressPending {
        cell: CellKey,
        pressed_at: Instant,
        /// False for presses on rows that can never start a drag
        draggable: bool,
    },
    Dragging,
}

/// What a pointer event resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    /// Released before the long-press threshold
    Click(CellKey),
    /// Held past the threshold
    DragStart(CellKey),
    /// Pointer entered a cell while dragging
    DragOver(CellKey),
    DragEnd,
}

/// Turns raw press/move/release input into clicks and drags.
///
/// A press starts the long-press timer. Releasing before it expires is a
/// click; letting it expire starts a drag. The two outcomes are exclusive for
/// one press. Time is passed in so the caller decides what "now" is.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    long_press: Duration,
}

impl GestureTracker {
    pub fn new(long_press: Duration) -> Self {
        GestureTracker {
            phase: GesturePhase::Idle,
            long_press,
        }
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Pointer went down on a cell. Any earlier unfinished press is dropped.
    pub fn press(&mut self, cell: CellKey, now: Instant, draggable: bool) {
        self.phase = GesturePhase::PressPending {
            cell,
            pressed_at: now,
            draggable,
        };
    }

    /// Fire the long-press timer if it has expired.
    pub fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        if let GesturePhase::PressPending {
            cell,
            pressed_at,
            draggable: true,
        } = &self.phase
            && now.saturating_duration_since(*pressed_at) >= self.long_press
        {
            let cell = cell.clone();
            self.phase = GesturePhase::Dragging;
            return Some(GestureEvent::DragStart(cell));
        }
        None
    }

    /// Pointer moved onto a cell. Only meaningful while dragging.
    pub fn hover(&mut self, cell: CellKey) -> Option<GestureEvent> {
        match self.phase {
            GesturePhase::Dragging => Some(GestureEvent::DragOver(cell)),
            _ => None,
        }
    }

    /// Pointer went up. Callers poll first so an expired timer becomes a drag.
    pub fn release(&mut self) -> Option<GestureEvent> {
        match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Idle => None,
            GesturePhase::PressPending { cell, .. } => Some(GestureEvent::Click(cell)),
            GesturePhase::Dragging => Some(GestureEvent::DragEnd),
        }
    }

    /// Abandon the current gesture without emitting anything
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}
