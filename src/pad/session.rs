//! Touch session state machine built on statum.
//!
//! ```text
//!            begin(id, point)
//!   Idle ───────────────────────► Active ──┐
//!    ▲                              │      │ move_to(point)
//!    └──────────── end() ───────────┘ ◄────┘
//! ```
//!
//! Only one touch is tracked at a time. The session records which touch it
//! follows so that secondary touches can be told apart and dropped.

use super::geometry::Point;
use statum::{machine, state};
use tracing::debug;

/// Host-assigned identifier of a touch or pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

impl TouchId {
    /// Identifier used for a mouse or single-pointer device
    pub const POINTER: TouchId = TouchId(u64::MAX);
}

#[state]
#[derive(Debug, Clone)]
pub enum TouchState {
    Idle,
    Active,
}

#[machine]
#[derive(Debug)]
pub struct TouchSession<S: TouchState> {
    // Touch being followed, set only while Active
    touch_id: Option<TouchId>,

    // Last clamped location, set only while Active
    point: Option<Point>,
}

impl<S: TouchState> TouchSession<S> {
    pub fn touch_point(&self) -> Option<Point> {
        self.point
    }

    pub fn touch_id(&self) -> Option<TouchId> {
        self.touch_id
    }
}

impl TouchSession<Idle> {
    pub fn create() -> Self {
        Self::new(None, None)
    }

    pub fn begin(mut self, touch_id: TouchId, point: Point) -> TouchSession<Active> {
        debug!("Touch {:?} began at ({:.1}, {:.1})", touch_id, point.x, point.y);
        self.touch_id = Some(touch_id);
        self.point = Some(point);
        self.transition()
    }
}

impl TouchSession<Active> {
    pub fn tracks(&self, touch_id: TouchId) -> bool {
        self.touch_id == Some(touch_id)
    }

    pub fn move_to(&mut self, point: Point) {
        self.point = Some(point);
    }

    pub fn end(mut self) -> TouchSession<Idle> {
        debug!("Touch {:?} ended", self.touch_id);
        self.touch_id = None;
        self.point = None;
        self.transition()
    }
}

/// Runtime holder for whichever state the session is in
#[derive(Debug)]
pub enum TouchPhase {
    Idle(TouchSession<Idle>),
    Active(TouchSession<Active>),
}

impl Default for TouchPhase {
    fn default() -> Self {
        TouchPhase::Idle(TouchSession::create())
    }
}

impl TouchPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, TouchPhase::Active(_))
    }

    pub fn touch_point(&self) -> Option<Point> {
        match self {
            TouchPhase::Idle(session) => session.touch_point(),
            TouchPhase::Active(session) => session.touch_point(),
        }
    }
}
