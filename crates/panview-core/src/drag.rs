//! Mouse drag tracking for panning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl fmt::Display for PointerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerButton::Left => write!(f, "Left"),
            PointerButton::Right => write!(f, "Right"),
            PointerButton::Middle => write!(f, "Middle"),
            PointerButton::Back => write!(f, "Back"),
            PointerButton::Forward => write!(f, "Forward"),
        }
    }
}

/// Pointer events a panel forwards to whatever handles its input.
pub trait PointerHandler {
    fn on_press(&mut self, button: PointerButton, pos: Point);
    fn on_move(&mut self, pos: Point);
    fn on_release(&mut self, button: PointerButton);
}

/// One button at a time: a press while another button is held is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        button: PointerButton,
        press_point: Point,
        /// Pointer position at the last processed move.
        anchor: Point,
    },
}

impl DragState {
    /// Start a drag. Returns `false` if a drag is already active.
    pub fn press(&mut self, button: PointerButton, pos: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::Dragging {
            button,
            press_point: pos,
            anchor: pos,
        };
        true
    }

    /// Advance the anchor to `pos`.
    ///
    /// Returns the pan delta (`anchor - pos`) when the held button is `pan_button`, `None`
    /// otherwise or when idle.
    pub fn drag_to(&mut self, pos: Point, pan_button: PointerButton) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { button, anchor, .. } => {
                let delta = *anchor - pos;
                *anchor = pos;
                (*button == pan_button).then_some(delta)
            }
        }
    }

    /// End any drag, whichever button was released.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn active_button(&self) -> Option<PointerButton> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { button, .. } => Some(*button),
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { anchor, .. } => Some(*anchor),
        }
    }

    pub fn press_point(&self) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { press_point, .. } => Some(*press_point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let d = DragState::default();
        assert!(!d.is_dragging());
        assert_eq!(d.active_button(), None);
        assert_eq!(d.anchor(), None);
    }

    #[test]
    fn press_records_anchor() {
        let mut d = DragState::default();
        assert!(d.press(PointerButton::Right, Point::new(100, 100)));
        assert_eq!(d.active_button(), Some(PointerButton::Right));
        assert_eq!(d.anchor(), Some(Point::new(100, 100)));
        assert_eq!(d.press_point(), Some(Point::new(100, 100)));
    }

    #[test]
    fn delta_is_anchor_minus_pointer() {
        let mut d = DragState::default();
        d.press(PointerButton::Right, Point::new(100, 100));
        let delta = d.drag_to(Point::new(80, 130), PointerButton::Right);
        assert_eq!(delta, Some(Point::new(20, -30)));
        assert_eq!(d.anchor(), Some(Point::new(80, 130)));
        assert_eq!(d.press_point(), Some(Point::new(100, 100)));
    }

    #[test]
    fn second_press_is_ignored() {
        let mut d = DragState::default();
        d.press(PointerButton::Right, Point::new(1, 2));
        assert!(!d.press(PointerButton::Left, Point::new(50, 60)));
        assert_eq!(d.active_button(), Some(PointerButton::Right));
        assert_eq!(d.anchor(), Some(Point::new(1, 2)));
    }

    #[test]
    fn non_pan_button_advances_anchor_without_delta() {
        let mut d = DragState::default();
        d.press(PointerButton::Left, Point::new(10, 10));
        assert_eq!(d.drag_to(Point::new(30, 40), PointerButton::Right), None);
        assert_eq!(d.anchor(), Some(Point::new(30, 40)));
    }

    #[test]
    fn move_while_idle_does_nothing() {
        let mut d = DragState::default();
        assert_eq!(d.drag_to(Point::new(5, 5), PointerButton::Right), None);
        assert_eq!(d, DragState::Idle);
    }

    #[test]
    fn release_clears_unconditionally() {
        let mut d = DragState::default();
        d.press(PointerButton::Middle, Point::ZERO);
        d.release();
        assert_eq!(d, DragState::Idle);
    }
}
