use macroquad::prelude::*;

use super::drawing::{PointerButton, PointerEvent};

/// Turns per-frame mouse polling into discrete pointer events
#[derive(Debug, Default)]
pub struct PointerTracker {
    hovered: Option<usize>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one frame, in the order a browser would deliver them:
    /// moving onto a new cell, then presses, then a release
    pub fn collect_events(&mut self, hovered: Option<usize>, pressed: &[PointerButton], released: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if hovered != self.hovered {
            events.push(match hovered {
                Some(cell) => PointerEvent::Enter { cell },
                None => PointerEvent::Leave,
            });
            self.hovered = hovered;
        }

        for &button in pressed {
            events.push(PointerEvent::Down { button, cell: hovered });
        }

        if released {
            events.push(PointerEvent::Up);
        }

        events
    }

}

/// Buttons pressed this frame, and whether any button was released
pub fn poll_buttons() -> (Vec<PointerButton>, bool) {
    let buttons = [
        (MouseButton::Left, PointerButton::Primary),
        (MouseButton::Right, PointerButton::Secondary),
        (MouseButton::Middle, PointerButton::Middle),
    ];

    let pressed = buttons
        .iter()
        .filter(|(mq, _)| is_mouse_button_pressed(*mq))
        .map(|(_, button)| *button)
        .collect();
    let released = buttons.iter().any(|(mq, _)| is_mouse_button_released(*mq));

    (pressed, released)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_fires_once_per_new_cell() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.collect_events(Some(0), &[], false), vec![PointerEvent::Enter { cell: 0 }]);
        assert!(tracker.collect_events(Some(0), &[], false).is_empty());
        assert_eq!(tracker.collect_events(Some(1), &[], false), vec![PointerEvent::Enter { cell: 1 }]);
    }

    #[test]
    fn leaving_and_reentering_the_same_cell_fires_again() {
        let mut tracker = PointerTracker::new();
        tracker.collect_events(Some(5), &[], false);
        assert_eq!(tracker.collect_events(None, &[], false), vec![PointerEvent::Leave]);
        assert!(tracker.collect_events(None, &[], false).is_empty());
        assert_eq!(tracker.collect_events(Some(5), &[], false), vec![PointerEvent::Enter { cell: 5 }]);
    }

    #[test]
    fn press_carries_the_hovered_cell_and_release_follows() {
        let mut tracker = PointerTracker::new();
        let events = tracker.collect_events(Some(7), &[PointerButton::Secondary], true);
        assert_eq!(
            events,
            vec![
                PointerEvent::Enter { cell: 7 },
                PointerEvent::Down { button: PointerButton::Secondary, cell: Some(7) },
                PointerEvent::Up,
            ]
        );
    }

    #[test]
    fn press_off_grid_has_no_cell() {
        let mut tracker = PointerTracker::new();
        let events = tracker.collect_events(None, &[PointerButton::Primary], false);
        assert_eq!(events, vec![PointerEvent::Down { button: PointerButton::Primary, cell: None }]);
    }
}
