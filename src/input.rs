/// Where a routed pointer event should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResponse {
    /// Stamp the canvas at the pointer position.
    Paint,
    /// Feed the drag delta to the orbit controls.
    Orbit,
    /// Defined no-op.
    Ignored,
}

/// Input mode state machine: Draw while the modifier is released, Orbit
/// while it is held. Painting and orbiting are mutually exclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    modifier_held: bool,
    dragging: bool,
    orbit_gesture: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track the modifier key. Returns true when the mode changed, so the
    /// caller can flip the cursor affordance. Pressing the modifier
    /// mid-drag ends the drag; dragging is never true in Orbit mode.
    pub fn set_modifier(&mut self, held: bool) -> bool {
        let changed = self.modifier_held != held;
        self.modifier_held = held;
        if held {
            self.dragging = false;
        } else {
            self.orbit_gesture = false;
        }
        changed
    }

    pub fn pointer_down(&mut self) -> PointerResponse {
        if self.modifier_held {
            self.orbit_gesture = true;
            PointerResponse::Orbit
        } else {
            self.dragging = true;
            PointerResponse::Paint
        }
    }

    pub fn pointer_moved(&self) -> PointerResponse {
        if self.modifier_held {
            if self.orbit_gesture {
                PointerResponse::Orbit
            } else {
                PointerResponse::Ignored
            }
        } else if self.dragging {
            PointerResponse::Paint
        } else {
            PointerResponse::Ignored
        }
    }

    /// Pointer release ends both kinds of drag, in any state.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.orbit_gesture = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_down_starts_painting_in_draw_mode() {
        let mut input = InputState::new();

        assert_eq!(input.pointer_down(), PointerResponse::Paint);
        assert!(input.is_dragging());
        assert_eq!(input.pointer_moved(), PointerResponse::Paint);
    }

    #[test]
    fn pointer_down_routes_to_orbit_in_orbit_mode() {
        let mut input = InputState::new();
        input.set_modifier(true);

        assert_eq!(input.pointer_down(), PointerResponse::Orbit);
        assert!(!input.is_dragging());
        assert_eq!(input.pointer_moved(), PointerResponse::Orbit);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut input = InputState::new();
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);

        input.set_modifier(true);
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);
    }

    #[test]
    fn pointer_up_ends_drag_in_any_state() {
        let mut input = InputState::new();

        input.pointer_down();
        input.pointer_up();
        assert!(!input.is_dragging());
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);

        input.set_modifier(true);
        input.pointer_down();
        input.pointer_up();
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);
    }

    #[test]
    fn dragging_never_coexists_with_modifier() {
        let mut input = InputState::new();

        input.pointer_down();
        assert!(input.is_dragging());

        // Modifier pressed mid-drag: drag ends immediately.
        input.set_modifier(true);
        assert!(!input.is_dragging());
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);

        // Releasing the modifier does not resume the drag.
        input.set_modifier(false);
        assert!(!input.is_dragging());
    }

    #[test]
    fn mode_change_is_reported_once() {
        let mut input = InputState::new();

        assert!(input.set_modifier(true));
        assert!(!input.set_modifier(true));
        assert!(input.set_modifier(false));
        assert!(!input.set_modifier(false));
    }

    #[test]
    fn releasing_modifier_ends_orbit_gesture() {
        let mut input = InputState::new();

        input.set_modifier(true);
        input.pointer_down();
        input.set_modifier(false);

        // Button is still physically down, but the gesture does not carry
        // over into Draw mode as a paint drag.
        assert_eq!(input.pointer_moved(), PointerResponse::Ignored);
    }
}
