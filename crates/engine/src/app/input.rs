#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
    Fire,
    Quit,
}

const ACTION_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, Default)]
struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Attack => 4,
            InputAction::Fire => 5,
            InputAction::Quit => 6,
        }
    }
}

/// Normalized per-tick input state. Held state reports the current level of
/// an action; pressed state reports a down edge that happened this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    held: ActionStates,
    pressed: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.held.is_down(action)
    }

    pub fn was_pressed(&self, action: InputAction) -> bool {
        self.pressed.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.held.set(action, is_down);
        self
    }

    pub fn with_action_pressed(mut self, action: InputAction, pressed: bool) -> Self {
        self.pressed.set(action, pressed);
        if pressed {
            self.held.set(action, true);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_default_to_released() {
        let snapshot = InputSnapshot::empty();
        assert!(!snapshot.is_down(InputAction::MoveLeft));
        assert!(!snapshot.was_pressed(InputAction::Fire));
    }

    #[test]
    fn pressed_implies_down() {
        let snapshot = InputSnapshot::empty().with_action_pressed(InputAction::Attack, true);
        assert!(snapshot.was_pressed(InputAction::Attack));
        assert!(snapshot.is_down(InputAction::Attack));
    }

    #[test]
    fn held_without_edge_is_not_pressed() {
        let snapshot = InputSnapshot::empty().with_action_down(InputAction::MoveUp, true);
        assert!(snapshot.is_down(InputAction::MoveUp));
        assert!(!snapshot.was_pressed(InputAction::MoveUp));
    }
}
