use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Phase};

/// On-screen control pad buttons, the click analog of the arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Up,
    Down,
    Left,
    Right,
}

impl ControlButton {
    pub fn direction(self) -> Direction {
        match self {
            ControlButton::Up => Direction::Up,
            ControlButton::Down => Direction::Down,
            ControlButton::Left => Direction::Left,
            ControlButton::Right => Direction::Right,
        }
    }
}

/// What the game loop should do with an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterAction {
    /// Record a direction request for the next tick
    Steer(Direction),
    /// Start a fresh game (from NotStarted or GameOver only)
    Start,
    /// Leave the program
    Quit,
    /// Unrecognized or currently meaningless input
    Ignored,
}

/// Turns raw key, button, and gesture events into game actions.
///
/// Steering events are dropped entirely unless the game is running.
/// Start requests are dropped while a game is running, so a restart key
/// can never reset (or double-start) a live game. Quit is always live.
pub struct InputRouter;

impl InputRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route_key(&self, key: KeyEvent, phase: Phase) -> RouterAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return RouterAction::Quit;
        }

        match key.code {
            // Arrows, WASD, and vim keys all steer
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
                self.steer(Direction::Up, phase)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
                self.steer(Direction::Down, phase)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
                self.steer(Direction::Left, phase)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
                self.steer(Direction::Right, phase)
            }

            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.start(phase)
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => RouterAction::Quit,

            _ => RouterAction::Ignored,
        }
    }

    /// Control-pad clicks reuse the same gating rules as the keys
    pub fn route_button(&self, button: ControlButton, phase: Phase) -> RouterAction {
        self.steer(button.direction(), phase)
    }

    /// A completed drag gesture, already resolved to a direction
    pub fn route_swipe(&self, direction: Direction, phase: Phase) -> RouterAction {
        self.steer(direction, phase)
    }

    /// A plain click on the board restarts a finished game, like tapping
    /// the board on a touch screen
    pub fn route_board_click(&self, phase: Phase) -> RouterAction {
        self.start(phase)
    }

    fn steer(&self, direction: Direction, phase: Phase) -> RouterAction {
        if phase == Phase::Running {
            RouterAction::Steer(direction)
        } else {
            RouterAction::Ignored
        }
    }

    fn start(&self, phase: Phase) -> RouterAction {
        if phase == Phase::Running {
            RouterAction::Ignored
        } else {
            RouterAction::Start
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer_while_running() {
        let router = InputRouter::new();

        assert_eq!(
            router.route_key(key(KeyCode::Up), Phase::Running),
            RouterAction::Steer(Direction::Up)
        );
        assert_eq!(
            router.route_key(key(KeyCode::Down), Phase::Running),
            RouterAction::Steer(Direction::Down)
        );
        assert_eq!(
            router.route_key(key(KeyCode::Left), Phase::Running),
            RouterAction::Steer(Direction::Left)
        );
        assert_eq!(
            router.route_key(key(KeyCode::Right), Phase::Running),
            RouterAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_and_vim_keys_steer() {
        let router = InputRouter::new();

        for (code, expected) in [
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Char('l'), Direction::Right),
        ] {
            assert_eq!(
                router.route_key(key(code), Phase::Running),
                RouterAction::Steer(expected)
            );
        }
    }

    #[test]
    fn test_steering_ignored_unless_running() {
        let router = InputRouter::new();

        for phase in [Phase::NotStarted, Phase::GameOver] {
            assert_eq!(router.route_key(key(KeyCode::Up), phase), RouterAction::Ignored);
            assert_eq!(
                router.route_button(ControlButton::Left, phase),
                RouterAction::Ignored
            );
            assert_eq!(
                router.route_swipe(Direction::Down, phase),
                RouterAction::Ignored
            );
        }
    }

    #[test]
    fn test_start_only_when_not_running() {
        let router = InputRouter::new();

        assert_eq!(
            router.route_key(key(KeyCode::Enter), Phase::NotStarted),
            RouterAction::Start
        );
        assert_eq!(
            router.route_key(key(KeyCode::Char('r')), Phase::GameOver),
            RouterAction::Start
        );
        // A running game cannot be restarted out from under itself
        assert_eq!(
            router.route_key(key(KeyCode::Enter), Phase::Running),
            RouterAction::Ignored
        );
        assert_eq!(router.route_board_click(Phase::Running), RouterAction::Ignored);
        assert_eq!(router.route_board_click(Phase::GameOver), RouterAction::Start);
    }

    #[test]
    fn test_quit_keys_always_live() {
        let router = InputRouter::new();

        for phase in [Phase::NotStarted, Phase::Running, Phase::GameOver] {
            assert_eq!(router.route_key(key(KeyCode::Char('q')), phase), RouterAction::Quit);
            assert_eq!(router.route_key(key(KeyCode::Esc), phase), RouterAction::Quit);

            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(router.route_key(ctrl_c, phase), RouterAction::Quit);
        }
    }

    #[test]
    fn test_unknown_key_ignored() {
        let router = InputRouter::new();
        assert_eq!(
            router.route_key(key(KeyCode::Char('x')), Phase::Running),
            RouterAction::Ignored
        );
    }

    #[test]
    fn test_buttons_map_to_directions() {
        let router = InputRouter::new();

        for (button, expected) in [
            (ControlButton::Up, Direction::Up),
            (ControlButton::Down, Direction::Down),
            (ControlButton::Left, Direction::Left),
            (ControlButton::Right, Direction::Right),
        ] {
            assert_eq!(
                router.route_button(button, Phase::Running),
                RouterAction::Steer(expected)
            );
        }
    }
}
