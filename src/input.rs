//! Keyboard state and the per-paddle movement intent
//!
//! Player 1 drives with W/S, player 2 with the arrow keys. The window
//! event loop feeds raw pressed/released transitions in; the simulation
//! reads back a discrete -1/0/+1 intent per paddle.

use winit::keyboard::KeyCode;

use crate::sim::Player;

/// Held state of the four gameplay keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    p1_up: bool,
    p1_down: bool,
    p2_up: bool,
    p2_down: bool,
}

impl InputState {
    /// Record a key transition. Keys outside the four bindings are ignored.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW => self.p1_up = pressed,
            KeyCode::KeyS => self.p1_down = pressed,
            KeyCode::ArrowUp => self.p2_up = pressed,
            KeyCode::ArrowDown => self.p2_down = pressed,
            _ => {}
        }
    }

    /// Vertical intent for one paddle: +1 up, -1 down, 0 idle.
    /// Up wins when both keys are somehow held.
    pub fn paddle_intent(&self, player: Player) -> f32 {
        let (up, down) = match player {
            Player::One => (self.p1_up, self.p1_down),
            Player::Two => (self.p2_up, self.p2_down),
        };

        if up {
            1.0
        } else if down {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_intent_is_zero() {
        let input = InputState::default();
        assert_eq!(input.paddle_intent(Player::One), 0.0);
        assert_eq!(input.paddle_intent(Player::Two), 0.0);
    }

    #[test]
    fn test_up_down_intents() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::ArrowDown, true);

        assert_eq!(input.paddle_intent(Player::One), 1.0);
        assert_eq!(input.paddle_intent(Player::Two), -1.0);

        input.handle_key(KeyCode::KeyW, false);
        assert_eq!(input.paddle_intent(Player::One), 0.0);
    }

    #[test]
    fn test_up_wins_when_both_held() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.paddle_intent(Player::One), 1.0);
    }

    #[test]
    fn test_players_do_not_share_keys() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(input.paddle_intent(Player::One), 0.0);
        assert_eq!(input.paddle_intent(Player::Two), 1.0);
    }
}
