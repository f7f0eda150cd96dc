//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use super::physics::update_ball;
use super::state::{GamePhase, GameState};
use crate::settings::RestartPolicy;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held (arrow or A)
    pub left: bool,
    /// Move right held (arrow or D)
    pub right: bool,
    /// Launch pressed this tick (space)
    pub launch: bool,
    /// Restart pressed this tick (R), only read under `RestartPolicy::OnKey`
    pub restart: bool,
}

/// How a tick ended, for the caller's bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal play
    Running,
    /// Ball left through the bottom; state is now `Over`
    Lost,
    /// Last block destroyed; state was reset in place
    Cleared,
    /// `Over` state was replaced with a fresh game
    Reset,
    /// `Over` state is waiting for the restart key
    Waiting,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, restart: RestartPolicy) -> TickOutcome {
    if state.phase == GamePhase::Over {
        let go = match restart {
            RestartPolicy::Auto => true,
            RestartPolicy::OnKey => input.restart,
        };
        if !go {
            return TickOutcome::Waiting;
        }
        state.reset();
        log::info!("Game reset");
        return TickOutcome::Reset;
    }

    state.paddle.steer(input.left, input.right);
    let report = update_ball(&mut state.ball, &state.paddle, &mut state.blocks, input);

    if report.launched {
        log::debug!("Ball launched with velocity {:?}", state.ball.velocity());
    }
    if report.wall_bounce {
        log::trace!("Wall bounce at {:?}", state.ball.pos);
    }
    if report.paddle_hit {
        log::trace!("Paddle hit, velocity now {:?}", state.ball.velocity());
    }
    if let Some(index) = report.destroyed_block {
        log::debug!(
            "Block {} destroyed, {} remaining, speed {:.2}",
            index,
            state.blocks.len(),
            state.ball.velocity().length()
        );
    }

    // Clearing the board wins even if the ball also dropped this tick
    if state.blocks.is_empty() {
        state.reset();
        log::info!("All blocks cleared, starting over");
        return TickOutcome::Cleared;
    }

    if report.lost {
        state.phase = GamePhase::Over;
        log::info!("Ball lost with {} blocks remaining", state.blocks.len());
        return TickOutcome::Lost;
    }

    TickOutcome::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BallState, Block};
    use glam::Vec2;

    #[test]
    fn test_tick_docked_to_launched() {
        let mut state = GameState::new();

        // Tick without launch - stays docked
        let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::Auto);
        assert_eq!(outcome, TickOutcome::Running);
        assert!(state.ball.is_docked());

        // Launch
        let input = TickInput {
            launch: true,
            ..Default::default()
        };
        tick(&mut state, &input, RestartPolicy::Auto);
        assert_eq!(
            state.ball.state,
            BallState::Launched {
                vel: Vec2::new(0.0, -5.0)
            }
        );
    }

    #[test]
    fn test_controller_runs_before_physics() {
        let mut state = GameState::new();
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, RestartPolicy::Auto);

        // Ball docked against the already-moved paddle
        assert_eq!(state.paddle.pos.x, 345.0);
        assert_eq!(state.ball.pos.x, 395.0);
    }

    #[test]
    fn test_loss_then_auto_reset() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 451.0);
        state.ball.state = BallState::Launched {
            vel: Vec2::new(0.0, 0.0),
        };

        let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::Auto);
        assert_eq!(outcome, TickOutcome::Lost);
        assert_eq!(state.phase, GamePhase::Over);

        let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::Auto);
        assert_eq!(outcome, TickOutcome::Reset);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_on_key_policy_waits_for_restart() {
        let mut state = GameState::new();
        state.phase = GamePhase::Over;
        state.blocks.truncate(1);

        for _ in 0..10 {
            let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::OnKey);
            assert_eq!(outcome, TickOutcome::Waiting);
        }
        assert_eq!(state.blocks.len(), 1);

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, RestartPolicy::OnKey), TickOutcome::Reset);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_clearing_last_block_resets_immediately() {
        let mut state = GameState::new();
        state.blocks = vec![Block {
            pos: Vec2::new(300.0, 200.0),
            size: Vec2::new(60.0, 20.0),
        }];
        // Heading into the block's bottom face
        state.ball.pos = Vec2::new(330.0, 233.0);
        state.ball.state = BallState::Launched {
            vel: Vec2::new(0.0, -5.0),
        };

        let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::OnKey);
        assert_eq!(outcome, TickOutcome::Cleared);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.blocks.len(), 55);
        assert!(state.ball.is_docked());
    }

    #[test]
    fn test_empty_board_resets_on_next_tick() {
        let mut state = GameState::new();
        state.blocks.clear();

        let outcome = tick(&mut state, &TickInput::default(), RestartPolicy::Auto);
        assert_eq!(outcome, TickOutcome::Cleared);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                launch: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                left: true,
                ..Default::default()
            },
        ];

        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            let a = tick(&mut state1, input, RestartPolicy::Auto);
            let b = tick(&mut state2, input, RestartPolicy::Auto);
            assert_eq!(a, b);
        }
        assert_eq!(state1, state2);
    }
}
