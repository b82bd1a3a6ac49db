//! Per-tick session update
//!
//! One call advances the session by exactly one host frame: input handling,
//! paddle motion, ball integration, collision resolution and round checks.

use super::collision::{CollisionReport, resolve_collisions};
use super::level::Level;
use super::state::{GamePhase, GameState, RoundOutcome};

/// Input signals for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held left
    pub left: bool,
    /// Held right
    pub right: bool,
    /// Start (or restart) the selected level
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Debug overlay toggle
    pub toggle_debug: bool,
    /// Give up the current round
    pub forfeit: bool,
    /// Level to load on the next start
    pub select_level: Option<u32>,
    /// Idle/demo mode - paddle follows the ball
    pub autopilot: bool,
}

/// Advance the session by one tick.
///
/// Returns the collision report for the tick, which is empty whenever no
/// physics ran (title, paused or post-round).
pub fn tick(state: &mut GameState, input: &TickInput) -> CollisionReport {
    if let GamePhase::PostRound {
        ticks_remaining,
        outcome,
    } = state.phase
    {
        if ticks_remaining <= 1 {
            state.reset();
        } else {
            state.phase = GamePhase::PostRound {
                ticks_remaining: ticks_remaining - 1,
                outcome,
            };
        }
        return CollisionReport::default();
    }

    if input.toggle_debug {
        state.debug = !state.debug;
    }

    if let Some(number) = input.select_level {
        state.level = Level::from_number(number);
    }

    if input.start {
        let paused = state.phase == GamePhase::Paused;
        state.start();
        // Restarting keeps a pending pause
        if paused {
            state.phase = GamePhase::Paused;
        }
    }

    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    if state.phase != GamePhase::Playing {
        return CollisionReport::default();
    }

    let mut input = input.clone();
    if input.autopilot {
        steer_toward_ball(state, &mut input);
    }

    if input.forfeit {
        state.lose = true;
    }

    state.time_ticks += 1;

    if input.left {
        state.bar.move_left(state.paddle_step);
    }
    if input.right {
        state.bar.move_right(state.paddle_step, &state.world);
    }

    state.ball.update();
    let report = resolve_collisions(&state.world, &mut state.ball, &state.bar, &mut state.bricks);
    state.anomalies += report.anomalies.len() as u64;

    if state.ball.out_of_bounds(&state.world) {
        state.lose = true;
    }
    if state.all_bricks_active() {
        state.win = true;
    }

    if state.lose {
        state.finish_round(RoundOutcome::Lost);
    } else if state.win {
        state.finish_round(RoundOutcome::Won);
    }

    report
}

/// Replace directional input with a move toward the ball's x
fn steer_toward_ball(state: &GameState, input: &mut TickInput) {
    let offset = state.ball.center.x - state.bar.center().x;
    let dead_zone = state.paddle_step / 2.0;
    input.left = offset < -dead_zone;
    input.right = offset > dead_zone;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::geometry::Point;

    fn playing_state() -> GameState {
        let settings = Settings {
            seed: Some(12345),
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        state
    }

    #[test]
    fn test_title_to_playing() {
        let settings = Settings {
            seed: Some(12345),
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        assert_eq!(state.phase, GamePhase::Title);

        // No start - nothing moves
        let before = state.ball.center;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.ball.center, before);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.ball.previous, before);
    }

    #[test]
    fn test_pause_freezes_ball() {
        let mut state = playing_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen = state.ball.center;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.center, frozen);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.ball.center, frozen);
    }

    #[test]
    fn test_restart_while_paused_stays_paused() {
        let mut state = playing_state();
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Paused);

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Paused);
        // Level reloaded, but the ball waits for unpause
        assert_eq!(state.ball.center, Point::new(5.0, 112.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.center, Point::new(5.0, 112.0));
    }

    #[test]
    fn test_pause_ignored_on_title() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Title);
    }

    #[test]
    fn test_paddle_input_moves_and_latches() {
        let mut state = playing_state();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.bar.last_move(), 1);
        let x = state.bar.location().x;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.bar.location().x, x);
        assert_eq!(state.bar.last_move(), 1);
    }

    #[test]
    fn test_ball_falling_out_loses_then_resets() {
        let mut state = playing_state();
        state.ball.center = Point::new(80.0, 118.5);
        state.ball.vx = 0.0;
        state.ball.vy = 1.0;

        tick(&mut state, &TickInput::default());
        assert!(state.lose);
        assert!(matches!(
            state.phase,
            GamePhase::PostRound {
                outcome: RoundOutcome::Lost,
                ..
            }
        ));

        // Non-blocking countdown: ticks keep flowing, nothing moves
        let frozen = state.ball.center;
        for _ in 0..state.post_round_ticks - 1 {
            let report = tick(&mut state, &TickInput::default());
            assert!(report.is_empty());
            assert_eq!(state.ball.center, frozen);
        }
        assert!(matches!(state.phase, GamePhase::PostRound { .. }));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert!(!state.lose);
        assert_eq!(state.ball.center, Point::new(5.0, 112.0));
    }

    #[test]
    fn test_forfeit_loses() {
        let mut state = playing_state();
        tick(
            &mut state,
            &TickInput {
                forfeit: true,
                ..Default::default()
            },
        );
        assert!(state.lose);
        assert!(matches!(state.phase, GamePhase::PostRound { .. }));
    }

    #[test]
    fn test_activating_every_brick_wins() {
        let mut state = playing_state();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.active = true;
        }
        // Drive the ball into the first brick's left face
        state.ball.center = Point::new(24.0, 34.0);
        state.ball.vx = 2.0;
        state.ball.vy = 0.0;

        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.bricks.len(), 1);
        assert!(state.win);
        assert!(matches!(
            state.phase,
            GamePhase::PostRound {
                outcome: RoundOutcome::Won,
                ..
            }
        ));
        assert_eq!(state.ball.center, Point::new(25.0, 34.0));
        assert_eq!(state.ball.vx, -2.0);
    }

    #[test]
    fn test_select_level_applies_on_start() {
        let mut state = playing_state();
        tick(
            &mut state,
            &TickInput {
                select_level: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(state.bricks.len(), 9);

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        assert_eq!(state.level, Level::Two);
        assert_eq!(state.bricks.len(), 3);
    }

    #[test]
    fn test_debug_toggle() {
        let mut state = playing_state();
        let toggle = TickInput {
            toggle_debug: true,
            ..Default::default()
        };
        tick(&mut state, &toggle);
        assert!(state.debug);
        tick(&mut state, &toggle);
        assert!(!state.debug);
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let mut state = playing_state();
        state.ball.center = Point::new(100.0, 60.0);
        state.ball.vx = 0.0;
        state.ball.vy = 0.0;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut state, &input);
        }
        assert!((state.bar.center().x - 100.0).abs() <= state.paddle_step);
    }

    #[test]
    fn test_velocity_stays_bounded_over_many_ticks() {
        let mut state = playing_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state, &input);
            if state.phase == GamePhase::Playing {
                assert!(state.ball.vx.abs() <= 3.0 + 1.0);
                assert!(state.ball.vy.abs() <= 3.0);
            }
            if state.phase == GamePhase::Title {
                tick(
                    &mut state,
                    &TickInput {
                        start: true,
                        ..Default::default()
                    },
                );
            }
        }
    }
}
