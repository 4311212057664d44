//! Fixed timestep simulation tick
//!
//! One call to `tick` advances the round by exactly one timestep: input is
//! applied, every entity moves, collisions resolve, and the win condition is
//! evaluated, in that order.

use super::collision::collect_hits;
use super::state::{GamePhase, GameState, Winner};

/// Input signals for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction signals; each active one is worth a full step on its axis
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Start trigger (menu button activation)
    pub start: bool,
    /// Quit/termination signal
    pub quit: bool,
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => {
            if input.start {
                log::info!(
                    "Round started (seed {}, {} balls)",
                    state.seed,
                    state.balls.len()
                );
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Playing => {
            // Abrupt termination mid-round counts as a loss for the human
            if input.quit {
                finish(state, Winner::Computer);
                return;
            }

            state.time_ticks += 1;

            let field = state.field();
            state
                .player
                .update(input.left, input.right, input.up, input.down, field);
            state.pursuer.update(&state.balls, field);
            for ball in &mut state.balls {
                ball.update(field);
            }

            // Resolution order is part of the contract: the player's pass runs
            // first, so a ball overlapping both agents this tick scores for
            // the player and is gone before the pursuer's pass.
            state.player.score += collect_hits(&state.player.aabb(), &mut state.balls);
            state.pursuer.score += collect_hits(&state.pursuer.aabb(), &mut state.balls);

            // Win check after resolution; the player is checked first, so a
            // simultaneous threshold goes to the human
            if state.player.score >= state.tuning.win_threshold {
                finish(state, Winner::You);
            } else if state.pursuer.score >= state.tuning.win_threshold {
                finish(state, Winner::Computer);
            }
        }

        // Terminal: no further entity updates
        GamePhase::Finished => {}
    }
}

/// Transition to Finished; fires at most once per round
fn finish(state: &mut GameState, winner: Winner) {
    state.winner = Some(winner);
    state.phase = GamePhase::Finished;
    log::info!(
        "Round over after {} ticks: {} wins ({}-{})",
        state.time_ticks,
        winner.as_str(),
        state.player.score,
        state.pursuer.score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(Tuning::default(), seed);
        state.phase = GamePhase::Playing;
        state
    }

    fn start_input() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_menu_to_playing() {
        let mut state = GameState::new(Tuning::default(), 12345);
        assert_eq!(state.phase, GamePhase::Menu);

        // Tick without the start trigger - should stay in Menu
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &start_input());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_player_resolves_before_pursuer() {
        let mut state = playing_state(1);
        // Both agents parked on the same ball; no input keeps them there
        state.player.pos = Vec2::new(400.0, 300.0);
        state.pursuer.pos = Vec2::new(400.0, 300.0);
        state.balls = vec![Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0)];

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.score, 1);
        assert_eq!(state.pursuer.score, 0);
        assert!(state.balls.is_empty());
    }

    #[test]
    fn test_shared_ball_leaves_reduced_set_for_pursuer() {
        let mut state = playing_state(2);
        state.player.pos = Vec2::new(400.0, 300.0);
        state.pursuer.pos = Vec2::new(400.0, 300.0);
        // One contested ball plus 19 far away: the pursuer's pass must see 19
        state.balls = vec![Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0)];
        for i in 0..19 {
            state
                .balls
                .push(Ball::new(Vec2::new(50.0 + i as f32, 50.0), Vec2::ZERO, 10.0));
        }

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.score, 1);
        assert_eq!(state.pursuer.score, 0);
        assert_eq!(state.balls.len(), 19);
    }

    #[test]
    fn test_win_goes_to_player_at_threshold() {
        let mut state = playing_state(3);
        state.player.score = 9;
        state.pursuer.score = 7;
        // Park the player on the last ball it needs
        state.player.pos = Vec2::new(400.0, 300.0);
        state.balls = vec![Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0)];

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner, Some(Winner::You));
        assert_eq!(state.player.score, 10);
    }

    #[test]
    fn test_simultaneous_threshold_favors_player() {
        let mut state = playing_state(4);
        state.player.score = 10;
        state.pursuer.score = 10;
        state.balls.clear();

        tick(&mut state, &TickInput::default());

        assert_eq!(state.winner, Some(Winner::You));
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut state = playing_state(5);
        state.player.score = 10;
        state.balls.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Finished);

        let ticks = state.time_ticks;
        let pursuer_pos = state.pursuer.pos;
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &input);

        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.pursuer.pos, pursuer_pos);
        assert_eq!(state.winner, Some(Winner::You));
    }

    #[test]
    fn test_quit_while_playing_is_a_computer_win() {
        let mut state = playing_state(6);
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner, Some(Winner::Computer));
    }

    #[test]
    fn test_balls_are_never_recreated() {
        let mut state = playing_state(7);
        let spawned = state.balls.len();
        for _ in 0..600 {
            tick(&mut state, &TickInput::default());
            assert!(state.balls.len() <= spawned);
            if state.phase == GamePhase::Finished {
                break;
            }
        }
    }

    #[test]
    fn test_determinism() {
        // Two rounds with the same seed and inputs stay in lockstep
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                down: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                left: true,
                up: true,
                ..Default::default()
            },
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.balls.len(), state2.balls.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.pursuer.pos, state2.pursuer.pos);
        assert_eq!(state1.player.score, state2.player.score);
        assert_eq!(state1.pursuer.score, state2.pursuer.score);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scores_never_decrease(
                seed in 0u64..1000,
                moves in proptest::collection::vec(
                    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
                    1..300,
                ),
            ) {
                let mut state = playing_state(seed);
                let mut player_score = 0;
                let mut pursuer_score = 0;
                for (l, r, u, d) in moves {
                    let input = TickInput {
                        left: l,
                        right: r,
                        up: u,
                        down: d,
                        ..Default::default()
                    };
                    tick(&mut state, &input);
                    prop_assert!(state.player.score >= player_score);
                    prop_assert!(state.pursuer.score >= pursuer_score);
                    player_score = state.player.score;
                    pursuer_score = state.pursuer.score;
                }
            }
        }
    }
}
