//! Game controller
//!
//! Owns the simulation, the frame scheduler and the high score, and turns
//! simulation events into HUD notifications. Platform code only forwards
//! input and frame times and draws whatever `draw_list` returns.

use crate::highscores::{HighScore, ScoreStore};
use crate::renderer::{DrawRect, build_frame};
use crate::sim::{FixedStep, GameEvent, GamePhase, GameState, TickInput};
use crate::tuning::Tuning;

/// HUD notifications (score text, game over overlay)
pub trait Hud {
    /// Score or best score changed
    fn score_changed(&mut self, score: u32, high_score: u32);
    /// Run ended; show the overlay with the final score
    fn game_over(&mut self, final_score: u32);
    /// New run started; hide the overlay
    fn reset(&mut self);
}

pub struct Game<S: ScoreStore, H: Hud> {
    state: GameState,
    scheduler: FixedStep,
    input: TickInput,
    high_score: HighScore,
    store: S,
    hud: H,
}

impl<S: ScoreStore, H: Hud> Game<S, H> {
    /// Load the best score and start the first run
    pub fn new(tuning: Tuning, store: S, hud: H) -> Self {
        let high_score = HighScore::load(&store);
        let mut game = Self {
            state: GameState::new(tuning),
            scheduler: FixedStep::default(),
            input: TickInput::default(),
            high_score,
            store,
            hud,
        };
        game.restart();
        game
    }

    /// Player tapped/clicked: drop on the next tick
    ///
    /// Returns true when the tap is meaningful for the current phase.
    pub fn activate(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Swinging => {
                self.input.drop = true;
                true
            }
            GamePhase::Dropping => true,
            GamePhase::Waiting | GamePhase::GameOver => false,
        }
    }

    /// Throw away the current run and start a new one
    pub fn restart(&mut self) {
        self.state.reset();
        self.scheduler.reset();
        self.input = TickInput::default();
        self.hud.reset();
        self.dispatch_events();
        log::info!("New run started");
    }

    /// Advance by one display frame of `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        self.scheduler
            .advance(&mut self.state, &mut self.input, dt);
        self.dispatch_events();
    }

    /// Rectangles to draw this frame
    pub fn draw_list(&self) -> Vec<DrawRect> {
        build_frame(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } => {
                    if self.high_score.record(score, &self.store) {
                        log::info!("New high score: {}", score);
                    }
                    self.hud.score_changed(score, self.high_score.best);
                }
                GameEvent::BlockPlaced { width } => {
                    log::debug!("Block placed, width {:.1}", width);
                }
                GameEvent::GameOver { score } => {
                    log::info!("Game over with score {}", score);
                    self.hud.game_over(score);
                }
            }
        }
    }
}
