//! macroquad presentation layer
//!
//! Draws read-only snapshots of the round state. Nothing here mutates the
//! sim; the only thing flowing back toward it is the start button hit-test.

use macroquad::prelude::*;

use crate::sim::{GamePhase, GameState};

/// Single font size used for every piece of text
const FONT_SIZE: f32 = 36.0;

/// Menu start button: geometry, hit-testing, drawing
pub struct Button {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: &'static str,
}

impl Button {
    /// The start button, centered horizontally near the bottom of the field
    pub fn start(field_width: f32) -> Self {
        Self {
            x: field_width / 2.0 - 50.0,
            y: 500.0,
            width: 100.0,
            height: 50.0,
            label: "Start",
        }
    }

    /// Strict interior test; clicks on the border do not count
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }

    fn draw(&self) {
        // Outline, then face, then centered label
        draw_rectangle(
            self.x - 2.0,
            self.y - 2.0,
            self.width + 4.0,
            self.height + 4.0,
            BLACK,
        );
        draw_rectangle(self.x, self.y, self.width, self.height, WHITE);
        let dims = measure_text(self.label, None, FONT_SIZE as u16, 1.0);
        draw_text(
            self.label,
            self.x + (self.width - dims.width) / 2.0,
            self.y + (self.height + dims.height) / 2.0,
            FONT_SIZE,
            BLACK,
        );
    }
}

/// Draw one frame for the current phase
pub fn draw(state: &GameState, button: &Button) {
    clear_background(WHITE);
    match state.phase {
        GamePhase::Menu => draw_menu(state, button),
        GamePhase::Playing | GamePhase::Finished => {
            draw_round(state);
            if state.phase == GamePhase::Finished {
                draw_winner(state);
            }
        }
    }
}

fn draw_menu(state: &GameState, button: &Button) {
    let title = "Ball Battle";
    let dims = measure_text(title, None, FONT_SIZE as u16, 1.0);
    draw_text(
        title,
        (state.field().x - dims.width) / 2.0,
        200.0,
        FONT_SIZE,
        BLACK,
    );
    button.draw();
}

fn draw_round(state: &GameState) {
    let player = &state.player;
    draw_rectangle(
        player.pos.x - player.size / 2.0,
        player.pos.y - player.size / 2.0,
        player.size,
        player.size,
        RED,
    );

    let pursuer = &state.pursuer;
    draw_rectangle(
        pursuer.pos.x - pursuer.size / 2.0,
        pursuer.pos.y - pursuer.size / 2.0,
        pursuer.size,
        pursuer.size,
        BLUE,
    );

    for ball in &state.balls {
        draw_circle(ball.pos.x, ball.pos.y, ball.radius, BLACK);
    }

    draw_text(
        &format!("Player Score: {}", player.score),
        10.0,
        30.0,
        FONT_SIZE,
        BLACK,
    );
    let text = format!("Computer Score: {}", pursuer.score);
    let dims = measure_text(&text, None, FONT_SIZE as u16, 1.0);
    draw_text(
        &text,
        state.field().x - dims.width - 10.0,
        30.0,
        FONT_SIZE,
        BLACK,
    );
}

fn draw_winner(state: &GameState) {
    let Some(winner) = state.winner else {
        return;
    };
    let text = format!("{} wins!", winner.as_str());
    let dims = measure_text(&text, None, FONT_SIZE as u16, 1.0);
    let field = state.field();
    draw_text(
        &text,
        (field.x - dims.width) / 2.0,
        field.y / 2.0,
        FONT_SIZE,
        BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_contains_is_strict() {
        let button = Button::start(800.0);
        assert!(button.contains(400.0, 525.0));
        // Border and outside points miss
        assert!(!button.contains(350.0, 525.0));
        assert!(!button.contains(460.0, 525.0));
        assert!(!button.contains(400.0, 600.0));
    }
}
