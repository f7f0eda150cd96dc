//! Per-frame scene assembly
//!
//! Turns a `GameState` into one triangle list in logical coordinates and maps
//! that list into normalized device coordinates for the current window.

use glam::Vec2;

use super::shapes::{CIRCLE_SEGMENTS, circle_into, rect_into};
use super::vertex::{Vertex, colors};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::GameState;

/// Build the frame: play-field background, ball, paddle, then each block
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let circle_len = (CIRCLE_SEGMENTS * 3) as usize;
    let mut vertices = Vec::with_capacity(circle_len + 6 * (state.blocks.len() + 2));

    rect_into(
        &mut vertices,
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        colors::BACKGROUND,
    );
    circle_into(
        &mut vertices,
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    );
    rect_into(
        &mut vertices,
        state.paddle.pos,
        state.paddle.size,
        colors::PADDLE,
    );
    for block in &state.blocks {
        rect_into(&mut vertices, block.pos, block.size, colors::BLOCK);
    }

    vertices
}

/// Map a logical point (origin top-left, y down) to NDC for a window of
/// `size` pixels, letterboxing to keep the 16:9 aspect.
pub fn logical_to_ndc(point: [f32; 2], size: (u32, u32)) -> [f32; 2] {
    let (w, h) = (size.0.max(1) as f32, size.1.max(1) as f32);
    let window_aspect = w / h;
    let game_aspect = SCREEN_WIDTH / SCREEN_HEIGHT;

    let (sx, sy) = if window_aspect > game_aspect {
        // Wider than the game: bars left and right
        (game_aspect / window_aspect, 1.0)
    } else {
        // Taller than the game: bars top and bottom
        (1.0, window_aspect / game_aspect)
    };

    let x = (point[0] / SCREEN_WIDTH) * 2.0 - 1.0;
    let y = 1.0 - (point[1] / SCREEN_HEIGHT) * 2.0;
    [x * sx, y * sy]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-5 && (a[1] - b[1]).abs() < 1e-5
    }

    #[test]
    fn test_fresh_frame_has_every_entity() {
        let state = GameState::new();
        let vertices = build_frame(&state);
        let expected = 6 + (CIRCLE_SEGMENTS * 3) as usize + 6 + 55 * 6;
        assert_eq!(vertices.len(), expected);

        let blocks = vertices.iter().filter(|v| v.color == colors::BLOCK).count();
        assert_eq!(blocks, 55 * 6);
    }

    #[test]
    fn test_destroyed_blocks_are_not_drawn() {
        let mut state = GameState::new();
        state.blocks.truncate(2);
        let vertices = build_frame(&state);
        let blocks = vertices.iter().filter(|v| v.color == colors::BLOCK).count();
        assert_eq!(blocks, 12);
    }

    #[test]
    fn test_ndc_exact_aspect_fills_window() {
        let size = (800, 450);
        assert!(close(logical_to_ndc([0.0, 0.0], size), [-1.0, 1.0]));
        assert!(close(logical_to_ndc([800.0, 450.0], size), [1.0, -1.0]));
        assert!(close(logical_to_ndc([400.0, 225.0], size), [0.0, 0.0]));
    }

    #[test]
    fn test_ndc_wide_window_letterboxes_sides() {
        // 32:9 window: play area spans half the width
        let size = (1600, 450);
        assert!(close(logical_to_ndc([0.0, 0.0], size), [-0.5, 1.0]));
        assert!(close(logical_to_ndc([800.0, 450.0], size), [0.5, -1.0]));
    }

    #[test]
    fn test_ndc_tall_window_letterboxes_top_bottom() {
        let size = (800, 900);
        assert!(close(logical_to_ndc([0.0, 0.0], size), [-1.0, 0.5]));
    }

    #[test]
    fn test_ndc_zero_size_does_not_panic() {
        let p = logical_to_ndc([400.0, 225.0], (0, 0));
        assert!(p[0].is_finite() && p[1].is_finite());
    }
}
