//! Render adapter
//!
//! Pure translation from a [`GameState`] snapshot to an ordered list of draw
//! commands. The host owns the actual canvas; it either consumes the command
//! list or implements [`RenderSurface`] and lets [`present`] replay a frame
//! between `begin_frame`/`end_frame` so it appears as a single paint.

use crate::sim::GameState;

/// CSS colors of the classic palette
mod palette {
    pub const BACKGROUND: &str = "#1b1f24";
    pub const BRICK: &str = "#4ade80";
    pub const PADDLE: &str = "#60a5fa";
    pub const BALL: &str = "#facc15";
    pub const TEXT: &str = "#f8fafc";
}

pub const HUD_FONT: &str = "16px sans-serif";
pub const OVERLAY_FONT: &str = "26px sans-serif";

/// One primitive draw operation, in the host canvas's coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        r: f32,
        color: &'static str,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: &'static str,
    },
}

/// Build the draw-command sequence for one frame.
///
/// Stateless and read-only with respect to the simulation; the order is
/// fixed: clear, background, alive bricks, paddle, ball, score label, and
/// the terminal overlay when the game has ended.
pub fn render(state: &GameState) -> Vec<DrawCmd> {
    let config = &state.config;
    let mut cmds = Vec::with_capacity(state.bricks.len() + 8);

    cmds.push(DrawCmd::Clear);
    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: 0.0,
        w: config.width,
        h: config.height,
        color: palette::BACKGROUND,
    });

    for brick in state.bricks.iter().filter(|b| b.alive) {
        cmds.push(DrawCmd::FillRect {
            x: brick.x,
            y: brick.y,
            w: brick.width,
            h: brick.height,
            color: palette::BRICK,
        });
    }

    cmds.push(DrawCmd::FillRect {
        x: state.paddle.x,
        y: state.paddle_top(),
        w: state.paddle.width,
        h: state.paddle.height,
        color: palette::PADDLE,
    });

    cmds.push(DrawCmd::FillCircle {
        cx: state.ball.pos.x,
        cy: state.ball.pos.y,
        r: state.ball.radius,
        color: palette::BALL,
    });

    cmds.push(DrawCmd::FillText {
        text: format!("Score: {}", state.score),
        x: 12.0,
        y: 20.0,
        font: HUD_FONT,
        color: palette::TEXT,
    });

    if state.game_over {
        let message = if state.win { "You win!" } else { "Game over" };
        cmds.push(DrawCmd::FillText {
            text: message.to_string(),
            x: config.width / 2.0 - 60.0,
            y: config.height / 2.0,
            font: OVERLAY_FONT,
            color: palette::TEXT,
        });
        cmds.push(DrawCmd::FillText {
            text: "Press reset to play again.".to_string(),
            x: config.width / 2.0 - 95.0,
            y: config.height / 2.0 + 30.0,
            font: HUD_FONT,
            color: palette::TEXT,
        });
    }

    cmds
}

/// Host-side canvas contract.
///
/// One frame's primitives are delivered between `begin_frame` and
/// `end_frame`; the surface must flush them atomically to avoid tearing.
pub trait RenderSurface {
    fn begin_frame(&mut self) {}
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
    fn end_frame(&mut self) {}
}

/// Replay one frame's command list onto a surface as a single paint.
pub fn present<S: RenderSurface>(surface: &mut S, cmds: &[DrawCmd]) {
    surface.begin_frame();
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear => surface.clear(),
            DrawCmd::FillRect { x, y, w, h, color } => surface.fill_rect(*x, *y, *w, *h, color),
            DrawCmd::FillCircle { cx, cy, r, color } => surface.fill_circle(*cx, *cy, *r, color),
            DrawCmd::FillText {
                text,
                x,
                y,
                font,
                color,
            } => surface.fill_text(text, *x, *y, font, color),
        }
    }
    surface.end_frame();
}
