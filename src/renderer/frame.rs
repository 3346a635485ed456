//! Per-frame draw list
//!
//! `build_frame` turns the current `GameState` into what a backend needs
//! to paint the screen. Nothing here touches a GPU or window.

use glam::Vec2;

use super::shapes::{filled_rect, rect_outline};
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{CompanionKind, Entity, GamePhase, GameState, Rect};

/// Text shown under the victory title
pub const VICTORY_LINES: [&str; 13] = [
    "Congratulations\u{2014}you made it through!",
    "",
    "Self-Care Tips:",
    " \u{2022} Talk openly with someone you trust",
    " \u{2022} Practice deep breathing or meditation",
    " \u{2022} Take a short walk or get fresh air",
    " \u{2022} Journal your thoughts and feelings",
    "",
    "If you ever need more help:",
    " \u{2022} In the US call 988 (Suicide & Crisis Lifeline)",
    " \u{2022} Crisis Text Line: text HOME to 741741",
    " \u{2022} NAMI: https://www.nami.org",
    " \u{2022} Mental Health America: https://mhanational.org",
];

pub const HELPER_PROMPT: &str = "Who do you want to reach out to? 1) Family 2) Friends 3) Pets";
pub const VICTORY_TITLE: &str = "YOU WIN!";

/// Health bar frame (x, y, w, h) and its line width
const HEALTH_BAR: Rect = Rect {
    min: Vec2::new(10.0, 10.0),
    size: Vec2::new(200.0, 20.0),
};
const HEALTH_BAR_BORDER: f32 = 2.0;

const VICTORY_TITLE_Y: f32 = 100.0;
const VICTORY_LINES_Y: f32 = 180.0;
const VICTORY_LINE_HEIGHT: f32 = 37.0;

/// Image assets a backend must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Scaled to fill the screen
    Background,
    Player,
    Companion(CompanionKind),
    /// Outlined text label of an enemy
    Label(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Font sizes in points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn points(&self) -> u32 {
        match self {
            FontSize::Small => 32,
            FontSize::Medium => 48,
            FontSize::Large => 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    /// Text is centred on this point
    pub center: Vec2,
    pub size: FontSize,
    pub color: [f32; 4],
}

/// Everything to draw this frame, painted sprites → vertices → texts
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub sprites: Vec<SpriteDraw>,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextDraw>,
}

impl Frame {
    /// Vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn text(&mut self, text: impl Into<String>, center: Vec2, size: FontSize, color: [f32; 4]) {
        self.texts.push(TextDraw {
            text: text.into(),
            center,
            size,
            color,
        });
    }

    fn sprite(&mut self, kind: SpriteKind, rect: Rect) {
        self.sprites.push(SpriteDraw { kind, rect });
    }
}

/// Build the draw list for the current phase
pub fn build_frame(state: &GameState, settings: &Settings, fps: Option<u32>) -> Frame {
    let mut frame = Frame::default();
    let screen = state.screen_rect();
    let center = screen.center();
    frame.sprite(SpriteKind::Background, screen);

    match state.phase {
        GamePhase::InitialWave => {
            draw_world(&mut frame, state);
            draw_health_bar(&mut frame, state.health_fraction());
        }
        GamePhase::Defeated => {
            if let Some(message) = state.cutscene.message() {
                frame.text(message, center, FontSize::Medium, colors::MESSAGE);
            }
        }
        GamePhase::HelperSelect => {
            frame.text(HELPER_PROMPT, center, FontSize::Medium, colors::MESSAGE);
        }
        GamePhase::SecondWave => {
            draw_world(&mut frame, state);
            let fill = if state.flash && !settings.reduced_motion {
                1.0
            } else {
                state.health_fraction()
            };
            draw_health_bar(&mut frame, fill);
        }
        GamePhase::Victory => {
            frame.text(
                VICTORY_TITLE,
                Vec2::new(center.x, VICTORY_TITLE_Y),
                FontSize::Large,
                colors::VICTORY_TITLE,
            );
            for (i, line) in VICTORY_LINES.iter().enumerate() {
                let y = VICTORY_LINES_Y + i as f32 * VICTORY_LINE_HEIGHT;
                frame.text(*line, Vec2::new(center.x, y), FontSize::Small, colors::MESSAGE);
            }
        }
    }

    if let Some(fps) = fps.filter(|_| settings.show_fps) {
        let pos = Vec2::new(screen.right() - 60.0, 20.0);
        frame.text(format!("{fps} FPS"), pos, FontSize::Small, colors::MESSAGE);
    }

    frame
}

/// Enemies, player, companions, then projectiles on top
fn draw_world(frame: &mut Frame, state: &GameState) {
    for enemy in &state.enemies {
        frame.sprite(SpriteKind::Label(enemy.word), enemy.bounds());
    }
    frame.sprite(SpriteKind::Player, state.player.bounds());
    for companion in &state.companions {
        frame.sprite(SpriteKind::Companion(companion.kind), companion.bounds());
    }
    for shot in &state.projectiles {
        frame.vertices.extend(filled_rect(&shot.bounds(), colors::PROJECTILE));
    }
}

fn draw_health_bar(frame: &mut Frame, fraction: f32) {
    frame
        .vertices
        .extend(rect_outline(&HEALTH_BAR, HEALTH_BAR_BORDER, colors::HEALTH_FRAME));
    let inner_width = HEALTH_BAR.size.x - 2.0 * HEALTH_BAR_BORDER;
    let fill = Rect::new(
        HEALTH_BAR.left() + HEALTH_BAR_BORDER,
        HEALTH_BAR.top() + HEALTH_BAR_BORDER,
        (inner_width * fraction.clamp(0.0, 1.0)).floor(),
        HEALTH_BAR.size.y - 2.0 * HEALTH_BAR_BORDER,
    );
    frame.vertices.extend(filled_rect(&fill, colors::HEALTH_FILL));
}
