//=========================================================================
// Graphics Seam
//=========================================================================
//
// Rendering types shared by the engine, scenes, and widgets.
//
// The engine never owns a concrete renderer. Drawing goes through the
// `SpriteBatch` trait so the actual backend (GPU, terminal, headless)
// stays pluggable:
//
//   Engine::draw()
//     ├─ batch.clear(background_color)
//     ├─ batch.begin()
//     ├─ objects/scenes → batch.draw_text() / fill_rect() / fill_gradient()
//     └─ batch.end()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec2;

//=== Color ===============================================================

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);

    /// Creates an opaque color from red/green/blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha component.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linearly interpolates between two colors.
    ///
    /// `t` is clamped to `[0, 1]`; 0 yields `self`, 1 yields `other`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

//=== FrameTime ===========================================================

/// Per-frame timing passed to every update and draw call.
///
/// `total` is the time since the engine started; `delta` is the time since
/// the previous frame. Both are produced by the platform shell once per
/// `RedrawRequested`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTime {
    /// Elapsed time since engine start.
    pub total: Duration,

    /// Elapsed time since the previous frame.
    pub delta: Duration,
}

impl FrameTime {
    /// Creates a frame time from total and delta durations.
    pub fn new(total: Duration, delta: Duration) -> Self {
        Self { total, delta }
    }

    /// Delta time in fractional seconds, convenient for animation math.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total elapsed time in fractional seconds.
    pub fn total_secs(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

//=== SpriteBatch =========================================================

/// Drawing surface consumed by game objects, scenes, and widgets.
///
/// Call order per frame is fixed: `clear` → `begin` → draw calls → `end`.
/// Implementations may buffer internally and submit on `end`.
pub trait SpriteBatch {
    /// Clears the frame buffer to a solid color.
    fn clear(&mut self, color: Color);

    /// Opens the batch for draw calls.
    fn begin(&mut self);

    /// Draws a text label centered at `position`, scaled per axis.
    fn draw_text(&mut self, text: &str, position: Vec2, scale: Vec2, color: Color);

    /// Fills an axis-aligned rectangle given min/max corners.
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Color);

    /// Fills the frame with a vertical gradient.
    fn fill_gradient(&mut self, top: Color, bottom: Color);

    /// Closes the batch and submits buffered draw calls.
    fn end(&mut self);
}

//=== NullBatch ===========================================================

/// Batch that discards every call. Used for headless runs and demos
/// without a rendering backend.
#[derive(Debug, Default)]
pub struct NullBatch;

impl NullBatch {
    pub fn new() -> Self {
        Self
    }
}

impl SpriteBatch for NullBatch {
    fn clear(&mut self, _color: Color) {}
    fn begin(&mut self) {}
    fn draw_text(&mut self, _text: &str, _position: Vec2, _scale: Vec2, _color: Color) {}
    fn fill_rect(&mut self, _min: Vec2, _max: Vec2, _color: Color) {}
    fn fill_gradient(&mut self, _top: Color, _bottom: Color) {}
    fn end(&mut self) {}
}

//=== RecordingBatch ======================================================

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Begin,
    Text {
        text: String,
        position: Vec2,
        scale: Vec2,
        color: Color,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        color: Color,
    },
    Gradient {
        top: Color,
        bottom: Color,
    },
    End,
}

/// Batch that records every call instead of drawing.
///
/// Lets tests (and tooling) assert on exact draw order — the engine's
/// background → scene → foreground contract is verified this way.
#[derive(Debug, Default)]
pub struct RecordingBatch {
    commands: Vec<DrawCommand>,
}

impl RecordingBatch {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clears the recording.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Text labels drawn so far, in call order.
    pub fn text_labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl SpriteBatch for RecordingBatch {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn begin(&mut self) {
        self.commands.push(DrawCommand::Begin);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, scale: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            scale,
            color,
        });
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { min, max, color });
    }

    fn fill_gradient(&mut self, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::Gradient { top, bottom });
    }

    fn end(&mut self) {
        self.commands.push(DrawCommand::End);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
