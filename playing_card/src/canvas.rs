use crate::Rect;

/// An RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const CLEAR: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }
}

/// A rectangle with all four corners rounded by the same radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f64,
}

impl RoundedRect {
    pub fn new(rect: Rect, corner_radius: f64) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }
}

/// The drawing surface handed to a view's `draw`.
pub trait Canvas {
    /// Intersects the current clipping region with `shape`.
    fn add_clip(&mut self, shape: &RoundedRect);
    fn fill(&mut self, shape: &RoundedRect, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    AddClip(RoundedRect),
    Fill(RoundedRect, Color),
}

/// A canvas that records what is drawn on it, to be replayed by the host.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forgets everything drawn so far. Views redraw their whole content.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn add_clip(&mut self, shape: &RoundedRect) {
        self.commands.push(DrawCommand::AddClip(*shape));
    }

    fn fill(&mut self, shape: &RoundedRect, color: Color) {
        self.commands.push(DrawCommand::Fill(*shape, color));
    }
}
