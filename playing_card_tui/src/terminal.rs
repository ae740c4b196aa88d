//! Drawing a [`CardView`] into a terminal buffer.
//!
//! The card lives in points; one terminal cell is [`CELL_WIDTH`] by
//! [`CELL_HEIGHT`] points.

use playing_card::{
    AttributedText, CardView, DrawCommand, Label, RecordingCanvas, Size, TextAlignment,
    TextMeasurer,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Width over height of a poker card.
const CARD_ASPECT_RATIO: f64 = 5.0 / 7.0;

/// Corners rounder than this get a rounded border; smaller radii don't show
/// at cell resolution.
const MIN_VISIBLE_CORNER_RADIUS: f64 = CELL_WIDTH / 2.0;

/// Measures text the way the terminal renders it: every line takes its
/// display width in cells and one cell row. Terminal fonts can't scale, so
/// the font size is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalMeasurer;

impl TextMeasurer for TerminalMeasurer {
    fn measure(&self, text: &AttributedText) -> Size {
        let (num_lines, max_width) = text.lines().fold((0usize, 0usize), |(n, max), line| {
            (n + 1, max.max(Span::raw(line).width()))
        });
        Size::new(
            max_width as f64 * CELL_WIDTH,
            num_lines as f64 * CELL_HEIGHT,
        )
    }
}

/// The largest card-shaped area that fits into `area`, centered in it.
pub fn card_area(area: Rect) -> Rect {
    let points_to_cells = CELL_HEIGHT / CELL_WIDTH;
    let mut height = area.height;
    let mut width = (height as f64 * points_to_cells * CARD_ASPECT_RATIO).round() as u16;
    if width > area.width {
        width = area.width;
        height = (width as f64 / points_to_cells / CARD_ASPECT_RATIO).round() as u16;
        height = height.min(area.height);
    }
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The bounds, in points, of a view covering `area`.
pub fn bounds_in_points(area: Rect) -> playing_card::Rect {
    playing_card::Rect::new(
        0.0,
        0.0,
        area.width as f64 * CELL_WIDTH,
        area.height as f64 * CELL_HEIGHT,
    )
}

/// The cells covered by `rect`, a rectangle in the coordinates of a view
/// placed at `origin`. Clamped to the cells of `origin`.
fn to_cells(rect: &playing_card::Rect, origin: Rect) -> Rect {
    let x = (rect.min_x() / CELL_WIDTH).round().max(0.0) as u16;
    let y = (rect.min_y() / CELL_HEIGHT).round().max(0.0) as u16;
    let right = (rect.max_x() / CELL_WIDTH).round().max(0.0) as u16;
    let bottom = (rect.max_y() / CELL_HEIGHT).round().max(0.0) as u16;
    Rect {
        x: origin.x.saturating_add(x),
        y: origin.y.saturating_add(y),
        width: right.saturating_sub(x),
        height: bottom.saturating_sub(y),
    }
    .intersection(origin)
}

fn to_terminal_color(color: playing_card::Color) -> Color {
    if color.alpha == 0.0 {
        return Color::Reset;
    }
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(channel(color.red), channel(color.green), channel(color.blue))
}

/// Renders a card view: the recorded drawing of its face first, its visible
/// corner labels on top.
pub struct CardWidget<'a, M> {
    pub card: &'a CardView<M>,
    /// What the card drew in its last display pass.
    pub backing: &'a RecordingCanvas,
}

impl<M: TextMeasurer> Widget for CardWidget<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        replay(self.backing, area, buf);
        for label in self.card.corner_labels() {
            if !label.is_hidden {
                render_label(label, area, buf);
            }
        }
    }
}

fn replay(backing: &RecordingCanvas, area: Rect, buf: &mut Buffer) {
    let mut clip = area;
    for command in backing.commands() {
        match command {
            DrawCommand::AddClip(shape) => {
                clip = clip.intersection(to_cells(&shape.rect, area));
            }
            DrawCommand::Fill(shape, color) => {
                let target = to_cells(&shape.rect, area).intersection(clip);
                if target.is_empty() {
                    continue;
                }
                let border_type = if shape.corner_radius >= MIN_VISIBLE_CORNER_RADIUS {
                    BorderType::Rounded
                } else {
                    BorderType::Plain
                };
                Block::new()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .style(Style::new().bg(to_terminal_color(*color)).fg(Color::Black))
                    .render(target, buf);
            }
        }
    }
}

/// The cells a label occupies. Corner offsets are smaller than a cell, so
/// labels are pushed inside the card's border instead of overwriting it.
fn label_cells(label: &Label, area: Rect) -> Rect {
    let frame = to_cells(&label.frame, area);
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let x = frame.x.min(inner.right().saturating_sub(frame.width)).max(inner.x);
    let y = frame.y.min(inner.bottom().saturating_sub(frame.height)).max(inner.y);
    Rect { x, y, ..frame }.intersection(inner)
}

/// Draws the label's lines into its frame. A label turned upside down shows
/// its lines bottom to top; the glyphs themselves stay upright.
fn render_label(label: &Label, area: Rect, buf: &mut Buffer) {
    let Some(text) = &label.text else {
        return;
    };
    let frame = label_cells(label, area);
    let mut lines = label.visible_lines();
    if label.transform.is_upside_down() {
        lines.reverse();
    }
    let style = Style::new().fg(Color::Black).bg(Color::White);
    for (row, line) in lines.into_iter().enumerate() {
        let y = frame.y + row as u16;
        if y >= frame.bottom() {
            break;
        }
        let line_width = Span::raw(line).width() as u16;
        let slack = frame.width.saturating_sub(line_width);
        let indent = match text.alignment {
            TextAlignment::Left => 0,
            TextAlignment::Center => slack / 2,
            TextAlignment::Right => slack,
        };
        let x = frame.x + indent;
        if x < frame.right() {
            buf.set_stringn(x, y, line, (frame.right() - x) as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use playing_card::{display_if_needed, layout_if_needed, set_bounds};

    use super::*;

    fn render_card(card: &mut CardView<TerminalMeasurer>, area: Rect) -> Buffer {
        set_bounds(card, bounds_in_points(area));
        layout_if_needed(card);
        let mut backing = RecordingCanvas::new();
        display_if_needed(card, &mut backing);
        let mut buf = Buffer::empty(area);
        CardWidget {
            card,
            backing: &backing,
        }
        .render(area, &mut buf);
        buf
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.get(x, y).symbol()
    }

    #[test]
    fn card_area_is_card_shaped_and_centered() {
        let area = card_area(Rect::new(0, 0, 100, 28));
        assert_eq!(area.height, 28);
        assert_eq!(area.width, 40);
        assert_eq!(area.x, 30);

        let narrow = card_area(Rect::new(0, 0, 20, 40));
        assert_eq!(narrow.width, 20);
        assert_eq!(narrow.height, 14);
        assert_eq!(narrow.y, 13);
    }

    #[test]
    fn measurer_uses_cells() {
        let text = playing_card::centered_text("10\n♠", 42.0, Default::default());
        assert_eq!(TerminalMeasurer.measure(&text), Size::new(16.0, 32.0));
    }

    #[test]
    fn face_up_card_shows_both_corners() {
        let area = Rect::new(0, 0, 20, 14);
        let mut card = CardView::with_measurer(bounds_in_points(area), TerminalMeasurer);
        card.set_rank(12);
        card.set_suit("♠");
        let buf = render_card(&mut card, area);

        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 19, 13), "╯");

        let upper_left = label_cells(card.upper_left_corner_label(), area);
        assert_eq!((upper_left.x, upper_left.y), (1, 1));
        assert_eq!(symbol(&buf, upper_left.x, upper_left.y), "Q");
        assert_eq!(symbol(&buf, upper_left.x, upper_left.y + 1), "♠");

        let lower_right = label_cells(card.lower_right_corner_label(), area);
        assert_eq!((lower_right.x, lower_right.y), (18, 11));
        assert_eq!(symbol(&buf, lower_right.x, lower_right.y), "♠");
        assert_eq!(symbol(&buf, lower_right.x, lower_right.y + 1), "Q");
    }

    #[test]
    fn face_down_card_is_blank() {
        let area = Rect::new(0, 0, 20, 14);
        let mut card = CardView::with_measurer(bounds_in_points(area), TerminalMeasurer);
        card.set_rank(1);
        card.set_face_up(false);
        let buf = render_card(&mut card, area);
        for y in 1..13 {
            for x in 1..19 {
                assert_eq!(symbol(&buf, x, y), " ");
            }
        }
    }
}
