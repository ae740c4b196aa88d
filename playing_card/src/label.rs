use crate::{AttributedText, Rect, Size, TextMeasurer, Transform};

/// A text element owned by a view.
#[derive(Clone, Debug, Default)]
pub struct Label {
    pub text: Option<AttributedText>,
    /// Position and size in the owning view's coordinates, before `transform`.
    pub frame: Rect,
    /// Applied around the center of `frame`.
    pub transform: Transform,
    pub is_hidden: bool,
    /// Maximum number of lines to render; zero means no limit.
    pub number_of_lines: usize,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes the frame to the natural size of the text, keeping its origin.
    pub fn size_to_fit(&mut self, measurer: &impl TextMeasurer) {
        let size = match &self.text {
            Some(text) => measurer.measure(&self.visible_text(text)),
            None => Size::ZERO,
        };
        self.frame.size = size;
    }

    /// The lines that are actually rendered, honoring `number_of_lines`.
    pub fn visible_lines(&self) -> Vec<&str> {
        let Some(text) = &self.text else {
            return Vec::new();
        };
        let lines = text.lines();
        if self.number_of_lines == 0 {
            lines.collect()
        } else {
            lines.take(self.number_of_lines).collect()
        }
    }

    fn visible_text(&self, text: &AttributedText) -> AttributedText {
        AttributedText {
            string: self.visible_lines().join("\n"),
            ..text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{centered_text, ContentSize, MonospaceMeasurer, Point};

    #[test]
    fn size_to_fit_keeps_origin() {
        let mut label = Label::new();
        label.frame = Rect::new(3.0, 4.0, 500.0, 500.0);
        label.text = Some(centered_text("J\n♦", 10.0, ContentSize::Large));
        label.size_to_fit(&MonospaceMeasurer::default());
        assert_eq!(label.frame.origin, Point::new(3.0, 4.0));
        assert!((label.frame.width() - 6.0).abs() < 1e-9);
        assert!((label.frame.height() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn line_limit() {
        let mut label = Label::new();
        label.text = Some(centered_text("A\nB\nC", 10.0, ContentSize::Large));
        assert_eq!(label.visible_lines(), vec!["A", "B", "C"]);
        label.number_of_lines = 1;
        assert_eq!(label.visible_lines(), vec!["A"]);
        label.size_to_fit(&MonospaceMeasurer::default());
        assert!((label.frame.height() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn no_text_fits_to_zero() {
        let mut label = Label::new();
        label.frame = Rect::new(1.0, 1.0, 9.0, 9.0);
        label.size_to_fit(&MonospaceMeasurer::default());
        assert_eq!(label.frame.size, Size::ZERO);
    }
}
