use serde::{Deserialize, Serialize};

use crate::Size;

/// The system-wide preferred text size, as picked by the user in the
/// accessibility settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContentSize {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

/// Point size of body text at the default [`ContentSize::Large`].
const DEFAULT_BODY_POINT_SIZE: f64 = 17.0;

impl ContentSize {
    /// All categories, smallest first.
    pub const ALL: [ContentSize; 12] = [
        ContentSize::ExtraSmall,
        ContentSize::Small,
        ContentSize::Medium,
        ContentSize::Large,
        ContentSize::ExtraLarge,
        ContentSize::ExtraExtraLarge,
        ContentSize::ExtraExtraExtraLarge,
        ContentSize::AccessibilityMedium,
        ContentSize::AccessibilityLarge,
        ContentSize::AccessibilityExtraLarge,
        ContentSize::AccessibilityExtraExtraLarge,
        ContentSize::AccessibilityExtraExtraExtraLarge,
    ];

    /// Point size of body text in this category.
    pub fn body_point_size(self) -> f64 {
        match self {
            ContentSize::ExtraSmall => 14.0,
            ContentSize::Small => 15.0,
            ContentSize::Medium => 16.0,
            ContentSize::Large => 17.0,
            ContentSize::ExtraLarge => 19.0,
            ContentSize::ExtraExtraLarge => 21.0,
            ContentSize::ExtraExtraExtraLarge => 23.0,
            ContentSize::AccessibilityMedium => 28.0,
            ContentSize::AccessibilityLarge => 33.0,
            ContentSize::AccessibilityExtraLarge => 40.0,
            ContentSize::AccessibilityExtraExtraLarge => 47.0,
            ContentSize::AccessibilityExtraExtraExtraLarge => 53.0,
        }
    }

    /// How much body text is scaled relative to the default category.
    pub fn scale_factor(self) -> f64 {
        self.body_point_size() / DEFAULT_BODY_POINT_SIZE
    }

    /// The next larger category, saturating at the largest one.
    pub fn larger(self) -> Self {
        let idx = self.index();
        ContentSize::ALL[(idx + 1).min(ContentSize::ALL.len() - 1)]
    }

    /// The next smaller category, saturating at the smallest one.
    pub fn smaller(self) -> Self {
        ContentSize::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        ContentSize::ALL
            .iter()
            .position(|&c| c == self)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A string together with the attributes it is rendered with.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText {
    pub string: String,
    pub font_size: f64,
    pub alignment: TextAlignment,
}

impl AttributedText {
    /// The lines of the text. A trailing newline yields a trailing empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.string.split('\n')
    }
}

/// Centered text at `font_size`, scaled for the user's preferred text size.
pub fn centered_text(string: &str, font_size: f64, content_size: ContentSize) -> AttributedText {
    AttributedText {
        string: String::from(string),
        font_size: font_size * content_size.scale_factor(),
        alignment: TextAlignment::Center,
    }
}

/// Measures how much room a piece of text needs when rendered.
pub trait TextMeasurer {
    fn measure(&self, text: &AttributedText) -> Size;
}

/// Measures text as if every character had the same advance.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasurer {
    /// Advance of one character, as a fraction of the font size.
    pub advance_ratio: f64,
    /// Height of one line, as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &AttributedText) -> Size {
        let (num_lines, max_chars) = text
            .lines()
            .fold((0usize, 0usize), |(n, max), line| {
                (n + 1, max.max(line.chars().count()))
            });
        Size {
            width: max_chars as f64 * text.font_size * self.advance_ratio,
            height: num_lines as f64 * text.font_size * self.line_height_ratio,
        }
    }
}
