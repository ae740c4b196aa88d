use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::{
    centered_text, AttributedText, Canvas, Color, Label, MonospaceMeasurer, Point, Rect,
    RoundedRect, TextMeasurer, TraitCollection, Transform, View, ViewState,
};

/// Proportions of the card's geometry. Everything scales with the bounds'
/// height, so a card looks the same at any size.
struct SizeRatio;

impl SizeRatio {
    const CORNER_FONT_SIZE_TO_BOUNDS_HEIGHT: f64 = 0.085;
    const CORNER_RADIUS_TO_BOUNDS_HEIGHT: f64 = 0.06;
    const CORNER_OFFSET_TO_CORNER_RADIUS: f64 = 0.33;
}

/// The display text of a rank: `A`, `2` to `10`, `J`, `Q`, `K`.
///
/// Anything outside `1..=13` is shown as `?`.
pub fn rank_string(rank: i32) -> String {
    match rank {
        1 => String::from("A"),
        2..=10 => rank.to_string(),
        11 => String::from("J"),
        12 => String::from("Q"),
        13 => String::from("K"),
        _ => String::from("?"),
    }
}

/// A view showing a single playing card: a white rounded card face with the
/// rank and suit in the upper-left corner and, upside down, in the
/// lower-right corner.
///
/// Setting a property only marks the view as needing layout and display; the
/// host runs the passes with [`layout_if_needed`](crate::layout_if_needed) and
/// [`display_if_needed`](crate::display_if_needed) before the next frame.
#[derive(Clone, Debug)]
pub struct CardView<M = MonospaceMeasurer> {
    view: ViewState,
    rank: i32,
    suit: String,
    is_face_up: bool,
    upper_left_corner_label: Label,
    lower_right_corner_label: Label,
    measurer: M,
}

impl CardView {
    pub fn new(bounds: Rect) -> Self {
        Self::with_measurer(bounds, MonospaceMeasurer::default())
    }
}

impl<M: TextMeasurer> CardView<M> {
    /// Creates a card showing the five of hearts, face up.
    pub fn with_measurer(bounds: Rect, measurer: M) -> Self {
        Self {
            view: ViewState::new(bounds),
            rank: 5,
            suit: String::from("♥️"),
            is_face_up: true,
            upper_left_corner_label: create_corner_label(),
            lower_right_corner_label: create_corner_label(),
            measurer,
        }
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn suit(&self) -> &str {
        &self.suit
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn set_rank(&mut self, rank: i32) {
        if self.rank != rank {
            self.rank = rank;
            self.property_changed();
        }
    }

    pub fn set_suit(&mut self, suit: impl Into<String>) {
        let suit = suit.into();
        if self.suit != suit {
            self.suit = suit;
            self.property_changed();
        }
    }

    pub fn set_face_up(&mut self, is_face_up: bool) {
        if self.is_face_up != is_face_up {
            self.is_face_up = is_face_up;
            self.property_changed();
        }
    }

    pub fn corner_radius(&self) -> f64 {
        self.bounds().height() * SizeRatio::CORNER_RADIUS_TO_BOUNDS_HEIGHT
    }

    pub fn corner_offset(&self) -> f64 {
        self.corner_radius() * SizeRatio::CORNER_OFFSET_TO_CORNER_RADIUS
    }

    /// Font size of the corner text, before scaling for the preferred text size.
    pub fn corner_font_size(&self) -> f64 {
        self.bounds().height() * SizeRatio::CORNER_FONT_SIZE_TO_BOUNDS_HEIGHT
    }

    pub fn upper_left_corner_label(&self) -> &Label {
        &self.upper_left_corner_label
    }

    pub fn lower_right_corner_label(&self) -> &Label {
        &self.lower_right_corner_label
    }

    pub fn corner_labels(&self) -> [&Label; 2] {
        [&self.upper_left_corner_label, &self.lower_right_corner_label]
    }

    fn corner_text(&self) -> AttributedText {
        centered_text(
            &format!("{}\n{}", rank_string(self.rank), self.suit),
            self.corner_font_size(),
            self.view.trait_collection().preferred_content_size,
        )
    }

    fn property_changed(&mut self) {
        trace!(rank = self.rank, suit = %self.suit, face_up = self.is_face_up, "Card changed");
        self.view.set_needs_layout();
        self.view.set_needs_display();
    }
}

impl<M: TextMeasurer> View for CardView<M> {
    fn view_state(&self) -> &ViewState {
        &self.view
    }

    fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    fn layout_subviews(&mut self) {
        let corner_text = self.corner_text();
        let offset = self.corner_offset();
        let bounds = self.bounds();

        for label in [
            &mut self.upper_left_corner_label,
            &mut self.lower_right_corner_label,
        ] {
            configure_corner_label(label, &corner_text, self.is_face_up, &self.measurer);
        }

        self.upper_left_corner_label.frame.origin = bounds.origin.offset_by(offset, offset);

        // Anchor at the opposite corner and rotate in place, so no translation
        // is needed on top of the rotation.
        let lower_right = &mut self.lower_right_corner_label;
        lower_right.frame.origin = Point::new(bounds.max_x(), bounds.max_y())
            .offset_by(-offset, -offset)
            .offset_by(-lower_right.frame.width(), -lower_right.frame.height());
        lower_right.transform = Transform::identity().rotated(PI);
    }

    fn draw(&self, _rect: Rect, canvas: &mut dyn Canvas) {
        let rounded_rect = RoundedRect::new(self.bounds(), self.corner_radius());
        canvas.add_clip(&rounded_rect);
        canvas.fill(&rounded_rect, Color::WHITE);
    }

    fn trait_collection_did_change(&mut self, previous: Option<&TraitCollection>) {
        self.view.trait_collection_did_change(previous);
        debug!(
            content_size = ?self.view.trait_collection().preferred_content_size,
            "Preferred text size changed, relayouting card"
        );
        self.view.set_needs_layout();
        self.view.set_needs_display();
    }
}

fn create_corner_label() -> Label {
    Label {
        number_of_lines: 0,
        ..Label::new()
    }
}

fn configure_corner_label(
    label: &mut Label,
    text: &AttributedText,
    is_face_up: bool,
    measurer: &impl TextMeasurer,
) {
    label.text = Some(text.clone());
    label.size_to_fit(measurer);
    label.is_hidden = !is_face_up;
}
