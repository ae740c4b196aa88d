//! A minimal retained-view model: views mark themselves as needing layout or
//! display, and the host runs the pending passes once per frame.

use tracing::trace;

use crate::{Canvas, ContentSize, RecordingCanvas, Rect};

/// The environment a view is displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraitCollection {
    pub preferred_content_size: ContentSize,
}

/// Bookkeeping shared by every view.
#[derive(Clone, Debug)]
pub struct ViewState {
    bounds: Rect,
    trait_collection: TraitCollection,
    needs_layout: bool,
    needs_display: bool,
    layout_passes: usize,
    display_passes: usize,
    trait_changes: usize,
}

impl ViewState {
    /// A fresh view has to be laid out and drawn once before it is shown.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            trait_collection: TraitCollection::default(),
            needs_layout: true,
            needs_display: true,
            layout_passes: 0,
            display_passes: 0,
            trait_changes: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn trait_collection(&self) -> TraitCollection {
        self.trait_collection
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// How many layout passes have run so far.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// How many display passes have run so far.
    pub fn display_passes(&self) -> usize {
        self.display_passes
    }

    /// How many trait changes reached the base hook.
    pub fn trait_changes(&self) -> usize {
        self.trait_changes
    }

    /// The base reaction to a trait change. Overrides of
    /// [`View::trait_collection_did_change`] must call this first.
    pub fn trait_collection_did_change(&mut self, previous: Option<&TraitCollection>) {
        self.trait_changes += 1;
        trace!(
            previous = ?previous.map(|t| t.preferred_content_size),
            current = ?self.trait_collection.preferred_content_size,
            "Trait collection changed"
        );
    }
}

pub trait View {
    fn view_state(&self) -> &ViewState;
    fn view_state_mut(&mut self) -> &mut ViewState;

    fn bounds(&self) -> Rect {
        self.view_state().bounds()
    }

    /// Positions the view's children for the current bounds.
    fn layout_subviews(&mut self) {}

    /// Draws the view's own content. `rect` is the area to redraw.
    fn draw(&self, _rect: Rect, _canvas: &mut dyn Canvas) {}

    fn trait_collection_did_change(&mut self, previous: Option<&TraitCollection>) {
        self.view_state_mut().trait_collection_did_change(previous);
    }
}

/// Moves or resizes the view. Any actual change requires a new layout and a
/// redraw.
pub fn set_bounds(view: &mut impl View, bounds: Rect) {
    let state = view.view_state_mut();
    if state.bounds == bounds {
        return;
    }
    trace!(?bounds, "Bounds changed");
    state.bounds = bounds;
    state.set_needs_layout();
    state.set_needs_display();
}

/// Delivers a new environment to the view.
pub fn set_trait_collection(view: &mut impl View, trait_collection: TraitCollection) {
    let previous = view.view_state().trait_collection;
    if previous == trait_collection {
        return;
    }
    view.view_state_mut().trait_collection = trait_collection;
    view.trait_collection_did_change(Some(&previous));
}

/// Runs a layout pass if one was requested. Returns whether it ran.
pub fn layout_if_needed(view: &mut impl View) -> bool {
    if !view.view_state().needs_layout {
        return false;
    }
    view.view_state_mut().needs_layout = false;
    view.layout_subviews();
    view.view_state_mut().layout_passes += 1;
    true
}

/// Redraws the view into `backing` if a redraw was requested, replacing its
/// previous content. Returns whether it ran.
pub fn display_if_needed(view: &mut impl View, backing: &mut RecordingCanvas) -> bool {
    if !view.view_state().needs_display {
        return false;
    }
    view.view_state_mut().needs_display = false;
    backing.clear();
    let bounds = view.bounds();
    view.draw(bounds, backing);
    view.view_state_mut().display_passes += 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, RoundedRect};

    struct Plain {
        state: ViewState,
    }

    impl View for Plain {
        fn view_state(&self) -> &ViewState {
            &self.state
        }

        fn view_state_mut(&mut self) -> &mut ViewState {
            &mut self.state
        }

        fn draw(&self, rect: Rect, canvas: &mut dyn Canvas) {
            canvas.fill(&RoundedRect::new(rect, 0.0), Color::BLACK);
        }
    }

    fn plain() -> Plain {
        Plain {
            state: ViewState::new(Rect::new(0.0, 0.0, 10.0, 10.0)),
        }
    }

    #[test]
    fn fresh_view_runs_each_pass_once() {
        let mut view = plain();
        let mut backing = RecordingCanvas::new();
        assert!(layout_if_needed(&mut view));
        assert!(display_if_needed(&mut view, &mut backing));
        assert!(!layout_if_needed(&mut view));
        assert!(!display_if_needed(&mut view, &mut backing));
        assert_eq!(view.state.layout_passes(), 1);
        assert_eq!(view.state.display_passes(), 1);
        assert_eq!(backing.commands().len(), 1);
    }

    #[test]
    fn redraw_replaces_backing_content() {
        let mut view = plain();
        let mut backing = RecordingCanvas::new();
        display_if_needed(&mut view, &mut backing);
        set_bounds(&mut view, Rect::new(0.0, 0.0, 20.0, 20.0));
        display_if_needed(&mut view, &mut backing);
        assert_eq!(
            backing.commands(),
            &[crate::DrawCommand::Fill(
                RoundedRect::new(Rect::new(0.0, 0.0, 20.0, 20.0), 0.0),
                Color::BLACK
            )]
        );
    }

    #[test]
    fn unchanged_bounds_do_not_invalidate() {
        let mut view = plain();
        layout_if_needed(&mut view);
        set_bounds(&mut view, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!view.state.needs_layout());
    }

    #[test]
    fn default_trait_hook_reaches_base() {
        let mut view = plain();
        set_trait_collection(
            &mut view,
            TraitCollection {
                preferred_content_size: ContentSize::ExtraLarge,
            },
        );
        set_trait_collection(
            &mut view,
            TraitCollection {
                preferred_content_size: ContentSize::ExtraLarge,
            },
        );
        assert_eq!(view.state.trait_changes(), 1);
        assert_eq!(
            view.state.trait_collection().preferred_content_size,
            ContentSize::ExtraLarge
        );
    }
}
