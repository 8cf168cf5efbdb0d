use pickdom::{Bounds, ScrollMetrics, Viewport};

use crate::model::{ChoiceId, PassedElement};
use crate::render::{Frame, RetainedView};

/// The environment a picker is mounted in.
///
/// The picker never touches a document or terminal itself. It asks the
/// host for layout measurements and hands it a [`Frame`] to draw whenever
/// its state changes.
pub trait Host {
    /// Whether this host can run a picker at all. When false the picker
    /// stays inert.
    fn supports(&self) -> bool {
        true
    }

    /// Placement of the dropdown within the window, used to decide flipping
    fn viewport(&self) -> Viewport;

    /// Scroll position and visible height of the choice list
    fn dropdown_metrics(&self) -> ScrollMetrics;

    /// Position of a rendered choice within the choice list, if rendered
    fn choice_bounds(&self, id: ChoiceId) -> Option<Bounds>;

    fn set_scroll_top(&mut self, scroll_top: i32);

    fn focus_input(&mut self) {}

    fn blur_input(&mut self) {}

    fn render(&mut self, frame: &Frame);

    /// Restore the original element after `destroy`.
    fn teardown(&mut self, _element: &PassedElement) {}
}

/// Host without a screen: fixed metrics, folds frames into a
/// [`RetainedView`].
#[derive(Debug)]
pub struct HeadlessHost {
    pub viewport: Viewport,
    pub metrics: ScrollMetrics,
    pub scroll_top: i32,
    /// Whether the picker last asked for input focus
    pub input_focused: bool,
    pub frames: usize,
    pub view: RetainedView,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            // Unbounded window, so the dropdown only flips when configured to
            viewport: Viewport {
                window_height: i32::MAX,
                ..Viewport::default()
            },
            metrics: ScrollMetrics::default(),
            scroll_top: 0,
            input_focused: false,
            frames: 0,
            view: RetainedView::default(),
        }
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn dropdown_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top,
            ..self.metrics
        }
    }

    fn choice_bounds(&self, _id: ChoiceId) -> Option<Bounds> {
        None
    }

    fn set_scroll_top(&mut self, scroll_top: i32) {
        self.scroll_top = scroll_top;
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn blur_input(&mut self) {
        self.input_focused = false;
    }

    fn render(&mut self, frame: &Frame) {
        self.frames += 1;
        self.view.apply(frame);
    }
}
