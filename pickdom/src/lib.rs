pub mod animation;
pub mod event;
pub mod markup;
pub mod metrics;
pub mod text;

pub use animation::{ScrollAnimation, ScrollStep};
pub use event::{Event, FocusTarget, Hit, Key, Modifiers};
pub use markup::{escape, ClassList};
pub use metrics::{is_scrolled_into_view, scroll_target, Bounds, Direction, ScrollMetrics, Viewport};
pub use text::{TextEdit, TextField};
