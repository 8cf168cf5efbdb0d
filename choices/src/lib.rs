pub mod error;
pub mod host;
pub mod machine;
pub mod model;
pub mod options;
pub mod render;
pub mod search;
pub mod store;
pub mod widget;

pub use error::ChoicesError;
pub use host::{HeadlessHost, Host};
pub use options::{ClassNames, Options};
pub use widget::{Choices, ChoicesBuilder, EventOutcome, Lifecycle, Responder};

pub mod prelude {
    pub use crate::error::ChoicesError;
    pub use crate::host::{HeadlessHost, Host};
    pub use crate::machine::{DropdownState, FocusState, SearchState};
    pub use crate::model::{
        Choice, ChoiceId, ElementKind, Group, GroupId, GroupSpec, Item, ItemId, ItemSpec,
        OptionSpec, PassedElement,
    };
    pub use crate::options::{ClassNames, Options};
    pub use crate::render::{DefaultTemplates, DropdownEntry, Frame, RetainedView, Templates};
    pub use crate::search::{FuzzyMatcher, Matcher, SearchField};
    pub use crate::widget::{Choices, ChoicesBuilder, EventOutcome, Lifecycle, Responder};

    pub use pickdom::{Event, FocusTarget, Hit, Key, Modifiers};
}
