use thiserror::Error;

use crate::model::{ChoiceId, ElementKind, ItemId};

/// Errors reported by the picker.
///
/// Only construction and option parsing return these to the caller. The
/// chainable instance methods log them and abort the operation instead, so a
/// bad call never tears down the widget.
#[derive(Debug, Error)]
pub enum ChoicesError {
    #[error("invalid regex filter `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("at least one search field is required")]
    NoSearchFields,

    #[error("{operation}: item {id} does not exist")]
    ItemNotFound { operation: &'static str, id: ItemId },

    #[error("{operation}: choice {id} does not exist")]
    ChoiceNotFound { operation: &'static str, id: ChoiceId },

    #[error("{operation}: no value was passed")]
    MissingValue { operation: &'static str },

    #[error("{operation}: picker is not initialised")]
    NotInitialised { operation: &'static str },

    #[error("{operation} is not supported for {kind} elements")]
    Unsupported {
        operation: &'static str,
        kind: ElementKind,
    },

    #[error("host does not support the picker")]
    UnsupportedHost,
}

impl ChoicesError {
    /// Log a misuse error; used where the failing operation is simply skipped.
    pub(crate) fn report(self) {
        log::error!("{self}");
    }
}
