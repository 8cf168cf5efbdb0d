//! Picker configuration.
//!
//! `Options` holds plain data and deserializes from camelCase JSON, so a
//! host can ship the same options object it would hand to a browser widget.
//! Behaviour that cannot be data (templates, callbacks, matcher) is set on
//! [`ChoicesBuilder`](crate::ChoicesBuilder).

mod class_names;

pub use class_names::ClassNames;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ChoicesError;
use crate::model::{ItemSpec, OptionSpec};
use crate::search::SearchField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Preset items for text inputs
    pub items: Vec<ItemSpec>,
    /// Extra choices for select inputs, added after the element's options
    pub choices: Vec<OptionSpec>,
    /// Maximum number of active items. `None` or `Some(0)` means unlimited.
    pub max_item_count: Option<usize>,
    /// Allow typed values to become items (text inputs)
    pub add_items: bool,
    pub remove_items: bool,
    /// Render a remove button inside each item
    pub remove_item_button: bool,
    /// Backspace on an empty input moves the last item back into the input
    pub edit_items: bool,
    pub duplicate_items: bool,
    /// Separator used when mirroring items into a text input's value
    pub delimiter: String,
    pub paste: bool,
    pub search: bool,
    /// Minimum query length (in chars) before a search runs
    pub search_floor: usize,
    pub search_fields: Vec<SearchField>,
    /// Open the dropdown above the input when there is no room below
    pub flip: bool,
    /// Pattern typed values must match (case-insensitive)
    pub regex_filter: Option<String>,
    /// Sort choices and groups by label when not searching
    pub should_sort: bool,
    pub placeholder: bool,
    pub placeholder_value: Option<String>,
    pub prepend_value: Option<String>,
    pub append_value: Option<String>,
    pub loading_text: String,
    pub no_results_text: String,
    pub no_choices_text: String,
    pub item_select_text: String,
    /// Notice shown while typing an addable value; `{value}` is replaced
    pub add_item_text: String,
    /// Notice shown once the item limit is reached; `{count}` is replaced
    pub max_item_text: String,
    pub unique_item_text: String,
    pub class_names: ClassNames,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            choices: Vec::new(),
            max_item_count: None,
            add_items: true,
            remove_items: true,
            remove_item_button: false,
            edit_items: false,
            duplicate_items: true,
            delimiter: ",".into(),
            paste: true,
            search: true,
            search_floor: 1,
            search_fields: vec![SearchField::Label, SearchField::Value],
            flip: true,
            regex_filter: None,
            should_sort: true,
            placeholder: true,
            placeholder_value: None,
            prepend_value: None,
            append_value: None,
            loading_text: "Loading...".into(),
            no_results_text: "No results found".into(),
            no_choices_text: "No choices to choose from".into(),
            item_select_text: "Press to select".into(),
            add_item_text: "Press Enter to add <b>\"{value}\"</b>".into(),
            max_item_text: "Only {count} values can be added.".into(),
            unique_item_text: "Only unique values can be added.".into(),
            class_names: ClassNames::default(),
        }
    }
}

impl Options {
    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ChoicesError> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check option values that cannot be expressed in the type.
    pub fn validate(&self) -> Result<(), ChoicesError> {
        if self.delimiter.is_empty() {
            return Err(ChoicesError::EmptyDelimiter);
        }
        if self.search_fields.is_empty() {
            return Err(ChoicesError::NoSearchFields);
        }
        self.compile_filter()?;
        Ok(())
    }

    /// Compile `regex_filter`, if set.
    pub fn compile_filter(&self) -> Result<Option<Regex>, ChoicesError> {
        let Some(pattern) = self.regex_filter.as_deref() else {
            return Ok(None);
        };
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Some)
            .map_err(|source| ChoicesError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Effective item limit; zero is treated as no limit.
    pub fn item_limit(&self) -> Option<usize> {
        self.max_item_count.filter(|&max| max > 0)
    }

    pub fn add_item_notice(&self, value: &str) -> String {
        self.add_item_text.replace("{value}", &pickdom::escape(value))
    }

    pub fn max_item_notice(&self, count: usize) -> String {
        self.max_item_text.replace("{count}", &count.to_string())
    }

    /// Apply `prepend_value`/`append_value` to a typed value.
    pub fn decorate_value(&self, value: &str) -> String {
        let prepend = self.prepend_value.as_deref().unwrap_or("");
        let append = self.append_value.as_deref().unwrap_or("");
        format!("{prepend}{value}{append}")
    }
}

// Builder-style setters for the options hosts most often tweak in code.
impl Options {
    pub fn max_item_count(mut self, max: usize) -> Self {
        self.max_item_count = Some(max);
        self
    }

    pub fn duplicate_items(mut self, allowed: bool) -> Self {
        self.duplicate_items = allowed;
        self
    }

    pub fn edit_items(mut self, enabled: bool) -> Self {
        self.edit_items = enabled;
        self
    }

    pub fn remove_item_button(mut self, enabled: bool) -> Self {
        self.remove_item_button = enabled;
        self
    }

    pub fn regex_filter(mut self, pattern: impl Into<String>) -> Self {
        self.regex_filter = Some(pattern.into());
        self
    }

    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemSpec>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}
