use crate::error::ChoicesError;
use crate::host::Host;
use crate::model::{ItemId, PassedElement};
use crate::options::Options;
use crate::render::{DefaultTemplates, Templates};
use crate::search::{FuzzyMatcher, Matcher};

use super::Choices;

pub(crate) type ItemHook = Box<dyn FnMut(ItemId, &str, &PassedElement)>;

/// User callbacks.
#[derive(Default)]
pub(crate) struct Hooks {
    pub on_init: Option<Box<dyn FnMut()>>,
    pub on_add_item: Option<ItemHook>,
    pub on_remove_item: Option<ItemHook>,
    pub on_change: Option<Box<dyn FnMut(&str)>>,
}

/// Configures a [`Choices`] picker beyond plain [`Options`].
///
/// ```ignore
/// let picker = ChoicesBuilder::new(PassedElement::text())
///     .options(Options::default().max_item_count(3))
///     .on_change(|value| log::info!("changed: {value}"))
///     .build(host)?;
/// ```
pub struct ChoicesBuilder {
    element: PassedElement,
    options: Options,
    templates: Box<dyn Templates>,
    matcher: Box<dyn Matcher>,
    hooks: Hooks,
}

impl ChoicesBuilder {
    pub fn new(element: PassedElement) -> Self {
        Self {
            element,
            options: Options::default(),
            templates: Box::new(DefaultTemplates),
            matcher: Box::new(FuzzyMatcher::new()),
            hooks: Hooks::default(),
        }
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn templates(mut self, templates: impl Templates + 'static) -> Self {
        self.templates = Box::new(templates);
        self
    }

    pub fn matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn on_init(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_init = Some(Box::new(hook));
        self
    }

    /// Called with the new item's id and value, and the enhanced element.
    pub fn on_add_item(mut self, hook: impl FnMut(ItemId, &str, &PassedElement) + 'static) -> Self {
        self.hooks.on_add_item = Some(Box::new(hook));
        self
    }

    pub fn on_remove_item(
        mut self,
        hook: impl FnMut(ItemId, &str, &PassedElement) + 'static,
    ) -> Self {
        self.hooks.on_remove_item = Some(Box::new(hook));
        self
    }

    /// Called with the value of an item added or removed by the user.
    pub fn on_change(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.hooks.on_change = Some(Box::new(hook));
        self
    }

    /// Validate the options, mount the picker on `host` and initialise it.
    pub fn build<H: Host>(self, host: H) -> Result<Choices<H>, ChoicesError> {
        self.options.validate()?;
        let filter = self.options.compile_filter()?;
        let mut choices = Choices::assemble(
            self.element,
            self.options,
            filter,
            self.templates,
            self.matcher,
            self.hooks,
            host,
        );
        choices.init();
        Ok(choices)
    }
}
