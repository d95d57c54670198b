//! Front-end core: display preference, locale, counter and host command bridge.

pub mod bridge;
pub mod counter;
pub mod display;
pub mod environment;
pub mod locale;
pub mod preference;
pub mod translator;

pub use bridge::{CommandBridge, CommandInvoker, Invocation};
pub use counter::CounterState;
pub use display::{DisplayState, OutcomeDisplay};
pub use environment::{Environment, SystemEnvironment};
pub use locale::LocaleManager;
pub use preference::{PreferenceStore, THEME_STORAGE_KEY};
pub use translator::{TranslationError, Translator};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
