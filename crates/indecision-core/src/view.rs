//! Presentation data shared by every front end.
//!
//! Rendering is a pure function of a [`ViewModel`]; the add-option input is
//! an [`AddOptionForm`] that owns the typed text and the last validation
//! message.

use serde::Serialize;

use crate::manager::OptionManager;
use crate::options::OptionList;
use crate::random::RandomSource;
use crate::store::KeyValueStore;

/// Shown instead of the list when there are no options.
pub const EMPTY_HINT: &str = "Please add an option to get started!";

/// Label of the pick action.
pub const PICK_LABEL: &str = "What should I do?";

/// Page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Main title.
    pub title: String,
    /// Line under the title.
    pub subtitle: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: "Indecision".to_string(),
            subtitle: "Put your life in the hands of a computer".to_string(),
        }
    }
}

/// Read-only snapshot of the manager for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Page header.
    pub header: Header,
    /// Options in display order.
    pub options: Vec<String>,
    /// Whether the pick action is enabled.
    pub has_options: bool,
}

impl ViewModel {
    /// Build a snapshot of `options` with the default header.
    pub fn from_options(options: &OptionList) -> Self {
        Self {
            header: Header::default(),
            options: options.as_slice().to_vec(),
            has_options: !options.is_empty(),
        }
    }

    /// Text to show in the list area when it is empty.
    pub fn empty_hint(&self) -> Option<&'static str> {
        (!self.has_options).then_some(EMPTY_HINT)
    }
}

/// The add-option input and its last validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptionForm {
    /// Text typed so far.
    pub input: String,
    /// Message from the last failed submit, cleared on success.
    pub error: Option<String>,
}

impl AddOptionForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the current input to `manager`.
    ///
    /// On success the input and error are cleared and `true` is returned.
    /// On failure the input is kept so the user can correct it, and the
    /// validation message is stored for display.
    pub fn submit<S, R>(&mut self, manager: &mut OptionManager<S, R>) -> bool
    where
        S: KeyValueStore,
        R: RandomSource,
    {
        match manager.add_option(&self.input) {
            Ok(()) => {
                self.input.clear();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Append a typed character.
    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Drop the typed text and any message.
    pub fn reset(&mut self) {
        self.input.clear();
        self.error = None;
    }
}
