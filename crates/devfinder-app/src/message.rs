//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::RequestId;
use devfinder_core::LookupOutcome;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for the loading indicator
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Query editing
    // ─────────────────────────────────────────────────────────
    /// Replace the whole query (prefilled username, headless runs)
    QueryInput { text: String },

    /// Append a character to the query
    InputChar(char),

    /// Delete the last character of the query
    InputBackspace,

    /// Empty the query
    ClearQuery,

    // ─────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────
    /// Submit the current query. Blank queries are ignored.
    SubmitQuery,

    /// A profile lookup finished
    LookupResolved {
        request_id: RequestId,
        outcome: LookupOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Theme and links
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    /// Open the current profile's page in the browser
    OpenProfile,

    /// Open the current profile's blog in the browser
    OpenBlog,

    /// The browser could not be launched
    BrowserOpenFailed { url: String, error: String },
}
