//! Widget components for the TUI

mod footer;
mod header;
mod profile_card;
mod search_input;

pub use footer::KeyHints;
pub use header::Header;
pub use profile_card::ProfileCard;
pub use search_input::SearchInput;
