//! Built-in English → Italian phrase dictionaries.
//!
//! Static data only; [`crate::translate::TranslationTable`] validates and
//! compiles them once per run.

mod base;
mod complete;

pub use base::BASE;
pub use complete::COMPLETE;

use serde::{Deserialize, Serialize};

/// Selectable built-in dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dictionary {
    /// Navigation, buttons, form labels of the main pages.
    #[default]
    Base,
    /// Titles, common labels, days and months for every page.
    Complete,
}

impl Dictionary {
    pub const fn phrases(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Base => BASE,
            Self::Complete => COMPLETE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Complete => "complete",
        }
    }
}
