//! Small shared helpers.

pub mod plural;

pub use plural::plural_count;
