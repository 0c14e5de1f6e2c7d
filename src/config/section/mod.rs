//! Configuration section definitions.
//!
//! Each module corresponds to a section in `relabel.toml`:
//!
//! | Module        | TOML Section    | Purpose                               |
//! |---------------|-----------------|---------------------------------------|
//! | `site`        | `[site]`        | Directory holding the pages           |
//! | `inject`      | `[inject]`      | Protection script and its anchors     |
//! | `translate`   | `[translate]`   | Dictionaries, discovery, overlaps     |
//! | `restructure` | `[restructure]` | Pages whose navigation is rewritten   |

mod inject;
mod restructure;
mod site;
mod translate;

pub use inject::InjectConfig;
pub use restructure::RestructureConfig;
pub use site::SiteConfig;
pub use translate::TranslateConfig;

use super::{ConfigDiagnostics, FieldPath};

/// Check a list of page identifiers: non-empty, relative, no parent hops.
pub(super) fn validate_documents(
    field: FieldPath,
    documents: &[String],
    diag: &mut ConfigDiagnostics,
) {
    for doc in documents {
        let path = std::path::Path::new(doc);
        if doc.trim().is_empty() {
            diag.error(field, "empty document entry");
        } else if path.is_absolute() {
            diag.error_with_hint(
                field,
                format!("`{doc}` is absolute"),
                "documents are resolved against `site.root`",
            );
        } else if path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            diag.error(field, format!("`{doc}` escapes the site root"));
        }
    }
}
