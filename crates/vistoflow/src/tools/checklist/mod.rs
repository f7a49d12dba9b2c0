//! Document checklists for permit applications: a static registry keyed by
//! permit category and application kind, rendered through the message catalog
//! into a downloadable plain-text document.

mod data;
pub mod domain;

pub use domain::{ApplicationKind, ChecklistItemKey, PermitCategory};

use serde::{Deserialize, Serialize};

use crate::i18n::MessageCatalog;

/// Localized checklist ready for display or download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDocument {
    pub category: PermitCategory,
    pub kind: ApplicationKind,
    pub permit_label: String,
    pub items: Vec<String>,
    pub disclaimer: String,
}

impl ChecklistDocument {
    /// Compile the checklist for the given combination, or `None` when no
    /// list is published for it.
    pub fn compile<C: MessageCatalog>(
        category: PermitCategory,
        kind: ApplicationKind,
        catalog: &C,
    ) -> Option<Self> {
        let keys = data::items(category, kind)?;
        Some(Self {
            category,
            kind,
            permit_label: format!("{} {}", category.label(), kind.label()),
            items: keys.iter().map(|key| catalog.checklist_item(*key)).collect(),
            disclaimer: catalog.checklist_disclaimer(),
        })
    }

    /// Suggested download name, matching the site's naming scheme.
    pub fn file_name(&self) -> String {
        format!(
            "vistoflow_checklist_{}_{}.txt",
            self.category.slug(),
            self.kind.slug()
        )
    }

    /// Plain-text rendering: title, numbered items, disclaimer.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("VistoFlow checklist: {}\n\n", self.permit_label));
        for (index, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{:>2}. {}\n", index + 1, item));
        }
        out.push('\n');
        out.push_str(&self.disclaimer);
        out.push('\n');
        out
    }
}
