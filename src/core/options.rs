use serde::{Deserialize, Serialize};

/// One entry of the page's document-type select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOption {
    /// Submitted value (an identification-type record id).
    pub value: String,
    /// Visible label, e.g. "DNI" or "RUC - Registro Único de Contribuyentes".
    pub label: String,
}

impl DocumentOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Placeholder entries ("-- select --") carry an empty value.
    pub fn is_selectable(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Find the first selectable option whose label contains any of `needles`,
/// compared case-insensitively after trimming.
pub fn find_option<'a>(options: &'a [DocumentOption], needles: &[String]) -> Option<&'a DocumentOption> {
    options.iter().filter(|o| o.is_selectable()).find(|o| {
        let label = o.label.trim().to_lowercase();
        needles
            .iter()
            .any(|n| !n.is_empty() && label.contains(&n.to_lowercase()))
    })
}
