use serde::{Deserialize, Serialize};

/// Letterhead singleton shown on rendered documents. Not an entity
/// collection: a single fixed-id record, absent until first configured.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

/// Merge-on-write update: `None` fields leave the stored value untouched.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct UpdateCompanyInfo {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

impl UpdateCompanyInfo {
    #[must_use]
    pub fn new(name: Option<String>, logo_url: Option<String>) -> Self {
        Self {
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            logo_url: logo_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_filters_blank_fields() {
        let update = UpdateCompanyInfo::new(Some("  ".to_string()), Some(" logo.png ".to_string()));
        assert!(update.name.is_none());
        assert_eq!(update.logo_url.as_deref(), Some("logo.png"));
    }
}
