use serde::Deserialize;
use validator::Validate;

use crate::domain::company::UpdateCompanyInfo;

#[derive(Deserialize, Validate)]
/// Form data for the company letterhead. Both fields are optional; blanks
/// leave the stored value untouched (merge-on-write).
pub struct CompanyInfoForm {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

impl From<&CompanyInfoForm> for UpdateCompanyInfo {
    fn from(form: &CompanyInfoForm) -> Self {
        UpdateCompanyInfo::new(form.name.clone(), form.logo_url.clone())
    }
}
