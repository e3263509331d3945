//! Company letterhead services.

use crate::domain::company::{CompanyInfo, UpdateCompanyInfo};
use crate::forms::settings::CompanyInfoForm;
use crate::repository::{CompanyInfoReader, CompanyInfoWriter};
use crate::services::ServiceResult;

/// Loads the letterhead singleton. `None` means "not configured yet",
/// which is an expected first-run state and deliberately not an error.
pub fn load_company_info<R>(repo: &R) -> ServiceResult<Option<CompanyInfo>>
where
    R: CompanyInfoReader + ?Sized,
{
    repo.get_company_info().map_err(|err| {
        log::error!("Failed to load company info: {err}");
        err.into()
    })
}

/// Merges the submitted fields into the stored singleton. Blank fields
/// never clear previously stored values.
pub fn save_company_info<R>(repo: &R, form: &CompanyInfoForm) -> ServiceResult<CompanyInfo>
where
    R: CompanyInfoWriter + ?Sized,
{
    let updates = UpdateCompanyInfo::from(form);
    repo.update_company_info(&updates).map_err(|err| {
        log::error!("Failed to save company info: {err}");
        err.into()
    })
}
