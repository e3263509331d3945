//! Repository implementation for the company letterhead singleton.

use diesel::prelude::*;

use crate::{
    domain::company::{CompanyInfo, UpdateCompanyInfo},
    models::company::{COMPANY_INFO_ID, CompanyInfo as DbCompanyInfo},
    repository::{CompanyInfoReader, CompanyInfoWriter, DieselRepository, errors::RepositoryResult},
};

impl CompanyInfoReader for DieselRepository {
    fn get_company_info(&self) -> RepositoryResult<Option<CompanyInfo>> {
        use crate::schema::company_info;

        let mut conn = self.conn()?;
        let info = company_info::table
            .find(COMPANY_INFO_ID)
            .first::<DbCompanyInfo>(&mut conn)
            .optional()?;

        Ok(info.map(Into::into))
    }
}

impl CompanyInfoWriter for DieselRepository {
    fn update_company_info(&self, updates: &UpdateCompanyInfo) -> RepositoryResult<CompanyInfo> {
        use crate::schema::company_info;

        let mut conn = self.conn()?;

        // Merge with whatever is stored so unspecified fields survive.
        let current = company_info::table
            .find(COMPANY_INFO_ID)
            .first::<DbCompanyInfo>(&mut conn)
            .optional()?;

        let merged = DbCompanyInfo {
            id: COMPANY_INFO_ID,
            name: updates
                .name
                .clone()
                .or_else(|| current.as_ref().and_then(|c| c.name.clone())),
            logo_url: updates
                .logo_url
                .clone()
                .or_else(|| current.as_ref().and_then(|c| c.logo_url.clone())),
        };

        let saved = diesel::insert_into(company_info::table)
            .values(&merged)
            .on_conflict(company_info::id)
            .do_update()
            .set((
                company_info::name.eq(merged.name.clone()),
                company_info::logo_url.eq(merged.logo_url.clone()),
            ))
            .get_result::<DbCompanyInfo>(&mut conn)?;

        Ok(saved.into())
    }
}
