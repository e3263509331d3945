use diesel::prelude::*;

use crate::domain::company::CompanyInfo as DomainCompanyInfo;

/// Fixed identifier of the singleton `company_info` row.
pub const COMPANY_INFO_ID: i32 = 1;

#[derive(Debug, Clone, Identifiable, Queryable, Insertable)]
#[diesel(table_name = crate::schema::company_info)]
/// Diesel model for the letterhead singleton.
pub struct CompanyInfo {
    pub id: i32,
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

impl From<CompanyInfo> for DomainCompanyInfo {
    fn from(info: CompanyInfo) -> Self {
        Self {
            name: info.name,
            logo_url: info.logo_url,
        }
    }
}
