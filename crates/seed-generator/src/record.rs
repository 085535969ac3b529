//! The company record written to the `search` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Table the records are loaded into.
pub const TABLE_NAME: &str = "search";

/// Columns supplied by the generator, in insert order.
///
/// `created_at` and `updated_at` are not listed: the sink assigns them at
/// insert time.
pub const COLUMNS: [&str; 13] = [
    "company_id",
    "name",
    "status",
    "address_line_1",
    "address_line_2",
    "city",
    "region",
    "postal_code",
    "country",
    "revenue",
    "employees",
    "incorporated_on",
    "last_filed_on",
];

/// Registration status of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Dissolved,
    Liquidation,
}

impl CompanyStatus {
    /// All statuses, in the order the generator samples from.
    pub const ALL: [CompanyStatus; 3] = [
        CompanyStatus::Active,
        CompanyStatus::Dissolved,
        CompanyStatus::Liquidation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Dissolved => "dissolved",
            CompanyStatus::Liquidation => "liquidation",
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated business entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Global sequence index the record was derived from
    pub sequence_index: u64,
    /// Registration number, derived only from `sequence_index`
    pub company_id: String,
    pub name: String,
    pub status: CompanyStatus,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    /// Yearly revenue with exactly two fractional digits (e.g. "1520340.07")
    pub revenue: String,
    pub employees: u32,
    pub incorporated_on: NaiveDate,
    /// Not ordered relative to `incorporated_on`
    pub last_filed_on: NaiveDate,
}

impl CompanyRecord {
    /// Field values in [`COLUMNS`] order, rendered as text.
    pub fn column_values(&self) -> [String; 13] {
        [
            self.company_id.clone(),
            self.name.clone(),
            self.status.as_str().to_string(),
            self.address_line_1.clone(),
            self.address_line_2.clone(),
            self.city.clone(),
            self.region.clone(),
            self.postal_code.clone(),
            self.country.clone(),
            self.revenue.clone(),
            self.employees.to_string(),
            self.incorporated_on.format("%Y-%m-%d").to_string(),
            self.last_filed_on.format("%Y-%m-%d").to_string(),
        ]
    }
}
