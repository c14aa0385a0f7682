//! Contract grouping business logic.
//!
//! A season-care contract is never stored as its own row: the store only
//! keeps flat visit rows, and everything the season views show (package,
//! price, remaining visits, last visit) is derived here by grouping those
//! rows. [`group_by_contract`] is a pure function of its input — it touches
//! no database and keeps no state, so recomputing it from the latest fetch
//! always yields an internally consistent snapshot even when a stale
//! response lands late.

use crate::entities::{full_season_visit, season_visit};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;

/// Contract number assumed for visit rows that carry none.
///
/// All numberless rows for a phone merge into this virtual contract. If a
/// customer genuinely holds two unnumbered contracts they will be merged
/// silently; the store data must carry explicit numbers to keep them apart.
pub const DEFAULT_CONTRACT_NUMBER: i32 = 1;

/// Package tier of a season-care contract, parsed from the store's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonPackage {
    /// `"5+왁"` - five services plus one waxing (6 visits total)
    FiveWithWax,
    /// `"10+1"` - ten services plus one bonus (11 visits total)
    TenPlusOne,
}

impl SeasonPackage {
    /// Parses a store label into a package tier. Unknown labels are `None`,
    /// which downstream means "package not yet assigned", not zero visits.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "5+왁" => Some(Self::FiveWithWax),
            "10+1" => Some(Self::TenPlusOne),
            _ => None,
        }
    }

    /// Total visits the package allows, bonus visits included.
    #[must_use]
    pub const fn allowed_visits(self) -> u32 {
        match self {
            Self::FiveWithWax => 6,
            Self::TenPlusOne => 11,
        }
    }

    /// The store-side label for this tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveWithWax => "5+왁",
            Self::TenPlusOne => "10+1",
        }
    }
}

/// Row-level view the grouper needs from a visit record.
///
/// Both the season-care and full-season-care tables have the same shape, so
/// this trait is the seam that lets one grouping implementation serve both.
pub trait ContractRow {
    /// Customer's phone number (stable customer key)
    fn customer_phone(&self) -> &str;
    /// Customer's name as written on this row
    fn customer_name(&self) -> &str;
    /// Explicit contract number, if the row carries one
    fn contract_number(&self) -> Option<i32>;
    /// Package label, present on the contract-opening row only
    fn season_count(&self) -> Option<&str>;
    /// Nominal contract price, present alongside the package label
    fn total_cost(&self) -> Option<i64>;
    /// Branch the package was paid at
    fn payment_location(&self) -> Option<&str>;
    /// Day of the visit
    fn service_date(&self) -> NaiveDate;
    /// Row creation time; rows from older imports may lack it
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl ContractRow for season_visit::Model {
    fn customer_phone(&self) -> &str {
        &self.customer_phone
    }
    fn customer_name(&self) -> &str {
        &self.customer_name
    }
    fn contract_number(&self) -> Option<i32> {
        self.contract_number
    }
    fn season_count(&self) -> Option<&str> {
        self.season_count.as_deref()
    }
    fn total_cost(&self) -> Option<i64> {
        self.total_cost
    }
    fn payment_location(&self) -> Option<&str> {
        self.payment_location.as_deref()
    }
    fn service_date(&self) -> NaiveDate {
        self.service_date
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ContractRow for full_season_visit::Model {
    fn customer_phone(&self) -> &str {
        &self.customer_phone
    }
    fn customer_name(&self) -> &str {
        &self.customer_name
    }
    fn contract_number(&self) -> Option<i32> {
        self.contract_number
    }
    fn season_count(&self) -> Option<&str> {
        self.season_count.as_deref()
    }
    fn total_cost(&self) -> Option<i64> {
        self.total_cost
    }
    fn payment_location(&self) -> Option<&str> {
        self.payment_location.as_deref()
    }
    fn service_date(&self) -> NaiveDate {
        self.service_date
    }
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// One derived season-care contract: all visits sharing
/// `(customer_phone, contract_number)` plus the fields computed from them.
///
/// Contracts live in memory only; they are rebuilt from scratch on every
/// data load and never written back to the store.
#[derive(Debug, Clone)]
pub struct Contract<R> {
    /// Customer's phone number
    pub customer_phone: String,
    /// Customer's name as written on the contract-defining visit
    pub customer_name: String,
    /// Contract number within this phone (defaulted when rows carried none)
    pub contract_number: i32,
    /// Raw package label from the contract-defining visit
    pub season_count: Option<String>,
    /// Parsed package tier; `None` when the label is absent or unrecognized
    pub package: Option<SeasonPackage>,
    /// Nominal contract price from the contract-defining visit
    pub season_price: Option<i64>,
    /// Branch the package was paid at
    pub payment_location: Option<String>,
    /// Every visit in the contract, oldest first
    pub services: Vec<R>,
    /// Number of visits used
    pub total_services: usize,
    /// Visits left on the package, clamped at zero; `None` while no
    /// recognized package label exists anywhere in the group
    pub remaining_count: Option<u32>,
    /// Most recent visit day in the group
    pub last_service_date: NaiveDate,
}

/// Sort instant for a visit row: creation time when the store recorded one,
/// otherwise the visit day at midnight.
fn row_instant<R: ContractRow>(row: &R) -> DateTime<Utc> {
    row.created_at()
        .unwrap_or_else(|| row.service_date().and_time(NaiveTime::MIN).and_utc())
}

fn has_season_count<R: ContractRow>(row: &R) -> bool {
    row.season_count().is_some_and(|label| !label.trim().is_empty())
}

/// Groups flat visit rows into per-contract summaries.
///
/// Rows are partitioned by `(customer_phone, contract_number)`, with missing
/// contract numbers defaulting to [`DEFAULT_CONTRACT_NUMBER`]. Within each
/// partition the visits are stable-sorted oldest first, the package fields
/// are copied from the first row carrying a package label (or the first row
/// outright when none does), and the remaining visit count is derived from
/// the package tier, floored at zero. The returned contracts are ordered by
/// most recent visit first; ties keep the order in which the partitions were
/// first seen in the input, so equal inputs always produce equal outputs.
#[must_use]
pub fn group_by_contract<R: ContractRow>(rows: Vec<R>) -> Vec<Contract<R>> {
    let mut order: Vec<(String, i32)> = Vec::new();
    let mut groups: HashMap<(String, i32), Vec<R>> = HashMap::new();

    for row in rows {
        let key = (
            row.customer_phone().to_string(),
            row.contract_number().unwrap_or(DEFAULT_CONTRACT_NUMBER),
        );
        if let Some(group) = groups.get_mut(&key) {
            group.push(row);
        } else {
            order.push(key.clone());
            groups.insert(key, vec![row]);
        }
    }

    let mut contracts: Vec<Contract<R>> = Vec::with_capacity(order.len());
    for key in order {
        let Some(mut services) = groups.remove(&key) else {
            continue;
        };
        services.sort_by_key(row_instant);
        let Some(first) = services.first() else {
            continue;
        };

        let defining = services.iter().find(|row| has_season_count(*row)).unwrap_or(first);

        let season_count = defining
            .season_count()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());
        let package = season_count.as_deref().and_then(SeasonPackage::parse);
        let season_price = defining.total_cost();
        let payment_location = defining.payment_location().map(str::to_string);
        let customer_name = defining.customer_name().to_string();

        let total_services = services.len();
        let used = u32::try_from(total_services).unwrap_or(u32::MAX);
        let remaining_count = package.map(|p| p.allowed_visits().saturating_sub(used));

        let last_service_date = services
            .iter()
            .map(ContractRow::service_date)
            .max()
            .unwrap_or_else(|| first.service_date());

        contracts.push(Contract {
            customer_phone: key.0,
            customer_name,
            contract_number: key.1,
            season_count,
            package,
            season_price,
            payment_location,
            services,
            total_services,
            remaining_count,
            last_service_date,
        });
    }

    // Stable sort keeps first-seen partition order for same-day contracts.
    contracts.sort_by(|a, b| b.last_service_date.cmp(&a.last_service_date));
    contracts
}
