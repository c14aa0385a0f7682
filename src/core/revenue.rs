//! Revenue aggregation business logic.
//!
//! The store delivers `total_cost` as text: plain digits, formatted amounts
//! like `"150,000원"`, or the ambassador sentinel marking a complimentary
//! service. [`parse_cost`] types that union once, so the aggregation can
//! never mistake the sentinel for zero won. Like the contract grouper, the
//! aggregation is a pure function over the fetched rows.

use crate::entities::service_record;
use std::collections::HashMap;

/// Store sentinel in `total_cost` marking a sponsored, no-charge service.
pub const AMBASSADOR_SENTINEL: &str = "엠버서더";

/// `payment_status` value for settled records.
pub const PAYMENT_PAID: &str = "paid";

/// `payment_status` value for outstanding records.
pub const PAYMENT_UNPAID: &str = "unpaid";

/// A typed `total_cost` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostValue {
    /// A real charge, in won
    Charged(i64),
    /// Complimentary (ambassador) service - counts toward volume, not money
    Waived,
}

/// Parses a raw `total_cost` string into a typed value.
///
/// The ambassador sentinel maps to [`CostValue::Waived`]. Anything else is
/// stripped of every non-digit character (currency marks, thousands
/// separators) and parsed; values with no digits at all yield `None` and are
/// excluded from money totals while still counting toward volume.
#[must_use]
pub fn parse_cost(raw: &str) -> Option<CostValue> {
    let trimmed = raw.trim();
    if trimmed == AMBASSADOR_SENTINEL {
        return Some(CostValue::Waived);
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().map(CostValue::Charged)
}

/// Per-branch revenue summary over a list of service records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRevenue {
    /// Branch name
    pub branch: String,
    /// Sum of charged amounts on paid records, in won
    pub paid_total: i64,
    /// Sum of charged amounts on unpaid records, in won
    pub unpaid_total: i64,
    /// Number of paid records carrying a parseable charge
    pub paid_count: usize,
    /// Number of unpaid records carrying a parseable charge
    pub unpaid_count: usize,
    /// Number of complimentary (ambassador) records
    pub waived_count: usize,
    /// Every record seen for the branch, money or not
    pub total_count: usize,
}

impl BranchRevenue {
    fn new(branch: String) -> Self {
        Self {
            branch,
            paid_total: 0,
            unpaid_total: 0,
            paid_count: 0,
            unpaid_count: 0,
            waived_count: 0,
            total_count: 0,
        }
    }
}

/// Aggregates service records into per-branch paid/unpaid totals and counts.
///
/// Waived and unparseable costs are excluded from the money totals but still
/// counted toward the branch's volume. Branches appear in the order they are
/// first seen in the input.
#[must_use]
pub fn aggregate_by_branch(rows: &[service_record::Model]) -> Vec<BranchRevenue> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, BranchRevenue> = HashMap::new();

    for row in rows {
        if !totals.contains_key(&row.branch) {
            order.push(row.branch.clone());
            totals.insert(row.branch.clone(), BranchRevenue::new(row.branch.clone()));
        }
        let Some(entry) = totals.get_mut(&row.branch) else {
            continue;
        };

        entry.total_count += 1;
        match parse_cost(&row.total_cost) {
            Some(CostValue::Charged(amount)) => {
                if row.payment_status == PAYMENT_PAID {
                    entry.paid_total += amount;
                    entry.paid_count += 1;
                } else {
                    entry.unpaid_total += amount;
                    entry.unpaid_count += 1;
                }
            }
            Some(CostValue::Waived) => entry.waived_count += 1,
            None => {}
        }
    }

    order
        .into_iter()
        .filter_map(|branch| totals.remove(&branch))
        .collect()
}
