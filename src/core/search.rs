//! Customer search business logic.
//!
//! The search views keep all three service lists preloaded and re-filter on
//! every keystroke, so this module is a pure, synchronous function - no
//! database round trip and no debounce. The same physical customer often
//! appears with cosmetic differences across lists ("김철수" vs "김 철수",
//! "010-1111-2222" vs "01011112222"); dedup keys normalize those away.

use std::collections::HashMap;

/// Which service list a search entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// General equipment service
    General,
    /// Season-care package visit
    Season,
    /// Full-season-care package visit
    FullSeason,
}

impl ServiceKind {
    /// Display label for the service list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "일반",
            Self::Season => "시즌케어",
            Self::FullSeason => "풀시즌케어",
        }
    }
}

/// One searchable row, built by the caller from a preloaded service list.
#[derive(Debug, Clone)]
pub struct SearchEntry {
    /// Customer's name as written on the source row
    pub customer_name: String,
    /// Customer's phone as written on the source row
    pub customer_phone: String,
    /// Which list the row came from
    pub kind: ServiceKind,
}

impl SearchEntry {
    /// Convenience constructor.
    #[must_use]
    pub fn new(customer_name: &str, customer_phone: &str, kind: ServiceKind) -> Self {
        Self {
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            kind,
        }
    }
}

/// One deduplicated customer in the search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerMatch {
    /// Customer's name (first spelling seen)
    pub customer_name: String,
    /// Customer's phone (first formatting seen)
    pub customer_phone: String,
    /// Distinct service-kind labels the customer appears under, in
    /// first-seen order
    pub service_types: Vec<&'static str>,
}

fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Filters the preloaded entries down to customers whose name or phone
/// contains the query, case-insensitively, and collapses duplicates.
///
/// The dedup key is the whitespace-stripped name plus the digits of the
/// phone, so hyphenation and spacing differences fold into one result that
/// accumulates every service kind the customer appears under. A blank query
/// returns no matches - the caller clears its list rather than showing the
/// whole roster.
#[must_use]
pub fn search_customers(entries: &[SearchEntry], query: &str) -> Vec<CustomerMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<(String, String)> = Vec::new();
    let mut matches: HashMap<(String, String), CustomerMatch> = HashMap::new();

    for entry in entries {
        let name_hit = entry.customer_name.to_lowercase().contains(&needle);
        let phone_hit = entry.customer_phone.to_lowercase().contains(&needle);
        if !name_hit && !phone_hit {
            continue;
        }

        let key = (
            normalize_name(&entry.customer_name),
            normalize_phone(&entry.customer_phone),
        );
        if let Some(found) = matches.get_mut(&key) {
            let label = entry.kind.label();
            if !found.service_types.contains(&label) {
                found.service_types.push(label);
            }
        } else {
            order.push(key.clone());
            matches.insert(
                key,
                CustomerMatch {
                    customer_name: entry.customer_name.clone(),
                    customer_phone: entry.customer_phone.clone(),
                    service_types: vec![entry.kind.label()],
                },
            );
        }
    }

    order
        .into_iter()
        .filter_map(|key| matches.remove(&key))
        .collect()
}
