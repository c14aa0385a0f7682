//! Core business logic - framework-agnostic operations over the store.
//!
//! The derivation modules ([`contract`], [`revenue`], [`search`]) are pure
//! functions over fetched rows; everything else is async CRUD over a
//! `DatabaseConnection`, structured so the (out-of-scope) view layer stays a
//! thin consumer.

/// Promo athlete (ambassador) roster
pub mod athlete;
/// Contract grouping - the derived season-care contract view
pub mod contract;
/// Coupon registration, issuance, and redemption
pub mod coupon;
/// Inter-branch messages and the notice board
pub mod message;
/// Cancellable periodic message polling
pub mod poller;
/// Per-branch revenue aggregation
pub mod revenue;
/// Branch event scheduling
pub mod schedule;
/// Customer search across the preloaded service lists
pub mod search;
/// Season/full-season visit recording and contract listing
pub mod season;
/// General service record ledger
pub mod service;
/// Explicit login session with restore/teardown
pub mod session;
