//! # wheel-rules
//!
//! The long-lived, read-only half of place matching:
//!
//! - **Rule Table**: one [`RuleSet`] per intent (allowed types, required
//!   keywords, veto lists, fallback types), stored as data keyed by intent.
//! - **Overlap tables**: which types qualify as food, drinks, bar-only or
//!   café-only, for the category special cases.
//! - **Price bands**: the `[min, max]` price levels each price token accepts.
//! - **Setting tables**: indoor/outdoor type sets and keyword hints.
//!
//! Built once per process and shared freely across threads.

pub mod catalog;
pub mod overlap;
pub mod price;
pub mod rule_set;
pub mod setting;
pub mod table;

pub use price::PriceBand;
pub use rule_set::RuleSet;
pub use setting::Setting;
pub use table::RuleTable;
