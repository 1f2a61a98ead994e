//! Field-level value parsers for EPP records.
//!
//! Both parsers degrade silently: malformed input yields the unset or zero
//! value instead of an error.

pub mod amounts;
pub mod dates;

pub use amounts::parse_amount;
pub use dates::parse_date;
