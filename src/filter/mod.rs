//! Level and service filtering
//!
//! A record passes when it satisfies every active filter. An unset filter
//! never excludes anything.
//!
//! # Matching rules
//!
//! ```text
//! level     compared after upper-casing both sides (--level error == ERROR)
//! service   compared exactly, case-sensitive (billing != Billing)
//! ```
//!
//! An empty filter value is still an active filter: `--service ""` only
//! keeps records whose service field is empty.

pub mod matcher;

pub use matcher::{FilterSpec, matches, warn_unknown_level};
