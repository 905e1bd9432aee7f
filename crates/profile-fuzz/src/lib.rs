//! Fuzzing library for scholar-profile.
//!
//! This crate provides fuzzing targets for the HTML extraction paths:
//! search-result entries and full profile pages.
//!
//! # Usage
//!
//! ```bash
//! cd crates/profile-fuzz
//! cargo +nightly fuzz run fuzz_profile_page -- -max_total_time=60
//! ```

pub use scholar_profile::{extract, models, profile};
