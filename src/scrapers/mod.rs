//! Listing page scrapers.
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | 深圳市住房和建设局 (zjj.sz.gov.cn) | [`listing`] | HTML scraping | `YY-MM-DD` dates, relative links |
//!
//! Scrapers work on one row at a time and return an explicit
//! [`EntryError`](crate::error::EntryError) for rows they cannot read, so the
//! caller can log and skip them without losing the rest of the page.

pub mod listing;
