//! # glspent - GitLab spent-time report
//!
//! A command-line utility that sums the time a worker tracked on GitLab
//! issues during a calendar month and compares it with a goal of
//! `business days * 8` hours.
//!
//! ## Features
//!
//! - **User Resolution**: Maps configured usernames to GitLab user ids
//! - **Issue Discovery**: Paginated search of assigned issues updated in the month
//! - **Time Accounting**: Parses `added` / `subtracted` time-tracking notes
//! - **Monthly Report**: Per-issue lines, per-project sections, goal ratio
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glspent::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
