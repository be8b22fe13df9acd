//! Core library modules for the glspent application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, messaging, notes log
//! - **Time Accounting**: Directive parsing, month windows, per-issue sums
//! - **Reporting**: Monthly aggregation and console rendering
//!
//! ## Usage
//!
//! ```rust
//! use glspent::libs::spent::parse_note_body;
//! use glspent::libs::window::MonthWindow;
//!
//! let window = MonthWindow::new(2024, 8)?;
//! let spent = parse_note_body("added 2h 30m of time spent")?;
//! assert_eq!(spent.seconds(), 9000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod messages;
pub mod notes_log;
pub mod report;
pub mod spent;
pub mod timesheet;
pub mod view;
pub mod window;
