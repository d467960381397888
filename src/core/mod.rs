//! # Core Application Logic
//!
//! This module contains the converter's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RateTable (data)     │
//!                    │  • convert() (engine)   │
//!                    │  • App (state)          │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  One-shot  │
//!           │  Adapter   │              │    CLI     │
//!           │ (ratatui)  │              │  (main.rs) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rates`]: `CurrencyRecord` and the immutable `RateTable`
//! - [`convert`]: parsing and formatting, the pure conversion engine
//! - [`state`]: The `App` struct, all conversion state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`notification`]: messages for the adapter's notification sink
//! - [`config`]: ambient settings for the binary

pub mod action;
pub mod config;
pub mod convert;
pub mod notification;
pub mod rates;
pub mod state;
