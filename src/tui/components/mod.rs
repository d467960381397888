//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and the current target currency
//! - `ResultBanner`: the converted amount, or nothing
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `AmountInput`: the rupee amount field, emits content changes
//! - `CurrencyList`: pressable currency rows with a keyboard cursor
//! - `Snackbar`: the notification sink, with expiry
//!
//! Components receive external data as props, never by reaching into `App`
//! themselves:
//!
//! ```rust,ignore
//! ResultBanner::new(app.result_text.as_deref()).render(frame, area);
//! ```

mod amount_input;
mod currency_list;
mod result_banner;
mod snackbar;
mod title_bar;

pub use amount_input::{AmountEvent, AmountInput};
pub use currency_list::{CurrencyList, CurrencyListEvent, CurrencyListState};
pub use result_banner::ResultBanner;
pub use snackbar::Snackbar;
pub use title_bar::TitleBar;
