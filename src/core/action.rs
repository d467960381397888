//! # Actions
//!
//! Everything that can happen in the converter becomes an `Action`.
//! User types a digit? That's `Action::TextChanged(text)`.
//! User picks a currency? That's `Action::ButtonPressed(name)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing what the adapter should do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Recomputation is explicit: every transition that can change the result
//! ends by calling `recompute()`.

use log::{debug, info, warn};

use crate::core::convert::{ConversionError, convert};
use crate::core::notification::Notification;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input field now holds this text.
    TextChanged(String),
    /// The button for the currency with this name was pressed.
    ButtonPressed(String),
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Show this message through the notification sink.
    Notify(Notification),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::TextChanged(text) => {
            app.raw_input = text;
            if app.target.is_some() {
                recompute(app)
            } else {
                Effect::None
            }
        }
        Action::ButtonPressed(name) => {
            let Some(index) = app.rates.position(&name) else {
                warn!("Ignoring press for unknown currency '{}'", name);
                return Effect::None;
            };
            if app.raw_input.is_empty() {
                info!("Rejected selection of {}: no amount entered", name);
                return Effect::Notify(ConversionError::EmptyInputOnSelect.into());
            }
            app.target = Some(index);
            recompute(app)
        }
        Action::Quit => Effect::Quit,
    }
}

/// Re-runs the conversion for the current input and target.
///
/// On failure `result_text` is left untouched.
fn recompute(app: &mut App) -> Effect {
    let Some(currency) = app.target_currency() else {
        return Effect::None;
    };
    match convert(&app.raw_input, currency) {
        Ok(result) => {
            debug!("Converted {:?} into {}: {}", app.raw_input, currency.name, result);
            app.result_text = Some(result);
            Effect::None
        }
        Err(e) => {
            info!("Keeping previous result, {:?} is not a number", app.raw_input);
            Effect::Notify(e.into())
        }
    }
}
