//! Swap form domain — two currency slots, an amount buffer, a derived amount.
//!
//! Every user action is a [`FormAction`]. [`transition`] maps the prior
//! [`FormState`] and an action to the complete next state in one step, so a
//! swap never exposes a half-exchanged pair. [`SwapForm`] owns a state and a
//! [`PriceCatalog`](crate::domain::coin::PriceCatalog) and commits one
//! transition per call.

pub mod handle;
pub mod state;
mod transition;

pub use handle::SwapFormHandle;
pub use state::SwapForm;
pub use transition::{amount_to_receive, can_submit, check_submit, transition};

use crate::error::FormError;
use crate::shared::Currency;
use serde::{Deserialize, Serialize};

/// Fractional digits of the derived amount.
pub const AMOUNT_FRACTION_DIGITS: u32 = 10;

/// The user-editable state of a swap form plus its derived amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub send: Option<Currency>,
    pub receive: Option<Currency>,
    /// Raw buffer, always matching `^[0-9]*[.,]?[0-9]*$`.
    pub amount_to_send: String,
    /// Derived; `""` when no conversion is possible.
    pub amount_to_receive: String,
    /// Set when the last amount edit was rejected.
    pub error: Option<FormError>,
}

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormAction {
    SetSendAmount(String),
    SetSendCurrency(Option<Currency>),
    SetReceiveCurrency(Option<Currency>),
    Swap,
    Submit,
    /// Re-derive the amount, e.g. after the catalog changed.
    Recompute,
    Reset,
}

impl FormAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetSendAmount(_) => "set_send_amount",
            Self::SetSendCurrency(_) => "set_send_currency",
            Self::SetReceiveCurrency(_) => "set_receive_currency",
            Self::Swap => "swap",
            Self::Submit => "submit",
            Self::Recompute => "recompute",
            Self::Reset => "reset",
        }
    }
}

impl std::fmt::Display for FormAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of applying one action: the full next state and the action's outcome.
///
/// On `Err`, `state` equals the prior state except for a recorded amount error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub result: Result<(), FormError>,
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub send: Option<Currency>,
    pub receive: Option<Currency>,
    /// Catalog currencies minus the chosen receive currency.
    pub send_options: Vec<Currency>,
    /// Catalog currencies minus the chosen send currency.
    pub receive_options: Vec<Currency>,
    pub amount_to_send: String,
    pub amount_to_receive: String,
    pub error: Option<String>,
    pub can_submit: bool,
    pub can_swap: bool,
    /// Units of `receive` per unit of `send`, when known.
    pub rate: Option<String>,
}
