//! Swap form controller — app-owned, SDK-provided update logic.

use super::{transition, FormAction, FormState, FormView, Transition, AMOUNT_FRACTION_DIGITS};
use crate::domain::coin::{Coin, PriceCatalog, PriceSource};
use crate::error::FormError;
use crate::shared::{to_fixed, Currency};
use rust_decimal::Decimal;

/// One swap form session: a price catalog plus the form's state.
///
/// The app owns instances of this type (e.g. inside a Dioxus `Signal`) and
/// calls one method per user event. Each method applies exactly one
/// [`transition`]. Methods take `&mut self`, so calls are serialized; share a
/// session across tasks with [`SwapFormHandle`](super::SwapFormHandle).
#[derive(Debug, Clone, Default)]
pub struct SwapForm {
    catalog: PriceCatalog,
    state: FormState,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(coins: Vec<Coin>) -> Self {
        let mut form = Self::new();
        form.on_catalog_loaded(coins);
        form
    }

    /// Start a session and load its catalog from `source`.
    ///
    /// A failed fetch is logged and leaves the catalog empty; every
    /// conversion then yields `""`.
    pub async fn start<S: PriceSource>(source: &S) -> Self {
        let mut form = Self::new();
        match source.fetch_coins().await {
            Ok(coins) => form.on_catalog_loaded(coins),
            Err(e) => tracing::warn!(error = %e, "Price catalog unavailable, conversions disabled"),
        }
        form
    }

    /// Replace the catalog and re-derive the amount to receive.
    pub fn on_catalog_loaded(&mut self, coins: Vec<Coin>) {
        self.catalog.replace(coins);
        tracing::debug!(coins = self.catalog.len(), "Price catalog loaded");
        self.commit(FormAction::Recompute);
    }

    /// Apply one action and commit the resulting state.
    pub fn dispatch(&mut self, action: FormAction) -> Result<(), FormError> {
        let Transition { state, result } = transition(&self.catalog, &self.state, &action);
        if let Err(e) = &result {
            tracing::debug!(action = action.as_str(), error = %e, "Swap form action rejected");
        }
        self.state = state;
        result
    }

    /// Edit the amount buffer. Rejected input keeps the buffer and records the error.
    pub fn set_send_amount(&mut self, raw: impl Into<String>) -> Result<(), FormError> {
        self.dispatch(FormAction::SetSendAmount(raw.into()))
    }

    pub fn set_send_currency(&mut self, selection: Option<Currency>) -> Result<(), FormError> {
        self.dispatch(FormAction::SetSendCurrency(selection))
    }

    pub fn set_receive_currency(&mut self, selection: Option<Currency>) -> Result<(), FormError> {
        self.dispatch(FormAction::SetReceiveCurrency(selection))
    }

    /// Exchange the two currencies. No-op unless both are set.
    pub fn swap(&mut self) -> Result<(), FormError> {
        self.dispatch(FormAction::Swap)
    }

    /// Validate and confirm the form, returning the amount to receive.
    pub fn submit(&mut self) -> Result<String, FormError> {
        self.dispatch(FormAction::Submit)?;
        Ok(self.state.amount_to_receive.clone())
    }

    /// Clear selections, amounts and errors. The catalog is kept.
    pub fn reset(&mut self) {
        self.commit(FormAction::Reset);
    }

    /// Apply an action that cannot be rejected.
    fn commit(&mut self, action: FormAction) {
        let Transition { state, result } = transition(&self.catalog, &self.state, &action);
        debug_assert!(result.is_ok(), "{} rejected: {:?}", action.as_str(), result);
        self.state = state;
    }

    // ── Views ────────────────────────────────────────────────────────────

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn send(&self) -> Option<&Currency> {
        self.state.send.as_ref()
    }

    pub fn receive(&self) -> Option<&Currency> {
        self.state.receive.as_ref()
    }

    pub fn amount_to_send(&self) -> &str {
        &self.state.amount_to_send
    }

    pub fn amount_to_receive(&self) -> &str {
        &self.state.amount_to_receive
    }

    pub fn error(&self) -> Option<&FormError> {
        self.state.error.as_ref()
    }

    pub fn send_options(&self) -> Vec<Currency> {
        self.catalog.options_excluding(self.state.receive.as_ref())
    }

    pub fn receive_options(&self) -> Vec<Currency> {
        self.catalog.options_excluding(self.state.send.as_ref())
    }

    pub fn can_submit(&self) -> bool {
        super::can_submit(&self.state)
    }

    pub fn can_swap(&self) -> bool {
        self.state.send.is_some() && self.state.receive.is_some()
    }

    /// Units of the receive currency per unit of the send currency.
    pub fn rate(&self) -> Option<Decimal> {
        match (&self.state.send, &self.state.receive) {
            (Some(send), Some(receive)) if send != receive => self.catalog.rate(send, receive),
            _ => None,
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            send: self.state.send.clone(),
            receive: self.state.receive.clone(),
            send_options: self.send_options(),
            receive_options: self.receive_options(),
            amount_to_send: self.state.amount_to_send.clone(),
            amount_to_receive: self.state.amount_to_receive.clone(),
            error: self.state.error.as_ref().map(|e| e.to_string()),
            can_submit: self.can_submit(),
            can_swap: self.can_swap(),
            rate: self.rate().map(|r| to_fixed(&r, AMOUNT_FRACTION_DIGITS)),
        }
    }
}
