//! The pure state transition behind every swap form action.

use super::{FormAction, FormState, Transition, AMOUNT_FRACTION_DIGITS};
use crate::domain::coin::PriceCatalog;
use crate::error::FormError;
use crate::shared::fmt::decimal::is_amount_lexeme;
use crate::shared::{parse_amount, to_fixed, Currency};

/// Apply `action` to `prev`, returning the complete next state.
pub fn transition(catalog: &PriceCatalog, prev: &FormState, action: &FormAction) -> Transition {
    let mut next = prev.clone();

    let result = match action {
        FormAction::SetSendAmount(raw) => {
            if is_amount_lexeme(raw) {
                next.amount_to_send = raw.clone();
                next.error = None;
                Ok(())
            } else {
                let err = FormError::InvalidAmount { input: raw.clone() };
                next.error = Some(err.clone());
                Err(err)
            }
        }
        FormAction::SetSendCurrency(selection) => {
            match check_selection(catalog, selection.as_ref(), prev.receive.as_ref()) {
                Ok(()) => {
                    next.send = selection.clone();
                    Ok(())
                }
                Err(e) => return unchanged(prev, e),
            }
        }
        FormAction::SetReceiveCurrency(selection) => {
            match check_selection(catalog, selection.as_ref(), prev.send.as_ref()) {
                Ok(()) => {
                    next.receive = selection.clone();
                    Ok(())
                }
                Err(e) => return unchanged(prev, e),
            }
        }
        FormAction::Swap => {
            if prev.send.is_some() && prev.receive.is_some() {
                std::mem::swap(&mut next.send, &mut next.receive);
            }
            Ok(())
        }
        FormAction::Submit => {
            if let Err(e) = check_submit(prev) {
                return unchanged(prev, e);
            }
            Ok(())
        }
        FormAction::Recompute => Ok(()),
        FormAction::Reset => {
            next = FormState::default();
            Ok(())
        }
    };

    next.amount_to_receive = amount_to_receive(catalog, &next);
    Transition {
        state: next,
        result,
    }
}

fn unchanged(prev: &FormState, err: FormError) -> Transition {
    Transition {
        state: prev.clone(),
        result: Err(err),
    }
}

/// A slot may take `None`, or any catalog currency other than the other slot's.
fn check_selection(
    catalog: &PriceCatalog,
    selection: Option<&Currency>,
    other: Option<&Currency>,
) -> Result<(), FormError> {
    let Some(currency) = selection else {
        return Ok(());
    };
    if Some(currency) == other {
        return Err(FormError::SelectionConflict);
    }
    if !catalog.contains(currency) {
        return Err(FormError::UnavailableCurrency(currency.clone()));
    }
    Ok(())
}

/// Derived amount for `state`: `amount * price(send) / price(receive)` with
/// exactly [`AMOUNT_FRACTION_DIGITS`] digits, or `""` if anything is missing.
pub fn amount_to_receive(catalog: &PriceCatalog, state: &FormState) -> String {
    let (Some(send), Some(receive)) = (state.send.as_ref(), state.receive.as_ref()) else {
        return String::new();
    };
    if send == receive {
        return String::new();
    }
    parse_amount(&state.amount_to_send)
        .and_then(|amount| catalog.convert(amount, send, receive))
        .map(|value| to_fixed(&value, AMOUNT_FRACTION_DIGITS))
        .unwrap_or_default()
}

/// Blocking checks run by a submit, in the order they are reported.
pub fn check_submit(state: &FormState) -> Result<(), FormError> {
    match (&state.send, &state.receive) {
        (Some(send), Some(receive)) if send != receive => {}
        _ => return Err(FormError::SelectionConflict),
    }
    if let Some(err) = &state.error {
        return Err(err.clone());
    }
    if state.amount_to_send.trim().is_empty() {
        return Err(FormError::MissingAmount);
    }
    Ok(())
}

/// Whether the submit control is enabled. Agrees with [`check_submit`].
pub fn can_submit(state: &FormState) -> bool {
    check_submit(state).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::Coin;
    use rust_decimal::Decimal;

    fn catalog() -> PriceCatalog {
        PriceCatalog::from_coins(vec![
            Coin::new("BTC", Decimal::from(50_000)),
            Coin::new("ETH", Decimal::from(2_500)),
        ])
    }

    fn state(send: Option<&str>, receive: Option<&str>, amount: &str) -> FormState {
        FormState {
            send: send.map(Currency::from),
            receive: receive.map(Currency::from),
            amount_to_send: amount.to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_amount_to_receive() {
        let cat = catalog();
        assert_eq!(
            amount_to_receive(&cat, &state(Some("BTC"), Some("ETH"), "2")),
            "40.0000000000"
        );
        assert_eq!(
            amount_to_receive(&cat, &state(Some("ETH"), Some("BTC"), "1")),
            "0.0500000000"
        );
        assert_eq!(amount_to_receive(&cat, &state(Some("BTC"), Some("ETH"), "")), "");
        assert_eq!(amount_to_receive(&cat, &state(Some("BTC"), None, "2")), "");
        assert_eq!(amount_to_receive(&cat, &state(Some("BTC"), Some("BTC"), "2")), "");
        assert_eq!(amount_to_receive(&cat, &state(Some("BTC"), Some("DOGE"), "2")), "");
        assert_eq!(
            amount_to_receive(&PriceCatalog::new(), &state(Some("BTC"), Some("ETH"), "2")),
            ""
        );
    }

    #[test]
    fn test_submit_with_identical_currencies_is_blocked() {
        let prev = state(Some("BTC"), Some("BTC"), "2");
        let t = transition(&catalog(), &prev, &FormAction::Submit);
        assert_eq!(t.result, Err(FormError::SelectionConflict));
        assert_eq!(t.state, prev);
    }

    #[test]
    fn test_submit_reports_outstanding_amount_error() {
        let mut prev = state(Some("BTC"), Some("ETH"), "2");
        prev.error = Some(FormError::InvalidAmount {
            input: "2x".to_string(),
        });
        let t = transition(&catalog(), &prev, &FormAction::Submit);
        assert!(matches!(t.result, Err(FormError::InvalidAmount { .. })));
        assert_eq!(t.state, prev);
    }

    #[test]
    fn test_submit_requires_amount() {
        let prev = state(Some("BTC"), Some("ETH"), "");
        let t = transition(&catalog(), &prev, &FormAction::Submit);
        assert_eq!(t.result, Err(FormError::MissingAmount));
    }

    #[test]
    fn test_can_submit_requires_distinct_currencies() {
        assert!(can_submit(&state(Some("BTC"), Some("ETH"), "1")));
        assert!(!can_submit(&state(Some("BTC"), Some("BTC"), "1")));
        assert!(!can_submit(&state(None, Some("ETH"), "1")));
        assert!(!can_submit(&state(Some("BTC"), Some("ETH"), "")));
    }

    #[test]
    fn test_selection_equal_to_other_slot_is_rejected() {
        let prev = state(Some("BTC"), None, "2");
        let t = transition(
            &catalog(),
            &prev,
            &FormAction::SetReceiveCurrency(Some(Currency::from("BTC"))),
        );
        assert_eq!(t.result, Err(FormError::SelectionConflict));
        assert_eq!(t.state, prev);
    }

    #[test]
    fn test_selection_outside_catalog_is_rejected() {
        let prev = FormState::default();
        let t = transition(
            &catalog(),
            &prev,
            &FormAction::SetSendCurrency(Some(Currency::from("DOGE"))),
        );
        assert_eq!(
            t.result,
            Err(FormError::UnavailableCurrency(Currency::from("DOGE")))
        );
        assert_eq!(t.state, prev);
    }

    #[test]
    fn test_swap_with_one_slot_is_noop() {
        let prev = state(Some("BTC"), None, "2");
        let t = transition(&catalog(), &prev, &FormAction::Swap);
        assert_eq!(t.result, Ok(()));
        assert_eq!(t.state, prev);
    }

    #[test]
    fn test_swap_exchanges_and_recomputes_in_one_step() {
        let cat = catalog();
        let mut prev = state(Some("BTC"), Some("ETH"), "2");
        prev.amount_to_receive = amount_to_receive(&cat, &prev);
        let t = transition(&cat, &prev, &FormAction::Swap);
        assert_eq!(t.state.send, Some(Currency::from("ETH")));
        assert_eq!(t.state.receive, Some(Currency::from("BTC")));
        assert_eq!(t.state.amount_to_receive, "0.1000000000");
    }

    #[test]
    fn test_recompute_and_reset_always_succeed() {
        let cat = catalog();
        let mut conflicted = state(Some("BTC"), Some("BTC"), "1,5");
        conflicted.error = Some(FormError::InvalidAmount {
            input: "1,5x".to_string(),
        });
        let starts = [
            FormState::default(),
            conflicted,
            state(Some("BTC"), Some("DOGE"), "."),
        ];

        for prev in &starts {
            for c in [&cat, &PriceCatalog::new()] {
                let t = transition(c, prev, &FormAction::Recompute);
                assert_eq!(t.result, Ok(()));
                assert_eq!(t.state.error, prev.error);

                let t = transition(c, prev, &FormAction::Reset);
                assert_eq!(t.result, Ok(()));
                assert_eq!(t.state, FormState::default());
            }
        }
    }
}
