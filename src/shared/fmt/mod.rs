//! Formatting and parsing helpers for amounts shown in the swap form.

pub mod decimal;
