//! Domain modules organized as vertical slices.
//!
//! - `coin` — prices: wire types, conversions, the catalog container, price sources
//!   and the HTTP sub-client
//! - `swap_form` — form state, actions, the transition function and the controller

pub mod coin;
pub mod swap_form;
