//! # Billfold Form
//!
//! The reactive derivation pipeline around the [`billfold_core`]
//! discount engine.
//!
//! A bill form is a handful of text fields (day count, discount rate,
//! amount) plus a pair of externally supplied dates. On every input
//! change the embedding shell calls [`DiscountForm::recompute`], a pure
//! function over the current input snapshot, and renders whatever
//! [`Derivation`] comes back:
//!
//! - [`Derivation::Incomplete`] — some field is empty, malformed or out
//!   of range; show a placeholder, never a zero
//! - [`Derivation::Singular`] — the Act/360 divisor is zero; no gross
//!   amount can be quoted
//! - [`Derivation::Ready`] — a full [`DiscountResult`] to display and,
//!   on submit, hand upward
//!
//! Parsing is deliberately forgiving: half-typed text is "no value",
//! not an error, so the form never flashes error states mid-keystroke.
//! Range policy (days in the business window, rate below 100%) lives in
//! [`FieldLimits`]; the core engine underneath computes for any input.
//!
//! [`DiscountResult`]: billfold_core::DiscountResult

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod limits;
pub mod parse;
pub mod pipeline;

pub use limits::FieldLimits;
pub use pipeline::{ConversionMode, Derivation, DiscountForm};
