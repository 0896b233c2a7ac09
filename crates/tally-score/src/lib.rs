//! Receipt scoring rules for Tally.
//!
//! A single pure function, [`score`], converts a receipt into a
//! non-negative integer point total. The rules are independent and
//! additive; evaluation is deterministic and has no side effects, so the
//! engine needs no synchronization under concurrent use.
//!
//! Malformed field values never abort a computation: unparseable prices,
//! dates, and times degrade to zero values and the remaining rules still
//! apply.

pub mod rules;

pub use rules::score;
