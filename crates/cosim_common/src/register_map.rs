//! The control-register address map.

use std::collections::BTreeMap;

/// Mapping from kernel argument name to its control register addresses.
///
/// Each argument maps to one or more register-address tokens in hardware
/// hex-literal form (`'h1c`). An argument has more than one address when it
/// is wider than a single 32-bit register; the per-argument order is the
/// order the addresses appear in the control RTL, which is address-ascending,
/// and downstream code writes words into the argument in exactly that order.
/// The outer map is a `BTreeMap` so whole-map iteration is name-sorted and
/// generated output is deterministic.
pub type RegisterMap = BTreeMap<String, Vec<String>>;
