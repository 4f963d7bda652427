/// Arbitrary-precision numeric helpers.
///
/// This module provides the low-level integer routines shared by the numeric
/// tower: powers of ten for moving between scales, and division with
/// round-half-up semantics as used by every fixed-scale decimal operation.
///
/// # Responsibilities
/// - Compute powers of ten as `BigInt` values.
/// - Divide `BigInt` values rounding half away from zero.
pub mod num;
