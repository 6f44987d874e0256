//! Trait for priceable entities.
//!
//! Pricing is fallible: market parameters are validated on every call,
//! so `price` returns a `Result` rather than a bare number.

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// Prefer static dispatch through concrete types or enums. The trait is
/// object safe, so `&dyn Priceable` works where a heterogeneous batch is
/// needed.
///
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_core::types::PricingError;
///
/// enum Cashflow {
///     Fixed(f64),
///     Discounted { amount: f64, rate: f64, time: f64 },
/// }
///
/// impl Priceable for Cashflow {
///     fn price(&self) -> Result<f64, PricingError> {
///         match self {
///             Cashflow::Fixed(amount) => Ok(*amount),
///             Cashflow::Discounted { amount, rate, time } => {
///                 if *time < 0.0 {
///                     return Err(PricingError::InvalidInput("negative time".into()));
///                 }
///                 Ok(amount * (-rate * time).exp())
///             }
///         }
///     }
/// }
///
/// assert_eq!(Cashflow::Fixed(5.0).price().unwrap(), 5.0);
/// ```
pub trait Priceable {
    /// Calculate the price (present value).
    ///
    /// # Invariants
    /// - A returned price is finite and non-negative (no arbitrage)
    /// - The method is pure (no side effects, deterministic)
    fn price(&self) -> Result<f64, PricingError>;
}
