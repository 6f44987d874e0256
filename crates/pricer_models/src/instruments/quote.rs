//! European option quote request.

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use tracing::debug;

use super::payoff::PayoffType;
use crate::analytical::{AnalyticalError, BlackScholes};

/// Market parameters for a single European option price.
///
/// Constructed by the caller, priced, and discarded. Nothing is validated
/// at construction time; every pricing call checks the full parameter set
/// and reports violations as a `PricingError`.
///
/// # Invariants
/// S > 0, K > 0, T > 0, σ > 0, every field finite.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionQuoteRequest, PayoffType};
///
/// let quote = OptionQuoteRequest::new(50.0, 60.0, 0.5, 0.03, 0.25).with_dividend_yield(0.02);
/// let put = quote.price_payoff(PayoffType::Put).unwrap();
/// let call = quote.price_payoff(PayoffType::Call).unwrap();
/// assert!(put > quote.intrinsic_value(PayoffType::Put) - 1.0);
/// assert!(call < put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuoteRequest {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
}

impl OptionQuoteRequest {
    /// Creates a quote request with zero dividend yield.
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield: 0.0,
        }
    }

    /// Sets the continuous dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Builds the Black-Scholes model for this quote's market state.
    pub fn model(&self) -> Result<BlackScholes, AnalyticalError> {
        BlackScholes::new(self.spot, self.rate, self.volatility)?
            .with_dividend_yield(self.dividend_yield)
    }

    /// Checks every invariant without pricing.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.model()?.d1(self.strike, self.expiry)?;
        Ok(())
    }

    /// Prices the given payoff.
    pub fn price_payoff(&self, payoff: PayoffType) -> Result<f64, PricingError> {
        self.model()
            .and_then(|model| model.price(payoff, self.strike, self.expiry))
            .map_err(|err| {
                debug!(quote = ?self, %payoff, error = %err, "quote rejected");
                PricingError::from(err)
            })
    }

    /// Call price for this quote.
    pub fn call_price(&self) -> Result<f64, PricingError> {
        self.price_payoff(PayoffType::Call)
    }

    /// Put price for this quote.
    pub fn put_price(&self) -> Result<f64, PricingError> {
        self.price_payoff(PayoffType::Put)
    }

    /// Intrinsic value at the current spot (no validation).
    pub fn intrinsic_value(&self, payoff: PayoffType) -> f64 {
        payoff.intrinsic(self.spot, self.strike)
    }
}

/// Prices the put, the instrument this quote request exists for.
impl Priceable for OptionQuoteRequest {
    fn price(&self) -> Result<f64, PricingError> {
        self.put_price()
    }
}
