//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model with a continuous dividend
//! yield, and derives the put from the call through put-call parity.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put-Call Parity**: C - P = S·e^(-qT) - K·e^(-rT)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Substituting the call into the parity relation and using
//! N(x) + N(-x) = 1 gives the put formula above.
//!
//! ## Parameter Domain
//!
//! S > 0, K > 0, σ > 0, T > 0; r and q are any finite real. T = 0 is
//! rejected as a domain error because σ√T vanishes in the denominator of d₁.

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::PayoffType;
use pricer_core::types::PricingError;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility, dividend yield); the
/// contract terms (strike, expiry) are passed per call so one model can
/// price a strip of options.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model with zero dividend yield.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    /// - `AnalyticalError::NonFiniteParameter` if any argument is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-5.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        ensure_finite("spot", spot)?;
        ensure_finite("rate", rate)?;
        ensure_finite("volatility", volatility)?;

        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield: 0.0,
        })
    }

    /// Sets the continuous dividend yield.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteParameter` if `dividend_yield` is NaN or infinite
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Result<Self, AnalyticalError> {
        ensure_finite("dividend_yield", dividend_yield)?;
        self.dividend_yield = dividend_yield;
        Ok(self)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Risk-free discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }

    /// Spot net of the dividend stream, S·e^(-qT).
    ///
    /// Pricing with yield q is equivalent to pricing with no yield on this
    /// discounted spot.
    #[inline]
    pub fn discounted_spot(&self, expiry: f64) -> f64 {
        self.spot * (-self.dividend_yield * expiry).exp()
    }

    /// Forward price S·e^((r-q)T).
    #[inline]
    pub fn forward(&self, expiry: f64) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * expiry).exp()
    }

    /// Validates contract terms against the model's domain.
    ///
    /// Range checks run before the T = 0 check, so a contract that is both
    /// out of range and singular reports the range violation.
    fn check_contract(&self, strike: f64, expiry: f64) -> Result<(), AnalyticalError> {
        ensure_finite("strike", strike)?;
        ensure_finite("expiry", expiry)?;

        if strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if expiry < 0.0 {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        if expiry == 0.0 {
            return Err(AnalyticalError::ZeroExpiry);
        }
        Ok(())
    }

    /// d₁ and d₂ for validated inputs.
    #[inline]
    fn d1_d2_unchecked(&self, strike: f64, expiry: f64) -> (f64, f64) {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// Fails on an invalid strike, a negative expiry, or T = 0.
    pub fn d1(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.check_contract(strike, expiry)?;
        Ok(self.d1_d2_unchecked(strike, expiry).0)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// Fails on an invalid strike, a negative expiry, or T = 0.
    pub fn d2(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.check_contract(strike, expiry)?;
        Ok(self.d1_d2_unchecked(strike, expiry).1)
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-4);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.check_contract(strike, expiry)?;
        let (d1, d2) = self.d1_d2_unchecked(strike, expiry);

        let price = self.discounted_spot(expiry) * norm_cdf(d1)
            - strike * self.discount_factor(expiry) * norm_cdf(d2);

        ensure_price("call", price)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0).unwrap();
    /// assert!((price - 5.5735).abs() < 1e-4);
    /// ```
    pub fn price_put(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.check_contract(strike, expiry)?;
        let (d1, d2) = self.d1_d2_unchecked(strike, expiry);

        let price = strike * self.discount_factor(expiry) * norm_cdf(-d2)
            - self.discounted_spot(expiry) * norm_cdf(-d1);

        ensure_price("put", price)
    }

    /// Prices the given payoff.
    pub fn price(
        &self,
        payoff: PayoffType,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    /// Derives the put price from a call price through put-call parity.
    ///
    /// P = C - S·e^(-qT) + K·e^(-rT)
    ///
    /// The call may come from this model or from the market; the result is
    /// the put that is arbitrage-consistent with it.
    ///
    /// # Errors
    /// A call below max(S·e^(-qT) - K·e^(-rT), 0) would imply a negative put
    /// and is rejected with `ArbitrageViolation`. Shortfalls within
    /// [`PARITY_TOLERANCE`] of the parity scale are rounding and floor to 0.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let call = bs.price_call(100.0, 1.0).unwrap();
    /// let put = bs.put_from_call(call, 100.0, 1.0).unwrap();
    /// assert!((put - bs.price_put(100.0, 1.0).unwrap()).abs() < 1e-10);
    /// ```
    pub fn put_from_call(
        &self,
        call: f64,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        ensure_finite("call", call)?;
        self.check_contract(strike, expiry)?;

        let discounted_spot = self.discounted_spot(expiry);
        let discounted_strike = strike * self.discount_factor(expiry);
        let price = call - discounted_spot + discounted_strike;

        let tolerance = PARITY_TOLERANCE * (discounted_spot + discounted_strike);
        if call < 0.0 || price < -tolerance {
            return Err(AnalyticalError::ArbitrageViolation {
                call,
                lower_bound: (discounted_spot - discounted_strike).max(0.0),
            });
        }
        ensure_price("put", price)
    }

    /// Returns (C - P) - (S·e^(-qT) - K·e^(-rT)) for this model's prices.
    ///
    /// Zero up to floating-point rounding for any valid parameter set.
    pub fn parity_residual(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        let call = self.price_call(strike, expiry)?;
        let put = self.price_put(strike, expiry)?;
        let forward_value =
            self.discounted_spot(expiry) - strike * self.discount_factor(expiry);
        Ok(call - put - forward_value)
    }
}

/// Relative slack, against S·e^(-qT) + K·e^(-rT), allowed before a parity
/// shortfall counts as arbitrage.
pub const PARITY_TOLERANCE: f64 = 1e-10;

/// Rejects NaN and infinite parameters.
#[inline]
fn ensure_finite(name: &'static str, value: f64) -> Result<(), AnalyticalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticalError::NonFiniteParameter { name, value })
    }
}

/// Checks a computed price is finite and floors rounding noise at zero.
#[inline]
fn ensure_price(kind: &str, price: f64) -> Result<f64, AnalyticalError> {
    if !price.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: format!("{} price evaluated to {}", kind, price),
        });
    }
    Ok(price.max(0.0))
}

/// European put price without dividends.
///
/// # Arguments
/// * `spot` - Spot price S (> 0)
/// * `strike` - Strike K (> 0)
/// * `expiry` - Time to maturity T in years (> 0)
/// * `rate` - Risk-free rate r
/// * `volatility` - Volatility σ (> 0)
///
/// # Errors
/// - `PricingError::InvalidInput` if S <= 0, K <= 0, T < 0, σ <= 0, or a value is not finite
/// - `PricingError::DomainError` if T = 0
///
/// # Examples
/// ```
/// use pricer_models::analytical::put_price;
///
/// let p = put_price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((p - 5.57).abs() < 0.01);
///
/// assert!(put_price(100.0, 100.0, 0.0, 0.05, 0.2).unwrap_err().is_domain_error());
/// assert!(put_price(-5.0, 100.0, 1.0, 0.05, 0.2).unwrap_err().is_invalid_input());
/// ```
pub fn put_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64, PricingError> {
    put_price_with_dividend(spot, strike, expiry, rate, volatility, 0.0)
}

/// European put price with a continuous dividend yield.
///
/// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
///
/// # Errors
/// Same as [`put_price`]; a non-finite `dividend_yield` is `InvalidInput`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{put_price, put_price_with_dividend};
///
/// let (s, k, t, r, sigma, q) = (50.0, 60.0, 0.5, 0.03, 0.25, 0.02);
/// let with_yield = put_price_with_dividend(s, k, t, r, sigma, q).unwrap();
/// let on_discounted_spot = put_price(s * (-q * t).exp(), k, t, r, sigma).unwrap();
/// assert!((with_yield - on_discounted_spot).abs() < 1e-10);
/// ```
pub fn put_price_with_dividend(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
) -> Result<f64, PricingError> {
    let model = BlackScholes::new(spot, rate, volatility)?.with_dividend_yield(dividend_yield)?;
    Ok(model.price_put(strike, expiry)?)
}

/// European call price with a continuous dividend yield.
///
/// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
///
/// # Errors
/// Same as [`put_price_with_dividend`].
pub fn call_price_with_dividend(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
) -> Result<f64, PricingError> {
    let model = BlackScholes::new(spot, rate, volatility)?.with_dividend_yield(dividend_yield)?;
    Ok(model.price_call(strike, expiry)?)
}
