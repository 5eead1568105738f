//! Per-module submission flow.
//!
//! Each instrument module owns one [`Submission`]: idle, or waiting on a
//! single in-flight request, or holding the latest response. A failed call
//! clears any prior response and is logged, nothing more; the flow simply
//! returns to idle (the service reports validation it rejects through the
//! same channel as any transport fault, and the client does not inspect
//! either).

use anyhow::Result;
use tracing::warn;

use desk_contract::instruments::american::AmericanOptionResponse;
use desk_contract::instruments::arithmetic_asian::ArithmeticAsianResponse;
use desk_contract::instruments::arithmetic_basket::ArithmeticBasketResponse;
use desk_contract::instruments::european::EuropeanOptionResponse;
use desk_contract::instruments::geometric_asian::GeometricAsianResponse;
use desk_contract::instruments::geometric_basket::GeometricBasketResponse;
use desk_contract::instruments::implied_volatility::ImpliedVolatilityResponse;
use desk_contract::instruments::kiko_put::KikoPutResponse;
use desk_contract::instruments::swap::SwapResponse;
use desk_contract::instruments::Instrument;

/// Any instrument's response body, tagged for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyResponse {
    European(EuropeanOptionResponse),
    ImpliedVolatility(ImpliedVolatilityResponse),
    GeometricAsian(GeometricAsianResponse),
    GeometricBasket(GeometricBasketResponse),
    ArithmeticAsian(ArithmeticAsianResponse),
    ArithmeticBasket(ArithmeticBasketResponse),
    American(AmericanOptionResponse),
    KikoPut(KikoPutResponse),
    Swap(SwapResponse),
}

/// Submission state for one instrument module.
///
/// `Idle -> Submitting -> {Success, Failure} -> Idle`, with at most one
/// request in flight at a time. The epoch stamps each dispatched request
/// so that a result arriving after [`Submission::reset`] is discarded
/// unseen: an abandoned module's request keeps running, but its result
/// never reaches a renderer.
#[derive(Debug, Default)]
pub struct Submission {
    in_flight: bool,
    epoch: u64,
    response: Option<AnyResponse>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trigger is currently enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Whether a request is awaiting its response.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Enter `Submitting`, stamping the request. Returns `None` (and does
    /// nothing) if a request is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Settle the request stamped `epoch`. A success stores the body
    /// verbatim; a failure logs it and clears any previously displayed
    /// response. Results from before the last reset are dropped.
    pub fn complete(&mut self, instrument: Instrument, epoch: u64, result: Result<AnyResponse>) {
        if epoch != self.epoch {
            return;
        }
        self.in_flight = false;
        match result {
            Ok(response) => self.response = Some(response),
            Err(error) => {
                warn!(instrument = instrument.title(), %error, "pricing request failed");
                self.response = None;
            }
        }
    }

    /// Drop all display state, as when the module leaves the screen. An
    /// in-flight request keeps running in the background; its eventual
    /// result is discarded.
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.epoch += 1;
        self.response = None;
    }

    /// The latest response, if the last settled request succeeded.
    pub fn response(&self) -> Option<&AnyResponse> {
        self.response.as_ref()
    }
}
