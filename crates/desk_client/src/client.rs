//! API client for communicating with the pricing service.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use desk_contract::instruments::american::{self, AmericanOptionResponse};
use desk_contract::instruments::arithmetic_asian::{self, ArithmeticAsianResponse};
use desk_contract::instruments::arithmetic_basket::{self, ArithmeticBasketResponse};
use desk_contract::instruments::european::{self, EuropeanOptionResponse};
use desk_contract::instruments::geometric_asian::{self, GeometricAsianResponse};
use desk_contract::instruments::geometric_basket::{self, GeometricBasketResponse};
use desk_contract::instruments::implied_volatility::{self, ImpliedVolatilityResponse};
use desk_contract::instruments::kiko_put::{self, KikoPutResponse};
use desk_contract::instruments::swap::{self, SwapResponse};
use desk_contract::instruments::AnyRequest;

use crate::submission::AnyResponse;

/// API client for the pricing service
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// POST a validated request body and decode the JSON response
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            anyhow::bail!("API error: {}", response.status())
        }
    }

    /// Price a European option
    pub async fn european_option(
        &self,
        request: &european::EuropeanOptionRequest,
    ) -> Result<EuropeanOptionResponse> {
        self.post(european::PATH, request).await
    }

    /// Back out an implied volatility
    pub async fn implied_volatility(
        &self,
        request: &implied_volatility::ImpliedVolatilityRequest,
    ) -> Result<ImpliedVolatilityResponse> {
        self.post(implied_volatility::PATH, request).await
    }

    /// Price a geometric Asian option (closed form)
    pub async fn geometric_asian_option(
        &self,
        request: &geometric_asian::GeometricAsianRequest,
    ) -> Result<GeometricAsianResponse> {
        self.post(geometric_asian::PATH, request).await
    }

    /// Price a geometric basket option (closed form)
    pub async fn geometric_basket_option(
        &self,
        request: &geometric_basket::GeometricBasketRequest,
    ) -> Result<GeometricBasketResponse> {
        self.post(geometric_basket::PATH, request).await
    }

    /// Price an arithmetic Asian option (Monte Carlo)
    pub async fn arithmetic_asian_option(
        &self,
        request: &arithmetic_asian::ArithmeticAsianRequest,
    ) -> Result<ArithmeticAsianResponse> {
        self.post(arithmetic_asian::PATH, request).await
    }

    /// Price an arithmetic mean basket option (Monte Carlo)
    pub async fn arithmetic_basket_option(
        &self,
        request: &arithmetic_basket::ArithmeticBasketRequest,
    ) -> Result<ArithmeticBasketResponse> {
        self.post(arithmetic_basket::PATH, request).await
    }

    /// Price an American option (binomial tree)
    pub async fn american_option(
        &self,
        request: &american::AmericanOptionRequest,
    ) -> Result<AmericanOptionResponse> {
        self.post(american::PATH, request).await
    }

    /// Price a KIKO put option (quasi-Monte Carlo)
    pub async fn kiko_put_option(
        &self,
        request: &kiko_put::KikoPutRequest,
    ) -> Result<KikoPutResponse> {
        self.post(kiko_put::PATH, request).await
    }

    /// Value an interest rate swap
    pub async fn interest_rate_swap(
        &self,
        request: &swap::SwapRequest,
    ) -> Result<SwapResponse> {
        self.post(swap::PATH, request).await
    }

    /// Route a tagged request to its instrument endpoint
    pub async fn submit(&self, request: &AnyRequest) -> Result<AnyResponse> {
        debug!(
            instrument = request.instrument().title(),
            path = request.instrument().path(),
            "submitting pricing request"
        );
        match request {
            AnyRequest::European(r) => self.european_option(r).await.map(AnyResponse::European),
            AnyRequest::ImpliedVolatility(r) => self
                .implied_volatility(r)
                .await
                .map(AnyResponse::ImpliedVolatility),
            AnyRequest::GeometricAsian(r) => self
                .geometric_asian_option(r)
                .await
                .map(AnyResponse::GeometricAsian),
            AnyRequest::GeometricBasket(r) => self
                .geometric_basket_option(r)
                .await
                .map(AnyResponse::GeometricBasket),
            AnyRequest::ArithmeticAsian(r) => self
                .arithmetic_asian_option(r)
                .await
                .map(AnyResponse::ArithmeticAsian),
            AnyRequest::ArithmeticBasket(r) => self
                .arithmetic_basket_option(r)
                .await
                .map(AnyResponse::ArithmeticBasket),
            AnyRequest::American(r) => self.american_option(r).await.map(AnyResponse::American),
            AnyRequest::KikoPut(r) => self.kiko_put_option(r).await.map(AnyResponse::KikoPut),
            AnyRequest::Swap(r) => self.interest_rate_swap(r).await.map(AnyResponse::Swap),
        }
    }
}
