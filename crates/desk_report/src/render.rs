//! Per-instrument renderers.
//!
//! Each renderer maps a response body to a fixed [`Report`]: headline
//! figures at 6 decimal places (or the server's diagnostic text verbatim),
//! an optional confidence interval, and an echo of the submitted inputs
//! under their original display labels. The swap renderer instead produces
//! the NPV summary and both cashflow schedules, amounts at 2 decimals and
//! discount factors at 6, in server order.

use desk_client::submission::AnyResponse;
use desk_contract::figure::Figure;
use desk_contract::instruments::american::AmericanOptionResponse;
use desk_contract::instruments::arithmetic_asian::ArithmeticAsianResponse;
use desk_contract::instruments::arithmetic_basket::ArithmeticBasketResponse;
use desk_contract::instruments::european::EuropeanOptionResponse;
use desk_contract::instruments::geometric_asian::GeometricAsianResponse;
use desk_contract::instruments::geometric_basket::GeometricBasketResponse;
use desk_contract::instruments::implied_volatility::ImpliedVolatilityResponse;
use desk_contract::instruments::kiko_put::KikoPutResponse;
use desk_contract::instruments::swap::SwapResponse;
use desk_contract::types::OptionType;

use crate::report::{group_thousands, EchoRow, Headline, Report, TableSection};

/// Decimal places for option prices, volatilities and deltas.
const PRICE_DECIMALS: usize = 6;
/// Decimal places for swap NPVs and cashflow amounts.
const NPV_DECIMALS: usize = 2;
/// Decimal places for discount factors.
const DF_DECIMALS: usize = 6;

/// Render any instrument's response.
pub fn report(response: &AnyResponse) -> Report {
    match response {
        AnyResponse::European(r) => european_report(r),
        AnyResponse::ImpliedVolatility(r) => implied_volatility_report(r),
        AnyResponse::GeometricAsian(r) => geometric_asian_report(r),
        AnyResponse::GeometricBasket(r) => geometric_basket_report(r),
        AnyResponse::ArithmeticAsian(r) => arithmetic_asian_report(r),
        AnyResponse::ArithmeticBasket(r) => arithmetic_basket_report(r),
        AnyResponse::American(r) => american_report(r),
        AnyResponse::KikoPut(r) => kiko_put_report(r),
        AnyResponse::Swap(r) => swap_report(r),
    }
}

fn option_badge(option_type: OptionType) -> String {
    format!("{} OPTION", option_type.as_str().to_uppercase())
}

fn headline(label: &'static str, figure: &Figure) -> Headline {
    Headline {
        label,
        value: figure.format(PRICE_DECIMALS),
    }
}

fn interval(bounds: &[Figure; 2]) -> String {
    format!(
        "{} — {}",
        bounds[0].format(PRICE_DECIMALS),
        bounds[1].format(PRICE_DECIMALS)
    )
}

fn maturity_row(t: f64) -> EchoRow {
    EchoRow::new("Time to Maturity (T)", format!("{t} year(s)"))
}

pub fn european_report(response: &EuropeanOptionResponse) -> Report {
    let input = &response.input;
    Report {
        title: "European Option (Black-Scholes)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: None,
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Volatility (σ)", input.sigma.to_string()),
            EchoRow::new("Repo Rate (q)", input.q.to_string()),
            EchoRow::new("Option Type", input.option_type.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn implied_volatility_report(response: &ImpliedVolatilityResponse) -> Report {
    let input = &response.input;
    Report {
        title: "Implied Volatility",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Volatility", &response.implied_volatility)],
        interval: None,
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Option Premium", input.option_premium.to_string()),
            EchoRow::new("Repo Rate (q)", input.q.to_string()),
        ],
        tables: Vec::new(),
    }
}

pub fn geometric_asian_report(response: &GeometricAsianResponse) -> Report {
    let input = &response.input;
    Report {
        title: "Geometric Asian Option (Closed Form)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: None,
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Volatility (σ)", input.sigma.to_string()),
            EchoRow::new("Number of Periods (n)", input.n.to_string()),
            EchoRow::new("Option Type", input.option_type.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn geometric_basket_report(response: &GeometricBasketResponse) -> Report {
    let input = &response.input;
    Report {
        title: "Geometric Basket Option (Closed Form)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: None,
        inputs: vec![
            EchoRow::new("First Asset Price (S₁)", input.s1.to_string()),
            EchoRow::new("Second Asset Price (S₂)", input.s2.to_string()),
            EchoRow::new("First Asset Volatility (σ₁)", input.sigma1.to_string()),
            EchoRow::new("Second Asset Volatility (σ₂)", input.sigma2.to_string()),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Correlation Coefficient (ρ)", input.rho.to_string()),
            EchoRow::new("Option Type", input.option_type.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn arithmetic_asian_report(response: &ArithmeticAsianResponse) -> Report {
    let input = &response.input;
    Report {
        title: "Arithmetic Asian Option (Monte Carlo)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: Some(interval(&response.confident_interval)),
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Volatility (σ)", input.sigma.to_string()),
            EchoRow::new("Number of Periods (n)", input.n.to_string()),
            EchoRow::new("Number of Simulations (m)", group_thousands(input.m)),
            EchoRow::new("Option Type", input.option_type.display()),
            EchoRow::new("Control Variate", input.control_variate.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn arithmetic_basket_report(response: &ArithmeticBasketResponse) -> Report {
    let input = &response.input;
    Report {
        title: "Arithmetic Basket Option (Monte Carlo)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: Some(interval(&response.confident_interval)),
        inputs: vec![
            EchoRow::new("First Asset Price (S₁)", input.s1.to_string()),
            EchoRow::new("Second Asset Price (S₂)", input.s2.to_string()),
            EchoRow::new("First Asset Volatility (σ₁)", input.sigma1.to_string()),
            EchoRow::new("Second Asset Volatility (σ₂)", input.sigma2.to_string()),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Correlation Coefficient (ρ)", input.rho.to_string()),
            EchoRow::new("Number of Simulations (m)", group_thousands(input.m)),
            EchoRow::new("Option Type", input.option_type.display()),
            EchoRow::new("Control Variate", input.control_variate.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn american_report(response: &AmericanOptionResponse) -> Report {
    let input = &response.input;
    Report {
        title: "American Option (Binomial Tree)",
        badge: Some(option_badge(input.option_type)),
        headlines: vec![headline("Price", &response.price)],
        interval: None,
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Volatility (σ)", input.sigma.to_string()),
            EchoRow::new("Number of Steps (n)", input.n.to_string()),
            EchoRow::new("Option Type", input.option_type.display()),
        ],
        tables: Vec::new(),
    }
}

pub fn kiko_put_report(response: &KikoPutResponse) -> Report {
    let input = &response.input;
    Report {
        title: "KIKO Put Option (Quasi-Monte Carlo)",
        badge: Some("PUT OPTION WITH BARRIERS".to_string()),
        headlines: vec![
            headline("Price", &response.price),
            headline("Delta", &response.delta),
        ],
        interval: Some(interval(&response.confident_interval)),
        inputs: vec![
            EchoRow::new("Spot Price (S)", input.s.to_string()),
            EchoRow::new("Strike Price (K)", input.k.to_string()),
            maturity_row(input.t),
            EchoRow::new("Risk-Free Rate (r)", input.r.to_string()),
            EchoRow::new("Volatility (σ)", input.sigma.to_string()),
            EchoRow::new("Lower Barrier (L)", input.l.to_string()),
            EchoRow::new("Upper Barrier (U)", input.u.to_string()),
            EchoRow::new("Number of Timesteps (n)", group_thousands(input.n)),
            EchoRow::new("Rebate Amount (R)", input.rebate.to_string()),
            EchoRow::new("Pricing Method", "Quasi-Monte Carlo"),
        ],
        tables: Vec::new(),
    }
}

pub fn swap_report(response: &SwapResponse) -> Report {
    let npv_summary = TableSection {
        title: "NPV Summary",
        rows: vec![
            vec!["Total NPV".to_string(), response.npv.format(NPV_DECIMALS)],
            vec![
                "Fixed Leg NPV".to_string(),
                response.fixed_leg_npv.format(NPV_DECIMALS),
            ],
            vec![
                "Floating Leg NPV".to_string(),
                response.float_leg_npv.format(NPV_DECIMALS),
            ],
        ],
    };

    let cashflow_rows = |cashflows: &[desk_contract::instruments::swap::Cashflow]| -> Vec<Vec<String>> {
        cashflows
            .iter()
            .map(|cf| {
                vec![
                    cf.date.clone(),
                    cf.amount.format(NPV_DECIMALS),
                    cf.df.format(DF_DECIMALS),
                ]
            })
            .collect()
    };

    Report {
        title: "Interest Rate Swap Valuation",
        badge: None,
        headlines: Vec::new(),
        interval: None,
        inputs: Vec::new(),
        tables: vec![
            npv_summary,
            TableSection {
                title: "Fixed Leg Cashflows",
                rows: cashflow_rows(&response.fixed_cashflows),
            },
            TableSection {
                title: "Floating Leg Cashflows",
                rows: cashflow_rows(&response.float_cashflows),
            },
        ],
    }
}
