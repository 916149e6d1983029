// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mileage-fee and tax estimation for the checkout page.

use crate::request_response::{EstimateBreakdown, EstimateRequest};
use suds_travel::{TravelEstimate, TravelOracle};
use tracing::warn;

/// Pricing knobs for the estimate, read from configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimateConfig {
    /// Sales tax rate applied to subtotal plus mileage fee.
    pub tax_rate: f64,
    /// Miles included before the mileage fee starts.
    pub free_miles: f64,
    /// Fee per billable mile.
    pub per_mile_rate: f64,
}

/// Rounds a dollar (or mile) figure to hundredths for display.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the estimate breakdown from known travel figures.
#[must_use]
pub fn quote_breakdown(
    subtotal: f64,
    miles: f64,
    minutes_one_way: u32,
    config: &EstimateConfig,
) -> EstimateBreakdown {
    let billable: f64 = (miles - config.free_miles).max(0.0);
    let mileage_fee: f64 = billable * config.per_mile_rate;
    let tax_amount: f64 = (subtotal + mileage_fee).max(0.0) * config.tax_rate;
    let total: f64 = subtotal + mileage_fee + tax_amount;

    EstimateBreakdown {
        miles: round_cents(miles),
        drive_minutes_one_way: minutes_one_way,
        billable_miles: round_cents(billable),
        mileage_fee: round_cents(mileage_fee),
        tax_rate: config.tax_rate,
        tax_amount: round_cents(tax_amount),
        total: round_cents(total),
    }
}

/// Produces an estimate for a checkout request.
///
/// The travel oracle is best-effort: when it is unconfigured, the address
/// is empty, or the lookup fails, the estimate degrades to zero mileage and
/// taxes the subtotal alone rather than erroring.
pub async fn estimate_quote(
    oracle: Option<&dyn TravelOracle>,
    home_base: Option<&str>,
    request: &EstimateRequest,
    config: &EstimateConfig,
) -> EstimateBreakdown {
    let travel: Option<TravelEstimate> = match (oracle, home_base) {
        (Some(oracle), Some(home_base)) if !request.address.trim().is_empty() => oracle
            .estimate(home_base, &request.address)
            .await
            .inspect_err(
                |err| warn!(error = %err, "travel estimate failed; quoting without mileage"),
            )
            .ok(),
        _ => None,
    };

    let (miles, minutes): (f64, u32) =
        travel.map_or((0.0, 0), |t| (t.miles, t.minutes_one_way));
    quote_breakdown(request.subtotal, miles, minutes, config)
}
