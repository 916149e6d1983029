// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the public JSON API.
//!
//! These are distinct from domain types: they carry the free-text labels
//! the checkout UI sends (which go onto the sheet verbatim) alongside the
//! fields the duration model needs. Field names follow the UI's
//! `camelCase`.

use serde::{Deserialize, Serialize};
use suds_domain::{
    PetHairLevel, Selection, ServicePackage, SeverityLevel, VehicleSize,
};

/// A severity selector as the UI sends it: `{ "level": "heavy" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LevelPayload {
    /// The selected level; absent or unknown means none.
    pub level: Option<String>,
}

/// An addon entry. Older UI builds send bare strings, newer builds send
/// `{ id, name }` objects; both appear in stored carts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddonPayload {
    /// A bare addon name.
    Name(String),
    /// A structured addon entry.
    Detailed {
        /// Stable addon id.
        id: Option<String>,
        /// Display name.
        name: Option<String>,
    },
}

impl AddonPayload {
    /// Returns the display name for the sheet.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { id, name } => name.as_deref().or(id.as_deref()).unwrap_or(""),
        }
    }

    /// Returns the value used to recognize duration-affecting addons.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { id, name } => id.as_deref().or(name.as_deref()).unwrap_or(""),
        }
    }
}

/// The service selection portion of a booking payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionPayload {
    /// Package display name.
    pub package_name: String,
    /// Explicit size id (`car`, `suv`, `truck`), when the UI sent one.
    pub size_id: Option<String>,
    /// Size display label, used to infer the size when the id is absent.
    pub size_label: Option<String>,
    /// Pet hair selector.
    pub hair: Option<LevelPayload>,
    /// Stain severity selector.
    pub stain: Option<LevelPayload>,
    /// Odor severity selector.
    pub odor: Option<LevelPayload>,
    /// Selected addons.
    pub addons: Vec<AddonPayload>,
}

impl SelectionPayload {
    /// Resolves the payload into the typed selection the duration model
    /// works on. Resolution is forgiving: unknown labels fall back to
    /// defaults rather than erroring.
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        let level = |payload: Option<&LevelPayload>| -> String {
            payload
                .and_then(|p| p.level.clone())
                .unwrap_or_default()
        };
        Selection {
            package: ServicePackage::from_name(&self.package_name),
            size: VehicleSize::resolve(self.size_id.as_deref(), self.size_label.as_deref()),
            hair: PetHairLevel::from_level_str(&level(self.hair.as_ref())),
            stain: SeverityLevel::from_level_str(&level(self.stain.as_ref())),
            odor: SeverityLevel::from_level_str(&level(self.odor.as_ref())),
            paint_correction: self
                .addons
                .iter()
                .any(|addon| addon.key().to_lowercase().contains("paint")),
        }
    }

    /// Joins addon display names for the sheet.
    #[must_use]
    pub fn addons_text(&self) -> String {
        self.addons
            .iter()
            .map(AddonPayload::display_name)
            .filter(|name| !name.is_empty())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

/// The requested appointment slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppointmentPayload {
    /// Requested date, `YYYY-MM-DD`.
    pub date: String,
    /// Requested start time, `HH:MM`.
    pub time: String,
}

/// A structured customer address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AddressPayload {
    /// Street line.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// ZIP code.
    pub zip: Option<String>,
}

impl AddressPayload {
    /// Composes the full address string, omitting empty components.
    #[must_use]
    pub fn compose(&self) -> String {
        [&self.street, &self.city, &self.state, &self.zip]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

/// The customer portion of a booking payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPayload {
    /// Customer name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Service address.
    pub address: Option<AddressPayload>,
    /// Where the customer heard about the business.
    pub heard_from: String,
}

/// The pricing portion of a booking payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PricingPayload {
    /// The quoted total.
    pub total: Option<f64>,
}

/// A booking confirmation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingRequest {
    /// The service selection.
    pub selection: Option<SelectionPayload>,
    /// The requested slot.
    pub appointment: Option<AppointmentPayload>,
    /// The customer details.
    pub customer: Option<CustomerPayload>,
    /// The quoted pricing.
    pub pricing: Option<PricingPayload>,
}

/// A confirmed booking, with times in the 12-hour display form the sheet
/// stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedBooking {
    /// The assigned job id, e.g. `JOB-042`.
    pub job_id: String,
    /// Start time display, e.g. `9:00 AM`.
    pub start: String,
    /// End time display, e.g. `11:00 AM`.
    pub end: String,
}

/// A mileage/tax estimate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EstimateRequest {
    /// The service address.
    #[serde(default)]
    pub address: String,
    /// ZIP code. Accepted for UI compatibility; the address string is what
    /// the oracle receives.
    #[serde(default)]
    pub zip: String,
    /// The pre-fee subtotal.
    #[serde(default)]
    pub subtotal: f64,
}

/// A mileage/tax estimate breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    /// One-way driving miles, rounded to hundredths.
    pub miles: f64,
    /// One-way driving minutes.
    pub drive_minutes_one_way: u32,
    /// Miles beyond the free radius.
    pub billable_miles: f64,
    /// The mileage fee.
    pub mileage_fee: f64,
    /// The applied tax rate.
    pub tax_rate: f64,
    /// The tax amount.
    pub tax_amount: f64,
    /// Subtotal plus fee plus tax.
    pub total: f64,
}
