// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The structured service selection a customer builds in the package picker.
//!
//! Package and size arrive as free text from the UI; resolution into the
//! enums here is deliberately forgiving (substring match, sensible default)
//! because the picker labels have drifted over time while the duration table
//! has not.

use serde::{Deserialize, Serialize};

/// The three service packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServicePackage {
    /// The basic exterior package ("Gloss Shield").
    #[default]
    GlossShield,
    /// The thorough package ("Interior Revival").
    InteriorRevival,
    /// The like-new package ("Showroom Rebirth").
    ShowroomRebirth,
}

impl ServicePackage {
    /// Resolves a package from its free-text display name.
    ///
    /// Unknown names fall back to the basic package.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower: String = name.to_lowercase();
        if lower.contains("showroom") || lower.contains("like-new") || lower.contains("rebirth") {
            Self::ShowroomRebirth
        } else if lower.contains("interior revival") || lower.contains("thorough") {
            Self::InteriorRevival
        } else {
            Self::GlossShield
        }
    }

    /// Returns the base service minutes for this package.
    #[must_use]
    pub const fn base_minutes(&self) -> u32 {
        match self {
            Self::GlossShield => 120,
            Self::InteriorRevival => 180,
            Self::ShowroomRebirth => 300,
        }
    }
}

/// Vehicle size classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    /// Sedans, coupes, hatchbacks.
    #[default]
    Car,
    /// SUVs, crossovers, vans.
    Suv,
    /// Trucks.
    Truck,
}

impl VehicleSize {
    /// Resolves a size from an explicit id (`car`, `suv`, `truck`) or, when
    /// the id is absent, from a display label by substring.
    ///
    /// Defaults to `Car` when neither resolves.
    #[must_use]
    pub fn resolve(size_id: Option<&str>, size_label: Option<&str>) -> Self {
        if let Some(id) = size_id {
            match id.trim().to_lowercase().as_str() {
                "suv" => return Self::Suv,
                "truck" => return Self::Truck,
                "car" => return Self::Car,
                _ => {}
            }
        }
        let label: String = size_label.unwrap_or_default().to_lowercase();
        if label.contains("truck") {
            Self::Truck
        } else if label.contains("suv") {
            Self::Suv
        } else {
            Self::Car
        }
    }

    /// Returns the flat size bump added to every package.
    #[must_use]
    pub const fn bump_minutes(&self) -> u32 {
        match self {
            Self::Car => 0,
            Self::Suv => 10,
            Self::Truck => 20,
        }
    }

    /// Returns the heavy pet hair surcharge for this size.
    #[must_use]
    pub const fn heavy_hair_minutes(&self) -> u32 {
        match self {
            Self::Car => 30,
            Self::Suv => 40,
            Self::Truck => 50,
        }
    }

    /// Returns the paint-correction add-on minutes for this size.
    #[must_use]
    pub const fn paint_correction_minutes(&self) -> u32 {
        match self {
            Self::Car => 90,
            Self::Suv => 120,
            Self::Truck => 150,
        }
    }
}

/// Pet hair contamination level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetHairLevel {
    /// No pet hair.
    #[default]
    None,
    /// Typical shedding.
    Normal,
    /// Heavy, size-dependent removal work.
    Heavy,
}

impl PetHairLevel {
    /// Resolves a level from free text; unknown values mean none.
    #[must_use]
    pub fn from_level_str(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "normal" => Self::Normal,
            "heavy" => Self::Heavy,
            _ => Self::None,
        }
    }
}

/// Severity scale shared by stain and odor treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Nothing to treat.
    #[default]
    None,
    /// Light treatment.
    Light,
    /// Medium treatment.
    Medium,
    /// Heavy treatment.
    Heavy,
}

impl SeverityLevel {
    /// Resolves a level from free text; unknown values mean none.
    #[must_use]
    pub fn from_level_str(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "medium" => Self::Medium,
            "heavy" => Self::Heavy,
            _ => Self::None,
        }
    }

    /// Returns the treatment minutes for this level.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Light => 15,
            Self::Medium => 30,
            Self::Heavy => 45,
        }
    }
}

/// A fully resolved service selection.
///
/// This is the typed form the duration model works on; the free-text labels
/// the customer saw stay in the request DTO and go onto the sheet verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    /// The chosen package.
    pub package: ServicePackage,
    /// The vehicle size.
    pub size: VehicleSize,
    /// Pet hair level.
    pub hair: PetHairLevel,
    /// Stain severity.
    pub stain: SeverityLevel,
    /// Odor severity.
    pub odor: SeverityLevel,
    /// Whether the paint-correction add-on was selected. Other addons do
    /// not affect duration.
    pub paint_correction: bool,
}
