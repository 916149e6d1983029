// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The job duration model.
//!
//! Total job minutes are a pure function of the selection and a travel
//! estimate. The component table:
//!
//! | Component | Minutes |
//! |---|---|
//! | Package base | 120 / 180 / 300 |
//! | Size bump | car 0, suv +10, truck +20 |
//! | Pet hair | none 0, normal +15, heavy by size +30/+40/+50 |
//! | Stain severity | none 0, light +15, medium +30, heavy +45 |
//! | Odor severity | none 0, light +15, medium +30, heavy +45 |
//! | Paint correction | by size +90/+120/+150 |
//! | Travel | one-way minutes, doubled when round-trip is enabled |

use crate::selection::{PetHairLevel, Selection};

/// The pet hair surcharge for normal shedding, all sizes.
const NORMAL_HAIR_MINUTES: u32 = 15;

/// Computes the on-site service minutes for a selection, excluding travel.
#[must_use]
pub fn service_minutes(selection: &Selection) -> u32 {
    let mut total: u32 = selection.package.base_minutes();
    total += selection.size.bump_minutes();

    total += match selection.hair {
        PetHairLevel::None => 0,
        PetHairLevel::Normal => NORMAL_HAIR_MINUTES,
        PetHairLevel::Heavy => selection.size.heavy_hair_minutes(),
    };

    total += selection.stain.minutes();
    total += selection.odor.minutes();

    if selection.paint_correction {
        total += selection.size.paint_correction_minutes();
    }

    total
}

/// Computes total job minutes including travel.
///
/// `travel_one_way` is the estimated one-way driving minutes; when
/// `round_trip` is set the crew drives home after the job and travel counts
/// twice.
#[must_use]
pub fn job_minutes(selection: &Selection, travel_one_way: u32, round_trip: bool) -> u32 {
    let travel: u32 = if round_trip {
        travel_one_way * 2
    } else {
        travel_one_way
    };
    service_minutes(selection) + travel
}
