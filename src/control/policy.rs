//! Zone watering decision.
//!
//! **OR-of-dry**: a zone is watered when *either* of its two probes reads
//! `Dry` or `Arid`.  Moisture is not uniform across a bed, and one dry
//! probe is enough to call for water.
//!
//! An earlier revision of this controller compared raw values against a
//! single numeric threshold and required *both* probes to be dry.  That
//! rule is stricter and gives different answers for mixed pairs; it is
//! not supported here.
//!
//! `InvalidReading` never counts as dry, so a broken probe cannot start a
//! pump on its own.  Its partner still triggers watering normally.

use crate::sensors::moisture::SoilMoistureLevel;

/// `true` if the zone covered by probes `a` and `b` needs watering.
pub const fn should_water(a: SoilMoistureLevel, b: SoilMoistureLevel) -> bool {
    a.is_dry_or_worse() || b.is_dry_or_worse()
}
