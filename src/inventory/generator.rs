//! Mock Row Generator
//!
//! Produces synthetic medication rows for the inventory table. The public
//! entry point uses an unseeded thread-local RNG, so two batches are never
//! expected to match. [`generate_medication_rows_with`] takes the RNG and the
//! reference instant explicitly for tests and benches.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use super::types::MedicationRow;

/// Smallest dosage handed out, in milligrams
pub const MIN_DOSAGE_MG: u32 = 1;

/// Largest dosage handed out, in milligrams
pub const MAX_DOSAGE_MG: u32 = 500;

/// Expiration dates fall within this many days after generation
pub const EXPIRATION_HORIZON_DAYS: i64 = 5 * 365;

const QUALIFIERS: [&str; 8] = [
    "Extended-Release",
    "Chewable",
    "Low-Dose",
    "Children's",
    "Rapid",
    "Coated",
    "Maximum Strength",
    "Generic",
];

const COMPOUNDS: [&str; 12] = [
    "Aspirin",
    "Metformin",
    "Ibuprofen",
    "Amoxicillin",
    "Lisinopril",
    "Atorvastatin",
    "Omeprazole",
    "Levothyroxine",
    "Amlodipine",
    "Cetirizine",
    "Paracetamol",
    "Sertraline",
];

const FORMS: [&str; 6] = ["Tablets", "Capsules", "Caplets", "Softgels", "Syrup", "Drops"];

/// Generate `count` medication rows with ids `1..=count`
pub fn generate_medication_rows(count: usize) -> Vec<MedicationRow> {
    generate_medication_rows_with(&mut rand::thread_rng(), Utc::now(), count)
}

/// Generate `count` rows using the given RNG, with expiration dates strictly
/// inside `(now, now + EXPIRATION_HORIZON_DAYS)`
pub fn generate_medication_rows_with<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<MedicationRow> {
    let horizon_ms = Duration::days(EXPIRATION_HORIZON_DAYS).num_milliseconds();

    id_range(count)
        .map(|id| MedicationRow {
            id,
            medication_name: product_name(rng),
            dosage: format!("{}mg", rng.gen_range(MIN_DOSAGE_MG..=MAX_DOSAGE_MG)),
            expiration_date: now + Duration::milliseconds(rng.gen_range(1..horizon_ms)),
        })
        .collect()
}

/// Row ids `1..=count`, saturating at `u32::MAX`
fn id_range(count: usize) -> RangeInclusive<u32> {
    1..=u32::try_from(count).unwrap_or(u32::MAX)
}

fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    // Slices are non-empty constants
    let qualifier = QUALIFIERS.choose(rng).copied().unwrap_or_default();
    let compound = COMPOUNDS.choose(rng).copied().unwrap_or_default();
    let form = FORMS.choose(rng).copied().unwrap_or_default();

    format!("{} {} {}", qualifier, compound, form)
}
