//! Yearly income limits scaled by household size.

/// Early Head Start: $14,580 for one person, plus $5,140 per additional person.
pub fn early_head_start_limit(household_size: usize) -> i64 {
    9_440 + 5_140 * size(household_size)
}

/// Head Start: $20,440 for two people, plus $5,380 per additional person.
pub fn head_start_limit(household_size: usize) -> i64 {
    20_440 + 5_380 * (size(household_size) - 2)
}

const INFANT_TODDLER_LIMITS: [i64; 15] = [
    51_610, 67_490, 83_370, 99_250, 115_130, 131_010, 133_987, 136_965, 139_942, 142_920,
    145_897, 148_875, 151_852, 154_830, 157_807,
];

/// Infant/toddler care: tabulated up to 15 people, then $3,022.50 per person.
///
/// Amounts beyond the table are rounded down to whole dollars.
pub fn infant_toddler_limit(household_size: usize) -> i64 {
    match household_size {
        0 => INFANT_TODDLER_LIMITS[0],
        n if n <= INFANT_TODDLER_LIMITS.len() => INFANT_TODDLER_LIMITS[n - 1],
        n => {
            let extra = size(n) - 15;
            INFANT_TODDLER_LIMITS[14] + (6_045 * extra) / 2
        }
    }
}

fn size(household_size: usize) -> i64 {
    i64::try_from(household_size).unwrap_or(i64::MAX / 10_000)
}
