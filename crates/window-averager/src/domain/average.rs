use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for window averages
pub const AVERAGE_DECIMALS: u32 = 2;

/// Arithmetic mean of `values`, rounded half away from zero to two places.
///
/// An empty slice averages to zero.
pub fn average(values: &[i64]) -> Decimal {
    if values.is_empty() {
        return Decimal::new(0, AVERAGE_DECIMALS);
    }

    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    let mean = match Decimal::try_from_i128_with_scale(sum, 0) {
        Ok(total) => total / Decimal::from(values.len()),
        // Only reachable for windows far beyond any configured capacity
        Err(_) => Decimal::from_f64_retain(sum as f64 / values.len() as f64)
            .unwrap_or(Decimal::ZERO),
    };

    let mut rounded =
        mean.round_dp_with_strategy(AVERAGE_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AVERAGE_DECIMALS);
    rounded
}
