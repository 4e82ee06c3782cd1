/// Triangle wave with the given period, mapped onto `[0, 1]`.
///
/// Rises from 0 at `x = 0` to 1 at half a period and falls back to 0 at a full period.
/// Negative inputs wrap like positive ones.
pub fn triangle(x: f64, period: f64) -> f64 {
    let normalized = x.rem_euclid(period) / period;
    if normalized < 0.5 {
        2. * normalized
    } else {
        2. * (1. - normalized)
    }
}
