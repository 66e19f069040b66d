/// Clamp into [0, 1]. NaN maps to 0 so no input escapes the unit interval.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}
