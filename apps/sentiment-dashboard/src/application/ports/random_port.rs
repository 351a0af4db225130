//! Random Source Port (Driven Port)

/// Source of uniform draws for the data generator.
pub trait RandomSource: Send + Sync {
    /// Next draw from `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Next draw scaled into `[low, low + width)`.
    fn uniform(&self, low: f64, width: f64) -> f64 {
        width.mul_add(self.next_unit(), low)
    }
}
