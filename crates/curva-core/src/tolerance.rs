/// Tolerance for numeric comparisons between curve samples.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for coordinate comparisons (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Agreement expected between mathematically equivalent algorithms.
    pub fn loose() -> Self {
        Self { linear: 1e-3 }
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
