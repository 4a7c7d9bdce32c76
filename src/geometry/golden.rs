use crate::foundation::error::{GoldError, GoldResult};

/// Golden ratio φ = (1 + √5) / 2.
pub fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

/// Larger golden-section fraction α = φ / (1 + φ).
pub fn alpha() -> f64 {
    let p = phi();
    p / (1.0 + p)
}

/// Smaller golden-section fraction β = 1 / (1 + φ).
pub fn beta() -> f64 {
    1.0 / (1.0 + phi())
}

/// The four scalars that parameterize the construction for one overall scale `Z`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GoldenConstants {
    /// Golden ratio φ.
    pub phi: f64,
    /// Larger section fraction α; `alpha + beta == 1`.
    pub alpha: f64,
    /// Smaller section fraction β.
    pub beta: f64,
    /// Overall scale `Z`.
    pub z: f64,
    /// Larger part `A = α·Z`.
    pub a: f64,
    /// Smaller part `B = β·Z`.
    pub b: f64,
}

impl GoldenConstants {
    /// Derive the constants for scale `z`; `z` must be finite and positive.
    pub fn new(z: f64) -> GoldResult<Self> {
        if !z.is_finite() || z <= 0.0 {
            return Err(GoldError::validation(format!(
                "scale Z must be finite and > 0 (got {z})"
            )));
        }
        let alpha = alpha();
        let beta = beta();
        Ok(Self {
            phi: phi(),
            alpha,
            beta,
            z,
            a: alpha * z,
            b: beta * z,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/golden.rs"]
mod tests;
