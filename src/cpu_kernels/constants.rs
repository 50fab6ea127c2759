//! Coefficients of the rational `tanh` approximation on `[-9, 9]`.
//!
//! Numerator is an odd degree-13 polynomial, denominator an even degree-6
//! polynomial; both are evaluated with Horner's method over `x^2`. Every ISA
//! variant reads the same constants so their outputs only differ by rounding
//! of fused vs unfused multiply-add.

/// Clamp bounds and Padé coefficients, stored in Horner evaluation order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct TanhConstants {
    pub lower_range: f32,
    pub upper_range: f32,
    pub alpha_13: f32,
    pub alpha_11: f32,
    pub alpha_9: f32,
    pub alpha_7: f32,
    pub alpha_5: f32,
    pub alpha_3: f32,
    pub alpha_1: f32,
    pub beta_6: f32,
    pub beta_4: f32,
    pub beta_2: f32,
    pub beta_0: f32,
}

#[allow(clippy::excessive_precision)]
pub const TANH_CONSTANTS: TanhConstants = TanhConstants {
    lower_range: -9.0f32,
    upper_range: 9.0f32,
    alpha_13: -2.76076847742355e-16f32,
    alpha_11: 2.00018790482477e-13f32,
    alpha_9: -8.60467152213735e-11f32,
    alpha_7: 5.12229709037114e-08f32,
    alpha_5: 1.48572235717979e-05f32,
    alpha_3: 6.37261928875436e-04f32,
    alpha_1: 4.89352455891786e-03f32,
    beta_6: 1.19825839466702e-06f32,
    beta_4: 1.18534705686654e-04f32,
    beta_2: 2.26843463243900e-03f32,
    beta_0: 4.89352518554385e-03f32,
};

impl TanhConstants {
    /// Numerator coefficients, highest power first.
    #[inline(always)]
    pub const fn alphas(&self) -> [f32; 7] {
        [
            self.alpha_13,
            self.alpha_11,
            self.alpha_9,
            self.alpha_7,
            self.alpha_5,
            self.alpha_3,
            self.alpha_1,
        ]
    }

    /// Denominator coefficients, highest power first.
    #[inline(always)]
    pub const fn betas(&self) -> [f32; 4] {
        [self.beta_6, self.beta_4, self.beta_2, self.beta_0]
    }
}
