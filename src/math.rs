//! Thin wrappers over `libm` for float operations with well-defined
//! negative-argument behavior.

/// Floating-point modulo via `libm::fmod`.
///
/// Same sign convention as Rust's `%`, but routed through `libm` so the
/// behavior is identical across targets.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// 10 raised to a small non-negative integer power, exact through 10^15.
///
/// Used as the decimal scale factor in the split primitive. Every value in
/// the table is an exactly representable f64 integer.
#[inline]
pub fn pow10(p: u8) -> f64 {
    const POW10: [f64; 16] = [
        1.0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
    ];
    POW10[p as usize]
}
