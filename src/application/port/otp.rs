// SPDX-License-Identifier: MPL-2.0
//! One-time code generation port.

/// Lowest code handed out by a generator.
pub const OTP_MIN: u32 = 100_000;
/// Highest code handed out by a generator.
pub const OTP_MAX: u32 = 999_999;

/// Source of six-digit one-time codes.
///
/// Implementations must return values in `OTP_MIN..=OTP_MAX`.
pub trait OtpGenerator {
    fn generate(&mut self) -> u32;
}
