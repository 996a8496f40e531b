// SPDX-License-Identifier: MPL-2.0
//! Random one-time codes.

use crate::application::port::{OtpGenerator, OTP_MAX, OTP_MIN};
use rand::Rng;

/// Draws codes uniformly from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOtp;

impl OtpGenerator for RandomOtp {
    fn generate(&mut self) -> u32 {
        rand::thread_rng().gen_range(OTP_MIN..=OTP_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_six_digits() {
        let mut generator = RandomOtp;
        for _ in 0..1_000 {
            let code = generator.generate();
            assert!((OTP_MIN..=OTP_MAX).contains(&code));
            assert_eq!(code.to_string().len(), 6);
        }
    }
}
