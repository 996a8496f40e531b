// SPDX-License-Identifier: MPL-2.0
//! Demo sign-in flows.
//!
//! Nothing here authenticates anyone. The Gmail button only announces a
//! redirect, and the phone flow reveals its own one-time code.

use crate::application::port::OtpGenerator;

/// User-facing outcome of a login step. The shell maps each to a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginNotice {
    /// Gmail button pressed.
    GmailRedirect,
    /// The phone field was empty.
    PhoneRequired,
    /// A code was issued. The demo shows it instead of sending an SMS.
    CodeIssued { code: String },
    /// The code matched.
    Success,
    /// The code did not match, or no code was pending.
    InvalidCode,
}

/// Handles the Gmail button.
#[must_use]
pub fn gmail_sign_in() -> LoginNotice {
    tracing::info!("gmail sign-in requested (demo)");
    LoginNotice::GmailRedirect
}

/// Phone/OTP challenge. At most one code is pending at a time.
#[derive(Debug, Clone, Default)]
pub struct OtpChallenge {
    pending: Option<String>,
}

impl OtpChallenge {
    /// Issues a fresh code for `phone`, replacing any pending one.
    pub fn start(&mut self, phone: &str, generator: &mut impl OtpGenerator) -> LoginNotice {
        if phone.trim().is_empty() {
            self.pending = None;
            return LoginNotice::PhoneRequired;
        }
        let code = format!("{:06}", generator.generate());
        tracing::debug!("one-time code issued");
        self.pending = Some(code.clone());
        LoginNotice::CodeIssued { code }
    }

    /// Checks `input` against the pending code. The pending code is cleared
    /// whatever the result.
    pub fn verify(&mut self, input: &str) -> LoginNotice {
        match self.pending.take() {
            Some(code) if code == input.trim() => LoginNotice::Success,
            _ => LoginNotice::InvalidCode,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl OtpGenerator for Fixed {
        fn generate(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn gmail_only_announces_redirect() {
        assert_eq!(gmail_sign_in(), LoginNotice::GmailRedirect);
    }

    #[test]
    fn blank_phone_is_rejected() {
        let mut challenge = OtpChallenge::default();
        assert_eq!(
            challenge.start("   ", &mut Fixed(123_456)),
            LoginNotice::PhoneRequired
        );
        assert!(!challenge.is_pending());
    }

    #[test]
    fn matching_code_succeeds_once() {
        let mut challenge = OtpChallenge::default();
        let notice = challenge.start("+33 6 12 34 56 78", &mut Fixed(482_913));
        assert_eq!(
            notice,
            LoginNotice::CodeIssued {
                code: "482913".into()
            }
        );

        assert_eq!(challenge.verify(" 482913 "), LoginNotice::Success);
        assert!(!challenge.is_pending());
        assert_eq!(challenge.verify("482913"), LoginNotice::InvalidCode);
    }

    #[test]
    fn wrong_code_clears_the_challenge() {
        let mut challenge = OtpChallenge::default();
        challenge.start("555-0100", &mut Fixed(100_000));

        assert_eq!(challenge.verify("999999"), LoginNotice::InvalidCode);
        assert!(!challenge.is_pending());
    }

    #[test]
    fn verify_without_challenge_is_invalid() {
        assert_eq!(OtpChallenge::default().verify(""), LoginNotice::InvalidCode);
    }
}
