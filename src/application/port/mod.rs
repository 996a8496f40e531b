// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`download`]: File transfer trigger and payment confirmation prompt
//! - [`otp`]: One-time code generation for the demo phone login
//!
//! # Design Notes
//!
//! - All traits are synchronous; the shell wraps its adapters in Iced `Task`s
//! - No Iced handles or HTTP types appear in the signatures

pub mod download;
pub mod otp;

// Re-export main types for convenience
pub use download::{Downloader, PaymentPrompt};
pub use otp::{OtpGenerator, OTP_MAX, OTP_MIN};
