// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, and the I/O the desktop shell needs around them.
//!
//! # Available Adapters
//!
//! - [`download`]: File transfers (implements [`Downloader`] as a queue)
//! - [`dialog`]: Native payment prompt and blocking notices
//! - [`fetch`]: Remote image bodies for thumbnails and previews
//! - [`otp`]: Random one-time codes (implements [`OtpGenerator`])
//!
//! [`Downloader`]: crate::application::port::Downloader
//! [`OtpGenerator`]: crate::application::port::OtpGenerator

pub mod dialog;
pub mod download;
pub mod fetch;
pub mod otp;

// Re-export main types for convenience
pub use download::{DownloadQueue, DownloadReport};
pub use otp::RandomOtp;
