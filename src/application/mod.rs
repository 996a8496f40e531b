// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`download`]: Free/paid download decision flow
//! - [`login`]: Demo Gmail and phone/OTP sign-in
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::download::{run_download, DownloadOutcome};
//! use iced_gallery::application::port::Downloader;
//! use iced_gallery::domain::media::{ItemId, MediaRecord, RecordDraft};
//!
//! struct Log(Vec<String>);
//! impl Downloader for Log {
//!     fn trigger(&mut self, url: &str) {
//!         self.0.push(url.to_string());
//!     }
//! }
//!
//! let free = MediaRecord::from_draft(
//!     ItemId::new(0),
//!     RecordDraft {
//!         free: true,
//!         download_url: Some("files/free.jpg".into()),
//!         ..RecordDraft::default()
//!     },
//! );
//! let mut log = Log(Vec::new());
//! let mut never = |_: &str| false;
//! let outcome = run_download(Some(&free), &mut log, &mut never);
//! assert_eq!(outcome, DownloadOutcome::Started("files/free.jpg".into()));
//! ```

pub mod download;
pub mod login;
pub mod port;
