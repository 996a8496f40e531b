// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a media-gallery storefront built with the Iced GUI framework.
//!
//! A gallery page (HTML markup) is parsed into a catalog of image and video
//! records. The gallery controller turns user input into visibility, preview,
//! autoplay and download commands, which the Iced shell applies to its view
//! of the page.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
