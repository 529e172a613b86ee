//! Access to the Astronomy Picture of the Day service.
//!
//! Provides the HTTP client, random date selection and the bounded search for
//! an entry that is actually a picture.

pub mod client;
pub mod date;
pub mod error;
pub mod fetch;
pub mod model;

pub use client::{ApodClient, EntrySource};
pub use error::ApodError;
pub use fetch::{DEFAULT_MAX_ATTEMPTS, ImageFetch, fetch_image_record};
pub use model::ApodEntry;
