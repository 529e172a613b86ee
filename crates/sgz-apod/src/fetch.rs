//! Picking a playable entry.
//!
//! Not every day's entry is a picture (videos and interactive pages are
//! common), so a round keeps drawing random dates until it finds an image.
//! The number of draws is capped so a run of non-image days ends in an error
//! instead of looping forever.

use chrono::NaiveDate;
use rand::Rng;
use sgz_game::ReferenceRecord;

use crate::{client::EntrySource, date::random_date, error::ApodError};

/// Attempts allowed when the caller does not configure a limit.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// An image entry together with how many draws it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFetch {
    pub record: ReferenceRecord,
    pub attempts: u32,
}

/// Fetch entries for random dates up to `today` until one is an image.
///
/// The first transport or status error is returned immediately. A limit of
/// zero is treated as one attempt.
pub async fn fetch_image_record<S, R>(
    source: &S,
    rng: &mut R,
    today: NaiveDate,
    max_attempts: u32,
) -> Result<ImageFetch, ApodError>
where
    S: EntrySource + Sync,
    R: Rng + Send + ?Sized,
{
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let date = random_date(rng, today);
        let entry = source.fetch_entry(date).await?;

        if entry.is_image() {
            tracing::info!(%date, attempt, title = %entry.title, "Found image entry");
            return Ok(ImageFetch {
                record: entry.into(),
                attempts: attempt,
            });
        }

        tracing::debug!(
            %date,
            attempt,
            media_type = %entry.media_type,
            "Skipping non-image entry"
        );
    }

    tracing::warn!(max_attempts, "Gave up looking for an image entry");
    Err(ApodError::NoImage {
        attempts: max_attempts,
    })
}
