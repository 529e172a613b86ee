use serde::{Deserialize, Serialize};
use sgz_game::ReferenceRecord;

/// Media type of entries that can be played.
pub const IMAGE_MEDIA_TYPE: &str = "image";

/// One Astronomy Picture of the Day entry, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodEntry {
    pub title: String,
    pub explanation: String,
    /// Missing for some non-image entries.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    pub date: String,
    pub media_type: String,
}

impl ApodEntry {
    pub fn is_image(&self) -> bool {
        self.media_type == IMAGE_MEDIA_TYPE
    }
}

impl From<ApodEntry> for ReferenceRecord {
    fn from(entry: ApodEntry) -> Self {
        Self {
            title: entry.title,
            explanation: entry.explanation,
            image_url: entry.url,
            high_res_url: entry.hdurl,
            date: entry.date,
            media_type: entry.media_type,
        }
    }
}
