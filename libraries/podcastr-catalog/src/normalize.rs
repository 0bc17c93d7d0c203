//! Raw record normalization
//!
//! Turns catalog records into [`CatalogEpisode`]s: numeric durations with a
//! pre-rendered label, and publication dates in the pt-BR display form.

use crate::error::{CatalogError, Result};
use crate::types::{ApiDuration, ApiEpisode, CatalogEpisode};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};
use podcastr_playback::{Episode, MediaFile};

const DISPLAY_DATE_FORMAT: &str = "%-d %b %y";

impl ApiEpisode {
    /// Normalize into a playable episode.
    pub fn normalize(self) -> Result<CatalogEpisode> {
        let duration_secs =
            parse_duration(&self.file.duration).map_err(|reason| CatalogError::InvalidRecord {
                id: self.id.clone(),
                reason,
            })?;
        let published_on =
            parse_published_at(&self.published_at).map_err(|reason| CatalogError::InvalidRecord {
                id: self.id.clone(),
                reason,
            })?;

        Ok(CatalogEpisode {
            episode: Episode {
                id: self.id,
                title: self.title,
                members: self.members,
                thumbnail: self.thumbnail,
                file: MediaFile::new(self.file.url, duration_secs),
            },
            published_at: format_published_at(&published_on),
            published_on,
            description: self.description,
            mime_type: self.file.mime_type,
        })
    }
}

/// Whole seconds from a numeric or textual duration.
pub fn parse_duration(duration: &ApiDuration) -> std::result::Result<u64, String> {
    let seconds = match duration {
        ApiDuration::Seconds(value) => *value,
        ApiDuration::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("duration {:?} is not a number", text))?,
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("duration {} is out of range", seconds));
    }
    Ok(seconds.floor() as u64)
}

/// Parse a publication timestamp.
///
/// Accepts RFC 3339 (the offset is dropped, keeping the wall-clock time),
/// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and a bare `YYYY-MM-DD`.
pub fn parse_published_at(raw: &str) -> std::result::Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("unrecognized publication date {:?}", raw))
}

/// Render a publication timestamp as `d MMM yy` in pt-BR (e.g. "8 jan 21").
pub fn format_published_at(published_on: &NaiveDateTime) -> String {
    published_on
        .and_utc()
        .format_localized(DISPLAY_DATE_FORMAT, Locale::pt_BR)
        .to_string()
}
