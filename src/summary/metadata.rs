//! Customer name and meeting date derived from the meeting directory path.
//!
//! Meeting folders are expected to look like
//! `~/Documents/Company/Customers/<Customer>/<YYYY-MM-DD>`, but nothing here
//! fails: paths that do not follow the layout fall back to the parent folder
//! name and an undated meeting.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Component, Path};

/// Path component that introduces the customer folder.
pub const CUSTOMERS_SEGMENT: &str = "Customers";

/// Placeholder used in the prompt when no date could be derived.
pub const UNDATED_LABEL: &str = "UNDATED";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;

/// A calendar date written in strict `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeetingDate(NaiveDate);

impl MeetingDate {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// The shape is checked before calendar validation so that inputs chrono
    /// would otherwise accept (signed years, single-digit fields) are
    /// rejected. `2024-02-30` has the right shape but is not a date.
    #[must_use]
    pub fn parse_strict(s: &str) -> Option<Self> {
        if !has_date_shape(s) {
            return None;
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok().map(Self)
    }
}

impl fmt::Display for MeetingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Ten characters, hyphens at offsets 4 and 7, ASCII digits everywhere else.
fn has_date_shape(s: &str) -> bool {
    s.len() == DATE_LEN
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Metadata extracted from a meeting directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub customer_name: String,
    pub customer_name_upper: String,
    pub meeting_date: Option<MeetingDate>,
}

impl ExtractedMetadata {
    /// Derive metadata from a meeting directory. Pure; never fails.
    #[must_use]
    pub fn from_meeting_dir(meeting_dir: &Path) -> Self {
        let customer_name = extract_customer_name(meeting_dir);
        let customer_name_upper = customer_name.to_uppercase();
        Self {
            customer_name,
            customer_name_upper,
            meeting_date: extract_meeting_date(meeting_dir),
        }
    }

    /// Date as shown to the AI tool: the date itself or `UNDATED`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.meeting_date
            .map_or_else(|| UNDATED_LABEL.to_string(), |d| d.to_string())
    }
}

/// Customer name: the component after `Customers`, else the parent folder name.
#[must_use]
pub fn extract_customer_name(meeting_dir: &Path) -> String {
    let mut components = meeting_dir.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy()),
        Component::Prefix(_) | Component::RootDir | Component::CurDir | Component::ParentDir => {
            None
        }
    });

    let after_customers = components
        .by_ref()
        .find(|name| name == CUSTOMERS_SEGMENT)
        .and_then(|_| components.next());

    match after_customers {
        Some(name) => name.into_owned(),
        None => meeting_dir
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// First path component that is a strict, valid `YYYY-MM-DD` date.
#[must_use]
pub fn extract_meeting_date(meeting_dir: &Path) -> Option<MeetingDate> {
    meeting_dir
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .find_map(MeetingDate::parse_strict)
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
