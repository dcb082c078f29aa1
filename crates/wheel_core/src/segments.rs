//! Wheel segment labels

use crate::angle;
use crate::params::WheelError;

/// Labels the wheel ships with.
pub const DEFAULT_LABELS: [&str; 11] = [
    "Socken",
    "Sauna",
    "Suppe",
    "Saft",
    "Spiegelei",
    "Spiele Abend",
    "Süßigkeiten",
    "Saufen",
    "Schnitzel",
    "Staubsaugen",
    "Streaming",
];

/// An ordered, non-empty list of labels, one per equal sector.
///
/// Label `i` owns the sector starting at `2π·i/n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    labels: Vec<String>,
}

impl Segments {
    /// Build a segment list. Fails on an empty list.
    pub fn new<I, S>(labels: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(WheelError::EmptySegments);
        }
        Ok(Self { labels })
    }

    /// Number of sectors
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for a sector index, if in range
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Sector the given raw angle points into
    pub fn index_at(&self, angle: f64) -> usize {
        angle::sector_index(angle, self.len())
    }
}

impl Default for Segments {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
