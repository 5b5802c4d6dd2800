//! Thumbnail candidate selection.

use serde::Deserialize;

/// A thumbnail candidate as reported by the summarization workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Thumbnail {
    /// Pixel area used to rank candidates.
    pub fn pixel_area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Select the highest-resolution thumbnail by pixel area.
///
/// Ties keep the first candidate encountered at the maximal area.
/// Returns `None` for an empty candidate list.
pub fn best_thumbnail(candidates: &[Thumbnail]) -> Option<&Thumbnail> {
    candidates.iter().reduce(|best, candidate| {
        if candidate.pixel_area() > best.pixel_area() {
            candidate
        } else {
            best
        }
    })
}
