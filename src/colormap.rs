use image::Rgba;

use crate::DrumError;

/// Ordered table of RGBA entries: white throughout, with alpha ramping
/// linearly from fully transparent at index 0 to fully opaque at the last
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<Rgba<u8>>,
}

impl ColorTable {
    pub fn alpha_ramp(len: usize) -> Result<Self, DrumError> {
        if len < 2 {
            return Err(DrumError::InvalidResolution);
        }

        let entries = (0..len)
            .map(|i| {
                let alpha = i as f64 / (len - 1) as f64;
                Rgba([255, 255, 255, (alpha * 255.0).round() as u8])
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgba<u8>> {
        self.entries.get(index).copied()
    }

    /// Entry a boolean `false` pixel samples: the first, fully transparent.
    pub fn first(&self) -> Rgba<u8> {
        self.entries[0]
    }

    /// Entry a boolean `true` pixel samples: the last, fully opaque.
    pub fn last(&self) -> Rgba<u8> {
        self.entries[self.entries.len() - 1]
    }
}
