// motion/ - Blob motion driver
//
// Time-driven offsets for the three metaball sources feeding the
// isosurface field. Positions are a direct function of the elapsed-time
// snapshot, never integrated across frames, so motion is bounded and
// restartable at any timestamp regardless of frame drops.

mod blob;

pub use blob::{Blob, BlobConfig, BLOBS, offset_at};

use glam::Vec3;

pub const BLOB_COUNT: usize = 3;

/// The three metaball sources and their current positions.
pub struct BlobField {
    blobs: [Blob; BLOB_COUNT],
}

impl BlobField {
    pub fn new() -> Self {
        Self {
            blobs: BLOBS.map(Blob::new),
        }
    }

    /// Recompute every blob position from a single clock snapshot.
    /// All three must see the same elapsed time within one frame so
    /// they stay locked to one global clock reading.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        for blob in &mut self.blobs {
            blob.position = offset_at(&blob.config, elapsed_seconds);
        }
    }

    pub fn blobs(&self) -> &[Blob; BLOB_COUNT] {
        &self.blobs
    }

    /// Current position of the blob with the given id.
    pub fn position(&self, id: u8) -> Option<Vec3> {
        self.blobs
            .iter()
            .find(|b| b.config.id == id)
            .map(|b| b.position)
    }
}
