use wasm_bindgen::prelude::*;

// ============================================================================
// LAMP WORLD - Lava lamp blob motion behind a wasm boundary
// ============================================================================

pub mod motion;
pub mod scene;

pub use motion::{BLOB_COUNT, BLOBS, Blob, BlobConfig, BlobField, offset_at};
pub use scene::{GridLayout, LampMaterialParams};

/// Lava lamp scene state.
///
/// Constructed once when the scene mounts. The JS render loop calls
/// `tick` once per frame with its elapsed-time snapshot, then reads the
/// packed blob positions straight out of wasm memory and feeds them to
/// the marching-cubes field sources.
#[wasm_bindgen]
pub struct LampWorld {
    blobs: BlobField,
    grid: GridLayout,
    out: Vec<f32>,
}

#[wasm_bindgen]
impl LampWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut world = Self {
            blobs: BlobField::new(),
            grid: GridLayout::new(),
            out: vec![0.0; BLOB_COUNT * 3],
        };
        world.pack();

        log::info!(
            "lamp world ready: {} blobs, {} grid instances",
            BLOB_COUNT,
            world.grid.instances()
        );
        world
    }

    /// Advance to the given elapsed time. All blobs are recomputed from
    /// this one snapshot; never mix clock readings within a frame.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.blobs.tick(elapsed_seconds);
        self.pack();
    }

    // Packed blob positions, [x, y, z] per blob in id order.
    pub fn positions_ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.out.len()
    }

    pub fn blob_count(&self) -> usize {
        BLOB_COUNT
    }

    // Grid instance transforms, [x, y, z, z_rotation] per instance.
    pub fn grid_ptr(&self) -> *const f32 {
        self.grid.ptr()
    }

    pub fn grid_len(&self) -> usize {
        self.grid.len()
    }

    // Scalar accessors for non-buffer consumers.
    // Unknown ids read as 0.0 rather than trapping.
    pub fn blob_x(&self, id: u8) -> f32 {
        self.component(id, 0)
    }

    pub fn blob_y(&self, id: u8) -> f32 {
        self.component(id, 1)
    }

    pub fn blob_z(&self, id: u8) -> f32 {
        self.component(id, 2)
    }
}

impl LampWorld {
    fn pack(&mut self) {
        for (i, blob) in self.blobs.blobs().iter().enumerate() {
            self.out[i * 3..i * 3 + 3].copy_from_slice(&blob.position.to_array());
        }
    }

    fn component(&self, id: u8, axis: usize) -> f32 {
        self.blobs
            .position(id)
            .map_or(0.0, |p| p.to_array()[axis])
    }
}

impl Default for LampWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
