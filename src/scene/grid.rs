// grid.rs - Floor grid cross layout
//
// 23x23 cells, two rotated plane instances per cell forming a cross.
// Transforms are packed [x, y, z, z_rotation] per instance so the
// renderer can instance them in one zero-copy read.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

pub const GRID_CELLS: usize = 23;
pub const FLOATS_PER_INSTANCE: usize = 4;

pub const CROSS_LINE_WIDTH: f32 = 0.04;
pub const CROSS_HEIGHT: f32 = 0.5;
/// Planes lie flat; the renderer applies this x-rotation to every instance.
pub const INSTANCE_X_ROTATION: f32 = -FRAC_PI_2;
/// Group offset the renderer applies to the whole grid.
pub const GRID_OFFSET: [f32; 3] = [0.0, -1.02, 0.0];

// Companion grid-helper lines.
pub const HELPER_SIZE: f32 = 100.0;
pub const HELPER_DIVISIONS: u32 = 150;
pub const HELPER_Y: f32 = -0.01;

/// Packed instance transforms for the floor crosses.
pub struct GridLayout {
    out: Vec<f32>,
}

impl GridLayout {
    pub fn new() -> Self {
        // Cells are 2 units apart, centered on the origin.
        let half = (GRID_CELLS / 2) as f32 * 2.0;
        let mut out =
            Vec::with_capacity(GRID_CELLS * GRID_CELLS * 2 * FLOATS_PER_INSTANCE);

        for row in 0..GRID_CELLS {
            for col in 0..GRID_CELLS {
                let x = col as f32 * 2.0 - half;
                let z = row as f32 * 2.0 - half;
                for rot in [-FRAC_PI_4, FRAC_PI_4] {
                    out.extend_from_slice(&[x, -0.01, z, rot]);
                }
            }
        }

        Self { out }
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn instances(&self) -> usize {
        self.out.len() / FLOATS_PER_INSTANCE
    }
}
