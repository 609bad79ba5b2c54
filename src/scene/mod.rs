// scene/ - Declarative layout data for the JS renderer
//
// Instance transforms and fixed composition constants. Nothing in this
// module changes per frame; the renderer reads it once at mount.

mod grid;
mod params;

pub use grid::{
    CROSS_HEIGHT, CROSS_LINE_WIDTH, FLOATS_PER_INSTANCE, GRID_CELLS, GRID_OFFSET,
    GridLayout, HELPER_DIVISIONS, HELPER_SIZE, HELPER_Y, INSTANCE_X_ROTATION,
};
pub use params::LampMaterialParams;

// Metaball field composition (fixed; the field itself lives in the
// renderer's marching-cubes helper).
pub const FIELD_RESOLUTION: u32 = 80;
pub const FIELD_MAX_POLY_COUNT: u32 = 6000;
pub const BALL_STRENGTH: f32 = 0.3;
pub const BALL_SUBTRACT: f32 = 12.0;

// Camera.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_POSITION: [f32; 3] = [-4.0, 3.0, 6.0];

pub const LAMP_MODEL_SCALE: f32 = 8.0;
