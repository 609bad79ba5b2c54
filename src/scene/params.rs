// params.rs - Live-tweak store for the lamp material
//
// Defaults and hard ranges mirror the debug panel. Out-of-range writes
// land on the nearest bound instead of erroring; the panel is free to
// send anything.

use wasm_bindgen::prelude::*;

/// Tweakable parameters for the lamp glass material.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct LampMaterialParams {
    transmission: f32,
    roughness: f32,
    thickness: f32,
    ior: f32,
    chromatic_aberration: f32,
    attenuation_distance: f32,
    samples: u32,
    resolution: u32,

    // Colors as 0xRRGGBB, toggles as-is; no ranges to enforce.
    pub attenuation_color: u32,
    pub color: u32,
    pub background: u32,
    pub use_physical_material: bool,
    pub transmission_sampler: bool,
    pub backside: bool,
}

#[wasm_bindgen]
impl LampMaterialParams {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            transmission: 1.0,
            roughness: 0.0,
            thickness: -0.05,
            ior: 1.02,
            chromatic_aberration: 0.01,
            attenuation_distance: 0.1,
            samples: 1,
            resolution: 2048,
            attenuation_color: 0xffffff,
            color: 0xe4feff,
            background: 0xffffff,
            use_physical_material: true,
            transmission_sampler: false,
            backside: false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn transmission(&self) -> f32 {
        self.transmission
    }

    #[wasm_bindgen(setter)]
    pub fn set_transmission(&mut self, v: f32) {
        self.transmission = v.clamp(0.0, 1.0);
    }

    #[wasm_bindgen(getter)]
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    #[wasm_bindgen(setter)]
    pub fn set_roughness(&mut self, v: f32) {
        self.roughness = v.clamp(0.0, 1.0);
    }

    #[wasm_bindgen(getter)]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[wasm_bindgen(setter)]
    pub fn set_thickness(&mut self, v: f32) {
        self.thickness = v.clamp(-10.0, 10.0);
    }

    #[wasm_bindgen(getter)]
    pub fn ior(&self) -> f32 {
        self.ior
    }

    #[wasm_bindgen(setter)]
    pub fn set_ior(&mut self, v: f32) {
        self.ior = v.clamp(1.0, 5.0);
    }

    #[wasm_bindgen(getter)]
    pub fn chromatic_aberration(&self) -> f32 {
        self.chromatic_aberration
    }

    #[wasm_bindgen(setter)]
    pub fn set_chromatic_aberration(&mut self, v: f32) {
        self.chromatic_aberration = v.clamp(0.0, 1.0);
    }

    #[wasm_bindgen(getter)]
    pub fn attenuation_distance(&self) -> f32 {
        self.attenuation_distance
    }

    #[wasm_bindgen(setter)]
    pub fn set_attenuation_distance(&mut self, v: f32) {
        self.attenuation_distance = v.clamp(0.0, 10.0);
    }

    #[wasm_bindgen(getter)]
    pub fn samples(&self) -> u32 {
        self.samples
    }

    #[wasm_bindgen(setter)]
    pub fn set_samples(&mut self, v: u32) {
        self.samples = v.clamp(1, 32);
    }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[wasm_bindgen(setter)]
    pub fn set_resolution(&mut self, v: u32) {
        self.resolution = v.clamp(256, 2048);
    }
}

impl Default for LampMaterialParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_panel() {
        let p = LampMaterialParams::new();
        assert_eq!(p.transmission(), 1.0);
        assert_eq!(p.roughness(), 0.0);
        assert_eq!(p.thickness(), -0.05);
        assert_eq!(p.ior(), 1.02);
        assert_eq!(p.chromatic_aberration(), 0.01);
        assert_eq!(p.attenuation_distance(), 0.1);
        assert_eq!(p.samples(), 1);
        assert_eq!(p.resolution(), 2048);
        assert_eq!(p.color, 0xe4feff);
        assert!(p.use_physical_material);
        assert!(!p.backside);
    }

    #[test]
    fn setters_clamp_to_panel_ranges() {
        let mut p = LampMaterialParams::new();

        p.set_transmission(2.0);
        assert_eq!(p.transmission(), 1.0);
        p.set_transmission(-0.5);
        assert_eq!(p.transmission(), 0.0);

        p.set_thickness(-50.0);
        assert_eq!(p.thickness(), -10.0);

        p.set_ior(0.3);
        assert_eq!(p.ior(), 1.0);
        p.set_ior(9.0);
        assert_eq!(p.ior(), 5.0);

        p.set_samples(0);
        assert_eq!(p.samples(), 1);
        p.set_samples(100);
        assert_eq!(p.samples(), 32);

        p.set_resolution(64);
        assert_eq!(p.resolution(), 256);
    }

    #[test]
    fn in_range_writes_stick() {
        let mut p = LampMaterialParams::new();
        p.set_roughness(0.4);
        assert_eq!(p.roughness(), 0.4);
        p.set_attenuation_distance(3.25);
        assert_eq!(p.attenuation_distance(), 3.25);
    }
}
