//! Packed rectangle instances for GPU-style upload

use bytemuck::{Pod, Zeroable};

use crate::sim::Aabb;

/// One filled rectangle: top-left corner, size and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub fn new(rect: &Aabb, color: [f32; 4]) -> Self {
        let size = rect.size();
        Self {
            origin: rect.min.to_array(),
            size: size.to_array(),
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER_SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const AI_SHIP: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const LASER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
