//! Projectiles and the per-faction projectile set

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Aabb, Body};
use super::state::Faction;

/// Vertical travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Player-owned, toward y = 0
    Up,
    /// AI-owned, toward the arena bottom
    Down,
}

impl Heading {
    /// Sign of the y velocity
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Up => -1.0,
            Heading::Down => 1.0,
        }
    }
}

/// A laser bolt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
    /// Pixels per tick; x is always zero for now
    pub vel: Vec2,
    pub heading: Heading,
    pub faction: Faction,
}

impl Projectile {
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

/// Active projectiles owned by one faction, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileSet {
    size: Vec2,
    items: Vec<Projectile>,
    next_id: u32,
}

impl ProjectileSet {
    /// Empty set whose projectiles all have `size`
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a projectile centered at `pos` and return its id
    pub fn spawn(&mut self, pos: Vec2, speed: f32, heading: Heading, faction: Faction) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Projectile {
            id,
            body: Body::new(pos, self.size),
            vel: Vec2::new(0.0, speed.abs() * heading.sign()),
            heading,
            faction,
        });
        id
    }

    /// Move every projectile one tick and drop those fully outside
    /// [0, arena_height]. Returns how many were dropped.
    pub fn advance(&mut self, arena_height: f32) -> usize {
        for projectile in &mut self.items {
            projectile.body.pos += projectile.vel;
        }
        let before = self.items.len();
        self.items.retain(|p| {
            let aabb = p.aabb();
            aabb.bottom() >= 0.0 && aabb.top() <= arena_height
        });
        before - self.items.len()
    }

    pub fn remove(&mut self, id: u32) -> Option<Projectile> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    /// Id of the earliest-spawned projectile overlapping `target`
    pub fn first_overlapping(&self, target: &Aabb) -> Option<u32> {
        self.items
            .iter()
            .find(|p| p.aabb().overlaps(target))
            .map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
