//! Player ship controller

use glam::Vec2;

use super::state::Ship;
use super::tick::TickInput;

/// -1, 0 or +1 from the held movement keys; both held cancel out
pub fn steer_direction(input: &TickInput) -> f32 {
    match (input.left, input.right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Move the ship for one tick and return the spawn point of a new laser when
/// fire was pressed this tick
pub fn apply_input(ship: &mut Ship, input: &TickInput, arena_width: f32) -> Option<Vec2> {
    ship.velocity = steer_direction(input) * ship.speed;
    ship.body.shift_x_clamped(ship.velocity, arena_width);
    input.fire.then(|| ship.body.top_center())
}
