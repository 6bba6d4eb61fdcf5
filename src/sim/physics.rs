//! Jump physics
//!
//! Discrete arc: each tick `y += vel; vel -= gravity` until the character is
//! back on the ground, where it snaps to the baseline and comes to rest.

use super::state::Character;
use crate::consts::GROUND_Y;

/// Landing tolerance for accumulated f32 error at the end of the arc
pub const LANDING_EPSILON: f32 = 1e-3;

/// One tick of the arc from `(y, vel)`
///
/// Returns `(landed, y, vel)`. On landing y is the ground and vel is zero.
#[inline]
pub fn arc_step(y: f32, vel: f32, gravity: f32) -> (bool, f32, f32) {
    let next_y = y + vel;
    let next_vel = vel - gravity;
    if next_y <= GROUND_Y + LANDING_EPSILON {
        (true, GROUND_Y, 0.0)
    } else {
        (false, next_y, next_vel)
    }
}

/// Start a jump if the character is resting on the ground
///
/// Returns whether the jump was accepted. Requests while airborne (including
/// the settling tick) are ignored.
pub fn try_jump(character: &mut Character, jump_velocity: f32) -> bool {
    if !character.is_grounded() {
        return false;
    }
    character.jumping = true;
    character.vel = jump_velocity;
    true
}

/// Advance the character one tick
///
/// Returns true on the tick the character lands.
pub fn step(character: &mut Character, gravity: f32) -> bool {
    if !character.jumping {
        // Grounded characters hold still
        character.y = GROUND_Y;
        character.vel = 0.0;
        return false;
    }

    let (landed, y, vel) = arc_step(character.y, character.vel, gravity);
    character.y = y;
    character.vel = vel;
    if landed {
        character.jumping = false;
    }
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_jump_from_ground() {
        let mut c = Character::default();
        assert!(try_jump(&mut c, JUMP_VELOCITY));
        assert!(c.jumping);

        step(&mut c, GRAVITY);
        assert!((c.y - 12.0).abs() < 0.001);
        assert!((c.vel - 11.2).abs() < 0.001);
    }

    #[test]
    fn test_no_double_jump() {
        let mut c = Character::default();
        assert!(try_jump(&mut c, JUMP_VELOCITY));
        step(&mut c, GRAVITY);
        let before = c;

        assert!(!try_jump(&mut c, JUMP_VELOCITY));
        assert_eq!(c, before);
    }

    #[test]
    fn test_full_arc_lands_after_31_ticks() {
        let mut c = Character::default();
        try_jump(&mut c, JUMP_VELOCITY);

        let mut ticks = 0;
        let mut apex: f32 = 0.0;
        loop {
            ticks += 1;
            let landed = step(&mut c, GRAVITY);
            apex = apex.max(c.y);
            if landed {
                break;
            }
            assert!(c.jumping);
        }

        assert_eq!(ticks, 31);
        assert!((apex - 96.0).abs() < 0.01);
        assert!(c.is_grounded());
        assert_eq!(c.y, GROUND_Y);
        assert_eq!(c.vel, 0.0);
    }

    #[test]
    fn test_grounded_step_is_still() {
        let mut c = Character::default();
        assert!(!step(&mut c, GRAVITY));
        assert_eq!(c, Character::default());
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            velocity in 0.5f32..40.0,
            gravity in 0.05f32..5.0,
            jump_at in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut c = Character::default();
            for press in jump_at {
                if press {
                    try_jump(&mut c, velocity);
                }
                step(&mut c, gravity);
                prop_assert!(c.y >= GROUND_Y);
                if !c.jumping {
                    prop_assert_eq!(c.vel, 0.0);
                    prop_assert_eq!(c.y, GROUND_Y);
                }
            }
        }
    }
}
