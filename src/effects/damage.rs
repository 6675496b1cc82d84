//! The damage formula shared by card effects, enemy attacks, and the
//! read-only preview.
//!
//! Order matters and each floor is immediate: strength is added first,
//! then weak multiplies by 0.75 and floors, then vulnerable multiplies
//! by 1.5 and floors. The result is never negative.

/// Compute final damage before block absorption.
#[must_use]
pub fn calculate_damage(
    base: i32,
    strength: i32,
    attacker_weak: bool,
    target_vulnerable: bool,
) -> i32 {
    let mut total = base + strength;
    if attacker_weak {
        total = (total as f64 * 0.75).floor() as i32;
    }
    if target_vulnerable {
        total = (total as f64 * 1.5).floor() as i32;
    }
    total.max(0)
}

/// Apply damage to a (block, hp) pair: block absorbs first, hp is
/// floored at 0.
pub fn absorb_damage(block: &mut i32, hp: &mut i32, amount: i32) {
    let absorbed = amount.min(*block);
    *block -= absorbed;
    *hp = (*hp - (amount - absorbed)).max(0);
}
