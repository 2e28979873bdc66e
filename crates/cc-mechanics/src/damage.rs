//! Damage resolution with block absorption.

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// How one blow was split between block and hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage before absorption.
    pub incoming: i32,
    /// Damage soaked up by block.
    pub absorbed: i32,
    /// Block left afterwards.
    pub block_left: i32,
    /// Damage that reached hit points.
    pub taken: i32,
    /// Hit points left afterwards. Not clamped; may be negative.
    pub hp_left: i32,
}

/// Apply `incoming` damage to `defender`, block first, then hit points.
///
/// `incoming` must be non-negative; callers only ever pass d20 totals.
pub fn apply_damage(defender: &mut Player, incoming: i32) -> DamageReport {
    let mut remaining = incoming;
    let mut absorbed = 0;

    if defender.block > 0 {
        absorbed = defender.block.min(remaining);
        defender.block -= absorbed;
        remaining -= absorbed;
    }

    if remaining > 0 {
        defender.hp -= remaining;
    }

    let report = DamageReport {
        incoming,
        absorbed,
        block_left: defender.block,
        taken: remaining.max(0),
        hp_left: defender.hp,
    };
    tracing::debug!(?report, "damage applied");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defender(hp: i32, block: i32) -> Player {
        let mut p = Player::with_stats("Ada", hp, 150, 20);
        p.add_block(block);
        p
    }

    #[test]
    fn no_block_all_to_hp() {
        let mut p = defender(135, 0);
        let r = apply_damage(&mut p, 15);
        assert_eq!(r.absorbed, 0);
        assert_eq!(r.taken, 15);
        assert_eq!(p.hp(), 120);
    }

    #[test]
    fn block_soaks_everything() {
        let mut p = defender(100, 30);
        let r = apply_damage(&mut p, 18);
        assert_eq!(r.absorbed, 18);
        assert_eq!(r.block_left, 12);
        assert_eq!(r.taken, 0);
        assert_eq!(p.hp(), 100);
    }

    #[test]
    fn block_breaks_then_hp() {
        let mut p = defender(100, 10);
        let r = apply_damage(&mut p, 25);
        assert_eq!(r.absorbed, 10);
        assert_eq!(r.block_left, 0);
        assert_eq!(r.taken, 15);
        assert_eq!(r.hp_left, 85);
    }

    #[test]
    fn hp_goes_negative() {
        let mut p = defender(10, 0);
        let r = apply_damage(&mut p, 40);
        assert_eq!(r.hp_left, -30);
        assert_eq!(p.hp(), -30);
        assert!(!p.is_alive());
    }

    #[test]
    fn zero_damage_changes_nothing() {
        let mut p = defender(50, 5);
        let r = apply_damage(&mut p, 0);
        assert_eq!(r, DamageReport {
            incoming: 0,
            absorbed: 0,
            block_left: 5,
            taken: 0,
            hp_left: 50,
        });
    }

    proptest! {
        #[test]
        fn absorption_law(hp in 1i32..=150, block in 0i32..=200, damage in 0i32..=200) {
            let mut p = defender(hp, block);
            let r = apply_damage(&mut p, damage);

            let absorbed = block.min(damage);
            prop_assert_eq!(r.absorbed, absorbed);
            prop_assert_eq!(p.block(), block - absorbed);
            if damage - absorbed > 0 {
                prop_assert_eq!(p.hp(), hp - (damage - absorbed));
            } else {
                prop_assert_eq!(p.hp(), hp);
            }
            prop_assert_eq!(r.absorbed + r.taken, damage);
        }
    }
}
