//! Behavioural properties of the attack cycle, talents and status timing

use proptest::prelude::*;
use raynor_core::prelude::*;

fn talent_set() -> impl Strategy<Value = Vec<Talent>> {
    proptest::sample::subsequence(Talent::all().to_vec(), 0..=Talent::all().len())
}

fn category() -> impl Strategy<Value = EnemyCategory> {
    prop_oneof![Just(EnemyCategory::Hero), Just(EnemyCategory::Minion)]
}

#[test]
fn test_bonus_only_on_counter_wrap() {
    let mut raynor = Raynor::new(1, Talent::all().iter().copied());
    let mut enemy = Enemy::new(EnemyCategory::Hero);

    for attack in 1..=40u32 {
        let result = raynor.attack(&mut enemy);
        assert_eq!(result.is_bonus_attack, attack % 4 == 0, "attack {}", attack);
        assert_eq!(u32::from(raynor.pepper_counter()), attack % 4);
    }
}

#[test]
fn test_unstable_compound_slow_lasts_its_duration() {
    let mut raynor = Raynor::new(1, [Talent::UnstableCompound]);
    let mut enemy = Enemy::new(EnemyCategory::Hero);

    for _ in 0..4 {
        raynor.attack(&mut enemy);
    }
    assert!(enemy.has_status(StatusEffect::Slowed));

    enemy.advance_time(1.0);
    assert!(enemy.has_status(StatusEffect::Slowed));
    enemy.advance_time(1.0);
    assert!(enemy.has_status(StatusEffect::Slowed));
    enemy.advance_time(0.5);
    assert!(!enemy.has_status(StatusEffect::Slowed));
}

#[test]
fn test_ace_in_the_hole_exact_ratio() {
    let mut slowed = Enemy::new(EnemyCategory::Minion);
    slowed.apply_status_effect(StatusEffect::Slowed, 10.0);
    let mut clean = Enemy::new(EnemyCategory::Minion);

    let mut a = Raynor::new(7, [Talent::AceInTheHole]);
    let mut b = Raynor::new(7, [Talent::AceInTheHole]);

    for _ in 0..8 {
        let hit_slowed = a.attack(&mut slowed);
        let hit_clean = b.attack(&mut clean);
        assert!((hit_slowed.total - hit_clean.total * 1.15).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn prop_veteran_marksman_count(attacks in 0u32..200, hero in any::<bool>()) {
        let category = if hero { EnemyCategory::Hero } else { EnemyCategory::Minion };
        let mut raynor = Raynor::new(1, [Talent::VeteranMarksman]);
        let mut enemy = Enemy::new(category);

        for _ in 0..attacks {
            raynor.attack(&mut enemy);
        }

        let expected = if hero { attacks / 4 } else { 0 };
        prop_assert_eq!(raynor.veteran_marksman_count(), expected);
    }

    #[test]
    fn prop_ace_without_slow_matches_no_talent(
        level in 0u32..40,
        attacks in 1usize..50,
        enemy_category in category(),
    ) {
        let mut with = Raynor::new(level, [Talent::AceInTheHole]);
        let mut without = Raynor::new(level, []);
        let mut a = Enemy::new(enemy_category);
        let mut b = Enemy::new(enemy_category);

        for _ in 0..attacks {
            let x = with.attack(&mut a).total;
            let y = without.attack(&mut b).total;
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_higher_level_hits_harder(
        low in 0u32..60,
        gap in 1u32..20,
        talents in talent_set(),
        enemy_category in category(),
        attacks in 1usize..40,
    ) {
        let mut weak = Raynor::new(low, talents.clone());
        let mut strong = Raynor::new(low + gap, talents);
        let mut a = Enemy::new(enemy_category);
        let mut b = Enemy::new(enemy_category);

        for _ in 0..attacks {
            let x = weak.attack(&mut a).total;
            let y = strong.attack(&mut b).total;
            prop_assert!(y > x);
        }
    }

    #[test]
    fn prop_damage_is_sum_of_hits(
        level in 0u32..30,
        talents in talent_set(),
        enemy_category in category(),
        attacks in 0usize..100,
    ) {
        let mut raynor = Raynor::new(level, talents);
        let mut enemy = Enemy::new(enemy_category);
        let constants = raynor.constants().clone();

        let mut sum = 0.0;
        for _ in 0..attacks {
            enemy.advance_time(constants.attack_speed);
            let before = enemy.damage();
            let hit = raynor.attack(&mut enemy).total;
            prop_assert!(enemy.damage() >= before);
            sum += hit;
        }
        prop_assert!((enemy.damage() - sum).abs() < 1e-6);
    }

    #[test]
    fn prop_status_gone_after_exact_duration(duration in 0.01f64..100.0) {
        let mut enemy = Enemy::new(EnemyCategory::Hero);
        enemy.apply_status_effect(StatusEffect::Slowed, duration);
        enemy.advance_time(duration);
        prop_assert!(!enemy.has_status(StatusEffect::Slowed));
        prop_assert!(enemy.statuses().iter().all(|s| s.remaining_duration() > 0.0));
    }
}
