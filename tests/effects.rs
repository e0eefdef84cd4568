mod tests {
    use arcade_led_feedback::effect::{
        BlinkAllEffect, BounceEffect, ChaoticBlinkEffect, ChaseEffect, Effect, FadeAllEffect,
        GradientEffect, RunningEffect, SparkleEffect, TrailEffect,
    };
    use arcade_led_feedback::{Duration, EffectId, EffectLibrary, IndicatorBank, Instant};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    type Bank = IndicatorBank<6, 4>;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn lit(bank: &Bank) -> Vec<usize> {
        bank.primary()
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 255)
            .map(|(i, _)| i)
            .collect()
    }

    fn step<E: Effect>(effect: &mut E, bank: &mut Bank, rng: &mut SmallRng) {
        effect.step(&mut bank.frame(), rng);
    }

    #[test]
    fn test_trail_advances_and_wraps() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut trail = TrailEffect::new();

        let mut positions = Vec::new();
        for _ in 0..8 {
            step(&mut trail, &mut bank, &mut rng);
            let on = lit(&bank);
            assert_eq!(on.len(), 1);
            positions.push(on[0]);
        }
        assert_eq!(positions, [0, 1, 2, 3, 4, 5, 0, 1]);
        assert!(bank.directional().iter().all(|on| !on));
    }

    #[test]
    fn test_blink_all_toggles_everything() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut blink = BlinkAllEffect::new();

        step(&mut blink, &mut bank, &mut rng);
        assert!(bank.primary().iter().all(|&v| v == 255));
        assert!(bank.directional().iter().all(|&on| on));

        step(&mut blink, &mut bank, &mut rng);
        assert!(bank.is_dark());

        step(&mut blink, &mut bank, &mut rng);
        assert!(blink.is_on());
    }

    #[test]
    fn test_fade_reverses_at_extremes() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut fade = FadeAllEffect::new();

        // 0 -> 255 takes 51 steps of 5
        for _ in 0..50 {
            step(&mut fade, &mut bank, &mut rng);
            assert!(fade.is_rising());
            assert!(bank.directional().iter().all(|on| !on));
        }
        step(&mut fade, &mut bank, &mut rng);
        assert_eq!(fade.brightness(), 255);
        assert!(!fade.is_rising());
        assert!(bank.primary().iter().all(|&v| v == 255));
        assert!(bank.directional().iter().all(|&on| on));

        // Directionals stay on until the ramp reaches the bottom
        step(&mut fade, &mut bank, &mut rng);
        assert_eq!(fade.brightness(), 250);
        assert!(bank.directional().iter().all(|&on| on));

        for _ in 0..50 {
            step(&mut fade, &mut bank, &mut rng);
        }
        assert_eq!(fade.brightness(), 0);
        assert!(fade.is_rising());
        assert!(bank.directional().iter().all(|on| !on));
    }

    #[test]
    fn test_bounce_flips_direction_at_both_ends() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut wave = BounceEffect::new(Duration::from_millis(80));

        let mut positions = Vec::new();
        for _ in 0..12 {
            step(&mut wave, &mut bank, &mut rng);
            positions.push(lit(&bank)[0]);
            if positions.len() == 6 {
                assert!(!wave.is_forward());
                assert_eq!(wave.index(), 4);
            }
        }
        assert_eq!(positions, [0, 1, 2, 3, 4, 5, 4, 3, 2, 1, 0, 1]);
        assert!(wave.is_forward());
    }

    #[test]
    fn test_bounce_single_indicator_stays_put() {
        let mut bank = IndicatorBank::<1, 0>::new(false);
        let mut rng = rng();
        let mut wave = BounceEffect::new(Duration::from_millis(80));
        for _ in 0..3 {
            wave.step(&mut bank.frame(), &mut rng);
            assert_eq!(bank.primary(), &[255]);
        }
    }

    #[test]
    fn test_chaotic_blink_changes_frame() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut chaotic = ChaoticBlinkEffect::new();

        let mut frames = Vec::new();
        for _ in 0..4 {
            step(&mut chaotic, &mut bank, &mut rng);
            frames.push(bank.primary().to_vec());
        }
        assert!(frames.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_running_profile_moves() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut running = RunningEffect::new();

        step(&mut running, &mut bank, &mut rng);
        let first = bank.primary().to_vec();
        assert_eq!(first[0], 128);
        assert!(first.iter().any(|&v| v > 200));
        assert!(first.iter().any(|&v| v < 50));
        assert!(running.phase() > 0.0);

        step(&mut running, &mut bank, &mut rng);
        assert_ne!(bank.primary(), first.as_slice());
    }

    #[test]
    fn test_sparkle_lights_one_of_each() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut sparkle = SparkleEffect::new();

        for _ in 0..20 {
            step(&mut sparkle, &mut bank, &mut rng);
            assert_eq!(lit(&bank).len(), 1);
            assert_eq!(bank.primary().iter().filter(|&&v| v != 0).count(), 1);
            assert_eq!(bank.directional().iter().filter(|&&on| on).count(), 1);
        }
    }

    #[test]
    fn test_sparkle_without_directional_bank() {
        let mut bank = Bank::new(false);
        let mut rng = rng();
        let mut sparkle = SparkleEffect::new();
        step(&mut sparkle, &mut bank, &mut rng);
        assert_eq!(lit(&bank).len(), 1);
        assert!(bank.directional().is_empty());
    }

    #[test]
    fn test_gradient_stays_dim() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut gradient = GradientEffect::new();

        for _ in 0..32 {
            step(&mut gradient, &mut bank, &mut rng);
            assert!(bank.primary().iter().all(|&v| v <= 64));
        }
        assert!(bank.primary().iter().any(|&v| v > 0));
        // 32 steps of 0.5 wrap the 8-position period exactly twice
        assert!(gradient.offset().abs() < 1e-3);
    }

    #[test]
    fn test_chase_head_and_decay() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut chase = ChaseEffect::new();

        step(&mut chase, &mut bank, &mut rng);
        assert_eq!(bank.primary(), &[255, 0, 0, 0, 0, 0]);
        step(&mut chase, &mut bank, &mut rng);
        assert_eq!(bank.primary(), &[207, 255, 0, 0, 0, 0]);
        step(&mut chase, &mut bank, &mut rng);
        assert_eq!(bank.primary(), &[159, 207, 255, 0, 0, 0]);
        assert_eq!(chase.head(), 3);
    }

    #[test]
    fn test_chase_decay_floors_at_zero() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut chase = ChaseEffect::new();
        bank.fill_primary(20);
        step(&mut chase, &mut bank, &mut rng);
        assert_eq!(bank.primary(), &[255, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_library_respects_step_interval() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut library = EffectLibrary::new();

        assert!(library.is_ready(EffectId::Trail, Instant::from_millis(0)));
        assert!(library.step(EffectId::Trail, Instant::from_millis(0), &mut bank.frame(), &mut rng));
        assert!(!library.is_ready(EffectId::Trail, Instant::from_millis(99)));
        assert!(library.is_ready(EffectId::Chase, Instant::from_millis(99)));
        assert!(!library.step(EffectId::Trail, Instant::from_millis(50), &mut bank.frame(), &mut rng));
        assert_eq!(lit(&bank), [0]);
        assert!(library.step(EffectId::Trail, Instant::from_millis(100), &mut bank.frame(), &mut rng));
        assert_eq!(lit(&bank), [1]);
    }

    #[test]
    fn test_library_keeps_phase_between_selections() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut library = EffectLibrary::new();

        library.step(EffectId::Wave, Instant::from_millis(0), &mut bank.frame(), &mut rng);
        library.step(EffectId::Wave, Instant::from_millis(100), &mut bank.frame(), &mut rng);
        library.step(EffectId::Trail, Instant::from_millis(200), &mut bank.frame(), &mut rng);
        library.step(EffectId::Wave, Instant::from_millis(300), &mut bank.frame(), &mut rng);
        assert_eq!(lit(&bank), [2]);
    }

    #[test]
    fn test_wave_and_knight_rider_have_independent_phase() {
        let mut bank = Bank::new(true);
        let mut rng = rng();
        let mut library = EffectLibrary::new();

        for t in 0..3 {
            library.step(EffectId::Wave, Instant::from_millis(t * 100), &mut bank.frame(), &mut rng);
        }
        library.step(EffectId::KnightRider, Instant::from_millis(400), &mut bank.frame(), &mut rng);
        assert_eq!(lit(&bank), [0]);
    }
}
