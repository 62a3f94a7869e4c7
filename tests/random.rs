mod tests {
    use myrtio_light_animator::{EffectId, RandomSource, Renderer, RngSource, Strip, StripMode};
    use rand_xoshiro::Xoshiro128PlusPlus;
    use rand_xoshiro::rand_core::SeedableRng;

    fn source(seed: u64) -> RngSource<Xoshiro128PlusPlus> {
        RngSource::new(Xoshiro128PlusPlus::seed_from_u64(seed))
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut random = source(7);
        for _ in 0..1000 {
            let value = random.random_range(160, 255);
            assert!((160..255).contains(&value));
            assert!(random.random_below(7) < 7);
        }
    }

    #[test]
    fn test_rng_source_empty_range_returns_low() {
        let mut random = source(1);
        assert_eq!(random.random_range(5, 5), 5);
        assert_eq!(random.random_range(9, 3), 9);
        assert_eq!(random.random_below(0), 0);
    }

    #[test]
    fn test_rng_source_is_reproducible() {
        let mut first = source(42);
        let mut second = source(42);
        for _ in 0..32 {
            assert_eq!(first.random_below(1000), second.random_below(1000));
        }
    }

    #[test]
    fn test_random_effects_stay_in_group() {
        for effect in [
            EffectId::Fire,
            EffectId::Waterfall,
            EffectId::Sparkle,
            EffectId::RandomBlink,
        ] {
            let strip = Strip::new(StripMode::Binary, 12).unwrap();
            let mut renderer: Renderer<_, 12> = Renderer::new(strip, source(3));
            renderer.set_effect(effect);
            renderer.set_group(4, 7);
            for _ in 0..200 {
                renderer.render();
            }

            let states = renderer.strip().switches().unwrap();
            assert!(states[..4].iter().all(|&on| !on));
            assert!(states[8..].iter().all(|&on| !on));
        }
    }

    #[test]
    fn test_fire_heat_bounded_over_time() {
        let strip = Strip::new(StripMode::Color, 30).unwrap();
        let mut renderer: Renderer<_, 30> = Renderer::new(strip, source(11));
        renderer.set_effect(EffectId::Fire);
        for _ in 0..500 {
            renderer.render();
            assert_eq!(renderer.strip().heat().len(), 30);
        }

        let colors = renderer.strip().colors().unwrap();
        for (color, &heat) in colors.iter().zip(renderer.strip().heat()) {
            assert_eq!(*color, myrtio_light_animator::color::heat_color(heat));
        }
    }
}
