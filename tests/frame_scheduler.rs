mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_animator::color::{BLACK, Rgb};
    use myrtio_light_animator::{
        DisplaySink, EffectId, EffectParameters, ElementState, FrameScheduler, RandomSource,
        Renderer, RendererConfig, Strip, StripError, StripMode,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    struct NoRandom;

    impl RandomSource for NoRandom {
        fn random_range(&mut self, low: u32, _high: u32) -> u32 {
            low
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(usize, ElementState)>,
        shows: usize,
    }

    impl DisplaySink for RecordingSink {
        fn write(&mut self, index: usize, state: ElementState) {
            self.writes.push((index, state));
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    fn scheduler(
        mode: StripMode,
        count: usize,
        effect: EffectId,
    ) -> FrameScheduler<RecordingSink, NoRandom, 16> {
        let mut renderer: Renderer<_, 16> =
            Renderer::new(Strip::new(mode, count).unwrap(), NoRandom);
        renderer.set_effect(effect);
        FrameScheduler::new(renderer, RecordingSink::default())
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_begin_writes_initial_buffer() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Static);
        scheduler.begin();
        assert_eq!(
            scheduler.sink().writes,
            [
                (0, ElementState::Switch(false)),
                (1, ElementState::Switch(false)),
                (2, ElementState::Switch(false)),
            ]
        );
        assert_eq!(scheduler.sink().shows, 1);
        assert_eq!(scheduler.renderer().state().step(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Blink);
        assert!(!scheduler.tick(at(50)));
        assert!(scheduler.tick(at(100)));
        assert_eq!(scheduler.renderer().state().step(), 1);
        assert_eq!(scheduler.renderer().state().last_update(), at(100));

        assert!(!scheduler.tick(at(150)));
        assert!(!scheduler.tick(at(199)));
        assert!(scheduler.tick(at(200)));
        assert_eq!(scheduler.renderer().state().step(), 2);
        assert_eq!(scheduler.sink().shows, 2);
    }

    #[test]
    fn test_tick_ignores_clock_going_backwards() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Blink);
        assert!(scheduler.tick(at(1000)));
        assert!(!scheduler.tick(at(10)));
        assert_eq!(scheduler.renderer().state().step(), 1);
    }

    #[test]
    fn test_forced_tick_renders_and_marks() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Blink);
        assert!(scheduler.tick_with(at(10), true));
        assert_eq!(scheduler.renderer().state().step(), 1);
        assert_eq!(scheduler.next_deadline(), at(110));

        assert!(!scheduler.tick(at(100)));
        assert!(scheduler.tick(at(110)));
    }

    #[test]
    fn test_brightness_scales_sink_output_only() {
        let mut renderer: Renderer<_, 4> =
            Renderer::new(Strip::new(StripMode::Color, 2).unwrap(), NoRandom);
        renderer.set_effect_with_params(
            EffectId::Static,
            EffectParameters::new()
                .with_color(RED)
                .with_brightness(128),
        );
        let mut scheduler = FrameScheduler::new(renderer, RecordingSink::default());
        assert!(scheduler.tick_with(at(0), true));

        let dimmed = ElementState::Color(Rgb::new(128, 0, 0));
        assert_eq!(scheduler.sink().writes, [(0, dimmed), (1, dimmed)]);
        assert_eq!(scheduler.renderer().strip().colors(), Some(&[RED; 2][..]));
    }

    #[test]
    fn test_brightness_ignored_on_binary_strips() {
        let mut scheduler = scheduler(StripMode::Binary, 2, EffectId::Static);
        scheduler.renderer_mut().set_brightness(10);
        scheduler.tick_with(at(0), true);
        let on = ElementState::Switch(true);
        assert_eq!(scheduler.sink().writes, [(0, on), (1, on)]);
    }

    #[test]
    fn test_sink_receives_only_group() {
        let mut scheduler = scheduler(StripMode::Binary, 8, EffectId::Static);
        scheduler.renderer_mut().set_group(5, 6);
        scheduler.tick_with(at(0), true);
        let on = ElementState::Switch(true);
        assert_eq!(scheduler.sink().writes, [(5, on), (6, on)]);
    }

    #[test]
    fn test_clear_pushes_dark_strip() {
        let mut scheduler = scheduler(StripMode::Color, 3, EffectId::Static);
        scheduler.tick_with(at(0), true);
        scheduler.sink_mut().writes.clear();

        scheduler.clear();
        let dark = ElementState::Color(BLACK);
        assert_eq!(scheduler.sink().writes, [(0, dark), (1, dark), (2, dark)]);
        assert_eq!(scheduler.renderer().state().step(), 1);
    }

    #[test]
    fn test_selection_resets_step() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Chase);
        for millis in [0, 100, 200] {
            scheduler.tick_with(at(millis), true);
        }
        assert_eq!(scheduler.renderer().state().step(), 3);

        let renderer = scheduler.renderer_mut();
        renderer.set_effect_by_name("MARQUEE");
        assert_eq!(renderer.effect(), EffectId::Marquee);
        assert_eq!(renderer.state().step(), 0);

        renderer.set_effect_raw(99);
        assert_eq!(renderer.effect(), EffectId::None);
        renderer.set_effect_by_name("unknown");
        assert_eq!(renderer.effect(), EffectId::None);
    }

    #[test]
    fn test_speed_sets_interval() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Chase);
        let renderer = scheduler.renderer_mut();
        assert_eq!(renderer.interval(), Duration::from_millis(100));

        renderer.set_effect_with_speed(EffectId::Blink, 40);
        assert_eq!(renderer.interval(), Duration::from_millis(40));
        assert_eq!(renderer.params().speed, 40);

        renderer.set_effect_with_color(EffectId::Static, 0, RED);
        assert_eq!(renderer.interval(), Duration::from_millis(1));
        assert_eq!(renderer.params().color1, RED);

        renderer.set_effect(EffectId::Chase);
        assert_eq!(renderer.interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_set_interval_keeps_speed() {
        let mut scheduler = scheduler(StripMode::Binary, 3, EffectId::Chase);
        scheduler.renderer_mut().set_interval(250);
        assert_eq!(scheduler.renderer().params().speed, 100);

        assert!(!scheduler.tick(at(200)));
        assert!(scheduler.tick(at(250)));
        assert_eq!(scheduler.next_deadline(), at(500));
    }

    #[test]
    fn test_renderer_from_config() {
        let mut config = RendererConfig::new(StripMode::Color, 12);
        config.effect = EffectId::Wave;
        config.params = EffectParameters::new().with_speed(30);

        let renderer = Renderer::<_, 16>::with_config(&config, NoRandom).unwrap();
        assert_eq!(renderer.effect(), EffectId::Wave);
        assert_eq!(renderer.interval(), Duration::from_millis(30));
        assert_eq!(renderer.strip().element_count(), 12);

        let config = RendererConfig::new(StripMode::Color, 0);
        assert_eq!(
            Renderer::<_, 16>::with_config(&config, NoRandom).err(),
            Some(StripError::Empty)
        );
    }

    #[test]
    fn test_direct_element_write_visible_until_next_frame() {
        let mut scheduler = scheduler(StripMode::Color, 3, EffectId::None);
        scheduler
            .renderer_mut()
            .set_element(1, ElementState::Color(RED));
        scheduler.begin();
        assert_eq!(scheduler.sink().writes[1], (1, ElementState::Color(RED)));

        scheduler.tick_with(at(0), true);
        assert_eq!(
            scheduler.renderer().strip().element(1),
            Some(ElementState::Color(BLACK))
        );
    }
}
