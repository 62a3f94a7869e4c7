mod tests {
    use myrtio_light_animator::{EFFECTS, EffectId, EffectMemory};

    #[test]
    fn test_effect_table_matches_ids() {
        assert_eq!(EFFECTS.len(), EffectId::COUNT);
        for (index, entry) in EFFECTS.iter().enumerate() {
            assert_eq!(entry.id as usize, index);
        }
    }

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::None));
        assert_eq!(EffectId::from_raw(7), Some(EffectId::KnightRider));
        assert_eq!(EffectId::from_raw(10), Some(EffectId::Fire));
        assert_eq!(EffectId::from_raw(21), Some(EffectId::Wave));
        assert_eq!(EffectId::from_raw(22), None);
    }

    #[test]
    fn test_effect_id_unknown_raw_is_none() {
        assert_eq!(EffectId::from_raw_or_none(22), EffectId::None);
        assert_eq!(EffectId::from_raw_or_none(56), EffectId::None);
        assert_eq!(EffectId::from_raw_or_none(99), EffectId::None);
        assert_eq!(EffectId::from_raw_or_none(255), EffectId::None);
        assert_eq!(EffectId::from_raw_or_none(14), EffectId::Rainbow);
    }

    #[test]
    fn test_effect_id_as_str() {
        assert_eq!(EffectId::KnightRider.as_str(), "knight_rider");
        assert_eq!(EffectId::ColorWipe.as_str(), "color_wipe");
        assert_eq!(EffectId::RandomBlink.as_str(), "random_blink");
    }

    #[test]
    fn test_effect_id_parse_ignores_case() {
        assert_eq!(EffectId::parse_from_str("fire"), Some(EffectId::Fire));
        assert_eq!(
            EffectId::parse_from_str("KNIGHT_RIDER"),
            Some(EffectId::KnightRider)
        );
        assert_eq!(EffectId::parse_from_str("Fade_In"), Some(EffectId::FadeIn));
        assert_eq!(EffectId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_effect_id_unknown_name_is_none() {
        assert_eq!(EffectId::from_name("disco"), EffectId::None);
        assert_eq!(EffectId::from_name(""), EffectId::None);
        assert_eq!(EffectId::from_name("Sparkle"), EffectId::Sparkle);
    }

    #[test]
    fn test_effect_names_round_trip() {
        for id in EffectId::all() {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(EffectId::all().count(), EffectId::COUNT);
    }

    #[test]
    fn test_effect_memory_classes() {
        assert_eq!(EffectId::Fire.descriptor().memory, EffectMemory::Heat);
        assert_eq!(EffectId::Cylon.descriptor().memory, EffectMemory::PriorFrame);
        assert_eq!(EffectId::Meteor.descriptor().memory, EffectMemory::PriorFrame);
        assert_eq!(EffectId::Chase.descriptor().memory, EffectMemory::Stateless);

        let random: Vec<EffectId> = EffectId::all()
            .filter(|id| id.descriptor().random)
            .collect();
        assert_eq!(
            random,
            [
                EffectId::Fire,
                EffectId::Waterfall,
                EffectId::Sparkle,
                EffectId::RandomBlink
            ]
        );
    }
}
