mod tests {
    use myrtio_light_animator::math8::scale8;

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_is_identity() {
        for value in 0..=255 {
            assert_eq!(scale8(value, 255), value);
        }
    }
}
