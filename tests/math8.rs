mod tests {
    use arcade_led_feedback::math8::{advance_phase, scale8, sine8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 63), 63);
    }

    #[test]
    fn test_sine8_quarter_points() {
        assert_eq!(sine8(0.0, 4.0), 128);
        assert_eq!(sine8(1.0, 4.0), 255);
        assert_eq!(sine8(3.0, 4.0), 0);
    }

    #[test]
    fn test_sine8_zero_period_is_midpoint() {
        assert_eq!(sine8(3.0, 0.0), 128);
    }

    #[test]
    fn test_advance_phase_wraps() {
        assert_eq!(advance_phase(0.0, 0.5, 4.0), 0.5);
        assert_eq!(advance_phase(3.5, 0.5, 4.0), 0.0);
        assert_eq!(advance_phase(3.75, 0.5, 4.0), 0.25);
        assert_eq!(advance_phase(1.0, 0.5, 0.0), 0.0);
    }
}
