use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::EaseInOut, Ease::EaseOut];

#[test]
fn every_curve_pins_endpoints() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn inputs_outside_unit_interval_are_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.5), ease.apply(1.0));
    }
}

#[test]
fn ease_in_out_is_symmetric_about_the_midpoint() {
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    for t in [0.1, 0.25, 0.4] {
        let sum = Ease::EaseInOut.apply(t) + Ease::EaseInOut.apply(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-9, "t={t}");
    }
    assert!(Ease::EaseInOut.apply(0.1) < 0.1);
}

#[test]
fn ease_out_leads_linear_everywhere_inside() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::EaseOut.apply(t) > t, "t={t}");
    }
}

#[test]
fn curves_never_move_backwards() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev, "{ease:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn serde_uses_css_style_names() {
    assert_eq!(serde_json::to_string(&Ease::EaseInOut).unwrap(), "\"easeInOut\"");
    let parsed: Ease = serde_json::from_str("\"easeOut\"").unwrap();
    assert_eq!(parsed, Ease::EaseOut);
}
