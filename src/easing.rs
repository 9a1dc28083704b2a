use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Easing curve applied to the normalized time of a [`crate::Tween`].
///
/// All curves map `0.` to `0.` and `1.` to `1.`. The `*Out` family
/// decelerates towards the target; [`Easing::ElasticOut`] overshoots and
/// oscillates around the target before settling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadOut,
    CubicOut,
    QuartOut,
    /// Spring-like settle. `amplitude` scales the overshoot (values below
    /// `1.` are treated as `1.`), `period` is the oscillation period in
    /// normalized time.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; progress may leave `[0, 1]` for
    /// overshooting curves.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0., 1.);
        match self {
            Self::Linear => t,
            Self::QuadOut => 1. - (1. - t).powi(2),
            Self::CubicOut => 1. - (1. - t).powi(3),
            Self::QuartOut => 1. - (1. - t).powi(4),
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0. {
        return 0.;
    }
    if t >= 1. {
        return 1.;
    }

    let a = amplitude.max(1.);
    let s = period / TAU * (1. / a).asin();
    a * 2f32.powf(-10. * t) * ((t - s) * TAU / period).sin() + 1.
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::QuartOut,
        Easing::ElasticOut {
            amplitude: 1.,
            period: 1.,
        },
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.), 0., "{curve:?}");
            assert_eq!(curve.apply(1.), 1., "{curve:?}");
        }
    }

    #[test]
    fn time_outside_range_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-3.), 0., "{curve:?}");
            assert_eq!(curve.apply(2.), 1., "{curve:?}");
        }
    }

    #[test]
    fn power_curves_decelerate() {
        // An ease-out curve is above the diagonal in the open interval.
        for curve in [Easing::QuadOut, Easing::CubicOut, Easing::QuartOut] {
            for i in 1..10 {
                let t = i as f32 / 10.;
                assert!(curve.apply(t) > t, "{curve:?} at {t}");
            }
        }
    }

    #[test]
    fn quad_out_known_value() {
        assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn quart_out_known_value() {
        assert!((Easing::QuartOut.apply(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn elastic_overshoots_then_settles() {
        let curve = Easing::ElasticOut {
            amplitude: 1.,
            period: 1.,
        };
        let max = (1..100)
            .map(|i| curve.apply(i as f32 / 100.))
            .fold(f32::MIN, f32::max);
        assert!(max > 1., "elastic must overshoot, got max {max}");
        assert!((curve.apply(0.99) - 1.).abs() < 0.01);
    }
}
