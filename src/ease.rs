use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::PlotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    BackIn,
    BackOut,
    ElasticOut,
    BounceOut,
}

impl Ease {
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::BackIn,
        Ease::BackOut,
        Ease::ElasticOut,
        Ease::BounceOut,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SineIn => "sineIn",
            Self::SineOut => "sineOut",
            Self::SineInOut => "sineInOut",
            Self::BackIn => "backIn",
            Self::BackOut => "backOut",
            Self::ElasticOut => "elasticOut",
            Self::BounceOut => "bounceOut",
        }
    }

    pub fn apply(self, n: f64) -> f64 {
        let n = n.clamp(0.0, 1.0);
        match self {
            Self::Linear => n,
            Self::SineIn => 1.0 - (n * PI / 2.0).cos(),
            Self::SineOut => (n * PI / 2.0).sin(),
            Self::SineInOut => -0.5 * ((PI * n).cos() - 1.0),
            Self::BackIn => {
                let s = 1.70158;
                n * n * ((s + 1.0) * n - s)
            }
            Self::BackOut => {
                let s = 1.70158;
                let m = n - 1.0;
                m * m * ((s + 1.0) * m + s) + 1.0
            }
            Self::ElasticOut => {
                2.0_f64.powf(-10.0 * n) * ((n - 0.075) * (2.0 * PI) / 0.3).sin() + 1.0
            }
            Self::BounceOut => bounce_out(n),
        }
    }
}

impl FromStr for Ease {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "sineIn" => Ok(Self::SineIn),
            "sineOut" => Ok(Self::SineOut),
            "sineInOut" => Ok(Self::SineInOut),
            "backIn" => Ok(Self::BackIn),
            "backOut" => Ok(Self::BackOut),
            "elasticOut" => Ok(Self::ElasticOut),
            "bounceOut" => Ok(Self::BounceOut),
            _ => Err(PlotError::validation(format!("unknown easing '{s}'"))),
        }
    }
}

fn bounce_out(n: f64) -> f64 {
    let s = 7.5625;
    let p = 2.75;
    if n < 1.0 / p {
        s * n * n
    } else if n < 2.0 / p {
        let m = n - 1.5 / p;
        s * m * m + 0.75
    } else if n < 2.5 / p {
        let m = n - 2.25 / p;
        s * m * m + 0.9375
    } else {
        let m = n - 2.625 / p;
        s * m * m + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn every_easing_starts_at_zero() {
        for ease in Ease::ALL {
            assert!(ease.apply(0.0).abs() < EPS, "{ease:?}");
        }
    }

    #[test]
    fn non_overshoot_easings_end_at_one() {
        assert_eq!(Ease::Linear.apply(1.0), 1.0);
        for ease in [Ease::SineIn, Ease::SineOut, Ease::SineInOut, Ease::BounceOut] {
            assert!((ease.apply(1.0) - 1.0).abs() < EPS, "{ease:?}");
        }
    }

    #[test]
    fn bounce_is_continuous_at_branch_boundaries() {
        let p = 2.75;
        for boundary in [1.0 / p, 2.0 / p, 2.5 / p] {
            let below = Ease::BounceOut.apply(boundary - EPS);
            let above = Ease::BounceOut.apply(boundary + EPS);
            assert!(
                (below - above).abs() < 1e-6,
                "discontinuity at {boundary}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn bounce_second_branch_value() {
        // n = 0.5 falls between 1/2.75 and 2/2.75.
        let expected: f64 = 7.5625 * (0.5 - 1.5 / 2.75) * (0.5 - 1.5 / 2.75) + 0.75;
        assert!((expected - 0.765625).abs() < 1e-12);
        assert!((Ease::BounceOut.apply(0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn back_and_elastic_overshoot() {
        assert!(Ease::BackIn.apply(0.3) < 0.0);
        assert!(Ease::BackOut.apply(0.7) > 1.0);
        assert!(Ease::ElasticOut.apply(0.15) > 1.0);
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in [
            Ease::Linear,
            Ease::SineIn,
            Ease::SineOut,
            Ease::SineInOut,
            Ease::BounceOut,
        ] {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn names_round_trip() {
        for ease in Ease::ALL {
            assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "cubicIn".parse::<Ease>().unwrap_err();
        assert!(err.to_string().contains("unknown easing"));
    }
}
