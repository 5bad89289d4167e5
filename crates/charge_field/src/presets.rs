//! Stock charge configurations.
use std::fmt;
use std::str::FromStr;

use crate::charge::Charge;
use crate::error::Error;

/// Named example configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    SinglePositive,
    SingleNegative,
    Dipole,
    LikePair,
    Quadrupole,
    ComplexArrangement,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::SinglePositive,
        Preset::SingleNegative,
        Preset::Dipole,
        Preset::LikePair,
        Preset::Quadrupole,
        Preset::ComplexArrangement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::SinglePositive => "single-positive",
            Preset::SingleNegative => "single-negative",
            Preset::Dipole => "dipole",
            Preset::LikePair => "like-pair",
            Preset::Quadrupole => "quadrupole",
            Preset::ComplexArrangement => "complex-arrangement",
        }
    }

    pub fn charges(self) -> Vec<Charge> {
        match self {
            Preset::SinglePositive => vec![Charge::new(1.0, 0.0, 0.0)],
            Preset::SingleNegative => vec![Charge::new(-1.0, 0.0, 0.0)],
            Preset::Dipole => vec![Charge::new(1.0, -2.0, 0.0), Charge::new(-1.0, 2.0, 0.0)],
            Preset::LikePair => vec![Charge::new(1.0, -2.0, 0.0), Charge::new(1.0, 2.0, 0.0)],
            Preset::Quadrupole => vec![
                Charge::new(1.0, -2.0, -2.0),
                Charge::new(-1.0, 2.0, -2.0),
                Charge::new(1.0, 2.0, 2.0),
                Charge::new(-1.0, -2.0, 2.0),
            ],
            Preset::ComplexArrangement => vec![
                Charge::new(2.0, 3.0, 4.0),
                Charge::new(-1.0, -5.0, 2.0),
                Charge::new(1.5, 6.0, -3.0),
                Charge::new(-2.5, -1.0, -5.0),
            ],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| Error::UnknownPreset { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::evaluator::evaluate;

    #[test]
    fn names_round_trip_through_from_str() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("Like_Pair".parse::<Preset>().unwrap(), Preset::LikePair);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "octupole".parse::<Preset>().unwrap_err();
        assert!(matches!(err, Error::UnknownPreset { ref name } if name == "octupole"));
    }

    #[test]
    fn neutral_presets_sum_to_zero_charge() {
        for preset in [Preset::Dipole, Preset::Quadrupole] {
            let total: f64 = preset.charges().iter().map(|c| c.q).sum();
            assert_eq!(total, 0.0);
        }
    }

    #[test]
    fn like_pair_field_vanishes_at_midpoint() {
        let e = evaluate(&Preset::LikePair.charges(), [0.0, 0.0]);
        assert_eq!(e.length(), 0.0);
    }
}
