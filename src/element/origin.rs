//! Astrophysical origin tags.

use std::fmt;

use serde::Serialize;

/// How an element was formed. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Primordial nucleosynthesis.
    BigBang,
    /// Dying low-mass stars.
    LowMassStars,
    /// Exploding white dwarfs.
    WhiteDwarfSupernova,
    /// Decay of heavier nuclei.
    RadioactiveDecay,
    /// Cosmic ray spallation.
    CosmicRayFission,
    /// Dying high-mass stars.
    HighMassStars,
    /// Neutron star mergers.
    MergingNeutronStars,
    /// Synthesized in laboratories.
    HumanMade,
}

impl Origin {
    /// Two-line caption shown in the origin legend.
    #[must_use]
    pub const fn caption(self) -> (&'static str, &'static str) {
        match self {
            Self::BigBang => ("The big", "bang"),
            Self::LowMassStars => ("Dying low", "mass stars"),
            Self::WhiteDwarfSupernova => ("White dwarf", "supernova"),
            Self::RadioactiveDecay => ("Radioactive", "decay"),
            Self::CosmicRayFission => ("Cosmic ray", "collision"),
            Self::HighMassStars => ("Dying high-mass", "stars"),
            Self::MergingNeutronStars => ("Merging", "neutron stars"),
            Self::HumanMade => ("Human-made", ""),
        }
    }

    /// Every origin, in legend order.
    #[must_use]
    pub const fn all() -> [Origin; 8] {
        [
            Self::BigBang,
            Self::LowMassStars,
            Self::WhiteDwarfSupernova,
            Self::RadioactiveDecay,
            Self::CosmicRayFission,
            Self::HighMassStars,
            Self::MergingNeutronStars,
            Self::HumanMade,
        ]
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, subtitle) = self.caption();
        if subtitle.is_empty() {
            f.write_str(title)
        } else {
            write!(f, "{title} {subtitle}")
        }
    }
}

/// Formation processes for an atomic number.
///
/// Unknown atomic numbers fall back to dying high-mass stars.
#[must_use]
pub fn origins(atomic_number: u8) -> &'static [Origin] {
    use Origin::{
        BigBang, CosmicRayFission, HighMassStars, HumanMade, LowMassStars, MergingNeutronStars,
        RadioactiveDecay, WhiteDwarfSupernova,
    };

    match atomic_number {
        1..=2 => &[BigBang],
        3 | 6..=7 | 38..=41 | 56 | 58 | 81 => &[LowMassStars],
        4..=5 => &[CosmicRayFission],
        16 | 18 | 20 | 29..=30 => &[HighMassStars, WhiteDwarfSupernova],
        22..=28 => &[WhiteDwarfSupernova],
        42 | 46 | 48 | 50 | 52 | 57 | 59..=60 | 82 => &[MergingNeutronStars, LowMassStars],
        43 | 61 | 84..=89 | 91 | 93 => &[RadioactiveDecay],
        44..=45 | 47 | 49 | 51 | 53..=55 | 62..=71 | 75..=79 | 83 | 90 | 92 | 94 => {
            &[MergingNeutronStars]
        }
        72..=74 | 80 => &[MergingNeutronStars, HighMassStars],
        95..=118 => &[HumanMade],
        _ => &[HighMassStars],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_an_origin() {
        for n in 1..=118 {
            let tags = origins(n);
            assert!(!tags.is_empty() && tags.len() <= 2, "element {n}");
        }
    }

    #[test]
    fn test_known_origins() {
        assert_eq!(origins(1), &[Origin::BigBang]);
        assert_eq!(origins(20), &[Origin::HighMassStars, Origin::WhiteDwarfSupernova]);
        assert_eq!(origins(79), &[Origin::MergingNeutronStars]);
        assert_eq!(origins(118), &[Origin::HumanMade]);
        assert_eq!(origins(0), &[Origin::HighMassStars]);
        assert_eq!(origins(200), &[Origin::HighMassStars]);
    }

    #[test]
    fn test_caption_display() {
        assert_eq!(Origin::LowMassStars.to_string(), "Dying low mass stars");
        assert_eq!(Origin::HumanMade.to_string(), "Human-made");
    }
}
