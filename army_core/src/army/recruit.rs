//! Recruitment - Weighted random unit draws and army naming

use super::Army;
use crate::types::UnitId;
use crate::unit::{UnitKind, RECRUITMENT_DIE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidate army names, drawn uniformly
pub const ARMY_NAMES: [&str; 13] = [
    "Croatia",
    "Serbia",
    "Slovenia",
    "Italia",
    "England",
    "Scotland",
    "Spain",
    "Portugal",
    "Mexico",
    "Brazil",
    "Chile",
    "Argentina",
    "China",
];

/// Draw an army name
pub fn pick_name(rng: &mut impl Rng) -> String {
    ARMY_NAMES.choose(rng).copied().unwrap_or(ARMY_NAMES[0]).to_string()
}

/// Roll the recruitment die once
pub fn draw_kind(rng: &mut impl Rng) -> UnitKind {
    UnitKind::from_draw(rng.gen_range(0..RECRUITMENT_DIE))
}

impl Army {
    /// Recruit one random unit at the back of the roster
    pub(super) fn recruit(&mut self, rng: &mut impl Rng) -> UnitId {
        let kind = draw_kind(rng);
        self.enlist(kind.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_recruitment_frequencies_converge() {
        let mut rng = StdRng::seed_from_u64(2024);
        let samples = 100_000;
        let mut counts: HashMap<UnitKind, usize> = HashMap::new();
        for _ in 0..samples {
            *counts.entry(draw_kind(&mut rng)).or_insert(0) += 1;
        }

        for kind in UnitKind::all() {
            let observed = counts.get(kind).copied().unwrap_or(0) as f64 / samples as f64;
            assert!(
                (observed - kind.probability()).abs() < 0.01,
                "{:?}: observed {:.4}, expected {:.4}",
                kind,
                observed,
                kind.probability()
            );
        }
    }

    #[test]
    fn test_every_name_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(pick_name(&mut rng));
        }
        assert_eq!(seen.len(), ARMY_NAMES.len());
    }
}
