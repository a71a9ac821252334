//! Battle - Alternating rounds between two armies until one falls

use crate::config::{BattleConfig, ConfigError};
use army_core::{Army, ArmyError, ArmyReport, BattleContext, EventSink, FightReport, TracingSink};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Battle driver error
#[derive(Error, Debug)]
pub enum BattleError {
    #[error(transparent)]
    Army(#[from] ArmyError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Battle is already over: {0}")]
    Finished(String),
}

/// Which of the two armies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

/// How a battle ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory {
        side: Side,
        winner: String,
        loser: String,
        rounds: u32,
    },
    /// Both armies defeated
    Draw { rounds: u32 },
    /// Round cap reached with both armies standing
    Stalemate { rounds: u32 },
}

impl BattleOutcome {
    pub fn rounds(&self) -> u32 {
        match self {
            BattleOutcome::Victory { rounds, .. }
            | BattleOutcome::Draw { rounds }
            | BattleOutcome::Stalemate { rounds } => *rounds,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            BattleOutcome::Victory {
                winner,
                loser,
                rounds,
                ..
            } => format!("{} defeated {} after {} rounds", winner, loser, rounds),
            BattleOutcome::Draw { rounds } => {
                format!("Both armies were destroyed after {} rounds", rounds)
            }
            BattleOutcome::Stalemate { rounds } => {
                format!("No winner after {} rounds", rounds)
            }
        }
    }
}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    /// First army attacking second
    pub first_attack: FightReport,
    /// Second army attacking first
    pub second_attack: FightReport,
    pub first_remaining: usize,
    pub second_remaining: usize,
}

impl RoundReport {
    pub fn summary(&self) -> String {
        format!(
            "Round {}: {} | {} | {} vs {} remaining",
            self.round,
            self.first_attack.summary(),
            self.second_attack.summary(),
            self.first_remaining,
            self.second_remaining
        )
    }
}

pub struct Battle {
    first: Army,
    second: Army,
    round: u32,
    max_rounds: u32,
    seed: Option<u64>,
}

impl Battle {
    pub fn new(first: Army, second: Army, max_rounds: u32) -> Self {
        Battle {
            first,
            second,
            round: 0,
            max_rounds,
            seed: None,
        }
    }

    /// Recruit both armies from a configuration, logging through `tracing`
    pub fn from_config(config: &BattleConfig) -> Result<Self, BattleError> {
        Self::from_config_with_sinks(config, TracingSink, TracingSink)
    }

    /// Recruit both armies from a configuration with explicit event sinks
    ///
    /// Both armies draw from one `ChaCha8Rng`, the first army first, so a
    /// fixed seed always yields the same pair.
    pub fn from_config_with_sinks(
        config: &BattleConfig,
        first_sink: impl EventSink + 'static,
        second_sink: impl EventSink + 'static,
    ) -> Result<Self, BattleError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut battle = Self::recruit(config, &mut rng, first_sink, second_sink)?;
        battle.seed = Some(seed);
        Ok(battle)
    }

    /// Recruit both armies from `rng`
    pub fn recruit(
        config: &BattleConfig,
        rng: &mut impl Rng,
        first_sink: impl EventSink + 'static,
        second_sink: impl EventSink + 'static,
    ) -> Result<Self, BattleError> {
        let first = Army::with_sink(config.first_size, rng, first_sink)?;
        let second = Army::with_sink(config.second_size, rng, second_sink)?;
        tracing::info!(
            first = %first.name(),
            first_size = first.soldier_count(),
            second = %second.name(),
            second_size = second.soldier_count(),
            "Armies recruited"
        );
        Ok(Self::new(first, second, config.max_rounds))
    }

    pub fn first(&self) -> &Army {
        &self.first
    }

    pub fn second(&self) -> &Army {
        &self.second
    }

    pub fn army(&self, side: Side) -> &Army {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Rounds fought so far
    pub fn rounds_fought(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Seed the armies were recruited from, when built from a configuration
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn reports(&self) -> (ArmyReport, ArmyReport) {
        (self.first.report(), self.second.report())
    }

    /// Outcome, once the battle is decided
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let rounds = self.round;
        match (self.first.is_defeated(), self.second.is_defeated()) {
            (true, true) => Some(BattleOutcome::Draw { rounds }),
            (false, true) => Some(BattleOutcome::Victory {
                side: Side::First,
                winner: self.first.name().to_string(),
                loser: self.second.name().to_string(),
                rounds,
            }),
            (true, false) => Some(BattleOutcome::Victory {
                side: Side::Second,
                winner: self.second.name().to_string(),
                loser: self.first.name().to_string(),
                rounds,
            }),
            (false, false) if rounds >= self.max_rounds => {
                Some(BattleOutcome::Stalemate { rounds })
            }
            (false, false) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Fight one round: first attacks second, then second attacks first
    pub fn round(&mut self) -> Result<RoundReport, BattleError> {
        if let Some(outcome) = self.outcome() {
            return Err(BattleError::Finished(outcome.summary()));
        }

        self.round += 1;
        let ctx = BattleContext::new(self.round);
        let first_attack = self.first.fight(&ctx, &mut self.second)?;
        let second_attack = self.second.fight(&ctx, &mut self.first)?;

        let report = RoundReport {
            round: self.round,
            first_attack,
            second_attack,
            first_remaining: self.first.soldier_count(),
            second_remaining: self.second.soldier_count(),
        };
        tracing::debug!("{}", report.summary());
        Ok(report)
    }

    /// Fight rounds until the battle is decided
    pub fn run(&mut self) -> Result<BattleOutcome, BattleError> {
        loop {
            if let Some(outcome) = self.outcome() {
                tracing::info!(rounds = outcome.rounds(), "{}", outcome.summary());
                return Ok(outcome);
            }
            self.round()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use army_core::{NullSink, UnitKind, UnitStats};

    fn soldiers(name: &str, count: usize) -> Army {
        Army::from_stats(name, vec![UnitKind::Soldier.stats(); count], NullSink)
    }

    #[test]
    fn test_larger_army_wins() {
        let mut battle = Battle::new(soldiers("Croatia", 10), soldiers("Serbia", 4), 100);
        let outcome = battle.run().unwrap();

        // First strike wipes the smaller army before it can answer
        assert_eq!(
            outcome,
            BattleOutcome::Victory {
                side: Side::First,
                winner: "Croatia".to_string(),
                loser: "Serbia".to_string(),
                rounds: 1,
            }
        );
        assert_eq!(battle.first().soldier_count(), 10);
    }

    #[test]
    fn test_second_army_can_win() {
        let mut battle = Battle::new(soldiers("Spain", 2), soldiers("Portugal", 5), 100);
        let outcome = battle.run().unwrap();

        // Round 1: Spain kills 2, Portugal's 3 survivors kill both Spaniards
        assert_eq!(outcome.rounds(), 1);
        assert!(matches!(
            outcome,
            BattleOutcome::Victory {
                side: Side::Second,
                ..
            }
        ));
        assert_eq!(battle.second().soldier_count(), 3);
    }

    #[test]
    fn test_stalemate_at_round_cap() {
        let harmless = UnitStats::new(UnitKind::Soldier, 0.0, 1, 10.0).unwrap();
        let first = Army::from_stats("Chile", vec![harmless; 3], NullSink);
        let second = Army::from_stats("Brazil", vec![harmless; 3], NullSink);
        let mut battle = Battle::new(first, second, 5);

        assert_eq!(battle.run().unwrap(), BattleOutcome::Stalemate { rounds: 5 });
        assert_eq!(battle.rounds_fought(), 5);
    }

    #[test]
    fn test_empty_armies_draw_without_fighting() {
        let mut battle = Battle::new(soldiers("China", 0), soldiers("Italia", 0), 10);
        assert_eq!(battle.run().unwrap(), BattleOutcome::Draw { rounds: 0 });
        assert_eq!(battle.rounds_fought(), 0);
    }

    #[test]
    fn test_round_after_finish_fails() {
        let mut battle = Battle::new(soldiers("Mexico", 3), soldiers("England", 0), 10);
        assert!(battle.is_over());
        assert!(matches!(battle.round(), Err(BattleError::Finished(_))));
    }

    #[test]
    fn test_round_report_counts() {
        let mut battle = Battle::new(soldiers("Scotland", 6), soldiers("Slovenia", 10), 10);
        let report = battle.round().unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.first_attack.kills(), 6);
        assert_eq!(report.second_remaining, 4);
        assert_eq!(report.second_attack.attacks, 4);
        assert_eq!(report.first_remaining, 2);
    }

    #[test]
    fn test_config_seed_is_reproducible() {
        let config = BattleConfig {
            first_size: 30,
            second_size: 30,
            seed: Some(99),
            max_rounds: 100,
        };
        let a = Battle::from_config_with_sinks(&config, NullSink, NullSink).unwrap();
        let b = Battle::from_config_with_sinks(&config, NullSink, NullSink).unwrap();

        assert_eq!(a.seed(), Some(99));
        assert_eq!(a.first().name(), b.first().name());
        assert_eq!(a.first().recruited_counts(), b.first().recruited_counts());
        assert_eq!(a.second().recruited_counts(), b.second().recruited_counts());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BattleConfig {
            first_size: -1,
            ..BattleConfig::default()
        };
        assert!(matches!(
            Battle::from_config_with_sinks(&config, NullSink, NullSink),
            Err(BattleError::Config(_))
        ));
    }
}
