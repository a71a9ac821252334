//! Battle operations - Fighting, damage splitting and casualty removal

use super::Army;
use crate::error::{ArmyError, Result};
use crate::events::{ArmyEvent, LOW_STRENGTH_THRESHOLD};
use crate::types::{ArmyState, BattleContext, UnitId};
use crate::unit::{Attack, Defense, Unit};
use serde::{Deserialize, Serialize};

/// Outcome of a single `inflict_damage` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Casualties {
    /// Damage applied to each unit hit
    pub share: f64,
    /// Units that received a share, in roster order
    pub hit: Vec<UnitId>,
    /// Units removed from the roster
    pub killed: Vec<UnitId>,
}

impl Casualties {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hit.is_empty()
    }
}

/// Outcome of one army fighting another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightReport {
    pub attacker: String,
    pub defender: String,
    /// Attacks resolved against the defender; units left to act after the
    /// defender falls make no attack and are not counted
    pub attacks: usize,
    /// Sum of raw attack damage
    pub damage_dealt: f64,
    /// Total defend calls across all attacks
    pub units_hit: usize,
    pub killed: Vec<UnitId>,
}

impl FightReport {
    fn new(attacker: &str, defender: &str) -> Self {
        FightReport {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            attacks: 0,
            damage_dealt: 0.0,
            units_hit: 0,
            killed: Vec::new(),
        }
    }

    fn record(&mut self, attack: Attack, casualties: Casualties) {
        self.attacks += 1;
        self.damage_dealt += attack.damage;
        self.units_hit += casualties.hit.len();
        self.killed.extend(casualties.killed);
    }

    pub fn kills(&self) -> usize {
        self.killed.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} -> {}: {} attacks, {:.0} damage, {} killed",
            self.attacker,
            self.defender,
            self.attacks,
            self.damage_dealt,
            self.kills()
        )
    }
}

impl Army {
    /// Every unit attacks `defender` once, in roster order
    ///
    /// Each attack is applied before the next unit attacks. Stops once the
    /// defender has nothing left to hit.
    pub fn fight(&self, ctx: &BattleContext, defender: &mut Army) -> Result<FightReport> {
        let mut report = FightReport::new(&self.name, &defender.name);
        for unit in &self.roster {
            if defender.is_defeated() {
                break;
            }
            let attack = unit.attack(ctx);
            let casualties = defender.inflict_damage(attack.damage, attack.target_count)?;
            report.record(attack, casualties);
        }
        Ok(report)
    }

    /// Split `damage` evenly across the front `target_count` units
    ///
    /// With fewer units than targets the damage concentrates on the units
    /// that remain. Targets are fixed before any damage lands, so a unit
    /// dying mid-split never shifts the share onto a unit further back.
    pub fn inflict_damage(&mut self, damage: f64, target_count: usize) -> Result<Casualties> {
        let targets = target_count.min(self.roster.len());
        if targets == 0 || damage.is_nan() || damage <= 0.0 {
            return Ok(Casualties::none());
        }

        let share = damage / targets as f64;
        let hit: Vec<UnitId> = self.roster[..targets].iter().map(Unit::id).collect();
        let mut killed = Vec::new();

        for id in &hit {
            let unit = self
                .roster
                .iter_mut()
                .find(|u| u.id() == *id)
                .ok_or_else(|| missing_unit(*id, &self.name))?;
            if unit.defend(share) == Defense::Killed {
                self.remove_soldier(*id)?;
                killed.push(*id);
            }
        }

        Ok(Casualties { share, hit, killed })
    }

    /// Remove a dead unit, keeping the order of everyone else
    pub fn remove_soldier(&mut self, id: UnitId) -> Result<Unit> {
        let index = self
            .roster
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| missing_unit(id, &self.name))?;

        let unit = self.roster.remove(index);
        self.soldier_count -= 1;
        debug_assert_eq!(self.soldier_count, self.roster.len());
        if self.soldier_count == 0 {
            self.state = ArmyState::Defeated;
        }

        self.emit(ArmyEvent::UnitLost {
            army: self.name.clone(),
            unit: id,
            kind: unit.kind(),
            remaining: self.soldier_count,
        });
        if self.soldier_count < LOW_STRENGTH_THRESHOLD {
            let roster = self.roster.iter().map(Unit::snapshot).collect();
            self.emit(ArmyEvent::LowStrength {
                army: self.name.clone(),
                roster,
            });
        }

        Ok(unit)
    }
}

fn missing_unit(id: UnitId, army: &str) -> ArmyError {
    ArmyError::InvariantViolation(format!("unit {} is not in the roster of {}", id, army))
}
