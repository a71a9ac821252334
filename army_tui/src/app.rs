//! Application state

use army_core::{channel_sink, ArmyEvent, ArmyReport};
use battle_sim::{Battle, BattleConfig, BattleError, BattleOutcome};
use std::sync::mpsc::{self, Receiver, Sender};

/// Lines kept in the battle log
const MAX_LOG_LINES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Armies,
    Log,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Armies, Tab::Log, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Armies => "Armies",
            Tab::Log => "Log",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub battle: Battle,
    pub config: BattleConfig,
    /// Reports taken right after recruitment
    pub opening: (ArmyReport, ArmyReport),
    pub battle_log: Vec<String>,
    pub log_scroll: usize,
    pub auto_run: bool,
    pub outcome: Option<BattleOutcome>,
    events_tx: Sender<ArmyEvent>,
    events_rx: Receiver<ArmyEvent>,
}

impl App {
    pub fn new(config: BattleConfig) -> Result<Self, BattleError> {
        let (events_tx, events_rx) = mpsc::channel();
        let battle = recruit(&config, &events_tx)?;
        let opening = battle.reports();
        let mut app = App {
            current_tab: Tab::Armies,
            battle,
            config,
            opening,
            battle_log: Vec::new(),
            log_scroll: 0,
            auto_run: false,
            outcome: None,
            events_tx,
            events_rx,
        };
        app.announce();
        Ok(app)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn on_down(&mut self) {
        if self.log_scroll + 1 < self.battle_log.len() {
            self.log_scroll += 1;
        }
    }

    pub fn toggle_auto_run(&mut self) {
        self.auto_run = !self.auto_run;
    }

    /// Called on every frame
    pub fn tick(&mut self) {
        if self.auto_run {
            self.next_round();
        }
    }

    pub fn next_round(&mut self) {
        if self.outcome.is_some() {
            self.auto_run = false;
            return;
        }

        match self.battle.round() {
            Ok(report) => {
                self.log(format!("━━━ Round {} ━━━", report.round));
                self.log(format!("▶ {}", report.first_attack.summary()));
                self.log(format!("▶ {}", report.second_attack.summary()));
            }
            Err(err) => self.log(format!("Error: {}", err)),
        }
        self.drain_events();
        self.check_outcome();
    }

    /// Recruit a fresh pair of armies with a new seed
    pub fn new_battle(&mut self) {
        self.config.seed = Some(rand::random());
        match recruit(&self.config, &self.events_tx) {
            Ok(battle) => {
                self.opening = battle.reports();
                self.battle = battle;
                self.outcome = None;
                self.auto_run = false;
                self.battle_log.clear();
                self.log_scroll = 0;
                self.announce();
            }
            Err(err) => self.log(format!("Error: {}", err)),
        }
    }

    fn announce(&mut self) {
        if let Some(seed) = self.battle.seed() {
            self.log(format!("Seed {}", seed));
        }
        self.drain_events();
        self.check_outcome();
    }

    fn check_outcome(&mut self) {
        if self.outcome.is_none() {
            if let Some(outcome) = self.battle.outcome() {
                self.log(format!("★ {}", outcome.summary()));
                self.outcome = Some(outcome);
                self.auto_run = false;
            }
        }
    }

    /// Move army events into the log; individual deaths are covered by the
    /// round summaries
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            if !matches!(event, ArmyEvent::UnitLost { .. }) {
                self.log(event.describe());
            }
        }
    }

    fn log(&mut self, line: String) {
        self.battle_log.push(line);
        if self.battle_log.len() > MAX_LOG_LINES {
            let excess = self.battle_log.len() - MAX_LOG_LINES;
            self.battle_log.drain(..excess);
            self.log_scroll = self.log_scroll.saturating_sub(excess);
        }
    }
}

fn recruit(config: &BattleConfig, tx: &Sender<ArmyEvent>) -> Result<Battle, BattleError> {
    Battle::from_config_with_sinks(config, channel_sink(tx.clone()), channel_sink(tx.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BattleConfig {
        BattleConfig {
            first_size: 12,
            second_size: 12,
            seed: Some(5),
            max_rounds: 200,
        }
    }

    #[test]
    fn test_new_app_logs_recruitment() {
        let app = App::new(small_config()).unwrap();
        assert!(app.battle_log.iter().any(|l| l.contains("creating army with 12")));
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_rounds_until_outcome() {
        let mut app = App::new(small_config()).unwrap();
        for _ in 0..200 {
            app.next_round();
            if app.outcome.is_some() {
                break;
            }
        }
        assert!(app.outcome.is_some());
        assert!(app.battle_log.iter().any(|l| l.starts_with("★")));

        // Further rounds are ignored once decided
        let lines = app.battle_log.len();
        app.next_round();
        assert_eq!(app.battle_log.len(), lines);
    }

    #[test]
    fn test_new_battle_resets_state() {
        let mut app = App::new(small_config()).unwrap();
        app.next_round();
        app.new_battle();
        assert_eq!(app.battle.rounds_fought(), 0);
        assert!(app.outcome.is_none());
        assert_eq!(app.opening.0.soldier_count, 12);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = App::new(small_config()).unwrap();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Log);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
    }
}
