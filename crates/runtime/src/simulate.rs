//! AI-vs-AI battle runner.
//!
//! Both sides are played by the AI scorer: the opponent side through the
//! engine's AI turn, the player side through suggestions submitted as
//! regular actions. Used by the `battle-sim` binary and for balancing sweeps.

use battle_core::{
    AbilityOracle, BattleConfig, BattleEngine, BattleEvent, BattleStatus, CombatUnit, Side,
    compute_seed,
};
use tracing::{debug, info};

use crate::errors::Result;
use crate::session::BattleSession;

/// Settings for one simulated battle.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub seed: u64,
    /// Unit turns after which the battle is abandoned.
    pub max_turns: u32,
    pub battle: BattleConfig,
}

impl SimulationConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 500;

    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_turns: Self::DEFAULT_MAX_TURNS,
            battle: BattleConfig::default(),
        }
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_battle_config(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// How a simulated battle went.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    /// `Active` when the turn limit was reached first.
    pub status: BattleStatus,
    pub turns: u32,
    pub rounds: u32,
    pub survivors_a: usize,
    pub survivors_b: usize,
    pub events: Vec<BattleEvent>,
}

impl SimulationReport {
    pub fn timed_out(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Plays a full battle between two rosters.
pub fn simulate<O: AbilityOracle>(
    abilities: O,
    roster_a: Vec<CombatUnit>,
    roster_b: Vec<CombatUnit>,
    config: &SimulationConfig,
) -> Result<SimulationReport> {
    let engine = BattleEngine::seeded(abilities, config.seed).with_config(config.battle.clone());
    let mut session = BattleSession::new(engine);
    session.start(roster_a, roster_b)?;

    let mut turns = 0;
    while !session.is_over() && turns < config.max_turns {
        match session.current_side() {
            Some(Side::Player) => {
                let action = session.suggest_action()?;
                let outcome = session.submit(action)?;
                if !outcome.is_accepted() && !session.is_over() {
                    session.pass_turn()?;
                }
            }
            Some(Side::Opponent) => {
                session.run_ai_turn()?;
            }
            None => break,
        }
        session.finish_turn()?;
        turns += 1;
    }

    let state = session.state();
    let report = SimulationReport {
        status: state.status,
        turns,
        rounds: state.round,
        survivors_a: state.living(Side::Player).count(),
        survivors_b: state.living(Side::Opponent).count(),
        events: state.battle_log.clone(),
    };

    if report.timed_out() {
        debug!(turns, "Simulation hit the turn limit");
    }
    info!(
        status = %report.status,
        turns = report.turns,
        rounds = report.rounds,
        "Simulation finished"
    );
    Ok(report)
}

/// Tally of a [`sweep`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub battles: u32,
    /// Battles roster A won.
    pub victories: u32,
    /// Battles roster B won.
    pub defeats: u32,
    pub timeouts: u32,
    pub total_turns: u64,
}

impl SweepSummary {
    fn record(&mut self, report: &SimulationReport) {
        self.battles += 1;
        self.total_turns += u64::from(report.turns);
        match report.status {
            BattleStatus::Victory => self.victories += 1,
            BattleStatus::Defeat => self.defeats += 1,
            BattleStatus::Preparing | BattleStatus::Active => self.timeouts += 1,
        }
    }

    /// Roster A's share of decided battles, in percent.
    pub fn win_rate(&self) -> f64 {
        let decided = self.victories + self.defeats;
        if decided == 0 {
            return 0.0;
        }
        f64::from(self.victories) * 100.0 / f64::from(decided)
    }

    pub fn average_turns(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.battles)
    }
}

/// Plays `battles` battles between the same rosters, each on its own stream
/// derived from `config.seed`.
pub fn sweep<O: AbilityOracle>(
    abilities: &O,
    roster_a: &[CombatUnit],
    roster_b: &[CombatUnit],
    config: &SimulationConfig,
    battles: u32,
) -> Result<SweepSummary> {
    let mut summary = SweepSummary::default();
    for index in 0..battles {
        let run = SimulationConfig {
            seed: compute_seed(config.seed, u64::from(index), 0),
            ..config.clone()
        };
        let report = simulate(abilities, roster_a.to_vec(), roster_b.to_vec(), &run)?;
        summary.record(&report);
    }
    info!(
        battles = summary.battles,
        victories = summary.victories,
        defeats = summary.defeats,
        timeouts = summary.timeouts,
        "Sweep finished"
    );
    Ok(summary)
}
