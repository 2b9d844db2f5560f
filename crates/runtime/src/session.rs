//! Host-side turn discipline around a [`BattleEngine`].
//!
//! The engine resolves whatever it is handed. A session adds the rules a
//! real host needs:
//!
//! - only the current unit may act, and the AI side is never driven by hand
//! - an accepted action that does not end the turn (a basic attack, a switch)
//!   leaves the turn *pending* until presentation calls
//!   [`BattleSession::finish_turn`]; a second submission meanwhile fails with
//!   [`SessionError::TurnPending`]
//! - a player who runs out of time gets [`BattleSession::submit_timeout`]
//! - presentation pulls new log entries with [`BattleSession::drain_events`]

use battle_core::{
    AbilityOracle, ActionOutcome, AiTurn, BattleAction, BattleEngine, BattleError, BattleEvent,
    BattleState, BattleStatus, CombatUnit, PcgRng, RngOracle, Side,
};
use tracing::{debug, info, warn};

use crate::errors::{Result, SessionError, log_error};

/// One battle, driven one action at a time.
pub struct BattleSession<O, R = PcgRng> {
    engine: BattleEngine<O, R>,
    pending: bool,
    cursor: usize,
}

impl<O: AbilityOracle> BattleSession<O, PcgRng> {
    /// Session over a seeded engine with default configuration.
    pub fn seeded(abilities: O, seed: u64) -> Self {
        Self::new(BattleEngine::seeded(abilities, seed))
    }
}

impl<O: AbilityOracle, R: RngOracle> BattleSession<O, R> {
    pub fn new(engine: BattleEngine<O, R>) -> Self {
        Self {
            engine,
            pending: false,
            cursor: 0,
        }
    }

    pub fn engine(&self) -> &BattleEngine<O, R> {
        &self.engine
    }

    pub fn into_engine(self) -> BattleEngine<O, R> {
        self.engine
    }

    pub fn state(&self) -> &BattleState {
        self.engine.state()
    }

    pub fn status(&self) -> BattleStatus {
        self.engine.state().status
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Whether an accepted action is waiting for [`Self::finish_turn`].
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn current_unit(&self) -> Option<&CombatUnit> {
        self.engine.current_unit()
    }

    /// Side of the unit due to act, if any.
    pub fn current_side(&self) -> Option<Side> {
        let unit = self.current_unit()?;
        self.state().side_of(unit.id.as_str())
    }

    pub fn is_player_turn(&self) -> bool {
        self.current_side() == Some(Side::Player)
    }

    /// Sets up the rosters and starts round one.
    pub fn start(&mut self, roster_a: Vec<CombatUnit>, roster_b: Vec<CombatUnit>) -> Result<()> {
        self.engine
            .initialize_battle(roster_a, roster_b)
            .map_err(|e| self.fail(e.into()))?;
        info!(
            seed = self.state().seed,
            units = self.state().unit_statuses.len(),
            "Battle session started"
        );
        Ok(())
    }

    /// Submits a player action for the current unit.
    ///
    /// Rejections (cooldown, energy, bad target) are returned in the outcome;
    /// the player may submit again.
    pub fn submit(&mut self, action: BattleAction) -> Result<ActionOutcome> {
        self.check_not_pending()?;
        let current = self.current_player_unit()?;
        if current.id != action.source_id {
            let expected = current.id.clone();
            return Err(self.fail(SessionError::NotYourTurn {
                expected,
                provided: action.source_id,
            }));
        }

        let outcome = self
            .engine
            .execute_action(&action)
            .map_err(|e| self.fail(e.into()))?;
        self.settle(&outcome);
        if let Some(reason) = outcome.rejection {
            warn!(
                unit = %action.source_id,
                kind = %action.kind,
                "Action rejected: unit {}",
                reason.describe()
            );
        }
        Ok(outcome)
    }

    /// The action submitted on the player's behalf when their time runs out.
    pub fn timeout_action(&self) -> Result<BattleAction> {
        self.engine.default_action().map_err(SessionError::from)
    }

    /// Submits [`Self::timeout_action`] for the current player unit.
    pub fn submit_timeout(&mut self) -> Result<ActionOutcome> {
        let action = self.timeout_action().map_err(|e| self.fail(e))?;
        debug!(unit = %action.source_id, "Turn timed out, submitting default action");
        self.submit(action)
    }

    /// Ends the current player unit's turn without acting.
    pub fn pass_turn(&mut self) -> Result<()> {
        self.check_not_pending()?;
        self.current_player_unit()?;
        self.engine.next_turn().map_err(|e| self.fail(e.into()))
    }

    /// Runs one AI turn for the opponent side.
    ///
    /// A turn the AI cannot complete (its action was rejected) is passed so
    /// the battle never stalls.
    pub fn run_ai_turn(&mut self) -> Result<AiTurn> {
        self.check_not_pending()?;
        let turn = self
            .engine
            .execute_ai_turn()
            .map_err(|e| self.fail(e.into()))?;

        if let Some(reason) = turn.outcome.rejection {
            warn!(
                unit = %turn.action.source_id,
                "AI action rejected ({}), passing turn",
                reason.describe()
            );
            if !self.is_over() {
                self.engine.next_turn().map_err(|e| self.fail(e.into()))?;
            }
        } else {
            self.settle(&turn.outcome);
        }
        Ok(turn)
    }

    /// Suggests an action for the current unit using the AI scorer.
    pub fn suggest_action(&mut self) -> Result<BattleAction> {
        self.engine
            .suggest_action()
            .map_err(|e| self.fail(e.into()))
    }

    /// Presentation is done with the last action: advance if it left the turn
    /// open. Does nothing when no turn is pending.
    pub fn finish_turn(&mut self) -> Result<()> {
        if !self.pending {
            return Ok(());
        }
        self.pending = false;
        if self.is_over() {
            return Ok(());
        }
        self.engine.next_turn().map_err(|e| self.fail(e.into()))
    }

    /// Log entries appended since the previous call.
    pub fn drain_events(&mut self) -> &[BattleEvent] {
        let start = self.cursor;
        let log = &self.engine.state().battle_log;
        self.cursor = log.len();
        &log[start.min(log.len())..]
    }

    fn settle(&mut self, outcome: &ActionOutcome) {
        self.pending = outcome.is_accepted() && !outcome.turn_advanced && !self.is_over();
    }

    fn check_not_pending(&self) -> Result<()> {
        if self.pending {
            return Err(self.fail(SessionError::TurnPending));
        }
        Ok(())
    }

    fn current_player_unit(&self) -> Result<&CombatUnit> {
        let unit = match self.engine.current_unit() {
            Some(unit) => unit,
            None => return Err(self.fail(self.inactive_error().into())),
        };
        if self.state().side_of(unit.id.as_str()) != Some(Side::Player) {
            return Err(self.fail(SessionError::AiControlled(unit.id.clone())));
        }
        Ok(unit)
    }

    fn inactive_error(&self) -> BattleError {
        match self.status() {
            BattleStatus::Preparing => BattleError::NotInitialized,
            BattleStatus::Active => BattleError::NoCurrentUnit,
            status @ (BattleStatus::Victory | BattleStatus::Defeat) => {
                BattleError::BattleOver { status }
            }
        }
    }

    fn fail(&self, error: SessionError) -> SessionError {
        log_error(&error);
        error
    }
}
