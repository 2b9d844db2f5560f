//! Battle lifecycle and action resolution.
//!
//! The [`BattleEngine`] is the single owner of a [`BattleState`]. Every
//! mutation flows through one of four entry points:
//!
//! ```text
//! initialize_battle ─▶ execute_action ─▶ next_turn ─▶ ... ─▶ Victory | Defeat
//!                       execute_ai_turn ┘
//! ```
//!
//! Internally each routine takes `(&mut BattleState, &mut BattleEnv)`: the
//! state being mutated plus the read-only ability oracle, the random source
//! and the configuration.

mod action;
mod ai;
mod errors;
mod resolve;
mod setup;
mod targeting;
mod turns;

pub use action::{ActionKind, ActionOutcome, BattleAction, RejectReason};
pub use ai::AiTurn;
pub use errors::BattleError;
pub use setup::{CompanionPair, detect_combos, pair_companions};
pub use turns::compute_turn_order;

use crate::combat;
use crate::config::BattleConfig;
use crate::env::{AbilityOracle, PcgRng, RngOracle};
use crate::state::{Ability, BattleState, BattleStatus, CombatUnit, Side, Stats, UnitId};

/// Collaborators borrowed by the resolution routines.
pub(crate) struct BattleEnv<'a, O, R> {
    pub abilities: &'a O,
    pub rng: &'a mut R,
    pub config: &'a BattleConfig,
}

/// Turn-based battle simulator for two rosters.
///
/// `O` supplies ability definitions; `R` supplies randomness. The default
/// [`PcgRng`] makes a battle fully replayable from its seed.
pub struct BattleEngine<O, R = PcgRng> {
    state: BattleState,
    abilities: O,
    rng: R,
    config: BattleConfig,
}

impl<O: AbilityOracle> BattleEngine<O, PcgRng> {
    /// Creates an engine whose rolls come from a PCG stream seeded by `seed`.
    pub fn seeded(abilities: O, seed: u64) -> Self {
        Self::with_rng(abilities, PcgRng::seeded(seed), seed)
    }
}

impl<O: AbilityOracle, R: RngOracle> BattleEngine<O, R> {
    /// Creates an engine with a caller-supplied random source. `seed` is only
    /// recorded on the state for replay bookkeeping.
    pub fn with_rng(abilities: O, rng: R, seed: u64) -> Self {
        Self {
            state: BattleState::new(seed),
            abilities,
            rng,
            config: BattleConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn into_state(self) -> BattleState {
        self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn abilities(&self) -> &O {
        &self.abilities
    }

    /// The unit whose turn it is, while the battle is active.
    pub fn current_unit(&self) -> Option<&CombatUnit> {
        self.state
            .current_unit_id()
            .and_then(|id| self.state.unit(id.as_str()))
    }

    /// Abilities the unit owns and could use right now, in slot order.
    pub fn available_abilities(&self, unit_id: &str) -> Result<Vec<&Ability>, BattleError> {
        let unit = self
            .state
            .unit(unit_id)
            .ok_or_else(|| BattleError::UnknownUnit(unit_id.into()))?;

        Ok(unit
            .abilities
            .iter()
            .filter_map(|id| self.abilities.ability(id.as_str()))
            .filter(|ability| resolve::check_usable(&self.state, unit_id, ability).is_ok())
            .collect())
    }

    /// Whether `unit_id` could use `ability_id` now: owned, off cooldown, not
    /// yet consumed, and affordable.
    pub fn can_use_ability(&self, unit_id: &str, ability_id: &str) -> bool {
        let Some(unit) = self.state.unit(unit_id) else {
            return false;
        };
        if !unit.has_ability(ability_id) {
            return false;
        }
        self.abilities
            .ability(ability_id)
            .is_some_and(|ability| resolve::check_usable(&self.state, unit_id, ability).is_ok())
    }

    /// Stats of the unit with status and field deltas applied.
    pub fn effective_stats(&self, unit_id: &str) -> Option<Stats> {
        let unit = self.state.unit(unit_id)?;
        let status = self.state.status_of(unit_id)?;
        Some(combat::effective_stats(
            unit,
            status,
            &self.state.field_effects,
        ))
    }

    /// Sets up both rosters and starts round one.
    pub fn initialize_battle(
        &mut self,
        roster_a: Vec<CombatUnit>,
        roster_b: Vec<CombatUnit>,
    ) -> Result<(), BattleError> {
        let (state, mut env) = self.split();
        setup::initialize(state, &mut env, roster_a, roster_b)
    }

    /// Resolves one action.
    ///
    /// In-game failures (a fallen source, acting out of turn, a spent
    /// cooldown) are logged as `Rejected` events and reported through
    /// [`ActionOutcome::rejection`]; only host mistakes are errors.
    pub fn execute_action(&mut self, action: &BattleAction) -> Result<ActionOutcome, BattleError> {
        let (state, mut env) = self.split();
        resolve::execute(state, &mut env, action)
    }

    /// Ends the current unit's turn and moves to the next living unit.
    pub fn next_turn(&mut self) -> Result<(), BattleError> {
        self.ensure_active()?;
        let (state, mut env) = self.split();
        turns::advance(state, &mut env);
        Ok(())
    }

    /// Picks and resolves an action for the current opponent-side unit.
    pub fn execute_ai_turn(&mut self) -> Result<AiTurn, BattleError> {
        let unit_id = self.current_unit_id()?;
        if self.state.side_of(unit_id.as_str()) != Some(Side::Opponent) {
            return Err(BattleError::NotAiControlled(unit_id));
        }
        let (state, mut env) = self.split();
        let action = ai::choose_action(state, &mut env)?;
        let outcome = resolve::execute(state, &mut env, &action)?;
        Ok(AiTurn { action, outcome })
    }

    /// Runs the AI scorer for the current unit without resolving anything.
    ///
    /// Works for either side. Consumes randomness for the score jitter.
    pub fn suggest_action(&mut self) -> Result<BattleAction, BattleError> {
        self.ensure_active()?;
        let (state, mut env) = self.split();
        ai::choose_action(state, &mut env)
    }

    /// Basic attack by the current unit on the most attractive opponent; what
    /// a host submits when a player lets the turn time out.
    pub fn default_action(&self) -> Result<BattleAction, BattleError> {
        let unit_id = self.current_unit_id()?;
        let unit = self
            .state
            .unit(unit_id.as_str())
            .ok_or_else(|| BattleError::UnknownUnit(unit_id.clone()))?;
        let side = self
            .state
            .side_of(unit_id.as_str())
            .ok_or(BattleError::UnknownUnit(unit_id))?;
        Ok(ai::default_action(&self.state, unit, side))
    }

    fn current_unit_id(&self) -> Result<UnitId, BattleError> {
        self.ensure_active()?;
        self.state
            .current_unit_id()
            .cloned()
            .ok_or(BattleError::NoCurrentUnit)
    }

    fn ensure_active(&self) -> Result<(), BattleError> {
        ensure_active(&self.state)
    }

    fn split(&mut self) -> (&mut BattleState, BattleEnv<'_, O, R>) {
        (
            &mut self.state,
            BattleEnv {
                abilities: &self.abilities,
                rng: &mut self.rng,
                config: &self.config,
            },
        )
    }
}

pub(crate) fn ensure_active(state: &BattleState) -> Result<(), BattleError> {
    match state.status {
        BattleStatus::Preparing => Err(BattleError::NotInitialized),
        BattleStatus::Active => Ok(()),
        status @ (BattleStatus::Victory | BattleStatus::Defeat) => {
            Err(BattleError::BattleOver { status })
        }
    }
}
