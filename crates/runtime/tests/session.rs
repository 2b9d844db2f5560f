use battle_content::AbilityCatalog;
use battle_core::{
    BattleAction, BattleConfig, BattleEngine, BattleError, BattleEventKind, BattleStatus,
    CombatUnit, Element, ErrorSeverity, GameError, Side, Stats, UnitKind,
};
use battle_runtime::{BattleSession, SessionError};

fn unit(id: &str, element: Element, speed: u32) -> CombatUnit {
    CombatUnit::new(
        id,
        id.to_uppercase(),
        UnitKind::Primary,
        element,
        Stats::new(300, 30, 20, speed, 100, 0),
    )
}

fn session(seed: u64) -> BattleSession<AbilityCatalog> {
    let engine = BattleEngine::seeded(AbilityCatalog::standard(), seed)
        .with_config(BattleConfig::default().without_jitter());
    BattleSession::new(engine)
}

/// Player side acts first: hero (60) > sidekick (40) > rival (20).
fn started() -> BattleSession<AbilityCatalog> {
    let mut session = session(7);
    session
        .start(
            vec![unit("hero", Element::Surge, 60), unit("sidekick", Element::Metal, 40)],
            vec![unit("rival", Element::Toxic, 20)],
        )
        .unwrap();
    session
}

fn current_id(session: &BattleSession<AbilityCatalog>) -> String {
    session
        .current_unit()
        .map(|unit| unit.id.to_string())
        .unwrap_or_default()
}

#[test]
fn submitting_before_start_reports_not_initialized() {
    let mut session = session(1);
    let err = session
        .submit(BattleAction::attack("hero", None))
        .unwrap_err();
    assert_eq!(err, SessionError::Battle(BattleError::NotInitialized));
}

#[test]
fn fastest_player_unit_acts_first() {
    let session = started();
    assert_eq!(session.status(), BattleStatus::Active);
    assert_eq!(current_id(&session), "hero");
    assert!(session.is_player_turn());
    assert_eq!(session.current_side(), Some(Side::Player));
}

#[test]
fn only_the_current_unit_may_act() {
    let mut session = started();
    let err = session
        .submit(BattleAction::attack("sidekick", None))
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::NotYourTurn {
            expected: "hero".into(),
            provided: "sidekick".into(),
        }
    );
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "SESSION_NOT_YOUR_TURN");
    assert!(session.state().battle_log.iter().all(|e| e.kind != BattleEventKind::Attack));
}

#[test]
fn basic_attack_keeps_the_turn_pending_until_finished() {
    let mut session = started();
    let outcome = session
        .submit(BattleAction::attack("hero", Some("rival".into())))
        .unwrap();
    assert!(outcome.is_accepted());
    assert!(!outcome.turn_advanced);
    assert!(session.is_pending());
    assert_eq!(current_id(&session), "hero");

    let err = session
        .submit(BattleAction::attack("hero", None))
        .unwrap_err();
    assert_eq!(err, SessionError::TurnPending);
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);

    session.finish_turn().unwrap();
    assert!(!session.is_pending());
    assert_eq!(current_id(&session), "sidekick");

    // No-op without a pending turn.
    session.finish_turn().unwrap();
    assert_eq!(current_id(&session), "sidekick");
}

#[test]
fn opponent_units_are_never_driven_by_hand() {
    let mut session = started();
    session.pass_turn().unwrap();
    session.pass_turn().unwrap();
    assert_eq!(current_id(&session), "rival");
    assert!(!session.is_player_turn());

    let err = session
        .submit(BattleAction::attack("rival", None))
        .unwrap_err();
    assert_eq!(err, SessionError::AiControlled("rival".into()));

    let err = session.pass_turn().unwrap_err();
    assert_eq!(err.error_code(), "SESSION_AI_CONTROLLED");
}

#[test]
fn ai_turn_refuses_player_units() {
    let mut session = started();
    let err = session.run_ai_turn().unwrap_err();
    assert_eq!(err, SessionError::Battle(BattleError::NotAiControlled("hero".into())));
}

#[test]
fn ai_turn_attacks_and_hands_back_to_the_player() {
    let mut session = started();
    session.pass_turn().unwrap();
    session.pass_turn().unwrap();

    let turn = session.run_ai_turn().unwrap();
    assert!(turn.outcome.is_accepted());
    assert_eq!(turn.action.source_id.as_str(), "rival");

    session.finish_turn().unwrap();
    assert!(session.is_player_turn());
    assert_eq!(session.state().round, 2);
}

#[test]
fn timeout_submits_a_basic_attack_for_the_current_unit() {
    let mut session = started();
    let action = session.timeout_action().unwrap();
    assert_eq!(action.source_id.as_str(), "hero");
    assert_eq!(action.target_id.as_ref().map(|id| id.as_str()), Some("rival"));

    let before = session.state().status_of("rival").unwrap().current_hp;
    let outcome = session.submit_timeout().unwrap();
    assert!(outcome.is_accepted());
    let after = session.state().status_of("rival").unwrap().current_hp;
    assert!(after < before);
}

#[test]
fn drained_events_are_handed_out_once() {
    let mut session = started();
    let opening = session.drain_events().to_vec();
    assert!(!opening.is_empty());
    assert!(session.drain_events().is_empty());

    session
        .submit(BattleAction::attack("hero", Some("rival".into())))
        .unwrap();
    let fresh = session.drain_events();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].kind, BattleEventKind::Attack);
    assert!(fresh[0].timestamp > opening.last().unwrap().timestamp);
}

#[test]
fn suggestion_targets_the_opponent_side() {
    let mut session = started();
    let action = session.suggest_action().unwrap();
    assert_eq!(action.source_id.as_str(), "hero");
    assert_eq!(action.target_id.as_ref().map(|id| id.as_str()), Some("rival"));
}
