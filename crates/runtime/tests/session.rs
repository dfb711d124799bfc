use gauntlet_core::{
    AttackStyle, BattleConfig, BattlePhase, CampaignError, CampaignStatus, CatalogOracle,
    EnemyId, JobId,
};
use gauntlet_runtime::{
    Event, FileSelectionStore, InMemorySelectionStore, RuntimeConfig, RuntimeError,
    SelectionStore, Session, SessionEvent, Topic,
};
use tempfile::TempDir;

fn config(seed: u64) -> RuntimeConfig {
    RuntimeConfig {
        game_seed: Some(seed),
        ..RuntimeConfig::default()
    }
}

fn session(seed: u64) -> Session {
    Session::builder().config(config(seed)).build().unwrap()
}

/// Attacks with the active member until the encounter ends.
fn fight(session: &mut Session) {
    for _ in 0..200 {
        match session.campaign().battle().phase {
            BattlePhase::PlayerTurn => {
                session.attack(AttackStyle::Physical).unwrap();
            }
            BattlePhase::EnemyTurn => {
                session.resolve_enemy_turn().unwrap();
            }
            _ => return,
        }
    }
    panic!("encounter did not finish");
}

#[test]
fn starting_without_selection_is_rejected() {
    let mut session = session(1);
    let mut events = session.events().subscribe(Topic::Session);

    let err = session.start_campaign().unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Party(gauntlet_core::PartyError::NoSelection)
    ));
    assert!(err.is_rejection());
    assert!(matches!(
        events.try_recv(),
        Ok(Event::Session(SessionEvent::ActionRejected { .. }))
    ));
}

#[test]
fn selection_is_persisted_and_restored() {
    let dir = TempDir::new().unwrap();
    let runtime = RuntimeConfig {
        save_dir: Some(dir.path().to_path_buf()),
        ..config(3)
    };

    {
        let mut session = Session::builder().config(runtime.clone()).build().unwrap();
        session.toggle_job(JobId::from("hero")).unwrap();
        session.toggle_job(JobId::from("monk")).unwrap();
    }

    let session = Session::builder().config(runtime).build().unwrap();
    assert_eq!(
        session.selection().ids(),
        ["hero", "monk"].map(JobId::from)
    );
}

#[test]
fn campaign_runs_to_completion() {
    let mut session = session(2024);
    session.toggle_job(JobId::from("hero")).unwrap();
    session.toggle_job(JobId::from("warrior")).unwrap();
    session.toggle_job(JobId::from("monk")).unwrap();

    let offered = session.start_campaign().unwrap();
    assert_eq!(offered.len(), 2);

    for _ in 0..5 {
        if session.campaign().status().is_over() {
            break;
        }
        let enemy = session.campaign().offered()[0];
        session.begin_encounter(enemy).unwrap();
        fight(&mut session);
    }

    let summary = session.campaign().summary().expect("run should be over");
    assert_eq!(summary.battles_fought, summary.wins + summary.losses);
    match summary.status {
        CampaignStatus::Cleared => assert_eq!(summary.wins, 3),
        CampaignStatus::GameOver => assert!(summary.wins < 3),
        other => panic!("unexpected status {other}"),
    }
}

#[test]
fn offers_never_repeat_a_fought_enemy() {
    let mut session = session(77);
    session.toggle_job(JobId::from("hero")).unwrap();
    session.start_campaign().unwrap();

    let first = session.campaign().offered()[0];
    session.begin_encounter(first).unwrap();
    session.flee().unwrap();

    assert_eq!(session.campaign().campaign().unwrap().losses, 1);
    assert!(!session.campaign().offered().contains(&first));
    assert_eq!(
        session.begin_encounter(first).unwrap_err().to_string(),
        CampaignError::EnemyAlreadyFought(first).to_string()
    );
}

#[test]
fn rejected_action_leaves_state_untouched() {
    let mut session = session(5);
    session.toggle_job(JobId::from("wizard")).unwrap();
    session.start_campaign().unwrap();
    let enemy = session.campaign().offered()[0];
    session.begin_encounter(enemy).unwrap();

    let before = session.campaign().battle().clone();
    let err = session.heal().unwrap_err();

    assert_eq!(err.error_code(), "ACTION_ALREADY_FULL_HP");
    assert_eq!(session.campaign().battle(), &before);
}

#[test]
fn saved_campaign_resumes_in_new_session() {
    let store = std::sync::Arc::new(InMemorySelectionStore::new());

    let mut first = Session::builder()
        .config(config(8))
        .shared_store(store.clone())
        .build()
        .unwrap();
    first.toggle_job(JobId::from("rogue")).unwrap();
    first.start_campaign().unwrap();
    let offered = first.campaign().offered().to_vec();

    let mut second = Session::builder()
        .config(config(8))
        .shared_store(store.clone())
        .build()
        .unwrap();
    assert!(second.resume_campaign().unwrap());
    assert_eq!(second.campaign().offered(), offered.as_slice());
    assert_eq!(second.campaign().status(), CampaignStatus::InProgress);

    second.reset_campaign().unwrap();
    assert_eq!(store.load_campaign().unwrap(), None);
}

#[test]
fn training_restores_trainee_after_defeat() {
    let mut runtime = config(9);
    let mut battle = BattleConfig::default();
    battle.minimum_enemy_damage = 1_000;
    runtime.battle = Some(battle);
    let mut session = Session::builder().config(runtime).build().unwrap();

    let dragon = session
        .oracles()
        .catalog()
        .list_enemies()
        .iter()
        .find(|enemy| enemy.name == "Dragon")
        .map(|enemy| enemy.id)
        .unwrap();

    session.train(dragon).unwrap();
    session
        .train_act(&gauntlet_core::BattleAction::attack(AttackStyle::Physical))
        .unwrap();
    session
        .train_act(&gauntlet_core::BattleAction::enemy_turn())
        .unwrap();

    let battle = session.training().battle();
    assert_eq!(battle.phase, BattlePhase::Defeat);
    assert!(battle.party.members()[0].is_full_hp());
    assert_eq!(session.training().record().defeats, 1);

    session.reset_training();
    assert_eq!(session.training().record().defeats, 0);
    assert_eq!(session.training().battle().phase, BattlePhase::AwaitingEnemySelection);
}

#[test]
fn training_party_comes_from_selection() {
    let mut session = session(12);
    session.toggle_job(JobId::from("wizard")).unwrap();
    session.toggle_job(JobId::from("monk")).unwrap();

    session.train_with_selection().unwrap();

    let members = session.training().battle().party.job_ids();
    assert_eq!(members, ["wizard", "monk"].map(JobId::from));
}

#[test]
fn training_against_unknown_enemy_fails() {
    let mut session = session(10);
    assert!(matches!(
        session.train(EnemyId(404)),
        Err(RuntimeError::UnknownEnemy(EnemyId(404)))
    ));
}

#[test]
fn started_campaign_is_saved_to_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileSelectionStore::new(dir.path()).unwrap();
    let mut session = Session::builder()
        .config(config(11))
        .store(store)
        .build()
        .unwrap();
    session.toggle_job(JobId::from("warrior")).unwrap();
    session.start_campaign().unwrap();

    let reopened = FileSelectionStore::new(dir.path()).unwrap();
    assert!(reopened.load_campaign().unwrap().is_some());
}
