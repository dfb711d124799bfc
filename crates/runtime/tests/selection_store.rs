use gauntlet_core::{
    BattleConfig, CampaignState, Combatant, EnemyId, JobDefinition, JobId, JobSelection, Party,
};
use gauntlet_runtime::{
    CampaignSnapshot, FileSelectionStore, InMemorySelectionStore, RepositoryError, SelectionStore,
};
use tempfile::TempDir;

fn snapshot() -> CampaignSnapshot {
    let config = BattleConfig::default();
    let mut party = Party::new();
    party
        .push(Combatant::from_job(
            &JobDefinition::new("monk", "Monk", 90, 10, 18, 15),
            &config,
        ))
        .unwrap();

    let mut campaign = CampaignState::new();
    campaign.wins = 1;
    campaign.current_battle = 2;
    campaign.fought_enemies.insert(EnemyId(3));
    campaign.offered = vec![EnemyId(1), EnemyId(5)];

    CampaignSnapshot {
        game_seed: 99,
        party,
        campaign,
    }
}

#[test]
fn file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let selection = JobSelection::from_ids(["wizard", "rogue"].map(JobId::from));

    {
        let store = FileSelectionStore::new(dir.path()).unwrap();
        store.save_selection(&selection).unwrap();
        store.save_campaign(&snapshot()).unwrap();
    }

    let store = FileSelectionStore::new(dir.path()).unwrap();
    assert_eq!(store.load_selection().unwrap(), Some(selection));
    assert_eq!(store.load_campaign().unwrap(), Some(snapshot()));
    assert!(dir.path().join("selected_jobs.dat").exists());
    assert!(!dir.path().join("selected_jobs.dat.tmp").exists());
}

#[test]
fn clearing_campaign_keeps_selection() {
    let store = InMemorySelectionStore::new();
    let selection = JobSelection::from_ids([JobId::from("hero")]);
    store.save_selection(&selection).unwrap();
    store.save_campaign(&snapshot()).unwrap();

    store.clear_campaign().unwrap();

    assert_eq!(store.load_campaign().unwrap(), None);
    assert_eq!(store.load_selection().unwrap(), Some(selection));
}

#[test]
fn half_written_campaign_is_ignored() {
    let store = InMemorySelectionStore::new();
    store.save_campaign(&snapshot()).unwrap();
    store.remove("campaign_roster").unwrap();
    assert_eq!(store.load_campaign().unwrap(), None);
}

#[test]
fn corrupted_campaign_state_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = FileSelectionStore::new(dir.path()).unwrap();
    store.save_campaign(&snapshot()).unwrap();
    store.put("campaign_state", &[0xff, 0xff, 0xff]).unwrap();

    assert!(matches!(
        store.load_campaign(),
        Err(RepositoryError::CorruptedData(_))
    ));
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FileSelectionStore::new(dir.path()).unwrap();
    assert!(matches!(
        store.put("../escape", b"x"),
        Err(RepositoryError::InvalidKey(_))
    ));
}
