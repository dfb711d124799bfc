//! Campaign controller: a run of encounters with a persistent party.
//!
//! The controller owns the [`BattleState`] for the whole run and drives each
//! encounter through the [`BattleEngine`]. When an encounter reaches a terminal
//! phase it records the result, restores the party to full hp and offers the
//! next enemies. Clearing or losing the run tears the campaign state down; a
//! new run needs [`CampaignController::reset`] first.

mod error;
mod summary;

pub use error::CampaignError;
pub use summary::{CampaignStatus, CampaignSummary, EncounterReport, OfferPreview};

use crate::action::{BattleAction, SYSTEM_ACTOR};
use crate::combat::AttackStyle;
use crate::compatibility::CompatibilityBand;
use crate::config::{BattleConfig, CampaignPolicy};
use crate::engine::{BattleEngine, ExecutionOutcome};
use crate::env::{BattleEnv, EnemyId, JobId, OracleError, RollContext, compute_seed};
use crate::state::{BattleOutcome, BattleState, CampaignState, Party};

/// Outcome of an in-encounter action routed through the campaign.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignStep {
    pub outcome: ExecutionOutcome,
    /// Present when this action ended the encounter.
    pub report: Option<EncounterReport>,
}

impl CampaignStep {
    pub fn ended_encounter(&self) -> bool {
        self.report.is_some()
    }
}

/// Drives a campaign run over a single persistent party.
#[derive(Clone, Debug, Default)]
pub struct CampaignController {
    battle: BattleState,
    campaign: Option<CampaignState>,
    status: CampaignStatus,
    summary: Option<CampaignSummary>,
}

impl CampaignController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a controller from a persisted campaign state.
    ///
    /// The offered enemies stored in `campaign` are kept as they are.
    pub fn resume(party: Party, game_seed: u64, campaign: CampaignState) -> Self {
        Self {
            battle: BattleState::with_seed(game_seed, party),
            campaign: Some(campaign),
            status: CampaignStatus::InProgress,
            summary: None,
        }
    }

    pub fn status(&self) -> CampaignStatus {
        self.status
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn party(&self) -> &Party {
        &self.battle.party
    }

    /// Bookkeeping of the run in progress.
    pub fn campaign(&self) -> Option<&CampaignState> {
        self.campaign.as_ref()
    }

    /// Summary of the last finished run, until the next reset.
    pub fn summary(&self) -> Option<&CampaignSummary> {
        self.summary.as_ref()
    }

    /// Enemies the player may pick for the next encounter.
    pub fn offered(&self) -> &[EnemyId] {
        self.campaign
            .as_ref()
            .map(|campaign| campaign.offered.as_slice())
            .unwrap_or_default()
    }

    /// Starts a run with `party` and offers the first enemies.
    ///
    /// # Errors
    ///
    /// - `AlreadyStarted` while a run is in progress
    /// - `CampaignOver` when the previous run has not been reset
    /// - `EmptyParty` for a party with no members
    /// - `NoEnemiesRemaining` when the catalog has no enemies
    pub fn start(
        &mut self,
        env: BattleEnv<'_>,
        party: Party,
        game_seed: u64,
    ) -> Result<&[EnemyId], CampaignError> {
        match self.status {
            CampaignStatus::InProgress => return Err(CampaignError::AlreadyStarted),
            CampaignStatus::Cleared | CampaignStatus::GameOver => {
                return Err(CampaignError::CampaignOver);
            }
            CampaignStatus::NotStarted => {}
        }
        if party.is_empty() {
            return Err(CampaignError::EmptyParty);
        }

        let battle = BattleState::with_seed(game_seed, party);
        let mut campaign = CampaignState::new();
        campaign.offered = offer_enemies(&env, &battle, &campaign)?;
        if campaign.offered.is_empty() {
            return Err(CampaignError::NoEnemiesRemaining);
        }

        self.battle = battle;
        self.campaign = Some(campaign);
        self.status = CampaignStatus::InProgress;
        self.summary = None;
        Ok(self.offered())
    }

    /// Discards the run and the party, returning to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Party compatibility against every offered enemy, counting only members
    /// still eligible to fight.
    pub fn preview_offers(&self, env: BattleEnv<'_>) -> Result<Vec<OfferPreview>, CampaignError> {
        let campaign = self.campaign.as_ref().ok_or(CampaignError::NotStarted)?;
        let catalog = env.catalog()?;
        let compatibility = env.compatibility()?;

        let jobs: Vec<JobId> = self
            .battle
            .party
            .job_ids()
            .into_iter()
            .filter(|job| !campaign.is_excluded(job))
            .collect();

        campaign
            .offered
            .iter()
            .map(|id| -> Result<OfferPreview, CampaignError> {
                let enemy = catalog
                    .enemy(*id)
                    .ok_or(OracleError::UnknownEnemy(*id))?;
                let party_score = compatibility.party_score(&jobs, enemy);
                Ok(OfferPreview {
                    enemy: enemy.id,
                    name: enemy.name.clone(),
                    icon: enemy.icon().to_owned(),
                    hp: enemy.hp,
                    attack: enemy.attack,
                    experience_reward: enemy.experience_reward,
                    party_score,
                    band: CompatibilityBand::from_score(party_score),
                })
            })
            .collect()
    }

    /// Binds one of the offered enemies and opens its first player turn.
    pub fn begin_encounter(
        &mut self,
        env: BattleEnv<'_>,
        enemy: EnemyId,
    ) -> Result<ExecutionOutcome, CampaignError> {
        let campaign = self.require_in_progress()?;
        if self.battle.phase.is_active() {
            return Err(CampaignError::AlreadyInEncounter);
        }
        if campaign.has_fought(enemy)
            && env
                .config()?
                .campaign_policy
                .contains(CampaignPolicy::EXCLUDE_FOUGHT_ENEMIES)
        {
            return Err(CampaignError::EnemyAlreadyFought(enemy));
        }
        if !campaign.offered.contains(&enemy) {
            return Err(CampaignError::NotOffered(enemy));
        }
        let definition = env
            .catalog()?
            .enemy(enemy)
            .ok_or(OracleError::UnknownEnemy(enemy))?
            .clone();

        self.battle.clear_encounter();
        let outcome = BattleEngine::new(&mut self.battle).select_enemy(env, &definition)?;
        Ok(outcome)
    }

    /// Routes any battle action through the campaign. `SelectEnemy` is
    /// treated as [`CampaignController::begin_encounter`].
    pub fn act(
        &mut self,
        env: BattleEnv<'_>,
        action: &BattleAction,
    ) -> Result<CampaignStep, CampaignError> {
        if let BattleAction::SelectEnemy(select) = action {
            let outcome = self.begin_encounter(env, select.enemy.id)?;
            return Ok(CampaignStep {
                outcome,
                report: None,
            });
        }

        self.require_in_progress()?;
        if !self.battle.phase.is_active() {
            return Err(CampaignError::NoActiveEncounter);
        }

        let outcome = BattleEngine::new(&mut self.battle).execute(env, action)?;
        let report = match self.battle.outcome() {
            Some(result) => Some(self.conclude(&env, result)?),
            None => None,
        };
        Ok(CampaignStep { outcome, report })
    }

    pub fn attack(
        &mut self,
        env: BattleEnv<'_>,
        style: AttackStyle,
    ) -> Result<CampaignStep, CampaignError> {
        self.act(env, &BattleAction::attack(style))
    }

    pub fn heal(&mut self, env: BattleEnv<'_>) -> Result<CampaignStep, CampaignError> {
        self.act(env, &BattleAction::heal())
    }

    pub fn switch_active(&mut self, env: BattleEnv<'_>) -> Result<CampaignStep, CampaignError> {
        self.act(env, &BattleAction::switch_active())
    }

    pub fn flee(&mut self, env: BattleEnv<'_>) -> Result<CampaignStep, CampaignError> {
        self.act(env, &BattleAction::flee())
    }

    pub fn resolve_enemy_turn(&mut self, env: BattleEnv<'_>) -> Result<CampaignStep, CampaignError> {
        self.act(env, &BattleAction::enemy_turn())
    }

    fn require_in_progress(&self) -> Result<&CampaignState, CampaignError> {
        match self.status {
            CampaignStatus::InProgress => self.campaign.as_ref().ok_or(CampaignError::NotStarted),
            CampaignStatus::NotStarted => Err(CampaignError::NotStarted),
            CampaignStatus::Cleared | CampaignStatus::GameOver => Err(CampaignError::CampaignOver),
        }
    }

    /// Records a finished encounter and prepares the next one.
    fn conclude(
        &mut self,
        env: &BattleEnv<'_>,
        outcome: BattleOutcome,
    ) -> Result<EncounterReport, CampaignError> {
        let config = env.config()?;
        let mut campaign = self.campaign.take().ok_or(CampaignError::NotStarted)?;
        let enemy = self
            .battle
            .enemy
            .as_ref()
            .map(|enemy| enemy.definition.id)
            .ok_or(CampaignError::NoActiveEncounter)?;

        campaign.fought_enemies.insert(enemy);
        if outcome.is_win() {
            campaign.wins += 1;
        } else {
            campaign.losses += 1;
        }

        if config
            .campaign_policy
            .contains(CampaignPolicy::EXCLUDE_DEFEATED_MEMBERS)
        {
            for member in self.battle.party.members() {
                if !member.is_alive() {
                    campaign.excluded_members.insert(member.job.clone());
                }
            }
        }
        for member in self.battle.party.members_mut() {
            if !campaign.excluded_members.contains(&member.job) {
                member.restore();
            }
        }

        let mut status = next_status(&campaign, &self.battle.party, config);
        if status == CampaignStatus::InProgress {
            campaign.current_battle += 1;
            campaign.offered = offer_enemies(env, &self.battle, &campaign)?;
            if campaign.offered.is_empty() {
                status = CampaignStatus::GameOver;
            }
        }

        let report = EncounterReport {
            enemy,
            outcome,
            wins: campaign.wins,
            losses: campaign.losses,
            status,
        };

        match status {
            CampaignStatus::Cleared => {
                self.battle
                    .log
                    .system("🎉 Adventure cleared! Congratulations!");
            }
            CampaignStatus::GameOver => {
                self.battle.log.system("💀 Game over... try again.");
            }
            _ => {}
        }

        self.status = status;
        if status.is_over() {
            self.summary = Some(CampaignSummary {
                status,
                wins: campaign.wins,
                losses: campaign.losses,
                battles_fought: campaign.battles_fought(),
                fought_enemies: campaign.fought_enemies.iter().copied().collect(),
                party: self.battle.party.members().to_vec(),
            });
        } else {
            self.campaign = Some(campaign);
        }
        Ok(report)
    }
}

fn next_status(campaign: &CampaignState, party: &Party, config: &BattleConfig) -> CampaignStatus {
    if campaign.wins >= config.required_wins {
        return CampaignStatus::Cleared;
    }
    if campaign.losses >= config.max_losses {
        return CampaignStatus::GameOver;
    }
    let eligible = party
        .members()
        .iter()
        .any(|member| !campaign.is_excluded(&member.job));
    if !eligible {
        return CampaignStatus::GameOver;
    }
    CampaignStatus::InProgress
}

/// Picks up to `enemies_offered` distinct enemies with a seeded Fisher-Yates
/// shuffle over the eligible pool.
fn offer_enemies(
    env: &BattleEnv<'_>,
    battle: &BattleState,
    campaign: &CampaignState,
) -> Result<Vec<EnemyId>, CampaignError> {
    let catalog = env.catalog()?;
    let rng = env.rng()?;
    let config = env.config()?;
    let exclude_fought = config
        .campaign_policy
        .contains(CampaignPolicy::EXCLUDE_FOUGHT_ENEMIES);

    let mut pool: Vec<EnemyId> = catalog
        .list_enemies()
        .iter()
        .map(|enemy| enemy.id)
        .filter(|id| !(exclude_fought && campaign.has_fought(*id)))
        .collect();

    let seed = compute_seed(
        battle.game_seed,
        battle.nonce,
        SYSTEM_ACTOR,
        RollContext::EnemyOffer,
    ) ^ u64::from(campaign.current_battle);
    for i in (1..pool.len()).rev() {
        let j = rng.pick_index(seed.wrapping_add(i as u64), i + 1);
        pool.swap(i, j);
    }
    pool.truncate(config.enemies_offered);
    Ok(pool)
}
