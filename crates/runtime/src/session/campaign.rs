use gauntlet_core::{
    AttackStyle, BattleAction, BattleEvent, CampaignController, CampaignError, CampaignStep,
    EnemyId, ExecutionOutcome, OfferPreview, Party,
};

use super::Session;
use crate::error::{Result, RuntimeError};
use crate::events::{CampaignEvent, Event};
use crate::repository::CampaignSnapshot;

/// Campaign operations for Session.
impl Session {
    pub fn campaign(&self) -> &CampaignController {
        &self.campaign
    }

    /// Starts a run with a party built from the current selection.
    pub fn start_campaign(&mut self) -> Result<Vec<EnemyId>> {
        let (party, _) = self
            .build_party()
            .map_err(|err| self.reject("start_campaign", err))?;

        let started = self
            .campaign
            .start(self.oracles.as_battle_env(), party, self.game_seed)
            .map(|offered| offered.to_vec());
        let offered = match started {
            Ok(offered) => offered,
            Err(err) => return Err(self.reject("start_campaign", err.into())),
        };

        tracing::info!(
            "Campaign started with {:?}; offered {:?}",
            self.campaign.party().job_ids(),
            offered
        );
        self.bus.publish(Event::Campaign(CampaignEvent::Started {
            party: self.campaign.party().job_ids(),
            game_seed: self.game_seed,
        }));
        self.publish_offers();
        self.persist_campaign()?;
        Ok(offered)
    }

    /// Restores a run saved in the selection store.
    ///
    /// Returns `false` when nothing was saved.
    pub fn resume_campaign(&mut self) -> Result<bool> {
        if self.campaign.status().is_over() {
            return Err(self.reject("resume_campaign", CampaignError::CampaignOver.into()));
        }
        if self.campaign.campaign().is_some() {
            return Err(self.reject("resume_campaign", CampaignError::AlreadyStarted.into()));
        }
        let Some(snapshot) = self.store.load_campaign()? else {
            return Ok(false);
        };

        tracing::info!(
            "Resuming campaign at battle {} ({} wins, {} losses)",
            snapshot.campaign.current_battle,
            snapshot.campaign.wins,
            snapshot.campaign.losses
        );
        self.bus.publish(Event::Campaign(CampaignEvent::Started {
            party: snapshot.party.job_ids(),
            game_seed: snapshot.game_seed,
        }));
        self.campaign =
            CampaignController::resume(snapshot.party, snapshot.game_seed, snapshot.campaign);
        self.publish_offers();
        Ok(true)
    }

    /// Discards the current run, finished or not, and its saved copy.
    pub fn reset_campaign(&mut self) -> Result<()> {
        self.campaign.reset();
        self.store.clear_campaign()?;
        tracing::info!("Campaign reset");
        Ok(())
    }

    /// Offered enemies with the party's compatibility against each.
    pub fn offers(&self) -> Result<Vec<OfferPreview>> {
        Ok(self.campaign.preview_offers(self.oracles.as_battle_env())?)
    }

    pub fn begin_encounter(&mut self, enemy: EnemyId) -> Result<ExecutionOutcome> {
        let result = self
            .campaign
            .begin_encounter(self.oracles.as_battle_env(), enemy);
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.reject("select_enemy", err.into())),
        };

        if let Some(enemy) = &self.campaign.battle().enemy {
            tracing::info!("Encounter started against {} ({} hp)", enemy.name(), enemy.hp());
        }
        self.publish_outcome(&outcome);
        Ok(outcome)
    }

    /// Executes a battle action in the current campaign encounter.
    pub fn act(&mut self, action: &BattleAction) -> Result<CampaignStep> {
        let name = action.as_snake_case();
        tracing::debug!("Executing {}", name);

        let result = self.campaign.act(self.oracles.as_battle_env(), action);
        let step = match result {
            Ok(step) => step,
            Err(err) => return Err(self.reject(name, err.into())),
        };

        self.publish_outcome(&step.outcome);
        log_level_ups(self.campaign.party(), &step.outcome);

        if let Some(report) = &step.report {
            tracing::info!(
                "Encounter ended in {} ({} wins, {} losses)",
                report.outcome,
                report.wins,
                report.losses
            );
            self.bus
                .publish(Event::Campaign(CampaignEvent::EncounterConcluded(report.clone())));

            if report.status.is_over() {
                if let Some(summary) = self.campaign.summary() {
                    tracing::info!("Campaign finished: {}", summary.status);
                    self.bus
                        .publish(Event::Campaign(CampaignEvent::Finished(summary.clone())));
                }
                self.store.clear_campaign()?;
            } else {
                self.publish_offers();
                self.persist_campaign()?;
            }
        }
        Ok(step)
    }

    pub fn attack(&mut self, style: AttackStyle) -> Result<CampaignStep> {
        self.act(&BattleAction::attack(style))
    }

    pub fn heal(&mut self) -> Result<CampaignStep> {
        self.act(&BattleAction::heal())
    }

    pub fn switch_active(&mut self) -> Result<CampaignStep> {
        self.act(&BattleAction::switch_active())
    }

    pub fn flee(&mut self) -> Result<CampaignStep> {
        self.act(&BattleAction::flee())
    }

    pub fn resolve_enemy_turn(&mut self) -> Result<CampaignStep> {
        self.act(&BattleAction::enemy_turn())
    }

    fn publish_offers(&self) {
        if let Some(campaign) = self.campaign.campaign() {
            self.bus.publish(Event::Campaign(CampaignEvent::EnemiesOffered {
                battle: campaign.current_battle,
                enemies: campaign.offered.clone(),
            }));
        }
    }

    fn persist_campaign(&self) -> Result<()> {
        let Some(campaign) = self.campaign.campaign() else {
            return Ok(());
        };
        let snapshot = CampaignSnapshot {
            game_seed: self.campaign.battle().game_seed,
            party: self.campaign.party().clone(),
            campaign: campaign.clone(),
        };
        self.store
            .save_campaign(&snapshot)
            .map_err(RuntimeError::from)
    }
}

pub(super) fn log_level_ups(party: &Party, outcome: &ExecutionOutcome) {
    for event in &outcome.events {
        if let BattleEvent::LevelUp { member, level } = event
            && let Some(combatant) = party.member(*member)
        {
            tracing::info!("{} reached level {}", combatant.name, level);
        }
    }
}
