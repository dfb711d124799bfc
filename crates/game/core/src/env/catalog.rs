//! Job and enemy definitions and the catalog oracle interface.
//!
//! The catalog is immutable reference data, loaded once and never mutated by
//! the engine. Combatants and enemy instances copy what they need out of it.

use std::collections::BTreeSet;

use super::error::OracleError;

/// Identifier of a job class (e.g. `"wizard"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Identifier of an enemy definition. Catalog listings are ordered by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnemyId(pub u32);

impl core::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable definition of a playable job class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobDefinition {
    pub id: JobId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
}

impl JobDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hp: u32,
        attack: u32,
        defense: u32,
        magic: u32,
    ) -> Self {
        Self {
            id: JobId::new(id),
            name: name.into(),
            icon: String::new(),
            description: String::new(),
            hp,
            attack,
            defense,
            magic,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// The lone combatant used by training mode when no party is chosen.
    pub fn trainee() -> Self {
        Self::new("trainee", "Trainee", 100, 15, 0, 0).with_icon("🧑")
    }
}

/// Immutable definition of an enemy.
///
/// `name` doubles as the species key for table-based compatibility. The
/// weakness and resistance sets drive tag-based compatibility.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub experience_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weaknesses: BTreeSet<JobId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: BTreeSet<JobId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
}

impl EnemyDefinition {
    pub const FALLBACK_ICON: &'static str = "👾";

    pub fn new(id: u32, name: impl Into<String>, hp: u32, attack: u32, reward: u32) -> Self {
        Self {
            id: EnemyId(id),
            name: name.into(),
            hp,
            attack,
            experience_reward: reward,
            weaknesses: BTreeSet::new(),
            resistances: BTreeSet::new(),
            icon: None,
        }
    }

    pub fn with_weakness(mut self, job: impl Into<String>) -> Self {
        self.weaknesses.insert(JobId::new(job));
        self
    }

    pub fn with_resistance(mut self, job: impl Into<String>) -> Self {
        self.resistances.insert(JobId::new(job));
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Species key used by table-based compatibility.
    pub fn species(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(Self::FALLBACK_ICON)
    }
}

/// Read-only provider of job and enemy definitions.
pub trait CatalogOracle: Send + Sync {
    /// All jobs in catalog order.
    fn list_jobs(&self) -> &[JobDefinition];

    /// All enemies ordered by id ascending.
    fn list_enemies(&self) -> &[EnemyDefinition];

    fn job(&self, id: &JobId) -> Option<&JobDefinition> {
        self.list_jobs().iter().find(|job| &job.id == id)
    }

    fn enemy(&self, id: EnemyId) -> Option<&EnemyDefinition> {
        self.list_enemies().iter().find(|enemy| enemy.id == id)
    }
}

/// Vector-backed catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticCatalog {
    jobs: Vec<JobDefinition>,
    enemies: Vec<EnemyDefinition>,
}

impl StaticCatalog {
    /// Builds a catalog, sorting enemies by id.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DuplicateJob` / `DuplicateEnemy` when an id
    /// appears twice.
    pub fn new(
        jobs: Vec<JobDefinition>,
        mut enemies: Vec<EnemyDefinition>,
    ) -> Result<Self, OracleError> {
        let mut seen = BTreeSet::new();
        for job in &jobs {
            if !seen.insert(job.id.clone()) {
                return Err(OracleError::DuplicateJob(job.id.clone()));
            }
        }

        enemies.sort_by_key(|enemy| enemy.id);
        if let Some(pair) = enemies.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(OracleError::DuplicateEnemy(pair[0].id));
        }

        Ok(Self { jobs, enemies })
    }
}

impl CatalogOracle for StaticCatalog {
    fn list_jobs(&self) -> &[JobDefinition] {
        &self.jobs
    }

    fn list_enemies(&self) -> &[EnemyDefinition] {
        &self.enemies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemies_are_listed_by_id() {
        let catalog = StaticCatalog::new(
            vec![],
            vec![
                EnemyDefinition::new(3, "Orc", 60, 12, 50),
                EnemyDefinition::new(1, "Slime", 20, 4, 10),
            ],
        )
        .unwrap();

        let ids: Vec<_> = catalog.list_enemies().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(catalog.enemy(EnemyId(3)).unwrap().name, "Orc");
        assert!(catalog.enemy(EnemyId(2)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let jobs = vec![
            JobDefinition::new("hero", "Hero", 100, 20, 12, 8),
            JobDefinition::new("hero", "Hero II", 90, 10, 10, 10),
        ];
        assert_eq!(
            StaticCatalog::new(jobs, vec![]),
            Err(OracleError::DuplicateJob(JobId::from("hero")))
        );

        let enemies = vec![
            EnemyDefinition::new(1, "Slime", 20, 4, 10),
            EnemyDefinition::new(1, "Goblin", 30, 6, 20),
        ];
        assert_eq!(
            StaticCatalog::new(vec![], enemies),
            Err(OracleError::DuplicateEnemy(EnemyId(1)))
        );
    }

    #[test]
    fn unknown_icon_falls_back() {
        let enemy = EnemyDefinition::new(9, "Mimic", 40, 9, 30);
        assert_eq!(enemy.icon(), EnemyDefinition::FALLBACK_ICON);
    }
}
