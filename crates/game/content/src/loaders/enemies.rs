//! Enemy roster loader.

use std::path::Path;

use gauntlet_core::EnemyDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyDefinition>,
}

/// Loader for enemy definitions from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a RON enemy roster. Enemies with zero hp are rejected.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyDefinition>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        if let Some(enemy) = roster.enemies.iter().find(|enemy| enemy.hp == 0) {
            anyhow::bail!("Enemy {} ({}) has zero hp", enemy.id, enemy.name);
        }

        Ok(roster.enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::JobId;

    #[test]
    fn tags_and_icon_are_optional() {
        let enemies = EnemyLoader::parse(
            r#"(enemies: [
                (id: 7, name: "Bat", hp: 12, attack: 4, experience_reward: 5),
                (id: 8, name: "Golem", hp: 90, attack: 14, experience_reward: 60,
                 weaknesses: ["monk"], icon: Some("🗿")),
            ])"#,
        )
        .unwrap();

        assert_eq!(enemies[0].icon(), "👾");
        assert!(enemies[0].weaknesses.is_empty());
        assert!(enemies[1].weaknesses.contains(&JobId::from("monk")));
        assert_eq!(enemies[1].icon(), "🗿");
    }
}
