/// Who a log line is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogCategory {
    Player,
    Enemy,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogEntry {
    pub message: String,
    pub category: LogCategory,
}

/// Append-only, user-facing battle feed. Cleared when an encounter starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    pub fn push(&mut self, category: LogCategory, message: impl Into<String>) {
        self.entries.push(BattleLogEntry {
            message: message.into(),
            category,
        });
    }

    pub fn player(&mut self, message: impl Into<String>) {
        self.push(LogCategory::Player, message);
    }

    pub fn enemy(&mut self, message: impl Into<String>) {
        self.push(LogCategory::Enemy, message);
    }

    pub fn system(&mut self, message: impl Into<String>) {
        self.push(LogCategory::System, message);
    }

    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    /// Entries appended after the first `from` ones.
    pub fn since(&self, from: usize) -> &[BattleLogEntry] {
        self.entries.get(from..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&BattleLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
