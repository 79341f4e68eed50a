//! Live hunt session data: wire types from the record store's public hunt
//! endpoints plus the derived statistics the renderer consumes.
//!
//! The hunt domain engine itself is external; this module only mirrors its
//! output shape and computes read-side aggregates (profit, average
//! multiplier, best entry, the "currently playing" selection rule). All
//! types are plain serde data and no methods mutate anything.

#[cfg(test)]
#[path = "hunt_test.rs"]
mod hunt_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a single hunt entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Bonus bought, not yet opened.
    Pending,
    /// Currently being opened on stream.
    Playing,
    /// Opened; result recorded.
    Completed,
}

/// One game in the hunt list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntEntry {
    pub id: Uuid,
    pub game_name: String,
    #[serde(default)]
    pub game_image: Option<String>,
    #[serde(default)]
    pub game_provider: Option<String>,
    /// Stake per spin when the bonus was bought.
    pub bet_size: f64,
    /// What the bonus cost to buy.
    pub cost: f64,
    /// Payout, once opened.
    #[serde(default)]
    pub result: Option<f64>,
    /// Payout divided by bet size, once opened.
    #[serde(default)]
    pub multiplier: Option<f64>,
    pub status: EntryStatus,
}

impl HuntEntry {
    /// Whether the recorded result beats the cost.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result.is_some_and(|r| r > self.cost)
    }
}

/// A hunt as served by the public session endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntSummary {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub total_cost: f64,
    pub total_won: f64,
    #[serde(default)]
    pub entries: Vec<HuntEntry>,
}

impl HuntSummary {
    /// Entries with a recorded outcome, in list order.
    #[must_use]
    pub fn completed(&self) -> Vec<&HuntEntry> {
        self.entries.iter().filter(|e| e.status == EntryStatus::Completed).collect()
    }

    /// Entries still waiting to be opened, in list order.
    #[must_use]
    pub fn pending(&self) -> Vec<&HuntEntry> {
        self.entries.iter().filter(|e| e.status == EntryStatus::Pending).collect()
    }

    /// Won minus cost.
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.total_won - self.total_cost
    }

    /// Mean multiplier over completed entries that have one; 0 when none.
    #[must_use]
    pub fn avg_multiplier(&self) -> f64 {
        let completed = self.completed();
        if completed.is_empty() {
            return 0.0;
        }
        let sum: f64 = completed.iter().filter_map(|e| e.multiplier).sum();
        #[allow(clippy::cast_precision_loss)]
        let n = completed.len() as f64;
        sum / n
    }

    /// The completed entry with the highest multiplier, if any.
    #[must_use]
    pub fn best_entry(&self) -> Option<&HuntEntry> {
        self.completed()
            .into_iter()
            .filter(|e| e.multiplier.is_some())
            .max_by(|a, b| {
                a.multiplier
                    .unwrap_or(0.0)
                    .partial_cmp(&b.multiplier.unwrap_or(0.0))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// The "currently playing" entry: an entry explicitly flagged as
    /// playing wins; otherwise the first entry with no recorded result;
    /// otherwise none.
    #[must_use]
    pub fn current_entry(&self) -> Option<&HuntEntry> {
        self.entries
            .iter()
            .find(|e| e.status == EntryStatus::Playing)
            .or_else(|| self.entries.iter().find(|e| e.result.is_none()))
    }
}

// =============================================================
// Enriched current-game detail
// =============================================================

/// Catalog metadata for the game being played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    #[serde(default)]
    pub rtp: Option<String>,
    #[serde(default)]
    pub volatility: Option<String>,
    #[serde(default)]
    pub max_win: Option<String>,
}

/// Personal bests at the specific stake currently in play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub best_win: f64,
    pub best_multi: f64,
    pub times_played: u32,
    pub avg_win: f64,
}

/// The acting user's historical figures for the game being played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub times_played: u32,
    pub biggest_win: f64,
    pub biggest_win_bet: f64,
    pub biggest_multiplier: f64,
    pub biggest_multi_bet: f64,
    pub avg_multiplier: f64,
    /// Bests keyed to the current stake, when the store has them.
    #[serde(default)]
    pub at_current_bet: Option<BetRecord>,
}

/// Enriched "currently playing" detail from the current-game endpoint:
/// entry fields plus catalog metadata and personal records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    pub game_name: String,
    #[serde(default)]
    pub game_image: Option<String>,
    #[serde(default)]
    pub game_provider: Option<String>,
    pub bet_size: f64,
    #[serde(default)]
    pub info: Option<GameInfo>,
    #[serde(default)]
    pub personal_record: Option<PersonalRecord>,
}

// =============================================================
// Formatting helpers
// =============================================================

/// Format a currency amount for widget display, e.g. `$1,234.50`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{grouped}", &digits[split..]);
        digits.truncate(split);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${digits}{grouped}.{frac:02}")
}

/// Format a multiplier for widget display, e.g. `152.3x`.
#[must_use]
pub fn format_multiplier(value: f64) -> String {
    format!("{value:.1}x")
}
