//! RuleTable: Intent → RuleSet lookup.
//!
//! Built-in rows are hardcoded in [`catalog`](crate::catalog); additive
//! overrides can be layered on from TOML config. Adding an intent means
//! adding a row, not touching control flow.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;
use wheel_core::config::RulesConfig;
use wheel_core::errors::ConfigError;
use wheel_core::Intent;

use crate::catalog::ROWS;
use crate::rule_set::RuleSet;

static STANDARD: LazyLock<RuleTable> = LazyLock::new(RuleTable::build_standard);

/// Immutable per-intent rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    sets: HashMap<Intent, RuleSet>,
}

impl RuleTable {
    /// The built-in table, built on first use and shared for the process lifetime.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    /// Built-in table with additive overrides applied.
    pub fn with_overrides(config: &RulesConfig) -> Result<RuleTable, ConfigError> {
        let resolved = config.resolved()?;
        let mut sets = Self::concrete_sets();

        for (intent, rule) in &resolved {
            if let Some(set) = sets.get_mut(intent) {
                set.merge(rule);
                debug!(%intent, "applied rule override");
            }
        }

        let mut surprise = Self::derive_surprise(&sets);
        for (_, rule) in resolved.iter().filter(|(i, _)| i.is_surprise()) {
            surprise.merge(rule);
            debug!(intent = %Intent::Surprise, "applied rule override");
        }
        sets.insert(Intent::Surprise, surprise);

        Ok(Self { sets })
    }

    /// Rules for `intent`. Every intent has a row, so this never fails.
    pub fn rules(&self, intent: Intent) -> &RuleSet {
        // `build_*` inserts all of Intent::ALL; the fallback is unreachable
        // but keeps the lookup total.
        self.sets.get(&intent).unwrap_or_else(|| empty_rules())
    }

    fn build_standard() -> RuleTable {
        let mut sets = Self::concrete_sets();
        let surprise = Self::derive_surprise(&sets);
        sets.insert(Intent::Surprise, surprise);
        Self { sets }
    }

    fn concrete_sets() -> HashMap<Intent, RuleSet> {
        ROWS.iter()
            .map(|row| (row.intent, RuleSet::from_row(row)))
            .collect()
    }

    /// Surprise: union of every concrete intent's positive matching, no
    /// keyword requirement, global vetoes only.
    fn derive_surprise(sets: &HashMap<Intent, RuleSet>) -> RuleSet {
        let mut surprise = RuleSet::global_vetoes();
        for intent in Intent::CONCRETE {
            if let Some(set) = sets.get(&intent) {
                surprise
                    .allowed_types
                    .extend(set.allowed_types.iter().cloned());
                surprise
                    .fallback_allowed_types
                    .extend(set.fallback_allowed_types.iter().cloned());
            }
        }
        // A type that some intent allows is a destination, even if another
        // intent only accepts it when widening.
        let allowed = surprise.allowed_types.clone();
        surprise.fallback_allowed_types.retain(|t| !allowed.contains(t));
        surprise
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn empty_rules() -> &'static RuleSet {
    static EMPTY: LazyLock<RuleSet> = LazyLock::new(RuleSet::global_vetoes);
    &EMPTY
}
