//! In-memory command usage counters.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use dashmap::DashMap;
use overbot_common::GuildId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts commands overall and per guild per day.
#[derive(Debug, Default)]
pub struct UsageTracker {
    total: AtomicU64,
    guild_days: DashMap<(GuildId, NaiveDate), u64>,
}

impl UsageTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one command run, in `guild` when not in DMs.
    pub fn record(&self, guild: Option<GuildId>, at: DateTime<Utc>) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if let Some(guild) = guild {
            *self.guild_days.entry((guild, at.date_naive())).or_insert(0) += 1;
        }
    }

    /// Commands run since startup.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// The `limit` guilds with the most commands over the `days` days
    /// ending at `now`, busiest first.
    pub fn top_guilds(&self, now: DateTime<Utc>, days: i64, limit: usize) -> Vec<(GuildId, u64)> {
        let today = now.date_naive();
        let since = today - Duration::days(days.saturating_sub(1));

        let mut totals: HashMap<GuildId, u64> = HashMap::new();
        for entry in &self.guild_days {
            let (guild, day) = *entry.key();
            if day >= since && day <= today {
                *totals.entry(guild).or_insert(0) += *entry.value();
            }
        }

        let mut ranked: Vec<(GuildId, u64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Drops per-day counters older than `keep_days` days before `now`.
    pub fn prune(&self, now: DateTime<Utc>, keep_days: i64) {
        let cutoff = now.date_naive() - Duration::days(keep_days);
        self.guild_days.retain(|(_, day), _| *day >= cutoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_counts_dms_in_total_only() {
        let usage = UsageTracker::new();
        usage.record(None, day(1));
        usage.record(Some(GuildId(1)), day(1));
        usage.record(Some(GuildId(1)), day(1));

        assert_eq!(usage.total(), 3);
        assert_eq!(usage.top_guilds(day(1), 7, 5), vec![(GuildId(1), 2)]);
    }

    #[test]
    fn test_top_guilds_uses_last_seven_days() {
        let usage = UsageTracker::new();
        for _ in 0..5 {
            usage.record(Some(GuildId(1)), day(1));
        }
        usage.record(Some(GuildId(2)), day(8));
        usage.record(Some(GuildId(2)), day(14));
        usage.record(Some(GuildId(3)), day(14));

        let top = usage.top_guilds(day(14), 7, 5);
        assert_eq!(top, vec![(GuildId(2), 2), (GuildId(3), 1)]);
    }

    #[test]
    fn test_top_guilds_limit_and_tie_order() {
        let usage = UsageTracker::new();
        for guild in [5, 3, 4] {
            usage.record(Some(GuildId(guild)), day(2));
        }
        let top = usage.top_guilds(day(2), 7, 2);
        assert_eq!(top, vec![(GuildId(3), 1), (GuildId(4), 1)]);
    }

    #[test]
    fn test_prune_keeps_recent_days() {
        let usage = UsageTracker::new();
        usage.record(Some(GuildId(1)), day(1));
        usage.record(Some(GuildId(1)), day(10));
        usage.prune(day(10), 7);

        assert_eq!(usage.top_guilds(day(10), 30, 5), vec![(GuildId(1), 1)]);
        assert_eq!(usage.total(), 2);
    }
}
