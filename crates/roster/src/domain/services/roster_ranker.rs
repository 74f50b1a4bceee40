// crates/roster/src/domain/services/roster_ranker.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::Result;

use crate::domain::entities::Member;
use crate::domain::models::RankedMember;
use crate::domain::services::BirthdayClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub sort_by_birthday: bool,
    pub upcoming_only: bool,
    pub window_days: u32,
}

impl RankingOptions {
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            sort_by_birthday: false,
            upcoming_only: false,
            window_days: Self::DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Filtre et trie le roster à partir des sorties de `BirthdayClock`.
/// Recalcule tout à chaque appel : le roster est petit et "now" change.
#[derive(Debug, Default, Clone, Copy)]
pub struct RosterRanker {
    clock: BirthdayClock,
}

impl RosterRanker {
    pub fn new(clock: BirthdayClock) -> Self {
        Self { clock }
    }

    pub fn rank(
        &self,
        members: Vec<Member>,
        now_utc: DateTime<Utc>,
        options: RankingOptions,
    ) -> Result<Vec<RankedMember>> {
        let mut ranked = members
            .into_iter()
            .map(|member| {
                let birthday = self.clock.compute_for(&member, now_utc)?;
                Ok(RankedMember::new(member, birthday))
            })
            .collect::<Result<Vec<_>>>()?;

        if options.upcoming_only {
            ranked.retain(|r| r.birthday.is_within(options.window_days));
        }

        // Tri stable ; l'id départage les ex aequo
        if options.sort_by_birthday {
            ranked.sort_by_key(|r| (r.birthday.days_until, *r.member.id()));
        }

        Ok(ranked)
    }

    /// Même classement, sans les anniversaires calculés
    pub fn rank_members(
        &self,
        members: Vec<Member>,
        now_utc: DateTime<Utc>,
        options: RankingOptions,
    ) -> Result<Vec<Member>> {
        Ok(self
            .rank(members, now_utc, options)?
            .into_iter()
            .map(|r| r.member)
            .collect())
    }
}
