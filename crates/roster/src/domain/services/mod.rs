mod birthday_clock;
mod explanation_builder;
mod roster_ranker;
mod timezone_resolver;

pub use birthday_clock::BirthdayClock;
pub use explanation_builder::{split_sentences, ExplanationBuilder};
pub use roster_ranker::{RankingOptions, RosterRanker};
pub use timezone_resolver::{CountryTimezone, TimeZoneResolver};
