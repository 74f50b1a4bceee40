mod birth_date;
mod city;
mod country;
mod language;
mod member_id;
pub(crate) mod person_name;
mod tone;
mod utc_offset;

pub use birth_date::BirthDate;
pub use city::City;
pub use country::Country;
pub use language::Language;
pub use member_id::MemberId;
pub use person_name::PersonName;
pub use tone::Tone;
pub use utc_offset::UtcOffset;

#[cfg(test)]
mod tests;
