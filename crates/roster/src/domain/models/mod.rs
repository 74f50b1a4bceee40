mod birthday_result;
mod delivery;
mod generated_message;
mod generation_request;

pub use birthday_result::{BirthdayResult, RankedMember};
pub use delivery::{DeliveryResult, DeliveryStatus, OutgoingEmail};
pub use generated_message::{Explanation, GeneratedMessage, GenerationParameters};
pub use generation_request::GenerationRequest;
