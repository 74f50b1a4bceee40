mod register_member_command;
mod register_member_use_case;

pub use register_member_command::RegisterMemberCommand;
pub use register_member_use_case::RegisterMemberUseCase;
