mod generate_birthday_message_command;
mod generate_birthday_message_use_case;

pub use generate_birthday_message_command::GenerateBirthdayMessageCommand;
pub use generate_birthday_message_use_case::GenerateBirthdayMessageUseCase;
