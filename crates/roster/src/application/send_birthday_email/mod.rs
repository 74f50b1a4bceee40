mod send_birthday_email_command;
mod send_birthday_email_use_case;

pub use send_birthday_email_command::SendBirthdayEmailCommand;
pub use send_birthday_email_use_case::SendBirthdayEmailUseCase;

#[cfg(test)]
mod send_birthday_email_use_case_test;
