pub mod generate_birthday_message;
pub mod get_member;
pub mod list_members;
pub mod register_member;
pub mod send_birthday_email;
