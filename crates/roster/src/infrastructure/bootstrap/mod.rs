mod message_generator_factory;

pub use message_generator_factory::build_message_generator;
