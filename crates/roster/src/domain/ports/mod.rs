mod email_transport;
mod message_generator;

pub use email_transport::EmailTransport;
pub use message_generator::MessageGenerator;

#[cfg(test)]
mod email_transport_stub;
#[cfg(test)]
mod message_generator_stub;

#[cfg(test)]
pub use email_transport_stub::EmailTransportStub;
#[cfg(test)]
pub use message_generator_stub::MessageGeneratorStub;
