mod log_email_transport;

pub use log_email_transport::LogEmailTransport;
