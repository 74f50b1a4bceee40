mod hosted_model_generator;
mod template_generator;

pub use hosted_model_generator::{HostedModelConfig, HostedModelGenerator};
pub use template_generator::TemplateGenerator;
