pub mod alexa;
pub mod skill;
pub mod speech;
