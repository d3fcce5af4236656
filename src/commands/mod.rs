pub mod generate;
pub mod skin_processor;
pub mod validator;
