pub mod script;
pub mod shell;
