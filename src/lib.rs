pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod history;
pub mod oracle;
pub mod render;
pub mod session;
pub mod spinner;
pub mod store;
pub mod validator;
