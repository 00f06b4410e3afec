pub mod common;

mod auth_scheme;
mod config_validation;
mod token_expiration;
mod transfer_defaults;
