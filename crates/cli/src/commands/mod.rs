//! CLI subcommands.

pub mod admin;
pub mod migrate;

use secrecy::SecretString;

/// Database URL from `HOMEFLAME_DATABASE_URL`, falling back to `DATABASE_URL`.
pub(crate) fn database_url() -> Option<SecretString> {
    dotenvy::dotenv().ok();

    std::env::var("HOMEFLAME_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
