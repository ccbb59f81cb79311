//! Resource paths.
//!
//! Identifiers are spliced in verbatim. No percent-encoding is
//! performed, so callers must supply URL-safe table and mode names.

pub const RANKING_TABLES: &'static str = "/ranking";

pub fn ranking_table(table: &str) -> String {
  format!("{RANKING_TABLES}/{table}")
}

pub fn game_modes(table: &str) -> String {
  format!("{}/mode", ranking_table(table))
}

pub fn game_mode(table: &str, mode: &str) -> String {
  format!("{}/{mode}", game_modes(table))
}

pub fn ranking(table: &str, mode: &str) -> String {
  format!("{}/ranking", game_mode(table, mode))
}

pub fn my_rank(table: &str, mode: &str) -> String {
  format!("{}/rank", ranking(table, mode))
}

pub fn estimate_rank(table: &str, mode: &str) -> String {
  format!("{}/estimate", ranking(table, mode))
}
