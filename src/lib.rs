pub mod config;
pub mod error;
pub mod groups;
pub mod parser;
pub mod totals;

use crate::config::Config;
use crate::error::Error;
use crate::groups::split_groups;
use crate::parser::read_input;

/// Logs go to stderr so stdout only ever carries the answer. `RUST_LOG` overrides the level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

pub fn max_group_sum_in(text: &str) -> Result<i64, Error> {
    totals::max_group_sum(&split_groups(text))
}

pub fn top_n_sum_in(text: &str, n: usize) -> Result<i64, Error> {
    totals::top_n_sum(&split_groups(text), n)
}

pub fn max_group_sum_of(config: &Config) -> Result<i64, Error> {
    let text = read_input(config.input_path())?;
    let max = max_group_sum_in(&text)?;
    log::info!("largest group sum in {}: {}", config.input_path().display(), max);

    Ok(max)
}

pub fn top_n_sum_of(config: &Config) -> Result<i64, Error> {
    let text = read_input(config.input_path())?;
    let total = top_n_sum_in(&text, config.top())?;
    log::info!(
        "sum of the {} largest groups in {}: {}",
        config.top(),
        config.input_path().display(),
        total
    );

    Ok(total)
}
