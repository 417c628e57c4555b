use group_sum::config::Config;
use group_sum::{init_logging, top_n_sum_of};

pub fn main() -> anyhow::Result<()> {
    init_logging();

    let total = top_n_sum_of(&Config::default())?;
    println!("{}", total);

    Ok(())
}
