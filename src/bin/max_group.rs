use group_sum::config::Config;
use group_sum::{init_logging, max_group_sum_of};

pub fn main() -> anyhow::Result<()> {
    init_logging();

    let max = max_group_sum_of(&Config::default())?;
    println!("{}", max);

    Ok(())
}
