use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_TOP: usize = 3;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    input_path: PathBuf,
    top: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            top: DEFAULT_TOP,
        }
    }
}

impl Config {
    pub fn with_input_path<P>(self, path: P) -> Config
    where
        P: Into<PathBuf>,
    {
        Config {
            input_path: path.into(),
            ..self
        }
    }

    pub fn with_top(self, top: usize) -> Config {
        Config { top, ..self }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// How many of the largest groups `top_n_sum_of` adds up.
    pub fn top(&self) -> usize {
        self.top
    }
}
