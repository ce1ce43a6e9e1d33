//! # Command line
//!
//! Arguments of the `sigcga` binary. Anything left out falls back to the
//! [`ExperimentConfig`] defaults.
//!
//! ```rust
//! use clap::Parser;
//! use sigcga::benchmarks::Problem;
//! use sigcga::cli::Cli;
//!
//! let cli = Cli::try_parse_from(["sigcga", "JumpK2", "-r", "3", "--sizes", "10,20"]).unwrap();
//! let config = cli.into_config().unwrap();
//! assert_eq!(config.get_problems(), &[Problem::JumpK2]);
//! assert_eq!(config.get_sizes(), &[10, 20]);
//! ```

use clap::Parser;

use crate::{benchmarks::Problem, error::Result, experiment::ExperimentConfig};

#[derive(Parser, Debug)]
#[command(name = "sigcga")]
#[command(about = "Compare the (1+1) EA, the cGA and the sig-cGA on benchmark problems")]
#[command(version)]
pub struct Cli {
    /// Run only this problem (OneMax, LeadingOnes, JumpK2, JumpK3)
    pub problem: Option<Problem>,

    /// Independent runs per configuration
    #[arg(short, long)]
    pub repetitions: Option<usize>,

    /// Problem sizes, comma separated
    #[arg(short = 'n', long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Seed of the first repetition
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Builds the experiment grid these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the resulting grid fails
    /// [`ExperimentConfig::validate`].
    pub fn into_config(self) -> Result<ExperimentConfig> {
        let mut builder = ExperimentConfig::builder();
        if let Some(problem) = self.problem {
            builder = builder.problems(vec![problem]);
        }
        if let Some(repetitions) = self.repetitions {
            builder = builder.repetitions(repetitions);
        }
        if let Some(sizes) = self.sizes {
            builder = builder.sizes(sizes);
        }
        if let Some(seed) = self.seed {
            builder = builder.base_seed(seed);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }
}
