use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Analysis configuration parameters.
///
/// Optionally loaded from a TOML file; every missing field takes its
/// default value. See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Half-width of the lag window (milliseconds).
    pub lag_window: u64,

    /// Significant digits printed for each coefficient.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lag_window: 60_000,
            precision: 6,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.lag_window, 1..=86_400_000).context("invalid lag window")?;
        check_num(self.precision, 1..=17).context("invalid precision")?;
        Ok(())
    }

    /// Largest lag (in bins) covered by the lag window.
    pub fn max_lag(&self, bin_duration: u64) -> usize {
        (self.lag_window / bin_duration) as usize
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
