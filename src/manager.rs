use crate::binner::aggregate;
use crate::config::Config;
use crate::correlate::{LagCorrelation, crosscorrelate};
use crate::reader::{parse_canonical, read_trace_file};
use crate::report::write_report;
use anyhow::{Context, Result};
use std::{io::Write, num::NonZeroU64, path::Path};

/// Drives the analysis: reads both traces, bins them and cross-correlates
/// the resulting throughput series.
pub struct Manager {
    cfg: Config,
    bin_duration: NonZeroU64,
}

impl Manager {
    pub fn new(cfg: Config, bin_duration: &str) -> Result<Self> {
        let bin_duration = parse_canonical(bin_duration).context("invalid bin duration")?;
        let bin_duration =
            NonZeroU64::new(bin_duration).context("bin duration must be at least 1")?;

        Ok(Self { cfg, bin_duration })
    }

    pub fn max_lag(&self) -> usize {
        self.cfg.max_lag(self.bin_duration.get())
    }

    pub fn correlate_traces<P: AsRef<Path>>(
        &self,
        trace1: P,
        trace2: P,
    ) -> Result<Vec<LagCorrelation>> {
        let trace1 = trace1.as_ref();
        let trace2 = trace2.as_ref();

        let arrivals1 =
            read_trace_file(trace1).with_context(|| format!("failed to read {trace1:?}"))?;
        let arrivals2 =
            read_trace_file(trace2).with_context(|| format!("failed to read {trace2:?}"))?;

        let counts1 = aggregate(&arrivals1, self.bin_duration)
            .with_context(|| format!("failed to bin {trace1:?}"))?;
        let counts2 = aggregate(&arrivals2, self.bin_duration)
            .with_context(|| format!("failed to bin {trace2:?}"))?;
        log::info!(
            "binned {} + {} arrivals into {} + {} bins",
            arrivals1.len(),
            arrivals2.len(),
            counts1.len(),
            counts2.len()
        );

        let max_lag = self.max_lag();
        log::info!("correlating at lags -{max_lag}..={max_lag}");

        crosscorrelate(&counts1, &counts2, max_lag).context("failed to cross-correlate traces")
    }

    pub fn write_results<W: Write>(&self, writer: &mut W, corr: &[LagCorrelation]) -> Result<()> {
        write_report(writer, corr, self.bin_duration.get(), self.cfg.precision)
            .context("failed to write results")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }
}
