use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::record::Record;
use crate::{SeededRng, SEED};

/// How many records go by between progress events.
pub const PROGRESS_EVERY: u64 = 10_000_000;

/// Outcome of one run. `failed` counts write calls that returned an error,
/// including the final flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: u64,
    pub failed: u64,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

pub struct Generator {
    rng: SeededRng,
    seed: u64,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator seeded with [`SEED`], so every run yields the same file.
    pub fn new() -> Self {
        Self::with_seed(SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SeededRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Creates or truncates `path` and fills it with `count` records.
    ///
    /// Only failing to open the file is an error. Failed writes are logged,
    /// counted in the returned [`Summary`] and otherwise skipped. Lines go
    /// straight to the file so a failure is pinned to the record it lost.
    pub fn generate(&mut self, count: u64, path: impl AsRef<Path>) -> Result<Summary> {
        let path = path.as_ref();
        debug!(count, path = %path.display(), seed = self.seed, "generating");

        let mut file = File::create(path)
            .with_context(|| format!("opening {} for writing", path.display()))?;
        let summary = self.write_records(count, &mut file);

        debug!(written = summary.written, failed = summary.failed, "done");
        Ok(summary)
    }

    /// Writes `count` records to `out`, one `write_all` per line, then
    /// flushes it. A record counts as written once its whole line was
    /// accepted by `out`.
    pub fn write_records<W: Write>(&mut self, count: u64, out: &mut W) -> Summary {
        let mut summary = Summary::default();
        let mut line = String::with_capacity(32);
        for i in 0..count {
            line.clear();
            Record::random(&mut self.rng).push_line(&mut line);
            match out.write_all(line.as_bytes()) {
                Ok(()) => summary.written += 1,
                Err(err) => {
                    error!(record = i, %err, "failed to write record");
                    summary.failed += 1;
                }
            }
            if (i + 1) % PROGRESS_EVERY == 0 {
                info!(records = i + 1, of = count, "progress");
            }
        }
        if let Err(err) = out.flush() {
            error!(%err, "failed to flush output");
            summary.failed += 1;
        }
        summary
    }
}
