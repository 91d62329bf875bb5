use crate::error::ConnError;
use crate::percolation::Percolation;
use crate::util::timer::ConnTimer;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold: the fraction of sites that must be opened,
/// in uniformly random order, before the grid percolates.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    pub fn run<R: Rng + ?Sized>(
        grid_size: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self, ConnError> {
        if trials < 1 {
            return Err(ConnError::InvalidTrialCount(trials));
        }
        // Validates the grid size before any trial runs.
        let template = Percolation::new(grid_size)?;

        let timer = ConnTimer::now();
        let mut sites = (1..=grid_size)
            .flat_map(|row| (1..=grid_size).map(move |col| (row, col)))
            .collect::<Vec<_>>();
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            // Opening a shuffled list in order picks a uniformly random blocked site each step.
            sites.shuffle(rng);
            let mut percolation = template.clone();
            for &(row, col) in &sites {
                percolation.open(row, col)?;
                if percolation.percolates() {
                    break;
                }
            }
            #[allow(clippy::cast_precision_loss)]
            let threshold = percolation.number_of_open_sites() as f64 / sites.len() as f64;
            debug!("Trial {} percolated at threshold {:.6}", trial, threshold);
            thresholds.push(threshold);
        }

        let stats = Self { grid_size, thresholds };
        info!(
            "Ran {} trials on a {}x{} grid in {}: mean = {:.6}, stddev = {:.6}",
            trials,
            grid_size,
            grid_size,
            timer.elapsed(),
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. `NaN` for a single trial.
    #[allow(clippy::cast_precision_loss)]
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares = self.thresholds.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>();
        (squares / (self.thresholds.len() as f64 - 1.0)).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.confidence_half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.confidence_half_width()
    }

    #[allow(clippy::cast_precision_loss)]
    fn confidence_half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }
}
