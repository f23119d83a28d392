//! Regression Trainer - next-step temperature via normal equations
//!
//! Design rows are `[temp_t, hum_t, pres_t, wind_t, 1]` with target
//! `temp_{t+1}`; beta = (X'X)^-1 X'y.

use crate::constants::MIN_REGRESSION_ROWS;
use crate::dataset::{group_by_city, Observation};
use crate::features::FEATURE_COUNT;
use crate::linalg::{self, Matrix};
use crate::model::{RegressionModel, RegressionParams};

/// Design width: four features plus the intercept column
const DESIGN_WIDTH: usize = FEATURE_COUNT + 1;

/// Accumulated X'X and X'y
#[derive(Debug, Clone)]
struct NormalEquations {
    xtx: Matrix<DESIGN_WIDTH>,
    xty: [f64; DESIGN_WIDTH],
    rows: usize,
}

impl NormalEquations {
    fn new() -> Self {
        Self {
            xtx: [[0.0; DESIGN_WIDTH]; DESIGN_WIDTH],
            xty: [0.0; DESIGN_WIDTH],
            rows: 0,
        }
    }

    fn add_row(&mut self, x: &[f64; DESIGN_WIDTH], y: f64) {
        for r in 0..DESIGN_WIDTH {
            self.xty[r] += x[r] * y;
            for c in 0..DESIGN_WIDTH {
                self.xtx[r][c] += x[r] * x[c];
            }
        }
        self.rows += 1;
    }

    fn solve(&self) -> Option<[f64; DESIGN_WIDTH]> {
        let inv = linalg::invert(&self.xtx)?;
        Some(linalg::mat_vec(&inv, &self.xty))
    }
}

fn design_row(obs: &Observation) -> [f64; DESIGN_WIDTH] {
    let [temp, hum, pres, wind] = obs.features.to_array();
    [temp, hum, pres, wind, 1.0]
}

/// Mean temperature; an empty slice gives 0.0
fn mean_temperature(points: &[Observation]) -> f64 {
    let sum: f64 = points.iter().map(Observation::temp).sum();
    sum / points.len().max(1) as f64
}

/// Train one city's model from its time-ordered observations
pub fn train_city(points: &[Observation]) -> RegressionModel {
    let mut eq = NormalEquations::new();
    for pair in points.windows(2) {
        eq.add_row(&design_row(&pair[0]), pair[1].temp());
    }

    if eq.rows < MIN_REGRESSION_ROWS {
        log::debug!("{} design rows < {}, using mean fallback", eq.rows, MIN_REGRESSION_ROWS);
        return RegressionModel::average(mean_temperature(points));
    }

    match eq.solve() {
        Some(beta) => {
            let [w0, w1, w2, w3, bias] = beta;
            RegressionModel::linear([w0, w1, w2, w3], bias)
        }
        None => {
            log::debug!("Singular X'X over {} rows, using mean fallback", eq.rows);
            RegressionModel::average(mean_temperature(points))
        }
    }
}

/// Train every city found in `observations` plus the built-in default entry
pub fn train_temperature(observations: &[Observation]) -> RegressionParams {
    let per_city = group_by_city(observations)
        .into_iter()
        .map(|(city, points)| {
            let model = train_city(&points);
            log::debug!("City '{}': {} points, method {:?}", city, points.len(), model.method);
            (city, model)
        })
        .collect();

    let params = RegressionParams::new(per_city);
    log::info!("Trained {} city models", params.city_count());
    params
}
