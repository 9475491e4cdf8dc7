use tsp_duo_derive::New;

use crate::DistanceMatrix;

/// One salesman's assignment: an open index sequence starting at its start
/// point. `cost` includes the implicit closing edge back to the start.
#[derive(Clone, Debug, New, PartialEq)]
pub struct Route {
    pub order: Vec<usize>,
    pub cost: f64,
}

impl Route {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Edge-length breakdown over the closed cycle, logged in the same
    /// shape the solver's other metrics lines use. Spikes are edges longer
    /// than `threshold_factor` times the average edge.
    pub fn metrics(&self, matrix: &DistanceMatrix, threshold_factor: f64) -> RouteMetrics {
        let n = self.order.len();

        if n < 2 {
            log::info!("metrics: n={n} so there's nothing to report");
            return RouteMetrics::default();
        }

        let distances: Vec<f64> = (0..n)
            .map(|i| matrix.dist(self.order[i], self.order[(i + 1) % n]))
            .collect();
        let total: f64 = distances.iter().sum();
        let average = total / (n as f64);
        let threshold = average * threshold_factor;
        let spikes = distances.iter().filter(|d| **d > threshold).count();
        let longest = distances.iter().copied().fold(0.0_f64, f64::max);

        log::info!(
            "metrics: n={n} total={total:.2} longest={longest:.2} avg={average:.2} spike_threshold={threshold:.2} spikes={spikes}",
        );

        RouteMetrics {
            longest,
            spikes,
            total,
            average,
            threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, New, PartialEq)]
pub struct RouteMetrics {
    pub longest: f64,
    pub spikes: usize,
    pub total: f64,
    pub average: f64,
    pub threshold: f64,
}

/// Combined result of a two-salesman run.
#[derive(Clone, Debug, New, PartialEq)]
pub struct DuoSolution {
    pub first: Route,
    pub second: Route,
}

impl DuoSolution {
    pub fn total_cost(&self) -> f64 {
        self.first.cost + self.second.cost
    }
}
