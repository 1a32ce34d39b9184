use super::result::CompartmentLoad;
use crate::load_model::CompartmentConfig;

/// Running per-compartment tally used while stowing one load.
pub(super) struct CompartmentTally<'a> {
    compartments: &'a [CompartmentConfig],
    loads: Vec<f64>,
}

impl<'a> CompartmentTally<'a> {
    pub(super) fn new(compartments: &'a [CompartmentConfig]) -> Self {
        Self { compartments, loads: vec![0.0; compartments.len()] }
    }

    pub(super) fn config(&self, idx: usize) -> &'a CompartmentConfig { &self.compartments[idx] }

    pub(super) fn remaining(&self, idx: usize) -> f64 { self.compartments[idx].capacity_kg - self.loads[idx] }

    /// Picks the compartment with the most remaining capacity among those
    /// that can still take `weight_kg`. Ties go to the earlier compartment.
    ///
    /// Spreading instead of packing tightly keeps mass distributed over
    /// compartments with different arms.
    pub(super) fn select(&self, weight_kg: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for idx in 0..self.compartments.len() {
            let remaining = self.remaining(idx);
            if remaining < weight_kg {
                continue;
            }
            if best.is_none_or(|(_, r)| remaining > r) {
                best = Some((idx, remaining));
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub(super) fn add(&mut self, idx: usize, weight_kg: f64) { self.loads[idx] += weight_kg; }

    pub(super) fn into_loads(self) -> Vec<CompartmentLoad> {
        self.compartments
            .iter()
            .zip(self.loads)
            .map(|(c, load_kg)| CompartmentLoad { name: c.name.clone(), load_kg, capacity_kg: c.capacity_kg })
            .collect()
    }
}
