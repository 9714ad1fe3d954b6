//! Bounded discrete-log recovery.
//!
//! Balances are small relative to the subgroup order, so `b` is recovered
//! from `b*G` by a baby-step/giant-step scan capped at an explicit bound.
//! The bound is mandatory: the range circuits guarantee no honest balance
//! exceeds it, and an uncapped scan is a denial-of-service hazard.

use std::collections::HashMap;

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::Zero;

use crate::curve::{base_to_word, Point, PointProjective, ProtocolParams, Scalar};

/// Reusable baby-step table for discrete logs up to a configured bound.
///
/// Generation costs ~sqrt(bound) curve additions; lookups cost at most
/// ~sqrt(bound) additions. The table is immutable after generation and
/// safe to share across decodes.
pub struct BabyStepTable {
    steps: HashMap<[u8; 32], u32>,
    giant_step: PointProjective,
    stride: u64,
}

impl BabyStepTable {
    /// Build a table sized for logs in `[0, bound)`.
    pub fn generate(params: &ProtocolParams, bound: u64) -> Self {
        let stride = isqrt_ceil(bound.max(1));
        let generator = params.generator().into_group();

        let mut multiples = Vec::with_capacity(stride as usize);
        let mut acc = PointProjective::zero();
        for _ in 0..stride {
            multiples.push(acc);
            acc += generator;
        }
        let affine = PointProjective::normalize_batch(&multiples);

        let mut steps = HashMap::with_capacity(affine.len());
        for (j, point) in affine.iter().enumerate() {
            steps.insert(base_to_word(&point.y), j as u32);
        }

        Self {
            steps,
            giant_step: -(generator * Scalar::from(stride)),
            stride,
        }
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Find `i < bound` with `i*G == target`, or `None` when no such log
    /// exists within the bound. The scan never overruns `bound` even when
    /// the point equation would match at a larger log.
    pub fn discrete_log(&self, target: &Point, bound: u64) -> Option<u64> {
        if bound == 0 {
            return None;
        }
        let mut probe = target.into_group();
        let giant_max = (bound - 1) / self.stride;
        for giant in 0..=giant_max {
            let affine = probe.into_affine();
            if let Some(&baby) = self.steps.get(&base_to_word(&affine.y)) {
                // A y-match means probe = +/-(baby*G); the mirrored log sits
                // near the subgroup order, far past every scan cap, so the
                // first ascending hit is the log itself.
                let log = giant * self.stride + u64::from(baby);
                return (log < bound).then_some(log);
            }
            probe += self.giant_step;
        }
        None
    }
}

fn isqrt_ceil(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.saturating_mul(root) < n {
        root += 1;
    }
    while root > 1 && (root - 1).saturating_mul(root - 1) >= n {
        root -= 1;
    }
    root.max(1)
}
