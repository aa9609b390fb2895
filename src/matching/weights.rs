/// Aggregation weights for the overall score. Skills dominate, semantic
/// overlap second, then experience; format and keyword density round it out.
/// Readability is reported in the breakdown but not aggregated.
pub const AGGREGATE_WEIGHTS: Weights = Weights {
    semantic: 0.25,
    skills: 0.35,
    experience: 0.20,
    format: 0.10,
    keyword_density: 0.10,
};

/// 集計ウェイト（合計1.0はテストで担保）
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub semantic: f64,
    pub skills: f64,
    pub experience: f64,
    pub format: f64,
    pub keyword_density: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.semantic + self.skills + self.experience + self.format + self.keyword_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((AGGREGATE_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
