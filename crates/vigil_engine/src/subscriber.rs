//! Consumers of the observed-transaction stream.

use vigil_coverage::CoverageModel;

/// Receives every observed transaction, in observation order.
pub trait Subscriber<T> {
    /// Consumes one transaction.
    fn write(&mut self, item: &T);
}

impl<T> Subscriber<T> for CoverageModel<T> {
    fn write(&mut self, item: &T) {
        self.sample(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_coverage::Coverpoint;

    #[test]
    fn coverage_model_samples_on_write() {
        let mut model = CoverageModel::builder("v")
            .coverpoint(Coverpoint::new("v", |v: &u64| *v).bin_array("v", [0, 1]))
            .build()
            .unwrap();
        model.write(&1);
        model.write(&0);
        assert!(model.is_complete());
    }
}
