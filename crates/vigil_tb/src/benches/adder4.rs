use rand::rngs::StdRng;
use rand::Rng;
use vigil_coverage::{CoverageError, CoverageModel, Coverpoint};
use vigil_engine::{Bench, BenchTxn};
use vigil_golden::{Adder4, Adder4In, Adder4Out};

type Item = BenchTxn<Adder4Bench>;

/// 4-bit adder: operand bands with a full cross, corner sums first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adder4Bench;

/// Bins one nibble operand: zero, low, mid, max and the 7/8 boundary.
fn operand(name: &'static str, sampler: fn(&Item) -> u64) -> Coverpoint<Item> {
    Coverpoint::new(name, sampler)
        .bin(format!("{name}_zero"), 0)
        .bin_array(&format!("{name}_low"), 1..=6)
        .bin_array(&format!("{name}_mid"), 9..=14)
        .bin(format!("{name}_max"), 15)
        .bin_array(&format!("{name}_boundary"), 7..=8)
}

impl Bench for Adder4Bench {
    type Model = Adder4;
    type Stimulus = Adder4In;

    fn name(&self) -> &str {
        "adder4"
    }

    fn model(&self) -> Adder4 {
        Adder4
    }

    fn coverage(&self) -> Result<CoverageModel<Item>, CoverageError> {
        CoverageModel::builder("adder4")
            .coverpoint(operand("a", |t| u64::from(t.input().a)))
            .coverpoint(operand("b", |t| u64::from(t.input().b)))
            .cross("cross_ab", &["a", "b"])
            .build()
    }

    fn directed(&self) -> Vec<Adder4In> {
        [(0, 0), (15, 0), (8, 7), (8, 8), (15, 15)]
            .into_iter()
            .map(|(a, b)| Adder4In { a, b })
            .collect()
    }

    fn randomize(&self, rng: &mut StdRng) -> Adder4In {
        Adder4In {
            a: rng.gen_range(0..16),
            b: rng.gen_range(0..16),
        }
    }

    fn bind(&self, stimulus: &Adder4In, _previous: Option<&Adder4Out>) -> Adder4In {
        *stimulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nibble_value_lands_in_a_bin() {
        let model = Adder4Bench.coverage().unwrap();
        let a = &model.coverpoints()[0];
        assert_eq!(a.bins().len(), 16);
        assert_eq!(model.total_bins(), 16 + 16 + 256);
    }
}
