//! Adders and routing circuits.

use vigil_common::Bit;
use vigil_golden::{
    Adder4In, Adder4Out, AdderOut, DemuxIn, DemuxOut, FullAdderIn, HalfAdderIn, MuxIn, MuxOut,
};

use super::gates::{decode, full_add, half_add, ripple_add};
use super::Circuit;

/// Half adder built from NAND gates.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfAdderCircuit;

impl Circuit for HalfAdderCircuit {
    type Input = HalfAdderIn;
    type Output = AdderOut;

    fn step(&mut self, input: &HalfAdderIn) -> AdderOut {
        let (sum, carry) = half_add(input.a, input.b);
        AdderOut { sum, carry }
    }
}

/// Full adder built from two half adders.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullAdderCircuit;

impl Circuit for FullAdderCircuit {
    type Input = FullAdderIn;
    type Output = AdderOut;

    fn step(&mut self, input: &FullAdderIn) -> AdderOut {
        let (sum, carry) = full_add(input.a, input.b, input.cin);
        AdderOut { sum, carry }
    }
}

/// Four full adders in a ripple-carry chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adder4Circuit;

impl Circuit for Adder4Circuit {
    type Input = Adder4In;
    type Output = Adder4Out;

    fn step(&mut self, input: &Adder4In) -> Adder4Out {
        let (sum, carry) = ripple_add(u64::from(input.a), u64::from(input.b), Bit::Zero, 4);
        Adder4Out {
            // Four sum bits.
            sum: sum as u8,
            carry,
        }
    }
}

/// AND-OR multiplexer gated by a one-hot decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct MuxCircuit;

impl Circuit for MuxCircuit {
    type Input = MuxIn;
    type Output = MuxOut;

    fn step(&mut self, input: &MuxIn) -> MuxOut {
        let y = decode(input.sel)
            .into_iter()
            .zip(input.x)
            .fold(Bit::Zero, |acc, (line, x)| acc | (line & x));
        MuxOut { y }
    }
}

/// Demultiplexer: the data bit ANDed onto each decoder line.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemuxCircuit;

impl Circuit for DemuxCircuit {
    type Input = DemuxIn;
    type Output = DemuxOut;

    fn step(&mut self, input: &DemuxIn) -> DemuxOut {
        DemuxOut {
            y: decode(input.sel).map(|line| line & input.x),
        }
    }
}
