//! Gate-level building blocks shared by the behavioural circuits.

use vigil_common::Bit;

pub(crate) fn nand(a: Bit, b: Bit) -> Bit {
    !(a & b)
}

/// Four-NAND exclusive or.
pub(crate) fn xor(a: Bit, b: Bit) -> Bit {
    let n = nand(a, b);
    nand(nand(a, n), nand(b, n))
}

/// Returns `(sum, carry)`.
pub(crate) fn half_add(a: Bit, b: Bit) -> (Bit, Bit) {
    (xor(a, b), !nand(a, b))
}

/// Two half adders and an OR on the carries. Returns `(sum, carry)`.
pub(crate) fn full_add(a: Bit, b: Bit, cin: Bit) -> (Bit, Bit) {
    let (partial, c1) = half_add(a, b);
    let (sum, c2) = half_add(partial, cin);
    (sum, nand(!c1, !c2))
}

/// Chains `bits` full adders, LSB first. Returns `(sum, carry_out)`.
pub(crate) fn ripple_add(a: u64, b: u64, cin: Bit, bits: u32) -> (u64, Bit) {
    let mut carry = cin;
    let mut sum = 0;
    for i in 0..bits {
        let (s, c) = full_add(Bit::from_lsb(a >> i), Bit::from_lsb(b >> i), carry);
        sum |= s.as_u64() << i;
        carry = c;
    }
    (sum, carry)
}

/// 2-to-4 one-hot decoder. Every line is low when `sel` does not fit in two
/// bits.
pub(crate) fn decode(sel: u8) -> [Bit; 4] {
    let s0 = Bit::from_lsb(u64::from(sel));
    let s1 = Bit::from_lsb(u64::from(sel >> 1));
    let enable = Bit::from(sel >> 2 == 0);
    [!s1 & !s0, !s1 & s0, s1 & !s0, s1 & s0].map(|line| line & enable)
}
