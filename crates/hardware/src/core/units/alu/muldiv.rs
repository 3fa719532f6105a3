//! Multiply/divide unit.
//!
//! Produces new HI/LO values. Products are full 64-bit (HI = upper word,
//! LO = lower word). Division puts the quotient in LO and the remainder in
//! HI; a zero divisor leaves both unchanged. Signed `i32::MIN / -1` wraps.

use crate::core::pipeline::signals::MulDivOp;

/// HI/LO update produced by one operation. `None` leaves the register unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HiLoUpdate {
    /// New HI value.
    pub hi: Option<u32>,
    /// New LO value.
    pub lo: Option<u32>,
}

impl HiLoUpdate {
    const fn both(hi: u32, lo: u32) -> Self {
        Self {
            hi: Some(hi),
            lo: Some(lo),
        }
    }
}

/// Executes a multiply/divide unit operation on operands `a` (`rs`) and `b` (`rt`).
pub fn execute(op: MulDivOp, a: u32, b: u32) -> HiLoUpdate {
    match op {
        MulDivOp::Mult => {
            let p = (a as i32 as i64).wrapping_mul(b as i32 as i64) as u64;
            HiLoUpdate::both((p >> 32) as u32, p as u32)
        }
        MulDivOp::Multu => {
            let p = (a as u64) * (b as u64);
            HiLoUpdate::both((p >> 32) as u32, p as u32)
        }
        MulDivOp::Div => {
            if b == 0 {
                return HiLoUpdate::default();
            }
            let (n, d) = (a as i32, b as i32);
            HiLoUpdate::both(n.wrapping_rem(d) as u32, n.wrapping_div(d) as u32)
        }
        MulDivOp::Divu => {
            if b == 0 {
                return HiLoUpdate::default();
            }
            HiLoUpdate::both(a % b, a / b)
        }
        MulDivOp::Mthi => HiLoUpdate {
            hi: Some(a),
            lo: None,
        },
        MulDivOp::Mtlo => HiLoUpdate {
            hi: None,
            lo: Some(a),
        },
    }
}
