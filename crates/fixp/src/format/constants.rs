//! Constant generation.
//!
//! Each format owns exactly one immutable [`ConstantTable`], computed from (m, n)
//! when the format is instantiated. It provides:
//! 1. **Scaling constants:** `ONE`, `HALF`, `EPSILON` and the storage bounds `MAX`/`MIN`.
//! 2. **Real constants:** π (with π/2, π/4, 2π), e, ln 2 and log2 e, scaled by 2^n.
//! 3. **CORDIC data:** The gain `K` and `min(n, 16)` entries of `atan(2^-i)`.
//!
//! Real constants are derived from 126-bit binary expansions held as `u128`, so
//! a format with up to 63 fractional bits is produced by a single shift of the
//! exact expansion (no double rounding through `f64`).

use super::Format;

/// Length cap of the CORDIC arctangent table (and the CORDIC iteration count).
pub const MAX_CORDIC_ITERATIONS: usize = 16;

/// Binary expansions `floor(c * 2^126)` of the real constants.
mod precise {
    /// Fractional bits of every expansion below.
    pub const FRAC_BITS: u32 = 126;

    /// π
    pub const PI: u128 = 0xc90f_daa2_2168_c234_c4c6_628b_80dc_1cd1;
    /// e
    pub const E: u128 = 0xadf8_5458_a2bb_4a9a_afdc_5620_273d_3cf1;
    /// CORDIC gain, the limit of ∏ cos(atan(2^-i)) ≈ 0.607252935008881.
    pub const CORDIC_GAIN: u128 = 0x26dd_3b6a_10d7_9699_fd7e_424a_f5ff_503a;
    /// ln 2
    pub const LN2: u128 = 0x2c5c_85fd_f473_de6a_f278_ece6_00fc_bdab;
    /// log2 e = 1 / ln 2
    pub const LOG2E: u128 = 0x5c55_1d94_ae0b_f85d_df43_ff68_348e_9f44;

    /// atan(2^-i) for i in 0..16.
    pub const ATAN: [u128; super::MAX_CORDIC_ITERATIONS] = [
        0x3243_f6a8_885a_308d_3131_98a2_e037_0734,
        0x1dac_6705_61bb_4f68_adfc_88bd_9787_51a0,
        0x0fad_bafc_9640_6eb1_56dc_79ef_5f7a_217e,
        0x07f5_6ea6_ab0b_db71_9644_bcc4_f9f4_4477,
        0x03fe_ab76_e59f_bd38_db2c_9e4b_7038_b835,
        0x01ff_d55b_ba97_624a_84ef_3aee_dbb5_18c4,
        0x00ff_faaa_dddb_94d5_bbe7_8c56_4015_f760,
        0x007f_ff55_56ee_ea5c_b403_11a8_fddf_3057,
        0x003f_ffea_aab7_776e_52ec_4abe_dadb_53df,
        0x001f_fffd_5555_bbbb_a972_9ab7_aac0_8947,
        0x000f_ffff_aaaa_addd_ddb9_4b96_8067_ef3a,
        0x0007_ffff_f555_556e_eeee_a5ca_5d89_5892,
        0x0003_ffff_feaa_aaab_7777_76e5_2e53_56f5,
        0x0001_ffff_ffd5_5555_5bbb_bbba_9729_72d0,
        0x0000_ffff_fffa_aaaa_aadd_dddd_db94_b94b,
        0x0000_7fff_ffff_5555_5556_eeee_eeea_5ca5,
    ];
}

/// Scales an expansion to `n` fractional bits, truncating toward zero.
const fn truncated(expansion: u128, n: u32) -> i128 {
    (expansion >> (precise::FRAC_BITS - n)) as i128
}

/// Scales an expansion to `n` fractional bits, rounding half up.
const fn rounded(expansion: u128, n: u32) -> i128 {
    let shift = precise::FRAC_BITS - n;
    (((expansion >> (shift - 1)) + 1) >> 1) as i128
}

/// Immutable per-format constants.
///
/// Values are kept at the `i128` working width; [`QFormat`](super::QFormat)
/// narrows them to the storage integer on access. A constant that does not
/// fit the storage (e.g. `ONE` in Q0.7) wraps, exactly as a cast would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTable {
    frac_bits: u32,
    one: i128,
    half: i128,
    max: i128,
    min: i128,
    pi: i128,
    e: i128,
    ln2: i128,
    log2e: i128,
    cordic_gain: i128,
    atan: [i128; MAX_CORDIC_ITERATIONS],
    iterations: usize,
}

impl ConstantTable {
    /// Computes the constant table for `format`.
    pub fn generate(format: &Format) -> Self {
        let n = format.n();
        let storage_bits = format.storage_bits();
        let iterations = (n as usize).min(MAX_CORDIC_ITERATIONS);

        let mut atan = [0i128; MAX_CORDIC_ITERATIONS];
        for (slot, &expansion) in atan.iter_mut().zip(precise::ATAN.iter()).take(iterations) {
            *slot = rounded(expansion, n);
        }

        Self {
            frac_bits: n,
            one: 1i128 << n,
            // No rounding bias exists without fractional bits.
            half: if n == 0 { 0 } else { 1i128 << (n - 1) },
            max: (1i128 << (storage_bits - 1)) - 1,
            min: -(1i128 << (storage_bits - 1)),
            pi: truncated(precise::PI, n),
            e: truncated(precise::E, n),
            ln2: truncated(precise::LN2, n),
            log2e: truncated(precise::LOG2E, n),
            cordic_gain: truncated(precise::CORDIC_GAIN, n),
            atan,
            iterations,
        }
    }

    /// Fractional bits the table was scaled for.
    pub const fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// `1 << n`
    pub const fn one(&self) -> i128 {
        self.one
    }

    /// `1 << (n - 1)`, or 0 when `n == 0`.
    pub const fn half(&self) -> i128 {
        self.half
    }

    /// `ONE - 1`: the fractional-bit mask.
    pub const fn frac_mask(&self) -> i128 {
        self.one - 1
    }

    /// Largest storage value.
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Smallest storage value.
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// π × 2^n, truncated.
    pub const fn pi(&self) -> i128 {
        self.pi
    }

    /// π/2 × 2^n, truncated.
    pub const fn pi_over_2(&self) -> i128 {
        truncated(precise::PI >> 1, self.frac_bits)
    }

    /// π/4 × 2^n, truncated.
    pub const fn pi_over_4(&self) -> i128 {
        truncated(precise::PI >> 2, self.frac_bits)
    }

    /// 2π × 2^n, truncated.
    pub const fn two_pi(&self) -> i128 {
        (precise::PI >> (precise::FRAC_BITS - self.frac_bits - 1)) as i128
    }

    /// e × 2^n, truncated.
    pub const fn e(&self) -> i128 {
        self.e
    }

    /// ln 2 × 2^n, truncated.
    pub const fn ln2(&self) -> i128 {
        self.ln2
    }

    /// log2 e × 2^n, truncated.
    pub const fn log2e(&self) -> i128 {
        self.log2e
    }

    /// CORDIC gain K × 2^n, truncated.
    pub const fn cordic_gain(&self) -> i128 {
        self.cordic_gain
    }

    /// Number of CORDIC iterations, `min(n, 16)`.
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// `round(atan(2^-i) × 2^n)` for each CORDIC iteration.
    pub fn atan_table(&self) -> &[i128] {
        &self.atan[..self.iterations]
    }
}
