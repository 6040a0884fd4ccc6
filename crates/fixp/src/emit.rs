//! Declaration emission.
//!
//! The boundary between the numeric core and whatever writes artifacts:
//! 1. **Declarations:** Everything a consumer needs to describe one format:
//!    layout, raw constants, the CORDIC table and the operation names.
//! 2. **Emitter:** The trait an artifact writer implements; [`JsonEmitter`]
//!    writes one JSON document per line and `Vec<Declarations>` collects in memory.
//! 3. **Generation:** [`generate`] validates every configured format and only
//!    then emits, so a too-wide format aborts the run before the first artifact.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::common::{EmitError, GenerateError, Storage};
use crate::config::GeneratorConfig;
use crate::format::{AnyQFormat, Format, QFormat};

/// Operations every format provides.
pub const ARITHMETIC_OPERATIONS: &[&str] = &[
    "add",
    "sub",
    "mul",
    "div",
    "from_real",
    "to_real",
    "abs",
    "min",
    "max",
    "clamp",
    "floor",
    "ceil",
    "round",
    "trunc",
    "neg",
    "add_sat",
    "sub_sat",
    "mul_sat",
    "neg_sat",
    "abs_sat",
    "from_int",
    "to_int",
    "from_real_sat",
    "mul_int",
    "div_int",
    "shl",
    "shr",
    "to_int_round",
    "frac",
    "sign",
    "lerp",
];

/// Operations added when math is enabled.
pub const MATH_OPERATIONS: &[&str] = &[
    "sqrt", "rsqrt", "sin", "cos", "sincos", "tan", "atan", "atan2", "exp", "log", "exp2", "log2",
    "pow",
];

/// Declaration set for one format.
///
/// Constants are raw storage values (already wrapped to the storage width),
/// widened to `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declarations {
    /// `q{m}_{n}`
    pub type_name: String,
    /// Integer bits.
    pub m: u32,
    /// Fractional bits.
    pub n: u32,
    /// `m + n + 1`.
    pub total_bits: u32,
    /// Width of the storage integer.
    pub storage_bits: u32,
    /// Width of the multiply/divide accumulator.
    pub accumulator_bits: u32,
    /// Named raw constants (`ONE`, `HALF`, `MAX`, `MIN`, `PI`, `E`, ...).
    pub constants: BTreeMap<&'static str, i64>,
    /// CORDIC gain `K`, raw.
    pub cordic_gain: i64,
    /// CORDIC iterations, `min(n, 16)`.
    pub cordic_iterations: usize,
    /// `round(atan(2^-i) × 2^n)`, raw.
    pub atan_table: Vec<i64>,
    /// Names of the provided operations.
    pub operations: Vec<&'static str>,
}

impl Declarations {
    /// Describes `format`; `math` adds the transcendental operations.
    pub fn new(format: &AnyQFormat, math: bool) -> Self {
        match format {
            AnyQFormat::Q8(q) => Self::describe(q, math),
            AnyQFormat::Q16(q) => Self::describe(q, math),
            AnyQFormat::Q32(q) => Self::describe(q, math),
            AnyQFormat::Q64(q) => Self::describe(q, math),
        }
    }

    fn describe<S: Storage>(q: &QFormat<S>, math: bool) -> Self {
        let format = q.format();
        let table = q.constants();
        let raw = |wide: i128| S::wrap(wide).to_i64();

        let constants = BTreeMap::from([
            ("ZERO", q.zero().to_i64()),
            ("EPSILON", q.epsilon().to_i64()),
            ("ONE", q.one().to_i64()),
            ("HALF", q.half().to_i64()),
            ("MAX", q.max_value().to_i64()),
            ("MIN", q.min_value().to_i64()),
            ("PI", q.pi().to_i64()),
            ("PI_OVER_2", q.pi_over_2().to_i64()),
            ("PI_OVER_4", q.pi_over_4().to_i64()),
            ("TWO_PI", q.two_pi().to_i64()),
            ("E", q.e().to_i64()),
            ("LN2", q.ln2().to_i64()),
            ("LOG2E", q.log2e().to_i64()),
        ]);

        let mut operations = ARITHMETIC_OPERATIONS.to_vec();
        if math {
            operations.extend_from_slice(MATH_OPERATIONS);
        }

        Self {
            type_name: format.type_name(),
            m: format.m(),
            n: format.n(),
            total_bits: format.total_bits(),
            storage_bits: format.storage_bits(),
            accumulator_bits: format.accumulator_bits(),
            constants,
            cordic_gain: raw(table.cordic_gain()),
            cordic_iterations: table.iterations(),
            atan_table: table.atan_table().iter().map(|&a| raw(a)).collect(),
            operations,
        }
    }
}

/// Writes declaration sets somewhere.
///
/// Implementors receive formats in configuration order.
pub trait Emitter {
    /// Emits one declaration set.
    fn emit(&mut self, declarations: &Declarations) -> Result<(), EmitError>;

    /// Called once after the last declaration set (default: nothing).
    fn finish(&mut self) -> Result<(), EmitError> {
        Ok(())
    }
}

/// Collects declaration sets in memory.
impl Emitter for Vec<Declarations> {
    fn emit(&mut self, declarations: &Declarations) -> Result<(), EmitError> {
        self.push(declarations.clone());
        Ok(())
    }
}

/// Writes each declaration set as one line of JSON.
#[derive(Debug)]
pub struct JsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for JsonEmitter<W> {
    fn emit(&mut self, declarations: &Declarations) -> Result<(), EmitError> {
        serde_json::to_writer(&mut self.writer, declarations)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EmitError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Validates every configured format, then emits each in order.
///
/// # Returns
///
/// The number of formats emitted, or the first validation or emitter error.
/// A format that fails validation aborts the run before anything is emitted.
pub fn generate(config: &GeneratorConfig, emitter: &mut dyn Emitter) -> Result<usize, GenerateError> {
    let formats = config
        .formats
        .iter()
        .map(|spec| Format::select(spec.m, spec.n))
        .collect::<Result<Vec<_>, _>>()?;

    for format in &formats {
        let declarations = Declarations::new(&format.instantiate(), config.math);
        info!(
            format = %format,
            type_name = %declarations.type_name,
            storage_bits = declarations.storage_bits,
            "emitting format"
        );
        debug!(
            one = ?declarations.constants.get("ONE"),
            pi = ?declarations.constants.get("PI"),
            cordic_gain = declarations.cordic_gain,
            atan_table = ?declarations.atan_table,
            "format constants"
        );
        emitter.emit(&declarations)?;
    }
    emitter.finish()?;
    Ok(formats.len())
}
