//! Coefficient reduction
//!
//! Applies one [`ReductionMode`] to blocks of DCT coefficients. The mode is
//! validated once when the reducer is built, so reducing a block cannot fail.

use crate::quantization::{requantize, scaled_quant_table, ScaledQuantTable};
use crate::zigzag::keep_first_k;
use crate::Block;
use dctc_core::{DctResult, ReductionMode};

#[derive(Debug, Clone)]
enum Strategy {
    Truncate(usize),
    Quantize(ScaledQuantTable),
}

/// Discards coefficient information according to a reduction mode
#[derive(Debug, Clone)]
pub struct CoefficientReducer {
    mode: ReductionMode,
    strategy: Strategy,
}

impl CoefficientReducer {
    pub fn new(mode: ReductionMode) -> DctResult<Self> {
        mode.validate()?;

        let strategy = match mode {
            ReductionMode::Truncate { coefficients } => Strategy::Truncate(coefficients),
            ReductionMode::Quantize { scale } => Strategy::Quantize(scaled_quant_table(scale)?),
        };

        Ok(Self { mode, strategy })
    }

    pub fn mode(&self) -> ReductionMode {
        self.mode
    }

    /// Reduce one block of coefficients
    pub fn reduce(&self, coeffs: &Block) -> Block {
        match &self.strategy {
            Strategy::Truncate(k) => keep_first_k(coeffs, *k),
            Strategy::Quantize(table) => requantize(coeffs, table),
        }
    }
}
