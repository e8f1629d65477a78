mod cell;
mod quantize;
mod response;
mod roots;
mod sort;

pub use cell::*;
pub use quantize::*;
pub use response::*;
pub use roots::*;
pub use sort::*;

use crate::error::{Error, Result};

/// upper bound on the cells of one design
pub const MAX_BIQUAD_CELLS: usize = 32;

/// A cascade in design form. The cells are the arena the sorter permutes
/// index handles over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IirFilter {
    cells: Vec<BiquadCell>,
}

impl IirFilter {
    pub fn new() -> Self {
        IirFilter { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<BiquadCell>) -> Result<Self> {
        if cells.len() > MAX_BIQUAD_CELLS {
            return Err(Error::config(format!(
                "{} cells, at most {} supported",
                cells.len(),
                MAX_BIQUAD_CELLS
            )));
        }
        Ok(IirFilter { cells })
    }

    /// one designed cell per band
    pub fn design(configs: &[BiquadConfig], sampling_rate: f32) -> Result<Self> {
        let cells = configs
            .iter()
            .map(|c| design(c, sampling_rate))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("designed {} cells at {} Hz", cells.len(), sampling_rate);
        IirFilter::from_cells(cells)
    }

    pub fn push(&mut self, cell: BiquadCell) -> Result<()> {
        if self.cells.len() == MAX_BIQUAD_CELLS {
            return Err(Error::config("too many biquad cells"));
        }
        self.cells.push(cell);
        Ok(())
    }

    pub fn cells(&self) -> &[BiquadCell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [BiquadCell] {
        &mut self.cells
    }

    pub(crate) fn replace_cells(&mut self, cells: Vec<BiquadCell>) {
        self.cells = cells;
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// |H(e^{j.theta})| of the whole cascade
    pub fn magnitude(&self, theta: f32) -> f32 {
        self.cells.iter().map(|c| c.magnitude(theta)).product()
    }
}
