use std::ops::Deref;

use crate::design::ResponseGrid;
use crate::mem_pool::PoolBuf;
use crate::runtime::sos::*;

/// Cell storage: either compiled-in constant data or the buffer a design
/// call allocated.
pub enum CellStore<'a, C> {
    Table(&'a [C]),
    Designed(PoolBuf<C>),
}

impl<'a, C> Deref for CellStore<'a, C> {
    type Target = [C];

    fn deref(&self) -> &[C] {
        match self {
            CellStore::Table(cells) => *cells,
            CellStore::Designed(buf) => &buf[..],
        }
    }
}

/// Runtime form of a filter: ordered cells plus one global gain.
pub struct Cascade<'a, C: CellFormat> {
    cells: CellStore<'a, C>,
    gain: C::Gain,
}

pub type FixedCascade<'a> = Cascade<'a, SosCoefsQ31>;
pub type FloatCascade<'a> = Cascade<'a, SosCoefs>;

impl<'a, C: CellFormat> Cascade<'a, C> {
    /// wrap a coefficient table, nothing is copied
    pub const fn from_table(cells: &'a [C], gain: C::Gain) -> Self {
        Cascade {
            cells: CellStore::Table(cells),
            gain,
        }
    }

    pub(crate) fn designed(cells: PoolBuf<C>, gain: C::Gain) -> Cascade<'static, C> {
        Cascade {
            cells: CellStore::Designed(cells),
            gain,
        }
    }

    /// borrow this cascade as a table, e.g. to run a static one
    pub fn view(&self) -> Cascade<'_, C> {
        Cascade::from_table(self.cells(), self.gain)
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn gain(&self) -> C::Gain {
        self.gain
    }

    /// squared magnitude on the response grid, global gain included
    pub fn response(&self) -> ResponseGrid {
        let mut grid = ResponseGrid::new();
        for cell in self.cells.iter() {
            let [b0, b1, b2, a1, a2] = cell.coefficients();
            grid.accumulate(b0 as f32, b1 as f32, b2 as f32, a1 as f32, a2 as f32);
        }
        let g = C::linear_gain(&self.gain) as f32;
        grid.scale(g * g);
        grid
    }
}

impl<'a, C: CellFormat> std::fmt::Debug for Cascade<'a, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cascade")
            .field("cells", &self.cells())
            .field("gain", &self.gain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CELLS: [SosCoefs; 2] = [
        SosCoefs::new(0.5, 0.0, 0.0, 0.0, 0.0),
        SosCoefs::new(1.0, 1.0, 0.0, 0.0, 0.0),
    ];

    #[test]
    fn test_table_response() {
        let cascade = FloatCascade::from_table(&CELLS, 2.0);
        assert_eq!(cascade.len(), 2);
        let grid = cascade.response();
        // 2 x 0.5 x (1 + z^-1) gives |H|^2 = 4 at dc
        assert_approx_eq::assert_approx_eq!(grid.points()[0], 4.0, 1e-5);
        let view = cascade.view();
        assert_eq!(view.cells(), cascade.cells());
        assert_eq!(view.gain(), 2.0);
    }
}
