use serde::{Deserialize, Serialize};

use crate::design::cell::BiquadCell;
use crate::design::roots::*;
use crate::design::IirFilter;
use crate::error::Result;

/// Pole ordering before re-pairing.
///
/// `Up` puts the poles farthest from the unit circle into the first cell,
/// `Down` the closest ones. Note that this is the reverse of what the
/// zp2sos 'up'/'down' flags produce, since zp2sos also reverses the final
/// section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    NoSort,
    Up,
    Down,
}

/// handle into the cell arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RootRef {
    cell: usize,
    slot: usize,
}

impl RootRef {
    fn pole<'a>(&self, cells: &'a [BiquadCell]) -> &'a Root {
        &cells[self.cell].poles[self.slot]
    }

    fn zero<'a>(&self, cells: &'a [BiquadCell]) -> &'a Root {
        &cells[self.cell].zeros[self.slot]
    }
}

fn natural_order(cells: &[BiquadCell]) -> Vec<RootRef> {
    (0..cells.len())
        .flat_map(|cell| (0..2).map(move |slot| RootRef { cell, slot }))
        .collect()
}

// complex pairs first, then real (or missing) roots
fn partition(cells: &[BiquadCell], roots: impl Fn(&BiquadCell) -> &[Root; 2]) -> (Vec<RootRef>, Vec<RootRef>) {
    let mut complex = Vec::new();
    let mut real = Vec::new();
    for (cell, c) in cells.iter().enumerate() {
        let target = if roots(c)[0].is_complex() {
            &mut complex
        } else {
            &mut real
        };
        target.push(RootRef { cell, slot: 0 });
        target.push(RootRef { cell, slot: 1 });
    }
    (complex, real)
}

fn ordered_poles(cells: &[BiquadCell], mode: SortMode) -> (Vec<RootRef>, usize) {
    let (complex, mut real) = partition(cells, |c| &c.poles);
    let by_mode = |a: f32, b: f32| match mode {
        SortMode::Up => b.total_cmp(&a),
        _ => a.total_cmp(&b),
    };

    // conjugate pairs move as a unit
    let mut pairs: Vec<[RootRef; 2]> = complex.chunks(2).map(|p| [p[0], p[1]]).collect();
    pairs.sort_by(|a, b| by_mode(a[0].pole(cells).dist(), b[0].pole(cells).dist()));

    // missing poles go last whatever the order
    real.sort_by(|a, b| {
        let (ra, rb) = (a.pole(cells), b.pole(cells));
        let missing = |r: &Root| *r == Root::NoRoot;
        missing(ra)
            .cmp(&missing(rb))
            .then_with(|| by_mode(ra.dist(), rb.dist()))
    });

    let n_complex = pairs.len() * 2;
    let mut poles: Vec<RootRef> = pairs.into_iter().flatten().collect();
    poles.extend(real);
    (poles, n_complex)
}

/// Greedy nearest-zero assignment, pole slot by pole slot. Conjugate zeros
/// only ever move as a pair. Returns false when a slot had to keep its zero
/// because no move would have kept the pairs whole.
fn match_zeros(
    cells: &[BiquadCell],
    poles: &[RootRef],
    zeros: &mut [RootRef],
    n_complex_poles: usize,
) -> bool {
    let n = zeros.len();
    let is_complex = |r: &RootRef| r.zero(cells).is_complex();
    let step = |r: &RootRef| if r.zero(cells).is_complex() { 2 } else { 1 };
    let mut clean = true;

    // complex pole pairs
    let mut i = 0;
    while i < n_complex_poles {
        let p = poles[i].pole(cells);
        let mut best: Option<(usize, f32)> = None;
        let mut j = i;
        while j < n {
            let d = p.square_dist(zeros[j].zero(cells));
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((j, d));
            }
            j += step(&zeros[j]);
        }

        if let Some((b, _)) = best {
            if is_complex(&zeros[b]) {
                if b + 1 >= n {
                    clean = false;
                } else if b != i {
                    zeros.swap(i, b);
                    zeros.swap(i + 1, b + 1);
                }
            } else {
                if b != i {
                    zeros.swap(i, b);
                    if is_complex(&zeros[i + 1]) {
                        // keep the displaced conjugate next to its partner
                        zeros.swap(i + 1, b ^ 1);
                    }
                }
                // second slot gets the nearest remaining real zero
                let partner = (i + 1..n)
                    .filter(|j| !is_complex(&zeros[*j]))
                    .map(|j| (j, p.square_dist(zeros[j].zero(cells))))
                    .fold(None, |acc: Option<(usize, f32)>, (j, d)| match acc {
                        Some((_, bd)) if bd <= d => acc,
                        _ => Some((j, d)),
                    });
                match partner {
                    Some((k, _)) => zeros.swap(i + 1, k),
                    None => clean = false,
                }
            }
        }
        i += 2;
    }

    // real poles, one at a time; complex zeros only on even slots
    let mut i = n_complex_poles;
    while i < n {
        let p = poles[i].pole(cells);
        let mut best: Option<(usize, f32)> = None;
        let mut j = i;
        while j < n {
            let z = zeros[j].zero(cells);
            if i % 2 == 0 || !z.is_complex() {
                let d = p.square_dist(z);
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((j, d));
                }
            }
            j += step(&zeros[j]);
        }

        if let Some((b, _)) = best {
            if b != i {
                if is_complex(&zeros[b]) || is_complex(&zeros[i]) {
                    // a pair coming in or going out takes both slots
                    if i + 1 >= n || (b ^ 1) >= n {
                        clean = false;
                    } else {
                        zeros.swap(i, b);
                        zeros.swap(i + 1, b ^ 1);
                    }
                } else {
                    zeros.swap(i, b);
                }
            }
        }
        i += step(&zeros[i]);
    }
    clean
}

fn pairs_rebuild(cells: &[BiquadCell], zeros: &[RootRef]) -> bool {
    zeros
        .chunks(2)
        .all(|p| quad_from_roots(p[0].zero(cells), p[1].zero(cells)).is_ok())
}

/// Reorder poles by distance to the unit circle, give every pole its
/// nearest zero and rebuild the cells from the new pairs. The transfer
/// function stays the same, only the grouping into sections changes.
///
/// If the matching can't keep every zero pair whole, the zeros stay grouped
/// as they were designed and only the poles are reordered.
pub fn sort_and_repair(filter: &mut IirFilter, mode: SortMode) -> Result<()> {
    let cells = filter.cells();

    let (poles, zeros) = match mode {
        SortMode::NoSort => (natural_order(cells), natural_order(cells)),
        SortMode::Up | SortMode::Down => {
            let (poles, n_complex) = ordered_poles(cells, mode);
            let (complex, real) = partition(cells, |c| &c.zeros);
            let mut zeros = complex;
            zeros.extend(real);
            let grouped = zeros.clone();

            let clean = match_zeros(cells, &poles, &mut zeros, n_complex);
            if !clean || !pairs_rebuild(cells, &zeros) {
                log::warn!(
                    "{:?}: zero matching would split a conjugate pair, keeping designed zero pairs",
                    mode
                );
                zeros = grouped;
            }
            (poles, zeros)
        }
    };

    let rebuilt = (0..cells.len())
        .map(|k| {
            let z = [*zeros[2 * k].zero(cells), *zeros[2 * k + 1].zero(cells)];
            let p = [*poles[2 * k].pole(cells), *poles[2 * k + 1].pole(cells)];
            Ok(BiquadCell {
                num: quad_from_roots(&z[0], &z[1])?,
                den: quad_from_roots(&p[0], &p[1])?,
                zeros: z,
                poles: p,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("re-paired {} cells, {:?}", rebuilt.len(), mode);
    filter.replace_cells(rebuilt);
    Ok(())
}
