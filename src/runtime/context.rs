use std::fmt::Debug;

use crate::design::{DesignedCascade, SampleFormat};
use crate::error::{Error, Result};
use crate::mem_pool::{MemPool, PoolBuf, PoolKind};
use crate::runtime::cascade::Cascade;
use crate::runtime::sos::*;

/// Sample type specialization of the streaming runtime.
pub trait Kernel: Sized + Send + 'static {
    /// interleaved I/O sample
    type Sample: Copy + Default + Debug + Send;
    type Cell: CellFormat;
    /// history and in-cascade signal
    type State: Copy + Default + Debug + Send;
    /// gain of the output stage
    type OutGain: Copy + Debug + Send;

    const FORMAT: SampleFormat;

    /// global cascade gain, compensated for the `up` - 1 inserted zeros
    fn output_gain(gain: <Self::Cell as CellFormat>::Gain, up: usize) -> Result<Self::OutGain>;

    fn input(x: Self::Sample) -> Self::State;

    fn cell(coefs: &Self::Cell, hist: &mut [Self::State], x: Self::State) -> Self::State;

    fn output(y: Self::State, gain: &Self::OutGain) -> Self::Sample;

    /// take over a cascade quantized for `Self::FORMAT`
    fn designed(cascade: DesignedCascade) -> Result<Cascade<'static, Self::Cell>>;
}

fn format_mismatch(format: SampleFormat) -> Error {
    Error::config(format!("cascade was not quantized for {:?}", format))
}

/// 16 bit I/O, computed in Q31.
#[derive(Debug)]
pub struct Q15;

/// 32 bit fixed point I/O.
#[derive(Debug)]
pub struct Q31;

/// float I/O.
#[derive(Debug)]
pub struct F32;

fn fixed_output_gain(gain: FixedGain, up: usize) -> Result<FixedGain> {
    gain.scaled(up).ok_or_else(|| {
        Error::config(format!(
            "gain {:?} times upsampling {} overflows the exponent",
            gain, up
        ))
    })
}

impl Kernel for Q15 {
    type Sample = i16;
    type Cell = SosCoefsQ31;
    type State = i32;
    type OutGain = FixedGain;

    const FORMAT: SampleFormat = SampleFormat::Fixed16;

    fn output_gain(gain: FixedGain, up: usize) -> Result<FixedGain> {
        fixed_output_gain(gain, up)
    }

    #[inline(always)]
    fn input(x: i16) -> i32 {
        (x as i32) << 16
    }

    #[inline(always)]
    fn cell(coefs: &SosCoefsQ31, hist: &mut [i32], x: i32) -> i32 {
        process_sos_sample_q31(coefs, hist, x)
    }

    #[inline(always)]
    fn output(y: i32, gain: &FixedGain) -> i16 {
        let v = round_shift(y as i64 * gain.mantissa as i64, 47 - gain.exponent as u32);
        v.clamp(i16::MIN as i64, i16::MAX as i64) as i16
    }

    fn designed(cascade: DesignedCascade) -> Result<Cascade<'static, SosCoefsQ31>> {
        match cascade {
            DesignedCascade::Fixed(c) => Ok(c),
            _ => Err(format_mismatch(Self::FORMAT)),
        }
    }
}

impl Kernel for Q31 {
    type Sample = i32;
    type Cell = SosCoefsQ31;
    type State = i32;
    type OutGain = FixedGain;

    const FORMAT: SampleFormat = SampleFormat::Fixed32;

    fn output_gain(gain: FixedGain, up: usize) -> Result<FixedGain> {
        fixed_output_gain(gain, up)
    }

    #[inline(always)]
    fn input(x: i32) -> i32 {
        x
    }

    #[inline(always)]
    fn cell(coefs: &SosCoefsQ31, hist: &mut [i32], x: i32) -> i32 {
        process_sos_sample_q31(coefs, hist, x)
    }

    #[inline(always)]
    fn output(y: i32, gain: &FixedGain) -> i32 {
        saturate_i32(round_shift(
            y as i64 * gain.mantissa as i64,
            31 - gain.exponent as u32,
        ))
    }

    fn designed(cascade: DesignedCascade) -> Result<Cascade<'static, SosCoefsQ31>> {
        match cascade {
            DesignedCascade::Fixed(c) => Ok(c),
            _ => Err(format_mismatch(Self::FORMAT)),
        }
    }
}

impl Kernel for F32 {
    type Sample = f32;
    type Cell = SosCoefs;
    type State = f32;
    type OutGain = f32;

    const FORMAT: SampleFormat = SampleFormat::Float;

    fn output_gain(gain: f32, up: usize) -> Result<f32> {
        Ok(gain * up as f32)
    }

    #[inline(always)]
    fn input(x: f32) -> f32 {
        x
    }

    #[inline(always)]
    fn cell(coefs: &SosCoefs, hist: &mut [f32], x: f32) -> f32 {
        process_sos_sample(coefs, hist, x)
    }

    #[inline(always)]
    fn output(y: f32, gain: &f32) -> f32 {
        y * gain
    }

    fn designed(cascade: DesignedCascade) -> Result<Cascade<'static, SosCoefs>> {
        match cascade {
            DesignedCascade::Float(c) => Ok(c),
            _ => Err(format_mismatch(Self::FORMAT)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
    Multi(usize),
}

impl ChannelLayout {
    pub fn new(channels: usize) -> Self {
        match channels {
            1 => ChannelLayout::Mono,
            2 => ChannelLayout::Stereo,
            n => ChannelLayout::Multi(n),
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::Multi(n) => *n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    Unity,
    Resampling { decim: usize, up: usize },
}

/// Run one interleaved frame position of one channel through the whole
/// cascade. `hist` is that channel's history, 2 samples per cell plus the
/// output pair.
#[inline(always)]
fn filter_sample<K: Kernel>(cells: &[K::Cell], hist: &mut [K::State], x: K::State) -> K::State {
    let mut x = x;
    for (n, coefs) in cells.iter().enumerate() {
        x = K::cell(coefs, &mut hist[2 * n..2 * n + 4], x);
    }
    let last = 2 * cells.len();
    hist[last + 1] = hist[last];
    hist[last] = x;
    x
}

/// Streaming state of one cascade over interleaved multichannel audio.
///
/// The cascade is either borrowed (coefficient tables) or moved in (designed
/// cells), never copied. Dropping the context releases its history back to
/// the pool it came from.
pub struct FilterContext<'a, K: Kernel> {
    cascade: Cascade<'a, K::Cell>,
    history: PoolBuf<K::State>,
    stride: usize,
    layout: ChannelLayout,
    rate: Rate,
    gain: K::OutGain,
    decim_phase: usize,
}

impl<'a, K: Kernel> FilterContext<'a, K> {
    pub fn init(
        cascade: Cascade<'a, K::Cell>,
        channels: usize,
        decim: usize,
        up: usize,
        pool: &MemPool,
        kind: PoolKind,
    ) -> Result<Self> {
        if channels == 0 {
            return Err(Error::config("at least one channel needed"));
        }
        if decim == 0 || up == 0 {
            return Err(Error::config(format!(
                "decimation {} and upsampling {} must be at least 1",
                decim, up
            )));
        }

        let gain = K::output_gain(cascade.gain(), up)?;
        let stride = 2 * cascade.len() + 2;
        let history = pool.alloc_zeroed::<K::State>(stride * channels, kind)?;

        let rate = if decim == 1 && up == 1 {
            Rate::Unity
        } else {
            Rate::Resampling { decim, up }
        };

        log::debug!(
            "filter context: {} cells, {} channels, {:?}, {:?}",
            cascade.len(),
            channels,
            K::FORMAT,
            rate
        );

        Ok(FilterContext {
            cascade,
            history,
            stride,
            layout: ChannelLayout::new(channels),
            rate,
            gain,
            decim_phase: 0,
        })
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn cascade(&self) -> &Cascade<'a, K::Cell> {
        &self.cascade
    }

    /// output stage gain, upsampling compensation included
    pub fn output_gain(&self) -> K::OutGain {
        self.gain
    }

    /// frames the next `process` call will write for `input_frames`
    pub fn expected_output_frames(&self, input_frames: usize) -> usize {
        match self.rate {
            Rate::Unity => input_frames,
            Rate::Resampling { decim, up } => (self.decim_phase + input_frames * up) / decim,
        }
    }

    pub fn clear_history(&mut self) {
        self.history.iter_mut().for_each(|h| *h = K::State::default());
        self.decim_phase = 0;
    }

    /// Filter interleaved frames from `input` into `output` and return the
    /// number of frames written. Input frames that would not fit into
    /// `output` are left unprocessed.
    pub fn process(&mut self, input: &[K::Sample], output: &mut [K::Sample]) -> usize {
        match (self.layout, self.rate) {
            (ChannelLayout::Mono, Rate::Unity) => self.process_unity(1, input, output),
            (ChannelLayout::Stereo, Rate::Unity) => self.process_unity(2, input, output),
            (ChannelLayout::Multi(n), Rate::Unity) => self.process_unity(n, input, output),
            (ChannelLayout::Mono, Rate::Resampling { decim, up }) => {
                self.process_resampling(1, decim, up, input, output)
            }
            (ChannelLayout::Stereo, Rate::Resampling { decim, up }) => {
                self.process_resampling(2, decim, up, input, output)
            }
            (ChannelLayout::Multi(n), Rate::Resampling { decim, up }) => {
                self.process_resampling(n, decim, up, input, output)
            }
        }
    }

    #[inline(always)]
    fn process_unity(&mut self, nchan: usize, input: &[K::Sample], output: &mut [K::Sample]) -> usize {
        let frames = (input.len() / nchan).min(output.len() / nchan);
        let cells = self.cascade.cells();
        let stride = self.stride;

        for frame in 0..frames {
            for ch in 0..nchan {
                let idx = frame * nchan + ch;
                let hist = &mut self.history[ch * stride..(ch + 1) * stride];
                let y = filter_sample::<K>(cells, hist, K::input(input[idx]));
                output[idx] = K::output(y, &self.gain);
            }
        }
        frames
    }

    #[inline(always)]
    fn process_resampling(
        &mut self,
        nchan: usize,
        decim: usize,
        up: usize,
        input: &[K::Sample],
        output: &mut [K::Sample],
    ) -> usize {
        let out_frames = output.len() / nchan;
        // largest frame count whose outputs fit
        let fitting = ((out_frames + 1) * decim)
            .saturating_sub(1 + self.decim_phase)
            / up;
        let frames = (input.len() / nchan).min(fitting);
        let cells = self.cascade.cells();
        let stride = self.stride;
        let mut written = 0;

        for frame in 0..frames {
            for k in 0..up {
                let emit = self.decim_phase + 1 == decim;
                for ch in 0..nchan {
                    // zero stuffing between real input samples
                    let x = if k == 0 {
                        K::input(input[frame * nchan + ch])
                    } else {
                        K::State::default()
                    };
                    let hist = &mut self.history[ch * stride..(ch + 1) * stride];
                    let y = filter_sample::<K>(cells, hist, x);
                    if emit {
                        output[written * nchan + ch] = K::output(y, &self.gain);
                    }
                }
                if emit {
                    written += 1;
                    self.decim_phase = 0;
                } else {
                    self.decim_phase += 1;
                }
            }
        }
        written
    }
}

impl<'a, K: Kernel> Debug for FilterContext<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterContext")
            .field("cells", &self.cascade.len())
            .field("layout", &self.layout)
            .field("rate", &self.rate)
            .field("gain", &self.gain)
            .field("decim_phase", &self.decim_phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::*;
    use crate::runtime::{FixedCascade, FloatCascade};

    static FLAT_Q31: [SosCoefsQ31; 1] = [SosCoefsQ31::from_bits(0x7FFF_FFFF, 0, 0, 0, 0)];
    static FLAT_F32: [SosCoefs; 1] = [SosCoefs::new(1.0, 0.0, 0.0, 0.0, 0.0)];
    static ONE_POLE: [SosCoefs; 1] = [SosCoefs::new(0.5, 0.0, 0.0, -0.5, 0.0)];

    fn flat_fixed() -> FixedCascade<'static> {
        FixedCascade::from_table(&FLAT_Q31, FixedGain::new(0x4000_0000, 1))
    }

    #[test]
    fn test_flat_q31_impulse() {
        let pool = MemPool::unbounded();
        let mut ctx = FilterContext::<Q31>::init(flat_fixed(), 1, 1, 1, &pool, PoolKind::Tcm).unwrap();
        let input = [1 << 20, 0, 0, 0];
        let mut output = [0; 4];
        assert_eq!(ctx.process(&input, &mut output), 4);
        assert_eq!(output, [1 << 20, 0, 0, 0]);
    }

    #[test]
    fn test_flat_q15_impulse() {
        let pool = MemPool::unbounded();
        let mut ctx = FilterContext::<Q15>::init(flat_fixed(), 1, 1, 1, &pool, PoolKind::Tcm).unwrap();
        let mut output = [0i16; 4];
        ctx.process(&[1000, 0, 0, 0], &mut output);
        assert_eq!(output, [1000, 0, 0, 0]);

        // full scale survives the Q31 round trip
        ctx.clear_history();
        ctx.process(&[i16::MIN, i16::MAX, 0, 0], &mut output);
        assert_eq!(output[0], i16::MIN);
        assert_eq!(output[1], i16::MAX);
    }

    #[test]
    fn test_designed_flat_cascade() {
        let pool = MemPool::unbounded();
        let filter = IirFilter::from_cells(vec![BiquadCell::flat()]).unwrap();
        let q = quantize(&filter, 1.0, SampleFormat::Fixed32, &pool, PoolKind::RamInt).unwrap();
        let cascade = match q.cascade {
            DesignedCascade::Fixed(c) => c,
            DesignedCascade::Float(_) => panic!("expected a fixed cascade"),
        };
        let mut ctx = FilterContext::<Q31>::init(cascade, 1, 1, 1, &pool, PoolKind::RamInt).unwrap();
        let mut output = [0; 3];
        ctx.process(&[1 << 20, 0, -(1 << 24)], &mut output);
        assert_eq!(output, [1 << 20, 0, -(1 << 24)]);
    }

    #[test]
    fn test_zero_stuffing_and_decimation() {
        let pool = MemPool::unbounded();
        let cascade = FloatCascade::from_table(&FLAT_F32, 1.0);
        let mut ctx = FilterContext::<F32>::init(cascade, 1, 2, 3, &pool, PoolKind::RamInt).unwrap();
        assert_eq!(ctx.output_gain(), 3.0);

        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(ctx.expected_output_frames(6), 9);
        let mut output = [0.0; 9];
        assert_eq!(ctx.process(&input, &mut output), 9);
        assert_eq!(output, [0.0, 6.0, 0.0, 0.0, 12.0, 0.0, 0.0, 18.0, 0.0]);
    }

    #[test]
    fn test_decimation_phase_persists() {
        let pool = MemPool::unbounded();
        let input: Vec<f32> = (0..9).map(|i| i as f32).collect();

        let mut whole = FilterContext::<F32>::init(
            FloatCascade::from_table(&ONE_POLE, 1.0),
            1,
            3,
            1,
            &pool,
            PoolKind::RamInt,
        )
        .unwrap();
        let mut expected = [0.0; 3];
        assert_eq!(whole.process(&input, &mut expected), 3);

        let mut split = FilterContext::<F32>::init(
            FloatCascade::from_table(&ONE_POLE, 1.0),
            1,
            3,
            1,
            &pool,
            PoolKind::RamInt,
        )
        .unwrap();
        let mut output = [0.0; 3];
        assert_eq!(split.expected_output_frames(4), 1);
        let first = split.process(&input[..4], &mut output);
        assert_eq!(first, 1);
        assert_eq!(split.expected_output_frames(5), 2);
        let second = split.process(&input[4..], &mut output[first..]);
        assert_eq!(second, 2);
        assert_eq!(output, expected);

        split.clear_history();
        assert_eq!(split.expected_output_frames(2), 0);
    }

    #[test]
    fn test_short_output_leaves_input() {
        let pool = MemPool::unbounded();
        let cascade = FloatCascade::from_table(&FLAT_F32, 1.0);
        let mut ctx = FilterContext::<F32>::init(cascade, 1, 2, 1, &pool, PoolKind::RamInt).unwrap();
        let mut output = [0.0; 2];
        // 8 frames would give 4 outputs, only 5 frames fit into 2
        assert_eq!(ctx.process(&[1.0; 8], &mut output), 2);
        assert_eq!(ctx.expected_output_frames(1), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let pool = MemPool::unbounded();
        let mut stereo = FilterContext::<F32>::init(
            FloatCascade::from_table(&ONE_POLE, 1.0),
            2,
            1,
            1,
            &pool,
            PoolKind::RamInt,
        )
        .unwrap();
        assert_eq!(stereo.layout(), ChannelLayout::Stereo);
        let input = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut output = [0.0; 8];
        assert_eq!(stereo.process(&input, &mut output), 4);
        assert_eq!(output, [0.5, 0.0, 0.25, 0.0, 0.125, 0.0, 0.0625, 0.0]);

        // same cascade over five channels, impulse on the last one
        let mut multi = FilterContext::<F32>::init(
            FloatCascade::from_table(&ONE_POLE, 1.0),
            5,
            1,
            1,
            &pool,
            PoolKind::RamInt,
        )
        .unwrap();
        assert_eq!(multi.layout(), ChannelLayout::Multi(5));
        let mut input = [0.0; 10];
        input[4] = 1.0;
        let mut output = [0.0; 10];
        assert_eq!(multi.process(&input, &mut output), 2);
        assert_eq!(output[4], 0.5);
        assert_eq!(output[9], 0.25);
        assert!(output[..4].iter().chain(output[5..9].iter()).all(|x| *x == 0.0));
    }

    #[test]
    fn test_fixed_tracks_float() {
        let pool = MemPool::unbounded();
        let configs = [
            BiquadConfig::new(IirType::LowPass, 0.707, 4000.0, 0.0),
            BiquadConfig::new(IirType::Peaking, 2.0, 800.0, -6.0),
        ];
        let mut filter = IirFilter::design(&configs, 48000.0).unwrap();
        let gain = normalize(&mut filter, NormalizeMode::ComputeAndNormalize).gain;

        let fixed = match quantize(&filter, gain, SampleFormat::Fixed32, &pool, PoolKind::RamInt)
            .unwrap()
            .cascade
        {
            DesignedCascade::Fixed(c) => c,
            _ => panic!("expected a fixed cascade"),
        };
        let float = match quantize(&filter, gain, SampleFormat::Float, &pool, PoolKind::RamInt)
            .unwrap()
            .cascade
        {
            DesignedCascade::Float(c) => c,
            _ => panic!("expected a float cascade"),
        };

        let mut ctx_q = FilterContext::<Q31>::init(fixed, 1, 1, 1, &pool, PoolKind::RamInt).unwrap();
        let mut ctx_f = FilterContext::<F32>::init(float, 1, 1, 1, &pool, PoolKind::RamInt).unwrap();

        let mut rng = fastrand::Rng::with_seed(42);
        let input_f: Vec<f32> = (0..512).map(|_| (rng.f32() - 0.5) * 0.5).collect();
        let input_q: Vec<i32> = input_f.iter().map(|x| round_q31(*x as f64 * Q31_ONE)).collect();
        let mut out_f = vec![0.0; 512];
        let mut out_q = vec![0; 512];
        ctx_f.process(&input_f, &mut out_f);
        ctx_q.process(&input_q, &mut out_q);

        for (q, f) in out_q.iter().zip(out_f.iter()) {
            assert_approx_eq::assert_approx_eq!(*q as f64 / Q31_ONE, *f as f64, 1e-4);
        }
    }

    #[test]
    fn test_init_errors() {
        let pool = MemPool::unbounded();
        assert!(matches!(
            FilterContext::<Q31>::init(flat_fixed(), 0, 1, 1, &pool, PoolKind::Tcm),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            FilterContext::<Q31>::init(flat_fixed(), 1, 0, 1, &pool, PoolKind::Tcm),
            Err(Error::Config(_))
        ));
        // exponent 31 has no room for the upsampling factor
        let loud = FixedCascade::from_table(&FLAT_Q31, FixedGain::new(i32::MAX, 31));
        assert!(matches!(
            FilterContext::<Q31>::init(loud, 1, 1, 2, &pool, PoolKind::Tcm),
            Err(Error::Config(_))
        ));

        let tiny = MemPool::with_capacity(8, 0, 0);
        assert!(matches!(
            FilterContext::<Q31>::init(flat_fixed(), 2, 1, 1, &tiny, PoolKind::Tcm),
            Err(Error::Allocation { .. })
        ));
    }

    #[test]
    fn test_drop_releases_history() {
        let pool = MemPool::unbounded();
        {
            let _ctx = FilterContext::<F32>::init(
                FloatCascade::from_table(&ONE_POLE, 1.0),
                2,
                1,
                1,
                &pool,
                PoolKind::RamExt,
            )
            .unwrap();
            // 2 x (2 x 1 + 2) floats
            assert_eq!(pool.in_use(PoolKind::RamExt), 32);
        }
        assert_eq!(pool.in_use(PoolKind::RamExt), 0);
    }
}
