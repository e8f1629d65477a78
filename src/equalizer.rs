pub mod eq_controls;
pub mod eq_processor;

use serde::{Deserialize, Serialize};

use crate::design::*;
use crate::error::{Error, Result};
use crate::mem_pool::{MemPool, PoolKind};
use crate::runtime::{FilterContext, Kernel};

pub use crate::equalizer::{eq_controls::*, eq_processor::*};

/// most bands one equalizer takes
pub const IIREQ_MAX_BIQUAD_CELLS: usize = 10;

// lowest frequency of the response curve
const RESPONSE_MIN_FREQUENCY: f32 = 20.0;

/// Static configuration of an equalizer, the way a tuning tool stores it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EqualizerConfig {
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default)]
    pub bands: Vec<BiquadConfig>,
    /// where coefficients and history go
    #[serde(default)]
    pub ram: PoolKind,
}

fn check_range(what: &str, band: usize, value: f32, min: f32, max: f32) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::config(format!(
            "band {}: {} {} outside [{}, {}]",
            band, what, value, min, max
        )))
    }
}

impl EqualizerConfig {
    pub fn new(sort: SortMode, bands: Vec<BiquadConfig>) -> Self {
        EqualizerConfig {
            sort,
            bands,
            ram: PoolKind::default(),
        }
    }

    /// tuning ranges, independent of the sampling rate
    pub fn validate(&self) -> Result<()> {
        if self.bands.len() > IIREQ_MAX_BIQUAD_CELLS {
            return Err(Error::config(format!(
                "{} bands, at most {}",
                self.bands.len(),
                IIREQ_MAX_BIQUAD_CELLS
            )));
        }
        for (i, band) in self.bands.iter().enumerate() {
            check_range("steepness", i, band.steepness, 0.1, 20000.0)?;
            check_range("center frequency", i, band.center_frequency, 20.0, 23880.0)?;
            // only boosts make sense for the plain shapes, cuts for the rest
            let min_gain = match band.iir_type {
                IirType::Peaking | IirType::LowShelf | IirType::HighShelf => -40.0,
                _ => 0.0,
            };
            check_range("gain", i, band.gain_db, min_gain, 40.0)?;
        }
        Ok(())
    }
}

/// Magnitude curve summary, sampled on a log frequency axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EqualizerResponse {
    pub response_db: Vec<f32>,
    pub min_db: f32,
    pub max_db: f32,
    pub avg_db: f32,
    /// where the minimum is
    pub min_frequency: f32,
    /// where the maximum is
    pub max_frequency: f32,
}

impl EqualizerResponse {
    fn from_grid(grid: &ResponseGrid, sampling_rate: f32, nb_bands: usize) -> Self {
        if nb_bands == 0 {
            return EqualizerResponse::default();
        }
        let f_max = sampling_rate * 0.5;
        let ratio = f_max / RESPONSE_MIN_FREQUENCY;
        let freq = |k: usize| {
            if nb_bands == 1 {
                RESPONSE_MIN_FREQUENCY
            } else {
                RESPONSE_MIN_FREQUENCY * ratio.powf(k as f32 / (nb_bands - 1) as f32)
            }
        };

        let mut response = EqualizerResponse {
            response_db: Vec::with_capacity(nb_bands),
            min_db: f32::INFINITY,
            max_db: f32::NEG_INFINITY,
            ..Default::default()
        };
        let mut sum = 0.0;
        for k in 0..nb_bands {
            let f = freq(k);
            let db = grid.magnitude_db(f, sampling_rate);
            if db < response.min_db {
                response.min_db = db;
                response.min_frequency = f;
            }
            if db > response.max_db {
                response.max_db = db;
                response.max_frequency = f;
            }
            sum += db;
            response.response_db.push(db);
        }
        response.avg_db = sum / nb_bands as f32;
        response
    }
}

/// Parametric equalizer: designed, sorted, normalized and quantized cascade
/// plus its running context.
pub struct IirEqualizer<K: Kernel> {
    context: FilterContext<'static, K>,
    response: ResponseGrid,
    sampling_rate: f32,
}

impl<K: Kernel> IirEqualizer<K> {
    pub fn new(
        config: &EqualizerConfig,
        sampling_rate: f32,
        channels: usize,
        pool: &MemPool,
    ) -> Result<Self> {
        config.validate()?;
        if let Some(band) = config
            .bands
            .iter()
            .find(|b| b.center_frequency >= 0.4975 * sampling_rate)
        {
            return Err(Error::config(format!(
                "center frequency {} too close to nyquist at {} Hz",
                band.center_frequency, sampling_rate
            )));
        }

        let mut filter = IirFilter::design(&config.bands, sampling_rate)?;
        sort_and_repair(&mut filter, config.sort)?;
        let normalized = normalize(&mut filter, NormalizeMode::ComputeAndNormalize);
        let quantized = quantize(&filter, normalized.gain, K::FORMAT, pool, config.ram)?;
        let cascade = K::designed(quantized.cascade)?;
        let context = FilterContext::init(cascade, channels, 1, 1, pool, config.ram)?;

        log::debug!(
            "equalizer: {} bands, {:?}, {} channels",
            config.bands.len(),
            config.sort,
            channels
        );

        Ok(IirEqualizer {
            context,
            response: quantized.response,
            sampling_rate,
        })
    }

    pub fn process(&mut self, input: &[K::Sample], output: &mut [K::Sample]) -> usize {
        self.context.process(input, output)
    }

    pub fn clear_history(&mut self) {
        self.context.clear_history();
    }

    pub fn context(&self) -> &FilterContext<'static, K> {
        &self.context
    }

    pub fn response_grid(&self) -> &ResponseGrid {
        &self.response
    }

    pub fn sampling_rate(&self) -> f32 {
        self.sampling_rate
    }

    /// response curve over `nb_bands` log-spaced points from 20 Hz to nyquist
    pub fn response(&self, nb_bands: usize) -> EqualizerResponse {
        EqualizerResponse::from_grid(&self.response, self.sampling_rate, nb_bands)
    }
}

/// Design an equalizer and split it into the part that lives on the control
/// thread and the part that goes into the audio callback.
pub fn split<K: Kernel>(
    config: &EqualizerConfig,
    sampling_rate: f32,
    channels: usize,
    pool: &MemPool,
) -> Result<(EqualizerControl<K>, EqualizerProcessor<K>)> {
    let equalizer = IirEqualizer::<K>::new(config, sampling_rate, channels, pool)?;
    let (retune_tx, retune_rx) = crossbeam::channel::bounded(RETUNE_QUEUE_SIZE);
    let (retired_tx, retired_rx) = crossbeam::channel::bounded(RETUNE_QUEUE_SIZE);

    let control = EqualizerControl::new(
        equalizer.response_grid().clone(),
        sampling_rate,
        channels,
        pool,
        retune_tx,
        retired_rx,
    );
    let processor = EqualizerProcessor::new(equalizer, retune_rx, retired_tx);
    Ok((control, processor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{F32, Q15, Q31};

    fn bands() -> Vec<BiquadConfig> {
        vec![
            BiquadConfig::new(IirType::HighPass, 0.707, 40.0, 0.0),
            BiquadConfig::new(IirType::Peaking, 1.2, 1000.0, 9.0),
            BiquadConfig::new(IirType::HighShelf, 0.707, 8000.0, -6.0),
        ]
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "sort": "Down",
            "ram": "Tcm",
            "bands": [
                {"iir_type": "Peaking", "steepness": 1.0, "center_frequency": 1000.0, "gain_db": 6.0},
                {"iir_type": "Notch", "steepness_mode": "Bandwidth", "steepness": 50.0, "center_frequency": 60.0}
            ]
        }"#;
        let config: EqualizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sort, SortMode::Down);
        assert_eq!(config.ram, PoolKind::Tcm);
        assert_eq!(config.bands[0], BiquadConfig::new(IirType::Peaking, 1.0, 1000.0, 6.0));
        assert_eq!(
            config.bands[1],
            BiquadConfig::with_bandwidth(IirType::Notch, 50.0, 60.0, 0.0)
        );
        config.validate().unwrap();

        let empty: EqualizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EqualizerConfig::default());
    }

    #[test]
    fn test_validate_ranges() {
        let mut config = EqualizerConfig::new(SortMode::NoSort, bands());
        config.validate().unwrap();

        config.bands[0].steepness = 0.05;
        assert!(config.validate().is_err());
        config.bands[0].steepness = 0.707;

        config.bands[0].center_frequency = 10.0;
        assert!(config.validate().is_err());
        config.bands[0].center_frequency = 40.0;

        // cut on a low-pass band
        config.bands[0].gain_db = -3.0;
        assert!(config.validate().is_err());
        config.bands[0].gain_db = 0.0;

        config.bands = vec![BiquadConfig::new(IirType::Peaking, 1.0, 1000.0, 3.0); 11];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_equalizer_response() {
        let pool = MemPool::unbounded();
        let config = EqualizerConfig::new(SortMode::Up, bands());
        let eq = IirEqualizer::<F32>::new(&config, 48000.0, 2, &pool).unwrap();

        let response = eq.response(64);
        assert_eq!(response.response_db.len(), 64);
        assert!(response.max_db > 8.0 && response.max_db < 10.0);
        assert!(response.max_frequency > 700.0 && response.max_frequency < 1400.0);
        // high-pass edge is the deepest point
        assert_eq!(response.min_frequency, 20.0);
        assert!(response.avg_db > response.min_db && response.avg_db < response.max_db);

        assert_eq!(eq.response(0), EqualizerResponse::default());
    }

    #[test]
    fn test_fixed_and_float_equalizers_agree() {
        let pool = MemPool::unbounded();
        let config = EqualizerConfig::new(SortMode::Down, bands());
        let mut eq_f = IirEqualizer::<F32>::new(&config, 48000.0, 1, &pool).unwrap();
        let mut eq_q = IirEqualizer::<Q31>::new(&config, 48000.0, 1, &pool).unwrap();

        let f = 1000.0 / 48000.0;
        let input_f: Vec<f32> = (0..960)
            .map(|n| 0.1 * (2.0 * std::f32::consts::PI * f * n as f32).sin())
            .collect();
        let input_q: Vec<i32> = input_f.iter().map(|x| (x * 2147483648.0) as i32).collect();
        let mut out_f = vec![0.0; 960];
        let mut out_q = vec![0; 960];
        eq_f.process(&input_f, &mut out_f);
        eq_q.process(&input_q, &mut out_q);

        for (q, f) in out_q.iter().zip(out_f.iter()) {
            assert_approx_eq::assert_approx_eq!(*q as f32 / 2147483648.0, *f, 1e-4);
        }
        // ~ +9 dB once settled
        let peak = out_f[480..].iter().fold(0.0f32, |acc, x| acc.max(x.abs()));
        assert_approx_eq::assert_approx_eq!(20.0 * (peak / 0.1).log10(), 9.0, 0.5);
    }

    #[test]
    fn test_empty_equalizer_passes_through() {
        let pool = MemPool::unbounded();
        let mut eq = IirEqualizer::<Q15>::new(&EqualizerConfig::default(), 16000.0, 1, &pool).unwrap();
        let mut output = [0i16; 4];
        eq.process(&[100, -200, 300, i16::MAX], &mut output);
        assert_eq!(output, [100, -200, 300, i16::MAX]);
    }

    #[test]
    fn test_band_above_nyquist_rejected() {
        let pool = MemPool::unbounded();
        let config = EqualizerConfig::new(
            SortMode::NoSort,
            vec![BiquadConfig::new(IirType::Peaking, 1.0, 10000.0, 3.0)],
        );
        assert!(IirEqualizer::<F32>::new(&config, 16000.0, 1, &pool).is_err());
        assert!(IirEqualizer::<F32>::new(&config, 32000.0, 1, &pool).is_ok());
    }
}
