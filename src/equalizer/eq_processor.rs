use crossbeam::channel::{Receiver, Sender};

use crate::equalizer::IirEqualizer;
use crate::runtime::Kernel;

/// This is the part that goes into the audio callback. It never designs,
/// never allocates and never frees, replaced equalizers are handed back to
/// the control side.
///
/// If the retired channel is full or the control side is gone, the replaced
/// equalizer is parked here. Pending retunes then wait in their queue until
/// the parked one could be handed back, so nothing is ever dropped inside
/// `process`.
pub struct EqualizerProcessor<K: Kernel> {
    current: IirEqualizer<K>,
    parked: Option<IirEqualizer<K>>,
    retune_recv: Receiver<IirEqualizer<K>>,
    retired_send: Sender<IirEqualizer<K>>,
}

impl<K: Kernel> EqualizerProcessor<K> {
    pub(crate) fn new(
        equalizer: IirEqualizer<K>,
        rx: Receiver<IirEqualizer<K>>,
        tx: Sender<IirEqualizer<K>>,
    ) -> Self {
        EqualizerProcessor {
            current: equalizer,
            parked: None,
            retune_recv: rx,
            retired_send: tx,
        }
    }

    // hand an equalizer back, or keep it if there's no room
    fn retire(&mut self, old: IirEqualizer<K>) {
        if let Err(e) = self.retired_send.try_send(old) {
            self.parked = Some(e.into_inner());
        }
    }

    /// Swap in pending retunes, then filter the block.
    pub fn process(&mut self, input: &[K::Sample], output: &mut [K::Sample]) -> usize {
        if let Some(old) = self.parked.take() {
            self.retire(old);
        }
        while self.parked.is_none() {
            match self.retune_recv.try_recv() {
                Ok(next) => {
                    let old = std::mem::replace(&mut self.current, next);
                    self.retire(old);
                }
                Err(_) => break,
            }
        }
        self.current.process(input, output)
    }

    /// true while a replaced equalizer waits to be handed back
    pub fn holds_retired(&self) -> bool {
        self.parked.is_some()
    }

    pub fn clear_history(&mut self) {
        self.current.clear_history();
    }

    pub fn equalizer(&self) -> &IirEqualizer<K> {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use crate::design::*;
    use crate::equalizer::*;
    use crate::mem_pool::{MemPool, PoolKind};
    use crate::runtime::F32;

    fn boost(gain_db: f32) -> EqualizerConfig {
        EqualizerConfig::new(
            SortMode::NoSort,
            vec![BiquadConfig::new(IirType::LowShelf, 0.707, 200.0, gain_db)],
        )
    }

    #[test]
    fn test_retune_swaps_at_block_start() {
        let pool = MemPool::unbounded();
        let (mut control, mut processor) = split::<F32>(&boost(0.0), 48000.0, 1, &pool).unwrap();

        // 0 dB shelf, DC goes straight through
        let input = vec![0.1f32; 4800];
        let mut output = vec![0.0; 4800];
        processor.process(&input, &mut output);
        assert_approx_eq::assert_approx_eq!(output[4799], 0.1, 1e-4);

        control.retune(&boost(-6.0)).unwrap();
        assert!(control.response(16).min_db < -5.0);
        processor.process(&input, &mut output);
        assert_approx_eq::assert_approx_eq!(output[4799], 0.1 * 10f32.powf(-6.0 / 20.0), 1e-3);

        // the first equalizer came back to be freed here
        assert_eq!(control.collect_retired(), 1);
    }

    #[test]
    fn test_failed_retune_keeps_running_equalizer() {
        let pool = MemPool::unbounded();
        let (mut control, mut processor) = split::<F32>(&boost(3.0), 48000.0, 1, &pool).unwrap();
        let mut bad = boost(3.0);
        bad.bands[0].steepness = 0.0;
        assert!(control.retune(&bad).is_err());

        let mut output = [0.0; 4];
        processor.process(&[1.0, 0.0, 0.0, 0.0], &mut output);
        assert_eq!(processor.equalizer().context().cascade().len(), 1);
    }

    #[test]
    fn test_pool_is_shared() {
        let pool = MemPool::unbounded();
        let config = EqualizerConfig {
            ram: PoolKind::RamExt,
            ..boost(6.0)
        };
        let (mut control, mut processor) = split::<F32>(&config, 48000.0, 2, &pool).unwrap();
        let one = pool.in_use(PoolKind::RamExt);
        assert!(one > 0);

        control.retune(&config).unwrap();
        assert_eq!(pool.in_use(PoolKind::RamExt), 2 * one);
        let mut output = [0.0; 2];
        processor.process(&[0.0, 0.0], &mut output);
        control.collect_retired();
        assert_eq!(pool.in_use(PoolKind::RamExt), one);
    }

    fn peaks(n: usize) -> EqualizerConfig {
        let bands = (0..n)
            .map(|k| BiquadConfig::new(IirType::Peaking, 1.0, 500.0 * (k + 1) as f32, 3.0))
            .collect();
        EqualizerConfig::new(SortMode::NoSort, bands)
    }

    #[test]
    fn test_retired_equalizer_waits_for_room() {
        let pool = MemPool::unbounded();
        let make = |n| IirEqualizer::<F32>::new(&peaks(n), 48000.0, 1, &pool).unwrap();
        let (retune_tx, retune_rx) = crossbeam::channel::bounded(4);
        let (retired_tx, retired_rx) = crossbeam::channel::bounded(1);
        let mut processor = EqualizerProcessor::new(make(1), retune_rx, retired_tx);
        for n in 2..5 {
            retune_tx.send(make(n)).unwrap();
        }
        let bands_of = |e: &IirEqualizer<F32>| e.context().cascade().len();

        let mut output = [0.0; 4];
        processor.process(&[0.0; 4], &mut output);
        // 1 went back, 2 is parked, 4 is still queued
        assert_eq!(bands_of(processor.equalizer()), 3);
        assert!(processor.holds_retired());
        assert_eq!(retune_tx.len(), 1);
        assert_eq!(bands_of(&retired_rx.try_recv().unwrap()), 1);

        processor.process(&[0.0; 4], &mut output);
        assert_eq!(bands_of(processor.equalizer()), 4);
        assert!(processor.holds_retired());
        assert_eq!(bands_of(&retired_rx.try_recv().unwrap()), 2);

        processor.process(&[0.0; 4], &mut output);
        assert!(!processor.holds_retired());
        assert_eq!(bands_of(&retired_rx.try_recv().unwrap()), 3);
        assert!(retired_rx.is_empty());
    }

    #[test]
    fn test_retired_equalizer_stays_when_control_is_gone() {
        let pool = MemPool::unbounded();
        let (mut control, mut processor) = split::<F32>(&peaks(3), 48000.0, 1, &pool).unwrap();
        control.retune(&peaks(2)).unwrap();
        control.retune(&peaks(1)).unwrap();
        drop(control);
        let in_use = pool.in_use(PoolKind::RamInt);

        let mut output = [0.0; 4];
        processor.process(&[0.0; 4], &mut output);
        processor.process(&[0.0; 4], &mut output);
        assert_eq!(processor.equalizer().context().cascade().len(), 2);
        assert!(processor.holds_retired());
        // nothing was freed
        assert_eq!(pool.in_use(PoolKind::RamInt), in_use);

        drop(processor);
        assert_eq!(pool.in_use(PoolKind::RamInt), 0);
    }
}
