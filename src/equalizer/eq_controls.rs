use crossbeam::channel::{Receiver, Sender, TrySendError};

use crate::design::ResponseGrid;
use crate::equalizer::{EqualizerConfig, EqualizerResponse, IirEqualizer};
use crate::error::{Error, Result};
use crate::mem_pool::MemPool;
use crate::runtime::Kernel;

/// pending retunes (and retired equalizers) in flight at once
pub const RETUNE_QUEUE_SIZE: usize = 8;

/// These are the controls, the part you keep on the control thread to
/// retune the equalizer. All the design work (and all allocation) happens
/// here, the processor only swaps finished equalizers in.
pub struct EqualizerControl<K: Kernel> {
    response: ResponseGrid,
    sampling_rate: f32,
    channels: usize,
    pool: MemPool,
    retune_send: Sender<IirEqualizer<K>>,
    retired_recv: Receiver<IirEqualizer<K>>,
}

impl<K: Kernel> EqualizerControl<K> {
    pub(crate) fn new(
        response: ResponseGrid,
        sampling_rate: f32,
        channels: usize,
        pool: &MemPool,
        tx: Sender<IirEqualizer<K>>,
        rx: Receiver<IirEqualizer<K>>,
    ) -> Self {
        EqualizerControl {
            response,
            sampling_rate,
            channels,
            pool: pool.clone(),
            retune_send: tx,
            retired_recv: rx,
        }
    }

    /// Design an equalizer for `config` and queue it for the processor.
    /// On error the running equalizer stays untouched.
    pub fn retune(&mut self, config: &EqualizerConfig) -> Result<()> {
        // make room in the pool first
        self.collect_retired();

        let equalizer = IirEqualizer::<K>::new(config, self.sampling_rate, self.channels, &self.pool)?;
        let response = equalizer.response_grid().clone();
        match self.retune_send.try_send(equalizer) {
            Ok(()) => {
                self.response = response;
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                log::warn!("retune queue full, dropping new configuration");
                Err(Error::config("retune queue full"))
            }
            Err(TrySendError::Disconnected(_)) => Err(Error::config("processor is gone")),
        }
    }

    /// Free equalizers the processor has swapped out, returns how many.
    pub fn collect_retired(&self) -> usize {
        self.retired_recv.try_iter().count()
    }

    /// response of the most recently queued configuration
    pub fn response(&self, nb_bands: usize) -> EqualizerResponse {
        EqualizerResponse::from_grid(&self.response, self.sampling_rate, nb_bands)
    }

    pub fn sampling_rate(&self) -> f32 {
        self.sampling_rate
    }
}
