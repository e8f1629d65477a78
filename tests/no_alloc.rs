use assert_no_alloc::*;

use biquad_cascade::equalizer::split;
use biquad_cascade::*;

#[cfg(debug_assertions)]
#[global_allocator]
static A: AllocDisabler = AllocDisabler;

fn bands() -> Vec<BiquadConfig> {
    vec![
        BiquadConfig::new(IirType::HighPass, 0.707, 50.0, 0.0),
        BiquadConfig::new(IirType::Peaking, 2.0, 2500.0, 4.0),
        BiquadConfig::new(IirType::LowShelf, 0.707, 150.0, -3.0),
    ]
}

#[test]
fn test_fixed_process_does_not_allocate() {
    let pool = MemPool::unbounded();
    let mut filter = IirFilter::design(&bands(), 48000.0).unwrap();
    sort_and_repair(&mut filter, SortMode::Down).unwrap();
    let gain = normalize(&mut filter, NormalizeMode::ComputeAndNormalize).gain;
    let cascade = match quantize(&filter, gain, SampleFormat::Fixed16, &pool, PoolKind::Tcm)
        .unwrap()
        .cascade
    {
        design::DesignedCascade::Fixed(c) => c,
        design::DesignedCascade::Float(_) => panic!("expected a fixed cascade"),
    };
    let mut ctx = FilterContext::<Q15>::init(cascade, 2, 2, 3, &pool, PoolKind::Tcm).unwrap();

    let input = vec![1000i16; 256];
    let mut output = vec![0i16; 512];
    let written = assert_no_alloc(|| ctx.process(&input, &mut output));
    assert_eq!(written, 192);
}

#[test]
fn test_table_process_does_not_allocate() {
    let pool = MemPool::unbounded();
    let table = tables::dc_remove(tables::FilterFamily::Elliptic, 16000).unwrap();
    let mut ctx = FilterContext::<Q31>::init(table.fixed_cascade(), 1, 1, 1, &pool, PoolKind::Tcm).unwrap();
    let input = vec![1 << 24; 160];
    let mut output = vec![0; 160];
    assert_eq!(assert_no_alloc(|| ctx.process(&input, &mut output)), 160);
}

#[test]
fn test_equalizer_swap_does_not_allocate() {
    let pool = MemPool::unbounded();
    let config = EqualizerConfig::new(SortMode::Up, bands());
    let (mut control, mut processor) = split::<F32>(&config, 48000.0, 2, &pool).unwrap();

    let input = vec![0.25f32; 256];
    let mut output = vec![0.0f32; 256];
    control.retune(&EqualizerConfig::new(SortMode::NoSort, bands())).unwrap();
    let written = assert_no_alloc(|| processor.process(&input, &mut output));
    assert_eq!(written, 128);
    assert_eq!(control.collect_retired(), 1);
}

#[test]
fn test_equalizer_keeps_retired_without_control() {
    let pool = MemPool::unbounded();
    let config = EqualizerConfig::new(SortMode::NoSort, bands());
    let (mut control, mut processor) = split::<F32>(&config, 48000.0, 2, &pool).unwrap();

    // two retunes, nobody left to take the replaced equalizers back
    control.retune(&EqualizerConfig::new(SortMode::NoSort, bands()[..2].to_vec())).unwrap();
    control.retune(&EqualizerConfig::new(SortMode::NoSort, bands()[..1].to_vec())).unwrap();
    drop(control);

    let input = vec![0.25f32; 256];
    let mut output = vec![0.0f32; 256];
    let written = assert_no_alloc(|| {
        processor.process(&input, &mut output);
        processor.process(&input, &mut output)
    });
    assert_eq!(written, 128);
    assert_eq!(processor.equalizer().context().cascade().len(), 2);
    assert!(processor.holds_retired());
}
