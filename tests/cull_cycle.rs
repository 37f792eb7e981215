use facecull::controller::input::is_advance_requested;
use facecull::{CullMode, CullModeController, InputSnapshot};

fn devices(key: bool, mouse: bool, pad: bool) -> InputSnapshot {
    InputSnapshot { key_down: key, mouse_pressed: mouse, pad_pressed: pad, exit_requested: false }
}

fn run(inputs: &[bool]) -> Vec<CullMode> {
    let mut ctrl = CullModeController::new();
    inputs.iter().map(|&pressed| ctrl.tick(pressed)).collect()
}

#[test]
fn press_hold_release_sequence() {
    let modes = run(&[false, true, true, false, true]);
    assert_eq!(
        modes,
        vec![
            CullMode::CullCounterClockwise,
            CullMode::CullClockwise,
            CullMode::CullClockwise,
            CullMode::CullClockwise,
            CullMode::None,
        ]
    );
}

#[test]
fn device_handover_counts_as_one_press() {
    let mut ctrl = CullModeController::new();

    let tick1 = ctrl.tick(is_advance_requested(&devices(false, true, false)));
    assert_eq!(tick1, CullMode::CullClockwise);

    let tick2 = ctrl.tick(is_advance_requested(&devices(true, false, false)));
    assert_eq!(tick2, CullMode::CullClockwise);
}

#[test]
fn simultaneous_devices_advance_once() {
    let mut ctrl = CullModeController::new();
    assert_eq!(ctrl.tick(is_advance_requested(&devices(true, true, true))), CullMode::CullClockwise);
}

#[test]
fn wraps_from_none_to_counter_clockwise() {
    let modes = run(&[true, false, true, false, true]);
    assert_eq!(modes[2], CullMode::None);
    assert_eq!(modes[4], CullMode::CullCounterClockwise);
}

#[test]
fn mode_after_n_rising_edges_matches_next_applied_n_times() {
    // Pseudo-random press patterns from a fixed LCG seed
    let mut seed: u32 = 0x1234_5678;
    for _ in 0..50 {
        let inputs: Vec<bool> = (0..64)
            .map(|_| {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                seed >> 31 == 1
            })
            .collect();

        let mut rising_edges = 0;
        let mut previous = false;
        for &pressed in &inputs {
            if pressed && !previous {
                rising_edges += 1;
            }
            previous = pressed;
        }

        let expected = (0..rising_edges).fold(CullMode::CullCounterClockwise, |m, _| m.next());
        assert_eq!(*run(&inputs).last().unwrap(), expected);
    }
}

#[test]
fn long_hold_changes_mode_once() {
    let mut inputs = vec![true; 500];
    inputs.push(false);
    let modes = run(&inputs);
    assert!(modes.iter().all(|&m| m == CullMode::CullClockwise));
}

#[test]
fn each_repress_advances_once() {
    let inputs: Vec<bool> = (0..12).map(|i| i % 2 == 0).collect();
    let modes = run(&inputs);
    let changes = modes
        .windows(2)
        .filter(|w| w[0] != w[1])
        .count();
    // first press changes away from the initial mode, each later press adds one
    assert_eq!(changes + 1, 6);
}
