use boid_wasm::{FlockHandle, Walker};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn walker_steps_by_one_on_each_axis() {
    let mut walker = Walker::new(0.0, 0.0);
    for _ in 0..10 {
        walker.update();
    }
    assert_eq!(walker.x(), 10.0);
    assert_eq!(walker.y(), 10.0);
}

#[wasm_bindgen_test]
fn flock_handle_exposes_positions_and_headings() {
    let mut flock = FlockHandle::new(3, 15, 400.0, 300.0).unwrap();
    assert_eq!(flock.len(), 15);

    flock.step();
    flock.step();

    let positions = flock.positions();
    assert_eq!(positions.len(), 30);
    for pair in positions.chunks(2) {
        assert!((0.0..=400.0).contains(&pair[0]));
        assert!((0.0..=300.0).contains(&pair[1]));
    }
    assert_eq!(flock.headings().len(), 15);
    assert_eq!(flock.steps(), 2.0);
}

#[wasm_bindgen_test]
fn same_seed_same_flock() {
    let a = FlockHandle::new(9, 8, 400.0, 300.0).unwrap();
    let b = FlockHandle::new(9, 8, 400.0, 300.0).unwrap();
    assert_eq!(a.positions(), b.positions());
}
