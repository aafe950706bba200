// Host-side tests for GPU resource accounting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod resources {
    include!("../src/core/resources.rs");
}

use resources::*;
use std::cell::Cell;
use std::rc::Rc;

struct FakeBuffer {
    released: Rc<Cell<u32>>,
}

impl GpuRelease for FakeBuffer {
    fn release(&self) {
        self.released.set(self.released.get() + 1);
    }
}

// Mirrors the renderer: several tracked objects torn down together.
struct FakeRenderer {
    buffers: Vec<Tracked<FakeBuffer>>,
}

fn mount(released: &Rc<Cell<u32>>, n: usize) -> FakeRenderer {
    FakeRenderer {
        buffers: (0..n)
            .map(|_| {
                Tracked::new(FakeBuffer {
                    released: released.clone(),
                })
            })
            .collect(),
    }
}

#[test]
fn tracked_objects_are_counted_and_released() {
    let released = Rc::new(Cell::new(0));
    assert_eq!(live_gpu_resources(), 0);
    let r = mount(&released, 7);
    assert_eq!(live_gpu_resources(), 7);
    assert_eq!(r.buffers[0].released.get(), 0);
    drop(r);
    assert_eq!(live_gpu_resources(), 0);
    assert_eq!(released.get(), 7);
}

#[test]
fn repeated_mount_cycles_do_not_leak() {
    let released = Rc::new(Cell::new(0));
    for cycle in 0..50 {
        let r = mount(&released, 9);
        assert_eq!(live_gpu_resources(), 9, "cycle {}", cycle);
        drop(r);
        assert_eq!(live_gpu_resources(), 0, "cycle {}", cycle);
    }
    assert_eq!(released.get(), 50 * 9);
}

#[test]
fn deref_reaches_the_inner_object() {
    let released = Rc::new(Cell::new(0));
    let t = Tracked::new(FakeBuffer {
        released: released.clone(),
    });
    t.release();
    assert_eq!(released.get(), 1);
    drop(t);
    assert_eq!(released.get(), 2);
}
