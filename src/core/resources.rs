use std::cell::Cell;
use std::ops::Deref;

thread_local! {
    static LIVE_GPU_RESOURCES: Cell<usize> = const { Cell::new(0) };
}

/// Explicit release hook for GPU objects.
///
/// Buffers, textures and devices free their memory here; objects without an
/// explicit destroy (pipelines, bind groups, samplers) release on drop.
pub trait GpuRelease {
    fn release(&self);
}

/// A GPU object counted in the per-thread live resource tally.
///
/// Created through [`Tracked::new`]; dropping it releases the object and
/// decrements the tally.
pub struct Tracked<T: GpuRelease> {
    inner: T,
}

impl<T: GpuRelease> Tracked<T> {
    pub fn new(inner: T) -> Self {
        LIVE_GPU_RESOURCES.with(|c| c.set(c.get() + 1));
        Self { inner }
    }
}

impl<T: GpuRelease> Deref for Tracked<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: GpuRelease> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.inner.release();
        LIVE_GPU_RESOURCES.with(|c| c.set(c.get().saturating_sub(1)));
    }
}

/// GPU objects currently alive on this thread.
#[inline]
pub fn live_gpu_resources() -> usize {
    LIVE_GPU_RESOURCES.with(|c| c.get())
}
