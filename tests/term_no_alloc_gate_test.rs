use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pixel_grid::core::PixelGrid;
use pixel_grid::term::{compose_into, FrameBuffer, Viewport};
use pixel_grid::types::{Color, Point};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_compose_is_allocation_free_after_warmup() {
    let viewport = Viewport::new(120, 60);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut grid = PixelGrid::new(20, 20, 5);
    grid.fill(Color::WHITE);

    // Warm-up (resize/initial clears).
    compose_into(&grid, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..20 {
            let _ = grid.draw_pixel(Point::new(i, i), Color::RED);
            compose_into(&grid, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
