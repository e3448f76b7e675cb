use crate::core::lattice::Lattice;
use crate::core::sampling::sample_window;
use crate::core::trail::{PointerTracker, TrailField, DWELL_BOOST, MOVE_BOOST};
use crate::dom;
use crate::render;
use glam::DVec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame needs: the surface, the source image, the
/// trail field and the shared flags mutated by event handlers.
/// Constructed once on attach; there is no hidden module state.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub image: web::HtmlImageElement,
    pub enabled: Rc<Cell<bool>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub trail: TrailField,
    // Elapsed-time clock; keeps running while disabled so the
    // traveling wave resumes from the current phase on re-enable.
    pub started_at: Instant,
}

impl FrameContext {
    /// Render one frame at the given elapsed time. The caller reads
    /// the clock so the wave phase is independent of render state;
    /// pausing and resuming continues from the current elapsed time.
    pub fn frame(&mut self, now: f64) {
        dom::sync_canvas_backing_size(&self.canvas, &self.ctx);
        if !self.image.complete()
            || self.image.natural_width() == 0
            || self.image.natural_height() == 0
        {
            return;
        }
        let (vw, vh) = dom::logical_viewport_size();
        if vw <= 0.0 || vh <= 0.0 {
            return;
        }

        let enabled = self.enabled.get();
        let lattice = Lattice::for_viewport(vw, vh);

        // Drain queued pointer samples into the trail field.
        let (pointer_seen, moves) = {
            let mut ptr = self.pointer.borrow_mut();
            let seen = ptr.seen;
            if seen {
                self.trail.smooth_toward(ptr.target);
            }
            let moves = if enabled && seen {
                std::mem::take(&mut ptr.moves)
            } else {
                ptr.moves.clear();
                Vec::new()
            };
            (seen, moves)
        };
        if enabled && pointer_seen {
            // Faint continuous trail at the smoothed cursor, brighter
            // reinforcement wherever the pointer actually moved.
            let cursor = self.trail.cursor;
            self.trail.register_sample(cursor, DWELL_BOOST, now);
            for pos in moves {
                self.trail.register_sample(pos, MOVE_BOOST, now);
            }
        }
        self.trail.decay(now);

        render::begin_mosaic_pass(&self.ctx, vw, vh);
        let viewport_center = DVec2::new(vw / 2.0, vh / 2.0);
        let cursor = (enabled && pointer_seen).then_some(self.trail.cursor);
        let img_w = self.image.natural_width() as f64;
        let img_h = self.image.natural_height() as f64;
        for cell in lattice.cells() {
            let win = sample_window(
                cell.center(&lattice),
                viewport_center,
                cursor,
                now,
                img_w,
                img_h,
                enabled,
            );
            render::draw_cell(&self.ctx, &self.image, &cell, &lattice, &win);
        }
        render::end_mosaic_pass(&self.ctx);

        render::draw_trail(&self.ctx, &lattice, &self.trail, now);
        render::draw_veil(&self.ctx, vw, vh, !self.trail.is_empty());
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Explicit frame scheduler: one stored RAF closure and a
/// pending-frame flag. The tick reschedules itself only while the
/// enabled flag is set; `request` forces a single redraw otherwise
/// (resize, toggle, image load).
#[derive(Clone)]
pub struct Scheduler {
    tick: TickClosure,
    pending: Rc<Cell<bool>>,
}

impl Scheduler {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(false));
        let tick_inner = tick.clone();
        let pending_inner = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_inner.set(false);
            let enabled = {
                let mut fc = frame_ctx.borrow_mut();
                let now = fc.started_at.elapsed().as_secs_f64();
                fc.frame(now);
                fc.enabled.get()
            };
            if enabled {
                request_raf(&tick_inner, &pending_inner);
            }
        }) as Box<dyn FnMut()>));
        Self { tick, pending }
    }

    /// Schedule at most one frame.
    pub fn request(&self) {
        request_raf(&self.tick, &self.pending);
    }
}

fn request_raf(tick: &TickClosure, pending: &Rc<Cell<bool>>) {
    if pending.get() {
        return;
    }
    let Some(window) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            pending.set(true);
        }
    }
}
