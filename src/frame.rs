use crate::events;
use crate::input::{self, DragState};
use crate::overlay;
use crate::render;
use crate::scroll;
use folio_core::{
    ease_opacity, Camera, CameraRig, IdleReminder, NetworkGraph, SceneFade, SectionNode,
    StorySession,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub session: Rc<RefCell<StorySession>>,
    pub reminder: Rc<RefCell<IdleReminder>>,
    pub drag: Rc<RefCell<DragState>>,
    pub rig: CameraRig,
    pub network_opacity: f32,
    pub gpu: Option<render::GpuState>,

    pub mounted_at: Instant,
    pub last_instant: Instant,
    pub reminder_shown: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.mounted_at).as_secs_f32();

        // Sample scroll and react to discrete changes
        let sample = scroll::sample_progress(&self.window);
        let story_events = self.session.borrow_mut().on_scroll(sample);
        let session = self.session.borrow();
        if !story_events.is_empty() {
            events::react(
                &self.document,
                &session,
                &mut self.reminder.borrow_mut(),
                &story_events,
            );
        }
        let chrome = session.chrome();
        overlay::set_section_progress(&self.document, &chrome);

        let due = self.reminder.borrow().is_due(now);
        if due != self.reminder_shown {
            if due {
                log::info!("[frame] idle on the entry screen; showing reminder");
            }
            overlay::set_reminder_visible(&self.document, due);
            self.reminder_shown = due;
        }

        // Camera: scripted target, intro drag offsets, then smoothing
        let intro = !session.is_started();
        let target = session.camera_target(elapsed);
        let fade = SceneFade::new(session.activation(), session.resolved(), session.table());
        let pose = {
            let mut drag = self.drag.borrow_mut();
            if !chrome.orbit_controls {
                drag.relax(dt_sec);
            }
            self.rig
                .step(input::apply_orbit(target, drag.yaw, drag.pitch), intro, dt_sec)
        };

        let (w, h) = (self.canvas.width(), self.canvas.height());
        let camera = Camera::from_pose(pose, w as f32 / h.max(1) as f32);
        overlay::place_labels(
            &self.document,
            &self.canvas,
            &camera,
            session.nodes(),
            fade.label,
        );
        drop(session);

        self.network_opacity = ease_opacity(self.network_opacity, fade.opacity, dt_sec);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.set_camera(&camera);
            g.set_network_opacity(self.network_opacity);
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    graph: &NetworkGraph,
    sections: &[SectionNode],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, graph, sections).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Running requestAnimationFrame loop; dropping it cancels the pending frame
/// and releases the frame context.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    FrameLoop { handle, tick }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
