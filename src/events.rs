use crate::constants::{ENTER_BUTTON_ID, RETURN_TO_MAIN_ID, START_SCROLL_VIEWPORTS};
use crate::dom::{self, Listener};
use crate::input::DragState;
use crate::overlay;
use crate::scroll;
use folio_core::{progress_dots, IdleReminder, StoryEvent, StorySession};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<StorySession>>,
    pub reminder: Rc<RefCell<IdleReminder>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Attach every page listener; they detach when the returned guards drop.
pub fn wire(w: &Wiring) -> Vec<Listener> {
    let mut listeners = Vec::new();
    listeners.extend(wire_enter(w));
    listeners.extend(wire_return_to_main(w));
    listeners.extend(wire_activity(w));
    listeners.extend(wire_drag(w));
    listeners.push(wire_resize(w));
    listeners
}

/// Update the page for the discrete changes of one sample or action.
pub fn react(
    document: &web::Document,
    session: &StorySession,
    reminder: &mut IdleReminder,
    events: &[StoryEvent],
) {
    for ev in events {
        match *ev {
            StoryEvent::Started => {
                scroll::set_body_locked(document, false);
                reminder.disarm();
            }
            StoryEvent::Stopped => {
                scroll::set_body_locked(document, true);
                reminder.arm(Instant::now());
            }
            StoryEvent::ChapterChanged { .. } => {
                overlay::update_progress_dots(
                    document,
                    &progress_dots(session.table(), session.progress()),
                );
            }
            StoryEvent::SectionChanged(section) => {
                log::info!("[story] section {:?}", section.map(|s| s.as_str()));
            }
            StoryEvent::SectionBucketChanged(bucket) => {
                log::debug!("[story] section {}0%", bucket);
            }
        }
    }
    overlay::apply_chrome(document, &session.chrome());
}

fn wire_enter(w: &Wiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, ENTER_BUTTON_ID, move || {
        let events = w2.session.borrow_mut().start();
        react(
            &w2.document,
            &w2.session.borrow(),
            &mut w2.reminder.borrow_mut(),
            &events,
        );
        let top = scroll::viewport_height(&w2.window) * START_SCROLL_VIEWPORTS;
        scroll::scroll_to(&w2.window, top);
    })
}

fn wire_return_to_main(w: &Wiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, RETURN_TO_MAIN_ID, move || {
        // Entry screen goes up first so nothing flashes during the scroll
        let events = w2.session.borrow_mut().return_to_main();
        react(
            &w2.document,
            &w2.session.borrow(),
            &mut w2.reminder.borrow_mut(),
            &events,
        );
        scroll::scroll_to(&w2.window, 0.0);
    })
}

fn wire_activity(w: &Wiring) -> Vec<Listener> {
    ["mousemove", "keydown", "touchstart"]
        .into_iter()
        .map(|event| {
            let reminder = w.reminder.clone();
            Listener::new(&w.window, event, move |_| {
                reminder.borrow_mut().activity(Instant::now());
            })
        })
        .collect()
}

fn wire_drag(w: &Wiring) -> Vec<Listener> {
    let down = {
        let drag = w.drag.clone();
        let session = w.session.clone();
        Listener::new(&w.canvas, "pointerdown", move |ev| {
            let orbit_controls = session.borrow().chrome().orbit_controls;
            if let Some(p) = pointer_position(&ev) {
                drag.borrow_mut().begin(p, orbit_controls);
            }
        })
    };
    let moved = {
        let drag = w.drag.clone();
        let canvas = w.canvas.clone();
        Listener::new(&w.window, "pointermove", move |ev| {
            let Some(p) = pointer_position(&ev) else {
                return;
            };
            let viewport = Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32);
            drag.borrow_mut().drag_to(p, viewport);
        })
    };
    let mut listeners = vec![down, moved];
    for event in ["pointerup", "pointercancel"] {
        let drag = w.drag.clone();
        listeners.push(Listener::new(&w.window, event, move |_| {
            drag.borrow_mut().end();
        }));
    }
    listeners
}

fn wire_resize(w: &Wiring) -> Listener {
    dom::sync_canvas_backing_size(&w.canvas);
    let canvas = w.canvas.clone();
    Listener::new(&w.window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas);
    })
}

#[inline]
fn pointer_position(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}
