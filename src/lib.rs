#![cfg(target_arch = "wasm32")]
use folio_core::{CameraRig, ChapterTable, IdleReminder, NetworkGraph, StorySession, SECTION_NODES};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod overlay;
mod render;
mod scroll;

/// Everything that keeps the page alive. Dropping it detaches listeners and
/// stops the frame loop.
struct App {
    _listeners: Vec<dom::Listener>,
    _frames: frame::FrameLoop,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the app down. Deferred so it is safe to call from inside one of the
/// app's own event handlers.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|a| a.borrow_mut().take());
    if app.is_some() {
        spawn_local(async move {
            drop(app);
        });
    }
}

async fn init() -> anyhow::Result<()> {
    if APP.with(|a| a.borrow().is_some()) {
        log::warn!("already running");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // A bad table is fatal: there is no story to tell.
    let table = ChapterTable::reference()?;
    let session = Rc::new(RefCell::new(StorySession::new(table, &SECTION_NODES)));

    // Page starts on the entry screen
    scroll::size_track(&document);
    scroll::set_body_locked(&document, true);
    overlay::build_progress_dots(&document, session.borrow().table());
    overlay::apply_chrome(&document, &session.borrow().chrome());

    let now = Instant::now();
    let mut reminder = IdleReminder::default();
    reminder.arm(now);
    let reminder = Rc::new(RefCell::new(reminder));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    let wiring = events::Wiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        session: session.clone(),
        reminder: reminder.clone(),
        drag: drag.clone(),
    };
    let mut listeners = events::wire(&wiring);
    listeners.push(dom::Listener::new(&window, "pagehide", |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if lifecycle::PageHide::from_persisted(persisted).tears_down() {
            stop();
        } else {
            log::info!("page cached; keeping the app alive");
        }
    }));

    let nodes = session.borrow().nodes().to_vec();
    let graph = NetworkGraph::build(&nodes);
    let gpu = frame::init_gpu(&canvas, &graph, &nodes).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        document,
        canvas,
        session,
        reminder,
        drag,
        rig: CameraRig::default(),
        network_opacity: 1.0,
        gpu,
        mounted_at: now,
        last_instant: Instant::now(),
        reminder_shown: false,
    }));
    let frames = frame::start_loop(frame_ctx);

    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            _listeners: listeners,
            _frames: frames,
        })
    });
    log::info!("folio-web ready");
    Ok(())
}
