//! Demon Circle entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use demon_circle::renderer::CanvasSurface;
    use demon_circle::sim::SimState;
    use demon_circle::{App, Settings};

    type Game = Rc<RefCell<App<CanvasSurface>>>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {e}").into());
        }

        log::info!("Demon Circle starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas)?;
        let bounds: Vec2 = surface.size();
        log::info!("Canvas {}x{}", bounds.x, bounds.y);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimState::with_settings(bounds, seed, &settings);
        log::info!("Spawned {} balls with seed {}", state.remaining(), seed);

        let game: Game = Rc::new(RefCell::new(App::new(state, surface)));

        setup_keyboard(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Demon Circle running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Game) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if game.borrow_mut().key_down(&event.key()) {
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Game) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Game) {
        // Schedule first so a bad frame cannot stop the loop
        request_animation_frame(game.clone());
        game.borrow_mut().frame();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the headless runner (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use demon_circle::platform::autopilot_key;
    use demon_circle::renderer::DrawList;
    use demon_circle::sim::SimState;
    use demon_circle::{App, Settings};
    use glam::Vec2;

    env_logger::init();
    log::info!("Demon Circle (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let bounds = Vec2::new(800.0, 600.0);
    let state = SimState::with_settings(bounds, seed, &settings);
    log::info!("Spawned {} balls with seed {}", state.remaining(), seed);

    let mut app = App::new(state, DrawList::new());
    for frame in 1..=HEADLESS_FRAMES {
        if let Some(key) = autopilot_key(&app.state) {
            app.key_down(key);
        }
        app.frame();

        if frame % 60 == 0 {
            let counter = app.surface().texts().next().unwrap_or_default();
            log::info!("Frame {}: {}", frame, counter);
        }
    }

    match serde_json::to_string_pretty(&app.state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot failed: {}", e),
    }
}
