//! Precise Stacker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use glam::Vec2;
    use precise_stacker::consts::SIM_DT;
    use precise_stacker::highscores::LocalStorageStore;
    use precise_stacker::renderer::RenderState;
    use precise_stacker::{Game, Hud, StartupError, Tuning};

    const CANVAS_ID: &str = "gameCanvas";

    /// Score text and game over overlay in the page
    struct DomHud {
        score: Option<Element>,
        high_score: Option<Element>,
        overlay: Option<HtmlElement>,
        final_score: Option<Element>,
    }

    impl DomHud {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                high_score: document.get_element_by_id("highScore"),
                overlay: document
                    .get_element_by_id("gameOverOverlay")
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
                final_score: document.get_element_by_id("finalScoreMessage"),
            }
        }

        fn set_overlay(&self, display: &str) {
            if let Some(el) = &self.overlay {
                // Only touch `display`; the rest of the inline style stays
                let _ = el.style().set_property("display", display);
            }
        }
    }

    impl Hud for DomHud {
        fn score_changed(&mut self, score: u32, high_score: u32) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&format!("Score: {}", score)));
            }
            if let Some(el) = &self.high_score {
                el.set_text_content(Some(&format!("High Score: {}", high_score)));
            }
        }

        fn game_over(&mut self, final_score: u32) {
            if let Some(el) = &self.final_score {
                el.set_text_content(Some(&format!("Your Score: {}", final_score)));
            }
            self.set_overlay("flex");
        }

        fn reset(&mut self) {
            self.set_overlay("none");
        }
    }

    /// Game instance holding all state
    struct App {
        game: Game<LocalStorageStore, DomHud>,
        render_state: RenderState,
        last_time: f64,
    }

    impl App {
        /// Render the current frame
        fn render(&mut self) {
            let rects = self.game.draw_list();
            match self.render_state.render(&rects) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        log::info!("Precise Stacker starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(StartupError::MissingElement(CANVAS_ID))?
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas(CANVAS_ID))?;

        let tuning = Tuning::load();
        let view = Vec2::new(tuning.canvas_width, tuning.canvas_height);

        // Backing store at device resolution, layout size stays logical
        let dpr = window.device_pixel_ratio();
        let width = (tuning.canvas_width as f64 * dpr) as u32;
        let height = (tuning.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", tuning.canvas_width));
        let _ = style.set_property("height", &format!("{}px", tuning.canvas_height));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, view).await?;

        let game = Game::new(tuning, LocalStorageStore, DomHud::new(&document));
        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_restart_button(&document, app.clone());

        request_animation_frame(app);

        log::info!("Precise Stacker running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.activate();
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start; keep the page from scrolling while the block is in play
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if app.borrow_mut().game.activate() {
                    event.prevent_default();
                }
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Leave the key alone when the game ignores it, so a focused
                // restart button still activates
                if matches!(event.key().as_str(), " " | "Enter")
                    && app.borrow_mut().game.activate()
                {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("restartButton") else {
            log::warn!("No restart button found");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().game.restart();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.game.frame(dt);
            a.render();
        }

        request_animation_frame(app);
    }

    /// Tell the player the game could not start
    pub fn report_startup_error(err: &StartupError) {
        log::error!("Game cannot start: {}", err);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&err.user_message());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    if let Err(e) = wasm_game::run().await {
        wasm_game::report_startup_error(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Precise Stacker (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path),
        None => precise_stacker::Tuning::default(),
    };

    let score = autoplay::run(tuning);
    println!("Autoplay finished with score {}", score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Read a tuning JSON file, falling back to defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> precise_stacker::Tuning {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| precise_stacker::Tuning::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            precise_stacker::Tuning::default()
        }
    }
}

/// Headless demo: a bot taps when the swinging block lines up with the stack
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use precise_stacker::consts::SIM_DT;
    use precise_stacker::sim::GamePhase;
    use precise_stacker::{Game, Hud, MemoryStore, Tuning};

    /// How far off (pixels) the bot is willing to tap
    const AIM_TOLERANCE: f32 = 6.0;
    /// Give up after this many frames (about ten minutes)
    const MAX_FRAMES: u32 = 60 * 600;

    struct LogHud;

    impl Hud for LogHud {
        fn score_changed(&mut self, score: u32, high_score: u32) {
            log::info!("Score: {} (best {})", score, high_score);
        }

        fn game_over(&mut self, final_score: u32) {
            log::info!("Game over! Final score {}", final_score);
        }

        fn reset(&mut self) {}
    }

    pub fn run(tuning: Tuning) -> u32 {
        let mut game = Game::new(tuning, MemoryStore::new(), LogHud);

        for _ in 0..MAX_FRAMES {
            let state = game.state();
            if state.phase == GamePhase::GameOver {
                break;
            }

            let lined_up = match (state.current, state.top()) {
                (Some(current), Some(top)) => {
                    state.phase == GamePhase::Swinging
                        && (current.block.x - top.x).abs() <= AIM_TOLERANCE
                }
                _ => false,
            };
            if lined_up {
                game.activate();
            }

            game.frame(SIM_DT);
        }

        game.state().score
    }
}
