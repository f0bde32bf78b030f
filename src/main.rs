//! Ball Hunt entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use ball_hunt::InitError;
    use ball_hunt::consts::*;
    use ball_hunt::hud::CounterSink;
    use ball_hunt::renderer::{RenderState, TrailCanvas};
    use ball_hunt::sim::{Game, WorldConfig};

    const CANVAS_ID: &str = "canvas";

    /// `<p>` under the canvas holding the ball count
    struct DomCounter {
        el: Element,
    }

    impl CounterSink for DomCounter {
        fn show(&mut self, text: &str) {
            self.el.set_text_content(Some(text));
        }
    }

    /// Everything the frame callback needs
    struct App {
        game: Game,
        canvas: TrailCanvas,
        render_state: RenderState,
        counter: DomCounter,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.canvas, &mut self.counter);

            match self.render_state.render(&self.canvas) {
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

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Ball Hunt starting...");

        match start().await {
            Ok(()) => log::info!("Ball Hunt running!"),
            Err(e) => log::error!("Ball Hunt failed to start: {}", e),
        }
    }

    async fn start() -> Result<(), InitError> {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::NoCanvas(CANVAS_ID.into()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.into()))?;

        // Canvas fills the window and keeps that size for the whole run
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_WIDTH as f64) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_HEIGHT as f64) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(WorldConfig::with_size(width as f32, height as f32), seed)?;
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| InitError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| InitError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let body = document.body().ok_or(InitError::NoDocument)?;
        let paragraph = document
            .create_element("p")
            .map_err(|e| InitError::Dom(format!("{:?}", e)))?;
        paragraph
            .set_attribute("style", "color: white")
            .map_err(|e| InitError::Dom(format!("{:?}", e)))?;
        body.append_child(&paragraph)
            .map_err(|e| InitError::Dom(format!("{:?}", e)))?;

        let mut counter = DomCounter { el: paragraph };
        game.start(&mut counter);

        let app = Rc::new(RefCell::new(App {
            game,
            canvas: TrailCanvas::new(width as f32, height as f32),
            render_state,
            counter,
        }));

        setup_input_handlers(&window, app.clone());
        request_animation_frame(app);

        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Each key-down queues at most one step; the next frame applies it
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().game.key_down(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use ball_hunt::InitError;
    use ball_hunt::consts::*;
    use ball_hunt::hud::LogSink;
    use ball_hunt::renderer::TrailCanvas;
    use ball_hunt::sim::{Direction, Game, WorldConfig, run as run_frames};

    /// One minute at 60 Hz
    const FRAMES: u64 = 3600;

    /// Sweeps the hunter across the canvas row by row, like a lawnmower
    struct Sweep {
        heading: Direction,
    }

    impl Sweep {
        fn next_key(&mut self, game: &Game) -> &'static str {
            let world = &game.world;
            let pos = world.hunter.motion.pos;
            let reach = world.hunter.size + HUNTER_STEP;

            let at_edge = match self.heading {
                Direction::Right => pos.x + reach >= world.width,
                _ => pos.x - reach <= 0.0,
            };
            if !at_edge {
                return key_for(self.heading);
            }
            self.heading = match self.heading {
                Direction::Right => Direction::Left,
                _ => Direction::Right,
            };
            if pos.y + reach >= world.height { "w" } else { "s" }
        }
    }

    fn key_for(dir: Direction) -> &'static str {
        match dir {
            Direction::Left => "a",
            Direction::Right => "d",
            Direction::Up => "w",
            Direction::Down => "s",
        }
    }

    pub fn run() -> Result<(), InitError> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut game = Game::new(WorldConfig::default(), seed)?;
        let mut canvas = TrailCanvas::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let mut sink = LogSink;
        let mut sweep = Sweep {
            heading: Direction::Right,
        };

        let frames = run_frames(
            &mut game,
            &mut canvas,
            &mut sink,
            |g| {
                let key = sweep.next_key(g);
                g.key_down(key);
            },
            |r| r.frame >= FRAMES || r.live == 0,
        );

        log::info!(
            "Ran {} frames: {} of {} balls left, {} trail layers ({} vertices)",
            frames,
            game.world.live_count(),
            game.world.bouncers().len(),
            canvas.layer_count(),
            canvas.vertices().len()
        );

        match serde_json::to_string_pretty(&game.world) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize world snapshot: {}", e),
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Hunt (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("Ball Hunt failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
