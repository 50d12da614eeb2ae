// Browser glue: mounts a full-viewport canvas behind the page, keeps the
// particle field in sync with resize and mousemove events and drives it from
// requestAnimationFrame until unmounted.

use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::error::MountError;
use crate::field::ParticleField;
use crate::utils::{self, Timer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct ParticlesBackground {
    field: Rc<RefCell<ParticleField>>,
    profiling: Rc<Cell<bool>>,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticlesBackground {
    /// Creates the background canvas and starts animating. When the page
    /// can't provide a 2D canvas the returned handle is simply not mounted.
    pub fn mount() -> ParticlesBackground {
        utils::set_panic_hook();
        let field = Rc::new(RefCell::new(ParticleField::new(
            0.0,
            0.0,
            FieldConfig::default(),
            &mut rand::thread_rng(),
        )));
        let profiling = Rc::new(Cell::new(false));
        let mounted = match Mounted::attach(&field, &profiling) {
            Ok(mounted) => {
                let field = field.borrow();
                log!(
                    "particle background mounted: {} particles on {}x{}",
                    field.len(),
                    field.width(),
                    field.height()
                );
                Some(mounted)
            }
            Err(e) => {
                warn!("particle background not started: {}", e);
                None
            }
        };
        ParticlesBackground {
            field,
            profiling,
            mounted,
        }
    }

    /// Stops the animation, removes the listeners and the canvas. Safe to
    /// call more than once.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.detach();
            log!("particle background unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().len()
    }

    pub fn pointer_x(&self) -> f64 {
        self.field.borrow().pointer().x
    }

    pub fn pointer_y(&self) -> f64 {
        self.field.borrow().pointer().y
    }

    pub fn generation(&self) -> u64 {
        self.field.borrow().generation()
    }

    // Frames drawn since mounting
    pub fn frames(&self) -> u64 {
        self.field.borrow().frames()
    }

    // Wraps every frame in console.time / console.timeEnd
    pub fn set_profiling(&self, enabled: bool) {
        self.profiling.set(enabled);
    }
}

impl Drop for ParticlesBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

// Everything that has to be torn down on unmount
struct Mounted {
    window: Window,
    canvas: HtmlCanvasElement,
    on_resize: Closure<dyn FnMut()>,
    on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl Mounted {
    fn attach(
        field: &Rc<RefCell<ParticleField>>,
        profiling: &Rc<Cell<bool>>,
    ) -> Result<Mounted, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoBody)?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)?;
        canvas.set_attribute("data-testid", "particles-background")?;
        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("inset", "0")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "0")?;

        let context = canvas
            .get_context("2d")?
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);
        let config = *field.borrow().config();
        *field.borrow_mut() =
            ParticleField::new(width as f64, height as f64, config, &mut rand::thread_rng());

        let on_resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let field = field.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = viewport_size(&window);
                canvas.set_width(width);
                canvas.set_height(height);
                field
                    .borrow_mut()
                    .resize(width as f64, height as f64, &mut rand::thread_rng());
            }) as Box<dyn FnMut()>)
        };

        let on_pointer_move = {
            let field = field.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                field
                    .borrow_mut()
                    .set_pointer(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            // The closure holds a handle to itself so it can reschedule;
            // `detach` breaks that cycle.
            let frame_handle = frame.clone();
            let frame_id = frame_id.clone();
            let window = window.clone();
            let field = field.clone();
            let profiling = profiling.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                {
                    let _timer = if profiling.get() {
                        Some(Timer::new("ParticleField::step"))
                    } else {
                        None
                    };
                    let mut surface = CanvasSurface::new(&context);
                    if let Err(e) = field.borrow_mut().step(&mut surface) {
                        warn!("failed to draw particle frame: {:?}", e);
                    }
                }
                if let Some(callback) = frame_handle.borrow().as_ref() {
                    frame_id.set(request_animation_frame(&window, callback).ok());
                }
            }) as Box<dyn FnMut()>));
        }

        let mounted = Mounted {
            window,
            canvas,
            on_resize,
            on_pointer_move,
            frame,
            frame_id,
        };
        match mounted.start(&body) {
            Ok(()) => Ok(mounted),
            Err(e) => {
                mounted.detach();
                Err(e.into())
            }
        }
    }

    fn start(&self, body: &web_sys::HtmlElement) -> Result<(), JsValue> {
        body.append_child(&self.canvas)?;
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
        self.window.add_event_listener_with_callback(
            "mousemove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        )?;
        if let Some(callback) = self.frame.borrow().as_ref() {
            self.frame_id
                .set(Some(request_animation_frame(&self.window, callback)?));
        }
        Ok(())
    }

    fn detach(self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        self.frame.borrow_mut().take();
        self.canvas.remove();
    }
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
