//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particles_background::{FieldConfig, ParticlesBackground};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn move_pointer(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn resize_window() {
    let event = Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

// Resolves on the next animation frame
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn background_canvas_present() -> bool {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector("[data-testid=particles-background]")
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
fn mount_fills_viewport() {
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();

    let mut background = ParticlesBackground::mount();
    assert!(background.is_mounted());
    assert!(background_canvas_present());
    assert_eq!(
        background.particle_count(),
        FieldConfig::default().particle_count(width.floor(), height.floor())
    );
    background.unmount();
}

#[wasm_bindgen_test]
fn pointer_and_resize_events_reach_the_field() {
    let mut background = ParticlesBackground::mount();
    move_pointer(120, 45);
    assert_eq!(background.pointer_x(), 120.0);
    assert_eq!(background.pointer_y(), 45.0);

    let generation = background.generation();
    resize_window();
    assert_eq!(background.generation(), generation + 1);
    background.unmount();
}

#[wasm_bindgen_test]
fn unmount_detaches_everything() {
    let mut background = ParticlesBackground::mount();
    move_pointer(10, 20);
    background.unmount();
    assert!(!background.is_mounted());
    assert!(!background_canvas_present());

    let generation = background.generation();
    move_pointer(300, 400);
    resize_window();
    assert_eq!(background.pointer_x(), 10.0);
    assert_eq!(background.pointer_y(), 20.0);
    assert_eq!(background.generation(), generation);

    // A second unmount is a no-op
    background.unmount();
}

#[wasm_bindgen_test]
async fn frames_stop_after_unmount() {
    let mut background = ParticlesBackground::mount();
    assert_eq!(background.frames(), 0);
    next_frame().await;
    next_frame().await;
    assert!(background.frames() > 0);

    background.unmount();
    let frames = background.frames();
    next_frame().await;
    next_frame().await;
    assert_eq!(background.frames(), frames);
}
