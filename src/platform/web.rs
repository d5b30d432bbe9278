//! Browser bindings
//!
//! Thin wasm-bindgen wrappers over the layout core. Every error crosses the
//! boundary as a JS string; nothing is swallowed.

use std::collections::HashMap;
use std::time::Duration;

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::{checked_item_count, interleave};
use crate::animate::{Scheduler, Task, TaskHandle};
use crate::error::{LayoutError, Result};
use crate::layout::{LayoutConfig, compute_positions};
use crate::transform::{CoverFlowStrip, RadialFocus, compute_transform};

fn to_js(err: LayoutError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Spatial layout module loaded");
}

/// Honeycomb positions as interleaved `x, y` pairs
#[wasm_bindgen]
pub fn honeycomb_positions(
    count: i32,
    item_radius: f64,
    ring_spacing: f64,
    angle_offset: f64,
) -> std::result::Result<Float32Array, JsValue> {
    let count = checked_item_count(count as i64).map_err(to_js)?;
    let config = LayoutConfig::new(item_radius * 2.0, item_radius, ring_spacing)
        .with_angle_offset(angle_offset);
    let positions = compute_positions(count, &config).map_err(to_js)?;
    Ok(Float32Array::from(interleave(&positions).as_slice()))
}

/// `[rotation_degrees, opacity, scale]` for an item centered at `item_center_x`
#[wasm_bindgen]
pub fn cover_flow_transform(
    item_center_x: f64,
    viewport_width: f64,
    item_width: f64,
    dead_zone: f64,
) -> std::result::Result<Float32Array, JsValue> {
    let mut strip = CoverFlowStrip::new(viewport_width, item_width);
    strip.dead_zone = dead_zone;
    strip.validate().map_err(to_js)?;
    let out = compute_transform(&strip.input_at(item_center_x)).map_err(to_js)?;
    let values = [
        out.rotation_degrees as f32,
        out.opacity as f32,
        out.scale as f32,
    ];
    Ok(Float32Array::from(&values[..]))
}

/// Index of the radial item nearest the front
#[wasm_bindgen]
pub fn radial_front_index(count: i32, angle_degrees: f64) -> std::result::Result<u32, JsValue> {
    let count = checked_item_count(count as i64).map_err(to_js)?;
    let focus = RadialFocus::new(count, angle_degrees).map_err(to_js)?;
    Ok(focus.front_index() as u32)
}

/// `setInterval`-backed scheduler
#[derive(Default)]
pub struct IntervalScheduler {
    // The closure must outlive the interval; dropping it invalidates the JS callback
    tasks: HashMap<TaskHandle, (i32, Closure<dyn FnMut()>)>,
    next_id: u32,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for IntervalScheduler {
    fn every(&mut self, interval: Duration, task: Task) -> Result<TaskHandle> {
        if interval.is_zero() {
            return Err(LayoutError::InvalidAnimation("task interval must be non-zero"));
        }
        let window = web_sys::window()
            .ok_or_else(|| LayoutError::Platform("no window available".to_string()))?;
        let closure = Closure::wrap(task);
        let millis = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| LayoutError::Platform(format!("setInterval failed: {:?}", e)))?;

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.insert(handle, (id, closure));
        log::debug!("Interval {} started every {}ms", handle.0, millis);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.tasks.remove(&handle) {
            Some((id, _closure)) => {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
                log::debug!("Interval {} cancelled", handle.0);
                true
            }
            None => false,
        }
    }

    fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            for (id, _) in self.tasks.values() {
                window.clear_interval_with_handle(*id);
            }
        }
    }
}
