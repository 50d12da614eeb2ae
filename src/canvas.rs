// Surface backed by a browser 2D canvas context

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

impl<'a> Surface for CanvasSurface<'a> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(
        &mut self,
        center: glm::DVec2,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center.x, center.y, radius, 0.0, PI * 2.0)?;
        self.context
            .set_fill_style(&JsValue::from_str(&color.css_rgba(opacity)));
        self.context.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: glm::DVec2,
        to: glm::DVec2,
        color: Color,
        opacity: f64,
        line_width: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.css_rgba(opacity)));
        self.context.set_line_width(line_width);
        self.context.stroke();
        Ok(())
    }
}
