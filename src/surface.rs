// Drawing targets for the particle field. The field only ever clears the
// frame, fills circles and strokes lines, so that is all a surface has to do.

use crate::color::Color;
use std::convert::Infallible;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: glm::DVec2,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: glm::DVec2,
        to: glm::DVec2,
        color: Color,
        opacity: f64,
        line_width: f64,
    ) -> Result<(), Self::Error>;
}

/// Surface that draws nothing, for stepping the simulation without output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    type Error = Infallible;

    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_circle(&mut self, _: glm::DVec2, _: f64, _: Color, _: f64) -> Result<(), Infallible> {
        Ok(())
    }

    fn stroke_line(
        &mut self,
        _: glm::DVec2,
        _: glm::DVec2,
        _: Color,
        _: f64,
        _: f64,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}
