//! Primitive display trait
//!
//! The chart is drawn entirely from three primitives the panel controller
//! renders in hardware: clear-window, line and rectangle.

use crate::color::Rgb;
use crate::error::DisplayError;
use crate::geometry::Window;

/// A display that accepts hardware drawing primitives
///
/// Drawing is only meaningful once the display is ready. Implementations
/// reject earlier calls with
/// [`PreconditionError::NotInitialized`](crate::error::PreconditionError::NotInitialized).
pub trait PrimitiveDisplay {
    /// Clear the whole panel
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw a line from (`x0`,`y0`) to (`x1`,`y1`) of `window`
    fn draw_line(&mut self, window: Window, color: Rgb) -> Result<(), DisplayError>;

    /// Draw a rectangle with the given outline and fill colors
    fn draw_rect(&mut self, window: Window, outline: Rgb, fill: Rgb) -> Result<(), DisplayError>;

    /// Check if the display accepts drawing calls
    fn is_ready(&self) -> bool;
}

impl<T: PrimitiveDisplay + ?Sized> PrimitiveDisplay for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn draw_line(&mut self, window: Window, color: Rgb) -> Result<(), DisplayError> {
        (**self).draw_line(window, color)
    }

    fn draw_rect(&mut self, window: Window, outline: Rgb, fill: Rgb) -> Result<(), DisplayError> {
        (**self).draw_rect(window, outline, fill)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
