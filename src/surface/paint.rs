use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{DiagramError, DiagramResult};
use crate::surface::surface::Primitive;
use crate::surface::viewport::{Frame, Viewport};

const STROKE_WIDTH: u32 = 1;
const FONT_FAMILY: &str = "sans-serif";

/// Paints `primitives`, in the given order, onto a white plotters drawing area
/// and presents it. Circles are unfilled; labels are centred on their anchor.
pub fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &Frame,
    viewport: &Viewport,
    primitives: &[&Primitive],
) -> DiagramResult<()> {
    area.fill(&WHITE).map_err(render_error)?;
    let ink = BLACK.stroke_width(STROKE_WIDTH);

    for primitive in primitives.iter().copied() {
        let drawn = match primitive {
            Primitive::Circle { center, radius } => {
                area.draw(&Circle::new(frame.to_pixel(*center), frame.pixels(*radius), ink))
            }
            Primitive::Line { segment, .. } => area.draw(&PathElement::new(
                vec![frame.to_pixel(segment.start), frame.to_pixel(segment.end)],
                ink,
            )),
            Primitive::Text { anchor, text, font_size } => {
                let style = (FONT_FAMILY, viewport.font_pixels(*font_size))
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                area.draw(&Text::new(text.as_str(), frame.to_pixel(*anchor), style))
            }
        };
        drawn.map_err(render_error)?;
    }

    area.present().map_err(render_error)
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> DiagramError
where
    E: std::error::Error + Send + Sync,
{
    DiagramError::Render(err.to_string())
}
