// SPDX-License-Identifier: MPL-2.0
//! Decorative ring motif drawn with Canvas for the guide's title slides.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Rectangle, Renderer, Theme};

/// Number of concentric rings in the motif.
const RING_COUNT: usize = 4;

/// Concentric accent-colored rings, fading outward.
pub struct AccentRings {
    cache: Cache,
    color: Color,
    size: f32,
}

impl AccentRings {
    /// Creates the motif in the given accent color and overall diameter.
    #[must_use]
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            color,
            size,
        }
    }

    /// Creates a Canvas widget from this motif.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AccentRings {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let max_radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                #[allow(clippy::cast_precision_loss)]
                // RING_COUNT is a small constant - well within f32 precision
                for ring in 0..RING_COUNT {
                    let t = (ring + 1) as f32 / RING_COUNT as f32;
                    let radius = max_radius * t;
                    let alpha = 0.8 * (1.0 - t) + 0.1;

                    let circle = Path::circle(center, radius);
                    frame.stroke(
                        &circle,
                        Stroke::default().with_width(2.0).with_color(Color {
                            a: alpha,
                            ..self.color
                        }),
                    );
                }
            });

        vec![geometry]
    }
}
