// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Animated spinner that rotates smoothly.
///
/// The widget itself is stateless; the caller owns the rotation angle and
/// advances it on a tick subscription.
pub struct Spinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl Spinner {
    /// Creates a new spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Overrides the rendered size.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
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
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                // Track circle (subtle)
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: opacity::SPINNER_TRACK,
                        ..self.color
                    }),
                );

                // Rotating arc from rotation angle to rotation + 180°
                let start_angle = self.rotation - PI / 2.0; // -90° offset to start at top
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                let start_x = center.x + radius * start_angle.cos();
                let start_y = center.y + radius * start_angle.sin();
                arc_path.move_to(Point::new(start_x, start_y));

                // Approximate the arc with short line segments
                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                // segments=30, i∈[1,30] - well within f32 precision
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    let x = center.x + radius * angle.cos();
                    let y = center.y + radius * angle.sin();
                    arc_path.line_to(Point::new(x, y));
                }

                let arc = arc_path.build();
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn spinner_defaults_to_button_size() {
        let spinner = Spinner::new(palette::WHITE, 0.0);
        assert_eq!(spinner.size, sizing::SPINNER);
    }

    #[test]
    fn spinner_size_can_be_overridden() {
        let spinner = Spinner::new(palette::WHITE, 0.0).size(sizing::ICON_LG);
        assert_eq!(spinner.size, sizing::ICON_LG);
    }

    #[test]
    fn spinner_converts_to_element() {
        #[derive(Debug, Clone)]
        enum TestMessage {}
        let _: iced::Element<'static, TestMessage> =
            Spinner::new(palette::WHITE, PI / 4.0).into_element();
    }
}
