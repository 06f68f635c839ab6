// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering for the wheel.
//!
//! The wedges are laid out once in wheel-local coordinates (wedge 0
//! starting on the +x axis) and the current rotation is applied as a frame
//! transform, so the per-wedge geometry never depends on the spin. The
//! pointer is drawn last, outside the rotated frame, and stays put.

use super::segment::Segment;
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::widget::text::Alignment as TextAlignment;
use iced::{alignment, mouse, Color, Point, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Label anchor distance from the wheel center, as a fraction of the
/// radius.
const LABEL_RADIUS_FACTOR: f32 = 0.6;

/// Label font size.
const LABEL_SIZE: f32 = 16.0;

/// Dark neutral label color, readable on every palette fill.
const LABEL_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);

/// Half-width and length of the pointer triangle.
const POINTER_HALF_WIDTH: f32 = 10.0;
const POINTER_LENGTH: f32 = 20.0;

/// Line segments used to approximate one wedge arc per degree-ish of
/// sweep; keeps single-segment wheels round.
const ARC_STEP_DEG: f32 = 3.0;

/// Canvas program that draws the segmented wheel and the pointer.
pub struct WheelCanvas<'a> {
    pub segments: &'a [Segment],
    pub rotation_degrees: f64,
    pub cache: &'a Cache,
}

impl<Message> canvas::Program<Message> for WheelCanvas<'_> {
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
                let radius = frame.width().min(frame.height()) / 2.0;

                if !self.segments.is_empty() {
                    self.draw_wheel(frame, center, radius);
                }

                draw_pointer(frame, center, radius);
            });

        vec![geometry]
    }
}

impl WheelCanvas<'_> {
    /// Draws every wedge and label inside a frame rotated by the current
    /// spin angle around the wheel center.
    fn draw_wheel(&self, frame: &mut Frame, center: Point, radius: f32) {
        let rotation = (self.rotation_degrees as f32).to_radians();
        let wedge_angle = 2.0 * PI / self.segments.len() as f32;

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(rotation);

            for (index, segment) in self.segments.iter().enumerate() {
                let start_angle = index as f32 * wedge_angle;
                let end_angle = start_angle + wedge_angle;

                let wedge = wedge_path(radius, start_angle, end_angle);
                frame.fill(&wedge, segment.color);

                draw_label(frame, segment, radius, start_angle + wedge_angle / 2.0);
            }

            // Thin rim so wedge boundaries read at one or two segments.
            let rim = Path::circle(Point::ORIGIN, radius - 0.5);
            frame.stroke(
                &rim,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette::GRAY_400),
            );
        });
    }
}

/// Pie-slice path from the wheel center, arc approximated by short line
/// segments.
fn wedge_path(radius: f32, start_angle: f32, end_angle: f32) -> Path {
    let sweep = end_angle - start_angle;
    let steps = ((sweep.to_degrees() / ARC_STEP_DEG).ceil() as usize).max(2);

    Path::new(|builder| {
        builder.move_to(Point::ORIGIN);
        #[allow(clippy::cast_precision_loss)]
        for i in 0..=steps {
            let angle = start_angle + sweep * (i as f32 / steps as f32);
            builder.line_to(Point::new(radius * angle.cos(), radius * angle.sin()));
        }
        builder.close();
    })
}

/// Draws a segment label at 0.6×radius along the wedge bisector, rotated
/// to align with it.
fn draw_label(frame: &mut Frame, segment: &Segment, radius: f32, bisector: f32) {
    let anchor = Vector::new(
        bisector.cos() * radius * LABEL_RADIUS_FACTOR,
        bisector.sin() * radius * LABEL_RADIUS_FACTOR,
    );

    frame.with_save(|frame| {
        frame.translate(anchor);
        frame.rotate(bisector);
        frame.fill_text(Text {
            content: segment.name.clone(),
            position: Point::ORIGIN,
            color: LABEL_COLOR,
            size: LABEL_SIZE.into(),
            align_x: TextAlignment::Center,
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
    });
}

/// Stationary pointer: a downward triangle at the top center, drawn above
/// the wedges and never rotated.
fn draw_pointer(frame: &mut Frame, center: Point, radius: f32) {
    let tip_y = center.y - radius + POINTER_LENGTH;
    let base_y = center.y - radius;

    let pointer = Path::new(|builder| {
        builder.move_to(Point::new(center.x - POINTER_HALF_WIDTH, base_y));
        builder.line_to(Point::new(center.x + POINTER_HALF_WIDTH, base_y));
        builder.line_to(Point::new(center.x, tip_y));
        builder.close();
    });

    frame.fill(&pointer, palette::ERROR_500);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_angles_partition_the_circle() {
        for count in 1..=12_usize {
            let wedge_angle = 2.0 * PI / count as f32;
            let mut end = 0.0_f32;
            for index in 0..count {
                let start = index as f32 * wedge_angle;
                // Consecutive wedges share their boundary exactly.
                assert!((start - end).abs() < 1e-5);
                end = start + wedge_angle;
            }
            // The last wedge closes the circle.
            assert!((end - 2.0 * PI).abs() < 1e-4);
        }
    }

    #[test]
    fn arc_step_count_grows_with_sweep() {
        let quarter = ((90.0_f32 / ARC_STEP_DEG).ceil() as usize).max(2);
        let full = ((360.0_f32 / ARC_STEP_DEG).ceil() as usize).max(2);
        assert!(full > quarter);
        assert!(quarter >= 2);
    }
}
