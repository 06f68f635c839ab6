// SPDX-License-Identifier: MPL-2.0
//! The spinning wheel: segment list, spin state machine, and editor view.
//!
//! The controller owns the ordered segment list and the cumulative
//! rotation. A spin adds at least ten full turns plus a uniformly random
//! offset to the rotation target; the animation tick subscription then
//! eases the displayed angle toward the target and reports the winning
//! segment when the configured duration has elapsed. All editing
//! operations are total: out-of-range indices are ignored.

pub mod canvas;
pub mod segment;

pub use segment::Segment;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::Cache;
use iced::widget::{button, text, text_input, Canvas, Column, Container, Row};
use iced::{alignment, Element, Length};
use rand::Rng;
use std::time::{Duration, Instant};

/// Minimum rotation added by every spin: ten full turns.
const SPIN_FULL_TURNS_DEG: f64 = 3600.0;

/// Width of the uniform random offset on top of the full turns. The
/// offset alone decides the winning wedge.
const SPIN_RANDOM_RANGE_DEG: f64 = 360.0;

/// An in-flight spin: the rotation endpoints and when it started.
#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    from: f64,
    to: f64,
    started_at: Instant,
}

/// Messages emitted by the wheel's widgets and the animation subscription.
#[derive(Debug, Clone)]
pub enum Message {
    NameEdited(usize, String),
    ColorPicked(usize, iced::Color),
    AddPressed,
    RemovePressed(usize),
    SpinPressed,
    AnimationTick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The spin settled; `winner` is the segment under the pointer, absent
    /// only if the wheel was emptied while it was still turning.
    SpinFinished { winner: Option<Segment> },
}

/// Contextual data needed to render the wheel screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Wheel state: the segment list, cumulative rotation, and active spin.
pub struct State {
    segments: Vec<Segment>,
    /// Cumulative rotation target in degrees. Grows without bound across
    /// spins; never normalized (the visual transform doesn't care, and the
    /// winner computation reduces modulo 360 on read).
    rotation: f64,
    /// Rotation currently shown by the canvas; trails `rotation` while a
    /// spin is easing toward it.
    displayed_rotation: f64,
    spin: Option<ActiveSpin>,
    spin_duration: Duration,
    cache: Cache,
}

impl State {
    /// Creates the wheel with its three default segments.
    #[must_use]
    pub fn new(spin_duration: Duration) -> Self {
        let segments = (0..3)
            .map(|i| Segment::new(Segment::default_name(i), segment::WHEEL_PALETTE[i]))
            .collect();

        Self {
            segments,
            rotation: 0.0,
            displayed_rotation: 0.0,
            spin: None,
            spin_duration,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Cumulative rotation target in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn spin_duration(&self) -> Duration {
        self.spin_duration
    }

    /// Index of the wedge currently under the stationary pointer at the
    /// top of the wheel, based on the rotation target.
    #[must_use]
    pub fn winning_index(&self) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }

        let wedge_angle = 360.0 / self.segments.len() as f64;
        // The pointer sits at the top of the wheel: 270° in the y-down
        // drawing coordinates, where wedge 0 starts on the +x axis.
        let pointer_angle = (270.0 - self.rotation).rem_euclid(360.0);
        let index = (pointer_angle / wedge_angle) as usize;
        Some(index.min(self.segments.len() - 1))
    }

    /// Processes a wheel message, returning the event the shell cares
    /// about.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameEdited(index, name) => {
                if let Some(segment) = self.segments.get_mut(index) {
                    segment.name = name;
                    self.cache.clear();
                }
                Event::None
            }
            Message::ColorPicked(index, color) => {
                if let Some(segment) = self.segments.get_mut(index) {
                    segment.color = color;
                    self.cache.clear();
                }
                Event::None
            }
            Message::AddPressed => {
                self.segments.push(Segment::new(
                    Segment::default_name(self.segments.len()),
                    segment::DEFAULT_SEGMENT_COLOR,
                ));
                self.cache.clear();
                Event::None
            }
            Message::RemovePressed(index) => {
                if index < self.segments.len() {
                    self.segments.remove(index);
                    self.cache.clear();
                }
                Event::None
            }
            Message::SpinPressed => {
                self.start_spin(&mut rand::rng(), Instant::now());
                Event::None
            }
            Message::AnimationTick(now) => self.tick(now),
        }
    }

    /// Starts a spin unless one is active or the wheel is empty. The added
    /// rotation is always in `[3600, 3960)` degrees.
    fn start_spin<R: Rng>(&mut self, rng: &mut R, now: Instant) {
        if self.spin.is_some() || self.segments.is_empty() {
            return;
        }

        let additional = SPIN_FULL_TURNS_DEG + rng.random_range(0.0..SPIN_RANDOM_RANGE_DEG);
        let from = self.rotation;
        self.rotation += additional;
        self.spin = Some(ActiveSpin {
            from,
            to: self.rotation,
            started_at: now,
        });
        self.cache.clear();
    }

    /// Advances the spin animation; completes the spin once the configured
    /// duration has elapsed.
    fn tick(&mut self, now: Instant) -> Event {
        let Some(spin) = self.spin else {
            return Event::None;
        };

        let elapsed = now.saturating_duration_since(spin.started_at);
        if elapsed >= self.spin_duration {
            self.displayed_rotation = spin.to;
            self.spin = None;
            self.cache.clear();
            let winner = self.winning_index().map(|i| self.segments[i].clone());
            return Event::SpinFinished { winner };
        }

        let progress = elapsed.as_secs_f64() / self.spin_duration.as_secs_f64();
        self.displayed_rotation = spin.from + (spin.to - spin.from) * ease_out_cubic(progress);
        self.cache.clear();
        Event::None
    }

    /// Renders the wheel, the per-segment editor rows, and the controls.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("wheel-title")).size(typography::TITLE_LG);

        let wheel_canvas = Canvas::new(canvas::WheelCanvas {
            segments: &self.segments,
            rotation_degrees: self.displayed_rotation,
            cache: &self.cache,
        })
        .width(Length::Fixed(sizing::WHEEL_CANVAS))
        .height(Length::Fixed(sizing::WHEEL_CANVAS));

        let mut editor = Column::new().spacing(spacing::XS);
        for (index, segment) in self.segments.iter().enumerate() {
            editor = editor.push(self.segment_row(ctx.i18n, index, segment));
        }

        let can_interact = !self.is_spinning() && !self.segments.is_empty();

        let add_button = button(
            text(ctx.i18n.tr("wheel-add-button")).size(typography::BODY_LG),
        )
        .on_press_maybe(can_interact.then_some(Message::AddPressed))
        .style(styles::button::secondary)
        .padding([spacing::SM, spacing::MD]);

        let spin_label = if self.is_spinning() {
            ctx.i18n.tr("wheel-spinning-button")
        } else {
            ctx.i18n.tr("wheel-spin-button")
        };
        let spin_button = button(text(spin_label).size(typography::BODY_LG))
            .on_press_maybe(can_interact.then_some(Message::SpinPressed))
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::LG]);

        let controls = Row::new()
            .spacing(spacing::MD)
            .push(add_button)
            .push(spin_button);

        Column::new()
            .push(title)
            .push(wheel_canvas)
            .push(Container::new(editor).padding(spacing::SM))
            .push(controls)
            .spacing(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    /// One editor row: remove control, name input, color swatches.
    fn segment_row<'a>(
        &'a self,
        i18n: &'a I18n,
        index: usize,
        segment: &'a Segment,
    ) -> Element<'a, Message> {
        let remove_button = button(text("×").size(typography::TITLE_SM))
            .on_press(Message::RemovePressed(index))
            .style(styles::button::destructive)
            .padding(spacing::XXS);

        let placeholder = i18n.tr_with_args(
            "wheel-name-placeholder",
            &[("index", &(index + 1).to_string())],
        );
        let name_input = text_input(&placeholder, &segment.name)
            .on_input(move |value| Message::NameEdited(index, value))
            .size(typography::BODY)
            .width(Length::Fixed(sizing::NAME_INPUT_WIDTH));

        let mut swatches = Row::new().spacing(spacing::XXS);
        for color in segment::WHEEL_PALETTE {
            let selected = color == segment.color;
            swatches = swatches.push(
                button(text(""))
                    .on_press(Message::ColorPicked(index, color))
                    .style(styles::button::swatch(color, selected))
                    .width(Length::Fixed(sizing::COLOR_SWATCH))
                    .height(Length::Fixed(sizing::COLOR_SWATCH)),
            );
        }

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(remove_button)
            .push(name_input)
            .push(swatches)
            .into()
    }
}

/// Ease-out cubic: fast start, long settle, like the original transition.
fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
