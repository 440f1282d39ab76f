//! portfolio-reel scripts a portfolio video as seven timed scenes.
//!
//! # Pipeline overview
//!
//! 1. **Direct**: [`Director::run`] builds each scene's elements on the engine's [`Stage`] and
//!    issues play batches, one scene at a time, behind a gradient backdrop.
//! 2. **Realize**: an [`Engine`] turns each batch into motion. [`TimelineEngine`] records it as a
//!    keyframe [`Timeline`] (the hand-off artifact for a renderer).
//! 3. **Evaluate**: [`Evaluator::eval_frame`] samples the timeline at any frame.
//! 4. **Stream** (optional): [`render_frames`] pushes evaluated frames into a [`FrameSink`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same content, config and seed yield the same timeline and the same
//!   [`TimelineFingerprint`].
//! - **Scoped scenes**: a scene's elements never outlive its [`SceneScope`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod content;
mod director;
mod encode;
mod engine;
mod eval;
mod foundation;
mod scene;
mod scenes;
mod timeline;

pub use animation::anim::{Lerp, Segment, Track};
pub use animation::directive::{
    DEFAULT_RUN_TIME, Directive, DirectiveKind, Play, TransformSpec, WriteStyle, lagged_windows,
};
pub use animation::ease::Ease;
pub use animation::ops;
pub use config::{BackgroundStyle, Quality, ReelConfig};
pub use content::{
    Contact, ContactLine, Education, Feature, Interest, Intro, MAX_PROJECTS, Portfolio, Project,
    Skill, Website,
};
pub use director::{Director, SceneKind};
pub use encode::pipeline::{RenderStats, render_frames};
pub use encode::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use engine::Engine;
pub use engine::timeline::TimelineEngine;
pub use eval::evaluator::{EvaluatedElement, Evaluator, FrameState};
pub use foundation::core::{
    Canvas, DOWN, FRAME_HEIGHT_UNITS, Fps, FrameIndex, FrameRange, FrameSize, LEFT, Point, RIGHT,
    Rect, UP, Vec2,
};
pub use foundation::error::{ReelError, ReelResult};
pub use scene::color::{Color, Paint, palette};
pub use scene::element::{Element, ElementId, FontWeight, Shape, Stroke, format_decimal};
pub use scene::group::Group;
pub use scene::layout::{DEFAULT_BUFF, EDGE_BUFF, SURROUND_FACTOR};
pub use scene::stage::Stage;
pub use scenes::background::{BACKGROUND_LABEL, create_gradient_background};
pub use scenes::chart::{Bar, BarChart, BarChartSpec, bar_chart};
pub use scenes::education::GPA_LABEL;
pub use scenes::particles::{random_offsets, random_point, scatter_particles};
pub use scenes::{SCENE_FADE_OUT_SECS, SceneScope, TITLE_LABEL, marker_label};
pub use timeline::fingerprint::{TimelineFingerprint, fingerprint_timeline};
pub use timeline::model::{
    Command, CommandRecord, DirectiveRecord, ElementTimeline, SceneSpan, Timeline,
};
