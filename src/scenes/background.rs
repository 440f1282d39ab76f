use crate::{
    animation::directive::Play,
    animation::ops::fade_in,
    config::BackgroundStyle,
    engine::Engine,
    foundation::error::ReelResult,
    scene::color::Paint,
    scene::element::{Element, ElementId},
};

pub const BACKGROUND_LABEL: &str = "background";

/// Spawn the backdrop rectangle and fade it in.
///
/// The backdrop is not owned by any scene and stays on stage for the whole reel.
#[tracing::instrument(level = "debug", skip_all)]
pub fn create_gradient_background<E: Engine + ?Sized>(
    engine: &mut E,
    style: &BackgroundStyle,
) -> ReelResult<ElementId> {
    let id = engine.spawn(
        Element::rectangle(style.width, style.height)
            .no_stroke()
            .paint(Paint::gradient([style.from, style.to]))
            .fill_opacity(style.fill_opacity)
            .label(BACKGROUND_LABEL),
    )?;
    engine.play(Play::one(fade_in(id)))?;
    Ok(id)
}
