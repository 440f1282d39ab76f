pub(crate) mod anim;
pub(crate) mod directive;
pub(crate) mod ease;
pub mod ops;
