pub(crate) mod color;
pub(crate) mod element;
pub(crate) mod group;
pub(crate) mod layout;
pub(crate) mod stage;
