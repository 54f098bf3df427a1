mod input;
mod render;

pub(crate) use render::render_purge_editor;
