mod input;
mod render;

pub(crate) use render::render_credentials_editor;
