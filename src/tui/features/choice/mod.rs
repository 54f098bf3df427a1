mod input;
mod render;

pub(crate) use render::render_choice_editor;
