mod input;
mod render;

pub(crate) use render::render_address_list_editor;
