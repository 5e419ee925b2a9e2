pub mod entity_render;
pub mod table;

pub use entity_render::{render_course, render_instructor, render_student};
pub use table::{render_markdown_table, ColumnFilter, Table, TableKind};
