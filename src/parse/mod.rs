pub mod todo_parser;
pub mod todo_serializer;

pub use todo_parser::{TodoPattern, parse_for_todos, parse_line_for_heading, parse_text_for_todos};
pub use todo_serializer::{todo_to_lines, todos_to_string};
