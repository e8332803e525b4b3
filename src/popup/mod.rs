pub mod content;
pub mod labels;
pub mod sanitize;
