pub mod line_item;
