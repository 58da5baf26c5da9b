pub mod scroll_to_top;
