pub mod smush;
