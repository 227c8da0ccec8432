mod loop_handler;

pub use loop_handler::{run, run_headless, write_json_report, write_text_report};
