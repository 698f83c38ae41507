mod run_options_builder;

pub use run_options_builder::RunOptionsBuilder;
