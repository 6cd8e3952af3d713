mod config_tests;
mod logging_tests;
