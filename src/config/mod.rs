pub mod cli_config;
