pub mod server_args;
