mod environment;
mod exit_code;
