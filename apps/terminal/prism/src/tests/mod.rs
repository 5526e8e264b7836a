mod command;
mod error;
mod view;
