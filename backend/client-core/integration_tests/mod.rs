mod error;
mod helpers;
mod shell_handle;
mod translation_client;
