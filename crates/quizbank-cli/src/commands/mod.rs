pub mod init;
pub mod interactive;
pub mod levels;
