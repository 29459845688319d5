pub mod data;
pub mod models;
pub mod report;
pub mod session;

pub use session::Session;

#[cfg(test)]
mod test;
