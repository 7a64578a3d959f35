pub mod errors;
pub mod db;
pub mod settings;

#[cfg(test)]
mod tests;
