#[cfg(test)]
pub mod alloc;
