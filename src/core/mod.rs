pub mod config;
pub mod feed;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub(crate) mod test_support;
