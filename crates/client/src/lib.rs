pub mod bootstrap;
pub mod integrations;
pub mod screens;
pub mod shared;
pub mod system;

#[cfg(test)]
pub(crate) mod test_support;
