pub mod find_user;
pub mod parse_probe;

#[cfg(test)]
pub(crate) mod test_support;

pub use find_user::FindUserUseCase;
pub use parse_probe::ParseProbeUseCase;
