mod solver_test;

#[cfg(feature = "allow_filesystem")]
mod from_yaml_test;
