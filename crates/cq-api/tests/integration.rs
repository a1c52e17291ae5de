mod common;

mod auth_tests;
mod catalog_tests;
mod security_tests;
