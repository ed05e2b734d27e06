mod registry_tests;
mod test_helpers;
