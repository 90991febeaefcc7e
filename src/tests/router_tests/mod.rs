mod properties_tests;
mod seed_tests;
