mod expressions_tests;
mod statements_tests;
