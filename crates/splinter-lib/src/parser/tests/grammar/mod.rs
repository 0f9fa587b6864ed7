mod commands_tests;
mod expressions_tests;
mod pipeline_tests;
mod search_tests;
mod trivia_tests;
