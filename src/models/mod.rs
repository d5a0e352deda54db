pub mod attempt;
pub mod question_result;
pub mod section;
