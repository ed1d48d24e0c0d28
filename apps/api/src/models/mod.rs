pub mod program;
pub mod quiz;
pub mod quiz_result;
