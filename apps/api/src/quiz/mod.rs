// Quiz flow: question banks, answer collection, and the scoring endpoint.

pub mod answers;
pub mod handlers;
pub mod questions;
