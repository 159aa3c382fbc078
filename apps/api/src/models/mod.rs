pub mod candidate;
pub mod feedback;
pub mod interview;
pub mod training;
