pub mod attempt_service;
pub mod release_service;
pub mod result_service;
pub mod scoring_service;
pub mod section_service;
pub mod test_service;
