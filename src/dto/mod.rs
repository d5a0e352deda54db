pub mod quiz_dto;
pub mod result_dto;
