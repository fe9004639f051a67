/// Application layer - Use cases, DTOs, and the collector task lifecycle
pub mod collector_task;
pub mod dto;
pub mod use_cases;
