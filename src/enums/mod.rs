pub mod chart_kind;
pub mod delete_status;
pub mod storage_backend;
