pub mod raw_sale_row;
pub mod sale_record;
pub mod sales_repository;
