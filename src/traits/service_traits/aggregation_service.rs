use crate::dto::aggregation_entry::*;
use crate::model::sale::sale_record::*;

#[doc = r#"
    Pure, deterministic aggregations over the current record set. No I/O.

    * by month: chronological; months without sales are omitted
    * by product: descending total, ties broken by produto ascending
    * by category: descending total, ties broken by categoria ascending

    An empty record set yields an empty view for every dimension.
"#]
pub trait AggregationService: Send + Sync {
    fn aggregate_by_month(&self, records: &[SaleRecord]) -> Vec<AggregationEntry>;
    fn aggregate_by_product(&self, records: &[SaleRecord]) -> Vec<AggregationEntry>;
    fn aggregate_by_category(&self, records: &[SaleRecord]) -> Vec<AggregationEntry>;
}
