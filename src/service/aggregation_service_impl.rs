use crate::common::*;

use crate::dto::aggregation_entry::*;
use crate::model::sale::sale_record::*;
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::time_utils::*;

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, new)]
pub struct AggregationServiceImpl;

impl AggregationServiceImpl {
    #[doc = "Group-and-sum along an arbitrary string key, ordered by descending total with name as tie-breaker."]
    fn aggregate_descending<F>(records: &[SaleRecord], key_of: F) -> Vec<AggregationEntry>
    where
        F: Fn(&SaleRecord) -> &str,
    {
        let mut totals: HashMap<String, u64> = HashMap::new();
        for record in records {
            *totals.entry(key_of(record).to_string()).or_insert(0) += record.quantidade;
        }

        let mut entries: Vec<AggregationEntry> = totals
            .into_iter()
            .map(|(key, total)| AggregationEntry::new(key.clone(), key, total))
            .collect();

        entries.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.group_key.cmp(&b.group_key))
        });

        entries
    }
}

impl AggregationService for AggregationServiceImpl {
    #[doc = "Totals per calendar month, chronological; months without sales are omitted."]
    fn aggregate_by_month(&self, records: &[SaleRecord]) -> Vec<AggregationEntry> {
        let mut totals: BTreeMap<u32, u64> = BTreeMap::new();
        for record in records {
            *totals.entry(record.mes).or_insert(0) += record.quantidade;
        }

        totals
            .into_iter()
            .map(|(mes, total)| {
                AggregationEntry::new(mes.to_string(), month_label(mes).to_string(), total)
            })
            .collect()
    }

    fn aggregate_by_product(&self, records: &[SaleRecord]) -> Vec<AggregationEntry> {
        Self::aggregate_descending(records, |r| &r.produto)
    }

    fn aggregate_by_category(&self, records: &[SaleRecord]) -> Vec<AggregationEntry> {
        Self::aggregate_descending(records, |r| &r.categoria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(produto: &str, quantidade: u64, categoria: &str, mes: u32) -> SaleRecord {
        SaleRecord::new(produto.to_string(), quantidade, categoria.to_string(), mes)
    }

    fn sample() -> Vec<SaleRecord> {
        vec![
            record("Caneta", 10, "Escritorio", 1),
            record("Caderno", 3, "Papelaria", 2),
            record("Lapis", 10, "Escritorio", 5),
            record("Borracha", 1, "Papelaria", 5),
        ]
    }

    #[test]
    fn every_dimension_conserves_the_total_quantity() {
        let records = sample();
        let service = AggregationServiceImpl::new();

        let expected: u64 = records.iter().map(|r| r.quantidade).sum();
        let sum = |entries: Vec<AggregationEntry>| entries.iter().map(|e| e.total).sum::<u64>();

        assert_eq!(sum(service.aggregate_by_month(&records)), expected);
        assert_eq!(sum(service.aggregate_by_product(&records)), expected);
        assert_eq!(sum(service.aggregate_by_category(&records)), expected);
    }

    #[test]
    fn months_are_chronological_and_gaps_are_omitted() {
        let service = AggregationServiceImpl::new();
        let entries = service.aggregate_by_month(&sample());

        /* Months 3 and 4 have no sales and must not appear zero-filled. */
        let keys: Vec<&str> = entries.iter().map(|e| e.group_key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "5"]);

        let labels: Vec<&str> = entries.iter().map(|e| e.group_label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Fev", "Mai"]);
        assert_eq!(entries[2].total, 11);
    }

    #[test]
    fn products_are_ordered_by_descending_total_with_name_tiebreak() {
        let service = AggregationServiceImpl::new();
        let entries = service.aggregate_by_product(&sample());

        let keys: Vec<&str> = entries.iter().map(|e| e.group_key.as_str()).collect();
        /* Caneta and Lapis tie at 10; name ascending breaks the tie. */
        assert_eq!(keys, vec!["Caneta", "Lapis", "Caderno", "Borracha"]);
    }

    #[test]
    fn categories_are_ordered_by_descending_total() {
        let service = AggregationServiceImpl::new();
        let entries = service.aggregate_by_category(&sample());

        assert_eq!(entries[0].group_key, "Escritorio");
        assert_eq!(entries[0].total, 20);
        assert_eq!(entries[1].group_key, "Papelaria");
        assert_eq!(entries[1].total, 4);
    }

    #[test]
    fn same_product_in_two_months_sums_by_product_and_splits_by_month() {
        let service = AggregationServiceImpl::new();
        let records = vec![
            record("Caneta", 10, "Escritorio", 1),
            record("Caneta", 5, "Escritorio", 2),
        ];

        let by_product = service.aggregate_by_product(&records);
        assert_eq!(by_product.len(), 1);
        assert_eq!(by_product[0].total, 15);

        let by_month = service.aggregate_by_month(&records);
        assert_eq!(by_month.len(), 2);
        assert_eq!(by_month[0].total, 10);
        assert_eq!(by_month[1].total, 5);
    }

    #[test]
    fn empty_records_yield_empty_views() {
        let service = AggregationServiceImpl::new();
        assert!(service.aggregate_by_month(&[]).is_empty());
        assert!(service.aggregate_by_product(&[]).is_empty());
        assert!(service.aggregate_by_category(&[]).is_empty());
    }
}
