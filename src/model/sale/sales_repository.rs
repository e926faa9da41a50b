use crate::common::*;

use crate::model::sale::{raw_sale_row::*, sale_record::*};

#[doc = r#"
    In-memory dataset built from the backing spreadsheet for one request.

    Insertion order is preserved for display. Rows that fail coercion are
    dropped and counted, never fatal. Duplicate produto rows are kept as
    separate records (a product sold in two months stays split per
    month); `produto` is still the addressing key, so the aggregations
    merge duplicates by summation and `delete` removes every row of the
    key at once.

    A repository lives for a single request: it is rebuilt from the
    source on every load and replaced entirely by the next one.
"#]
#[derive(Debug, Clone, Default)]
pub struct SalesRepository {
    records: Vec<SaleRecord>,
    skipped_rows: usize,
}

impl SalesRepository {
    #[doc = "Builds a repository from raw spreadsheet rows; partial success is the normal path."]
    pub fn load(raw_rows: &[RawSaleRow]) -> Self {
        let mut records: Vec<SaleRecord> = Vec::new();
        let mut skipped_rows: usize = 0;

        for raw in raw_rows {
            let record: SaleRecord = match SaleRecord::from_raw_row(raw) {
                Some(record) => record,
                None => {
                    warn!(
                        "[SalesRepository->load] skipping invalid row: produto='{}' quantidade='{}' mes='{}'",
                        raw.produto, raw.quantidade, raw.mes
                    );
                    skipped_rows += 1;
                    continue;
                }
            };

            records.push(record);
        }

        SalesRepository {
            records,
            skipped_rows,
        }
    }

    #[doc = r#"
        Removes every record keyed by `produto`.

        Returns whether anything was removed; an absent key is a no-op,
        so the caller can distinguish "not found" from "deleted".
    "#]
    pub fn delete(&mut self, produto: &str) -> bool {
        let before: usize = self.records.len();
        self.records.retain(|r| r.produto != produto);
        self.records.len() != before
    }

    #[doc = "Read-only snapshot for display; callers never see the live collection."]
    pub fn all(&self) -> &[SaleRecord] {
        &self.records
    }

    #[doc = "Re-serializes the dataset into raw rows for the source adapter to persist."]
    pub fn serialize(&self) -> Vec<RawSaleRow> {
        self.records.iter().map(|r| r.to_raw_row()).collect()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
