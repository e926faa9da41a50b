use crate::common::*;

use crate::model::sale::raw_sale_row::*;

#[doc = r#"
    A validated sale. `produto` is the unique key within a repository;
    `mes` is the calendar month (1..=12) the sale belongs to.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SaleRecord {
    pub produto: String,
    pub quantidade: u64,
    pub categoria: String,
    pub mes: u32,
}

impl SaleRecord {
    #[doc = r#"
        Coerces a raw spreadsheet row into a validated record.

        Rejected (returns `None`): empty produto, non-numeric or negative
        quantidade, mes outside 1..=12. The caller counts these as skipped
        rows rather than treating them as failures.
    "#]
    pub fn from_raw_row(raw: &RawSaleRow) -> Option<Self> {
        let produto: &str = raw.produto.trim();
        if produto.is_empty() {
            return None;
        }

        let quantidade: u64 = raw.quantidade.trim().parse::<u64>().ok()?;

        let mes: u32 = raw.mes.trim().parse::<u32>().ok()?;
        if !(1..=12).contains(&mes) {
            return None;
        }

        Some(SaleRecord {
            produto: produto.to_string(),
            quantidade,
            categoria: raw.categoria.trim().to_string(),
            mes,
        })
    }

    #[doc = "Turns the record back into the spreadsheet row shape for persisting."]
    pub fn to_raw_row(&self) -> RawSaleRow {
        RawSaleRow::new(
            self.produto.clone(),
            self.quantidade.to_string(),
            self.categoria.clone(),
            self.mes.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(produto: &str, quantidade: &str, categoria: &str, mes: &str) -> RawSaleRow {
        RawSaleRow::new(
            produto.to_string(),
            quantidade.to_string(),
            categoria.to_string(),
            mes.to_string(),
        )
    }

    #[test]
    fn valid_row_is_coerced() {
        let record = SaleRecord::from_raw_row(&raw("Caneta", "10", "Escritorio", "1"))
            .expect("row should coerce");
        assert_eq!(record.produto, "Caneta");
        assert_eq!(record.quantidade, 10);
        assert_eq!(record.categoria, "Escritorio");
        assert_eq!(record.mes, 1);
    }

    #[test]
    fn empty_product_is_rejected() {
        assert!(SaleRecord::from_raw_row(&raw("   ", "10", "Escritorio", "1")).is_none());
    }

    #[test]
    fn non_numeric_and_negative_quantity_are_rejected() {
        assert!(SaleRecord::from_raw_row(&raw("Caneta", "abc", "Escritorio", "1")).is_none());
        assert!(SaleRecord::from_raw_row(&raw("Caneta", "-5", "Escritorio", "1")).is_none());
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(SaleRecord::from_raw_row(&raw("Caneta", "10", "Escritorio", "0")).is_none());
        assert!(SaleRecord::from_raw_row(&raw("Caneta", "10", "Escritorio", "13")).is_none());
    }

    #[test]
    fn raw_row_round_trip_is_stable() {
        let record = SaleRecord::from_raw_row(&raw("Caneta", "10", "Escritorio", "3")).unwrap();
        let reparsed = SaleRecord::from_raw_row(&record.to_raw_row()).unwrap();
        assert_eq!(record, reparsed);
    }
}
