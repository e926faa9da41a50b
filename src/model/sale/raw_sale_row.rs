use crate::common::*;

#[doc = r#"
    One spreadsheet row exactly as it came off the backing artifact.

    All fields stay as strings on purpose: the sheet is hand-maintained,
    so type coercion belongs to `SalesRepository::load`, which drops bad
    rows one by one instead of failing the whole load.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct RawSaleRow {
    pub produto: String,
    pub quantidade: String,
    pub categoria: String,
    pub mes: String,
}
