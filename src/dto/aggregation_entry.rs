use crate::common::*;

#[doc = r#"
    One group of an aggregation view: the stable key the group is
    identified by (month number, produto or categoria), the label shown
    on the chart axis, and the summed quantity.

    Views are computed fresh on every request and consumed immediately by
    the chart renderer; they are never cached.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct AggregationEntry {
    pub group_key: String,
    pub group_label: String,
    pub total: u64,
}
