#[doc = "Outcome of a delete request; `NotFound` is a normal answer, not an error."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Removed,
    NotFound,
}
