use crate::common::*;

#[doc = "Compact UTC timestamp used to suffix temp/staging file names."]
pub fn current_timestamp_compact() -> String {
    Utc::now().format("%Y%m%d%H%M%S%3f").to_string()
}

#[doc = "Short Portuguese label for a calendar month (1..=12)."]
pub fn month_label(mes: u32) -> &'static str {
    match mes {
        1 => "Jan",
        2 => "Fev",
        3 => "Mar",
        4 => "Abr",
        5 => "Mai",
        6 => "Jun",
        7 => "Jul",
        8 => "Ago",
        9 => "Set",
        10 => "Out",
        11 => "Nov",
        12 => "Dez",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_cover_the_calendar() {
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dez");
        assert_eq!(month_label(0), "?");
    }
}
