//! Универсальные утилиты для таблиц со списками (сортировка, пагинация)
use chrono::NaiveDate;

use super::list::state::{PaginationState, SortState};
use super::list::{ListApi, ListQueryController};

pub const FILTER_DATE_FROM: &str = "dateFrom";
pub const FILTER_DATE_TO: &str = "dateTo";

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        if sort.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Page numbers for pagination controls, `None` marking a gap.
///
/// Always shows the first and last `edge` pages and `around` pages on each
/// side of the current one, e.g. `1 … 4 5 6 … 20`.
pub fn page_window(pagination: &PaginationState, edge: usize, around: usize) -> Vec<Option<usize>> {
    let last = pagination.total_pages;
    if last == 0 {
        return Vec::new();
    }
    let current = pagination.clamp(pagination.page);

    let mut pages = Vec::new();
    let mut previous = 0;
    for page in 1..=last {
        let near_edge = page <= edge || page + edge > last;
        let near_current = page + around >= current && page <= current + around;
        if near_edge || near_current {
            if page > previous + 1 {
                pages.push(None);
            }
            pages.push(Some(page));
            previous = page;
        }
    }
    pages
}

/// Установить период дат одним запросом; перепутанные границы меняются местами
pub fn set_date_range<A>(list: &ListQueryController<A>, from: Option<NaiveDate>, to: Option<NaiveDate>)
where
    A: ListApi + 'static,
{
    let (from, to) = match (from, to) {
        (Some(f), Some(t)) if f > t => (Some(t), Some(f)),
        other => other,
    };
    list.set_filters([(FILTER_DATE_FROM, from), (FILTER_DATE_TO, to)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{FilterValue, ListOptions};
    use crate::shared::testing::{ManualRuntime, RecordingNotifier, ScriptedListApi};
    use std::rc::Rc;

    fn at(page: usize, total_pages: usize) -> PaginationState {
        PaginationState {
            page,
            size: 10,
            total_pages,
            total_elements: total_pages * 10,
        }
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::new("amount");
        assert_eq!(get_sort_indicator(&sort, "amount"), " ▲");
        assert_eq!(get_sort_indicator(&sort.clone().descending(), "amount"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "status"), " ⇅");
    }

    #[test]
    fn test_page_window_with_gaps() {
        assert_eq!(
            page_window(&at(5, 20), 1, 1),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(20)]
        );
    }

    #[test]
    fn test_page_window_small_and_empty() {
        assert_eq!(
            page_window(&at(1, 3), 1, 1),
            vec![Some(1), Some(2), Some(3)]
        );
        assert!(page_window(&at(1, 0), 1, 1).is_empty());
        assert_eq!(
            page_window(&at(2, 4), 1, 0),
            vec![Some(1), Some(2), None, Some(4)]
        );
    }

    #[test]
    fn test_date_range_swaps_reversed_bounds() {
        let runtime = ManualRuntime::new();
        let list = ListQueryController::new(
            ScriptedListApi::default(),
            runtime.handle(),
            Rc::new(RecordingNotifier::default()),
            ListOptions::new(SortState::new("createdAt")),
        );
        let early = NaiveDate::from_ymd_opt(2024, 3, 1);
        let late = NaiveDate::from_ymd_opt(2024, 3, 31);

        set_date_range(&list, late, early);
        runtime.run_until_stalled();

        assert_eq!(list.api().requests().len(), 1);
        assert_eq!(list.filter_value(FILTER_DATE_FROM), FilterValue::from(early));
        let query = list.request_descriptor();
        assert_eq!(query.filters.get(FILTER_DATE_FROM).map(String::as_str), Some("2024-03-01"));
        assert_eq!(query.filters.get(FILTER_DATE_TO).map(String::as_str), Some("2024-03-31"));

        set_date_range(&list, None, None);
        assert!(list.request_descriptor().filters.is_empty());
    }
}
