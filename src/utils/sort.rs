use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn label(&self) -> &'static str {
        match self {
            Order::Asc => "sorted ascending",
            Order::Desc => "sorted descending",
        }
    }
}

/// Value a row exposes for one column when sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    /// Numbers compare numerically, text by its display string. Numbers
    /// sort before text if a column ever mixes the two.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

pub trait Sortable {
    type Column: Copy;

    fn sort_value(&self, column: Self::Column) -> SortValue;
}

/// Comparator for `column` in `order`. Ties compare `Equal` in both
/// directions so a stable sort keeps them in input order.
pub fn comparator<T: Sortable>(order: Order, column: T::Column) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| {
        let (a, b) = (a.sort_value(column), b.sort_value(column));
        match order {
            Order::Asc => a.compare(&b),
            Order::Desc => b.compare(&a),
        }
    }
}

/// Sorted view over `rows`; equal keys keep their relative order.
pub fn stable_sort<T: Sortable>(rows: &[T], order: Order, column: T::Column) -> Vec<&T> {
    let compare = comparator::<T>(order, column);
    let mut sorted: Vec<&T> = rows.iter().collect();
    sorted.sort_by(|a, b| compare(*a, *b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Score(&'static str, f64);

    impl Sortable for Score {
        type Column = ();

        fn sort_value(&self, _: ()) -> SortValue {
            SortValue::Number(self.1)
        }
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let rows = [Score("a", 1.0), Score("b", 2.0), Score("c", 1.0), Score("d", 2.0)];
        let names: Vec<_> = stable_sort(&rows, Order::Desc, ())
            .into_iter()
            .map(|s| s.0)
            .collect();
        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_text_compares_lexicographically() {
        let a = SortValue::Text("Zebra".into());
        let b = SortValue::Text("apple".into());
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(SortValue::Number(10.0).compare(&SortValue::Number(9.0)), Ordering::Greater);
    }

    #[test]
    fn test_order_label_reads_as_announced() {
        assert_eq!(Order::Asc.label(), "sorted ascending");
        assert_eq!(Order::default().label(), "sorted descending");
    }
}
