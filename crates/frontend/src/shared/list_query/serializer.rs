use contracts::shared::list_query::{ClauseValue, ListQuery};

/// Serialize a compiled query into the backend's bracket-indexed grammar.
///
/// Output always starts with `?` and lists `limit`, `offset`, every filter
/// clause in order, then every order clause in order. Array values use
/// indexed brackets (`filter[0][value][1]=w2`). Field names and values are
/// percent-encoded; the bracket syntax itself is emitted literally.
pub fn serialize(query: &ListQuery) -> String {
    let mut pairs: Vec<String> = vec![
        format!("limit={}", query.limit()),
        format!("offset={}", query.offset()),
    ];

    for (i, clause) in query.filter().iter().enumerate() {
        pairs.push(format!("filter[{}][field]={}", i, urlencoding::encode(&clause.field)));
        pairs.push(format!("filter[{}][type]={}", i, clause.op.as_str()));
        match &clause.value {
            ClauseValue::Single(value) => {
                pairs.push(format!("filter[{}][value]={}", i, urlencoding::encode(value)));
            }
            ClauseValue::Multiple(values) => {
                for (k, value) in values.iter().enumerate() {
                    pairs.push(format!(
                        "filter[{}][value][{}]={}",
                        i,
                        k,
                        urlencoding::encode(value)
                    ));
                }
            }
        }
    }

    for (j, order) in query.order().iter().enumerate() {
        pairs.push(format!("order[{}][field]={}", j, urlencoding::encode(&order.field)));
        pairs.push(format!("order[{}][dir]={}", j, order.dir.as_str()));
    }

    format!("?{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{FilterClause, OperationType, OrderClause, SortDirection};

    fn query(filter: Vec<FilterClause>, order: Vec<OrderClause>) -> ListQuery {
        ListQuery::for_page(2, 20, filter, order).unwrap()
    }

    #[test]
    fn test_pagination_only() {
        assert_eq!(serialize(&query(vec![], vec![])), "?limit=20&offset=40");
    }

    #[test]
    fn test_filter_and_order_layout() {
        let q = query(
            vec![FilterClause::new("code", OperationType::ILike, "AB")],
            vec![OrderClause {
                field: "material.name".to_string(),
                dir: SortDirection::Desc,
            }],
        );
        assert_eq!(
            serialize(&q),
            "?limit=20&offset=40\
             &filter[0][field]=code&filter[0][type]=ilike&filter[0][value]=AB\
             &order[0][field]=material.name&order[0][dir]=desc"
        );
    }

    #[test]
    fn test_array_value_uses_indexed_brackets() {
        let q = query(
            vec![FilterClause::new(
                "warehouseId",
                OperationType::In,
                vec!["w1".to_string(), "w2".to_string()],
            )],
            vec![],
        );
        assert_eq!(
            serialize(&q),
            "?limit=20&offset=40\
             &filter[0][field]=warehouseId&filter[0][type]=in\
             &filter[0][value][0]=w1&filter[0][value][1]=w2"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let q = query(
            vec![FilterClause::new("name", OperationType::ILike, "болт M8 & гайка=1")],
            vec![],
        );
        let s = serialize(&q);
        assert!(s.contains(
            "filter[0][value]=%D0%B1%D0%BE%D0%BB%D1%82%20M8%20%26%20%D0%B3%D0%B0%D0%B9%D0%BA%D0%B0%3D1"
        ));
        assert!(!s.contains(' '));
    }

    #[test]
    fn test_clause_indices_follow_input_order() {
        let q = query(
            vec![
                FilterClause::new("status", OperationType::Eq, "A"),
                FilterClause::new("status", OperationType::Eq, "B"),
            ],
            vec![],
        );
        let s = serialize(&q);
        let a = s.find("filter[0][value]=A").unwrap();
        let b = s.find("filter[1][value]=B").unwrap();
        assert!(a < b);
    }
}
