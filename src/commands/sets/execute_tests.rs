//! Execute tests for sets command.

#[cfg(test)]
mod tests {
    use super::super::SetsCmd;
    use rstest::{fixture, rstest};

    crate::model_fixture! {
        fixture_name: shop,
        json: crate::fixtures::SHOP_MODEL,
    }

    crate::model_fixture! {
        fixture_name: no_container,
        json: crate::fixtures::NO_CONTAINER_MODEL,
    }

    // Orders, Customers, Products + singleton Me
    crate::execute_test! {
        test_name: test_sets_all,
        fixture: shop,
        cmd: SetsCmd { type_name: None },
        assertions: |result| {
            assert_eq!(result.container.as_deref(), Some("Default"));
            let names: Vec<_> = result.sources.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Orders", "Customers", "Products", "Me"]);
            assert_eq!(result.sources[3].kind, "singleton");
        },
    }

    crate::execute_test! {
        test_name: test_sets_filtered_by_type,
        fixture: shop,
        cmd: SetsCmd { type_name: Some("Shop.Customer".to_string()) },
        assertions: |result| {
            assert_eq!(result.type_filter.as_deref(), Some("Shop.Customer"));
            let names: Vec<_> = result.sources.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Customers", "Me"]);
        },
    }

    crate::execute_test! {
        test_name: test_sets_type_without_sources,
        fixture: shop,
        cmd: SetsCmd { type_name: Some("Shop.Invoice".to_string()) },
        assertions: |result| {
            assert!(result.container.is_some());
            assert!(result.sources.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_sets_without_container,
        fixture: no_container,
        cmd: SetsCmd { type_name: None },
        assertions: |result| {
            assert!(result.container.is_none());
            assert!(result.sources.is_empty());
        },
    }

    crate::execute_error_test! {
        test_name: test_sets_unknown_type,
        fixture: shop,
        cmd: SetsCmd { type_name: Some("Shop.Refund".to_string()) },
        contains: "Type 'Shop.Refund' is not declared",
    }
}
