//! Execute tests for resolve command.

#[cfg(test)]
mod tests {
    use super::super::ResolveCmd;
    use rstest::{fixture, rstest};

    crate::model_fixture! {
        fixture_name: shop,
        json: crate::fixtures::SHOP_MODEL,
    }

    crate::model_fixture! {
        fixture_name: ambiguous,
        json: crate::fixtures::AMBIGUOUS_MODEL,
    }

    crate::model_fixture! {
        fixture_name: no_container,
        json: crate::fixtures::NO_CONTAINER_MODEL,
    }

    fn by_type(name: &str) -> ResolveCmd {
        ResolveCmd {
            type_name: Some(name.to_string()),
            native: None,
            path_source: None,
        }
    }

    fn by_native(name: &str) -> ResolveCmd {
        ResolveCmd {
            type_name: None,
            native: Some(name.to_string()),
            path_source: None,
        }
    }

    // =========================================================================
    // Container scan
    // =========================================================================

    crate::execute_test! {
        test_name: test_resolve_unique_set_by_type,
        fixture: shop,
        cmd: by_type("Shop.Order"),
        assertions: |result| {
            assert_eq!(result.element_type, "Shop.Order");
            assert!(result.element_native_type.is_none());
            let source = result.navigation_source.expect("Orders should resolve");
            assert_eq!(source.name, "Orders");
            assert_eq!(source.kind, "entity_set");
            assert!(!source.from_path);
            assert_eq!(result.candidates, vec!["Orders"]);
        },
    }

    crate::execute_test! {
        test_name: test_resolve_unique_set_by_native,
        fixture: shop,
        cmd: by_native("shop::Order"),
        assertions: |result| {
            assert_eq!(result.element_type, "Shop.Order");
            assert_eq!(result.element_native_type.as_deref(), Some("shop::Order"));
            assert_eq!(result.navigation_source.map(|s| s.name).as_deref(), Some("Orders"));
        },
    }

    // Me is a singleton over Customer; only entity sets are scanned
    crate::execute_test! {
        test_name: test_singletons_not_candidates,
        fixture: shop,
        cmd: by_type("Shop.Customer"),
        assertions: |result| {
            assert_eq!(result.navigation_source.map(|s| s.name).as_deref(), Some("Customers"));
            assert_eq!(result.candidates, vec!["Customers"]);
        },
    }

    crate::execute_test! {
        test_name: test_type_without_set_unresolved,
        fixture: shop,
        cmd: by_native("billing::Invoice"),
        assertions: |result| {
            assert_eq!(result.element_type, "Shop.Invoice");
            assert!(result.navigation_source.is_none());
            assert!(result.candidates.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_ambiguous_sets_unresolved,
        fixture: ambiguous,
        cmd: by_type("Shop.Order"),
        assertions: |result| {
            assert!(result.navigation_source.is_none());
            assert_eq!(result.candidates, vec!["OrdersA", "OrdersB"]);
        },
    }

    crate::execute_test! {
        test_name: test_no_container_unresolved,
        fixture: no_container,
        cmd: by_native("shop::Order"),
        assertions: |result| {
            assert_eq!(result.element_type, "Shop.Order");
            assert!(result.navigation_source.is_none());
            assert!(result.candidates.is_empty());
        },
    }

    // =========================================================================
    // Path sources
    // =========================================================================

    crate::execute_test! {
        test_name: test_path_source_breaks_ambiguity,
        fixture: ambiguous,
        cmd: ResolveCmd {
            type_name: Some("Shop.Order".to_string()),
            native: None,
            path_source: Some("OrdersB".to_string()),
        },
        assertions: |result| {
            assert_eq!(result.path.as_deref(), Some("OrdersB"));
            let source = result.navigation_source.expect("path source should be used");
            assert_eq!(source.name, "OrdersB");
            assert!(source.from_path);
            assert_eq!(result.candidates.len(), 2);
        },
    }

    crate::execute_test! {
        test_name: test_path_source_trusted_over_element_type,
        fixture: shop,
        cmd: ResolveCmd {
            type_name: Some("Shop.Order".to_string()),
            native: None,
            path_source: Some("Me".to_string()),
        },
        assertions: |result| {
            let source = result.navigation_source.expect("path source should be used");
            assert_eq!(source.name, "Me");
            assert_eq!(source.kind, "singleton");
            assert_eq!(source.element_type, "Shop.Customer");
        },
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    crate::execute_error_test! {
        test_name: test_unknown_native_type,
        fixture: shop,
        cmd: by_native("shop::Refund"),
        contains: "shop::Refund",
    }

    crate::execute_error_test! {
        test_name: test_unknown_schema_type,
        fixture: shop,
        cmd: by_type("Shop.Refund"),
        contains: "Type 'Shop.Refund' is not declared",
    }

    crate::execute_error_test! {
        test_name: test_unknown_path_source,
        fixture: shop,
        cmd: ResolveCmd {
            type_name: Some("Shop.Order".to_string()),
            native: None,
            path_source: Some("Refunds".to_string()),
        },
        contains: "Navigation source 'Refunds'",
    }

    crate::execute_error_test! {
        test_name: test_path_source_without_container,
        fixture: no_container,
        cmd: ResolveCmd {
            type_name: Some("Shop.Order".to_string()),
            native: None,
            path_source: Some("Orders".to_string()),
        },
        contains: "not declared in the model's container",
    }

    crate::execute_error_test! {
        test_name: test_missing_element_type,
        fixture: shop,
        cmd: ResolveCmd {
            type_name: None,
            native: None,
            path_source: None,
        },
        contains: "Either --type or --native",
    }
}
