//! CLI parsing tests for resolve command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::output::OutputFormat;
    use clap::Parser;
    use rstest::rstest;

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_required_arg_test! {
        command: "resolve",
        test_name: test_requires_element_type,
        required_arg: "--type",
    }

    crate::cli_option_test! {
        command: "resolve",
        variant: Resolve,
        test_name: test_with_type,
        args: ["--type", "Shop.Order"],
        field: type_name,
        expected: Some("Shop.Order".to_string()),
    }

    crate::cli_option_test! {
        command: "resolve",
        variant: Resolve,
        test_name: test_with_native,
        args: ["--native", "shop::Order"],
        field: native,
        expected: Some("shop::Order".to_string()),
    }

    crate::cli_option_test! {
        command: "resolve",
        variant: Resolve,
        test_name: test_with_path_source,
        args: ["-t", "Shop.Customer", "-p", "Me"],
        field: path_source,
        expected: Some("Me".to_string()),
    }

    crate::cli_option_test! {
        command: "resolve",
        variant: Resolve,
        test_name: test_path_source_defaults_to_none,
        args: ["-t", "Shop.Order"],
        field: path_source,
        expected: None,
    }

    crate::cli_error_test! {
        command: "resolve",
        test_name: test_type_and_native_conflict,
        args: ["--type", "Shop.Order", "--native", "shop::Order"],
    }

    crate::cli_error_test! {
        command: "resolve",
        test_name: test_path_source_alone_rejected,
        args: ["--path-source", "Orders"],
    }

    // =========================================================================
    // Global options
    // =========================================================================

    #[rstest]
    fn test_global_model_and_format() {
        let args = Args::try_parse_from([
            "query_context",
            "resolve",
            "--type",
            "Shop.Order",
            "--model",
            "model.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.model, Some(std::path::PathBuf::from("model.json")));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[rstest]
    fn test_format_defaults_to_table() {
        let args = Args::try_parse_from(["query_context", "resolve", "-t", "Shop.Order"]).unwrap();
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.model.is_none());
    }
}
