use lp_core::errors::{ErrorInfo, LinkError};
use lp_core::NodeId;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("rate", "1.5")
        .with_context("reason", "example")
}

#[test]
fn node_not_found_surface() {
    let err = LinkError::node_not_found(NodeId::from_raw(42));
    assert!(err.is_node_not_found());
    assert!(!err.is_empty_graph());
    assert_eq!(err.info().code, "node-not-found");
    assert_eq!(err.info().context.get("node"), Some(&"42".to_string()));
}

#[test]
fn empty_graph_surface() {
    let err = LinkError::empty_graph("average_degree");
    assert!(err.is_empty_graph());
    assert!(!err.is_node_not_found());
    assert_eq!(err.info().context.get("op"), Some(&"average_degree".to_string()));
    assert!(err.info().hint.is_some());
}

#[test]
fn sparsify_error_surface() {
    let err = LinkError::Sparsify(sample_info("invalid-dropout", "rate out of range"));
    assert_eq!(err.info().code, "invalid-dropout");
    assert!(err.info().context.contains_key("rate"));
    assert!(!err.is_node_not_found());
}

#[test]
fn display_includes_context_and_hint() {
    let err = LinkError::Score(
        ErrorInfo::new("invalid-alpha", "alpha must be finite")
            .with_context("alpha", "NaN")
            .with_hint("use a value in (0, 1]"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("score error: alpha must be finite (code: invalid-alpha)"));
    assert!(rendered.contains("alpha=NaN"));
    assert!(rendered.contains("hint: use a value in (0, 1]"));
}
