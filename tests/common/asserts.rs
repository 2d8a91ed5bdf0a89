use corsica::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected the policy to stay out of the response, got {:?}",
        decision
    );
}
