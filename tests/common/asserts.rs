use bunner_cors_policy::{CorsDecision, Headers};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Actual(headers) => headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Preflight(headers) => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}
