use bunner_method_override_rs::{InvalidOverrideMethod, OverrideDecision, OverrideSource};

pub fn assert_overridden(
    result: Result<OverrideDecision, InvalidOverrideMethod>,
) -> (String, OverrideSource) {
    match result {
        Ok(OverrideDecision::Overridden { method, source }) => (method, source),
        other => panic!("expected overridden decision, got {:?}", other),
    }
}

pub fn assert_unchanged(result: Result<OverrideDecision, InvalidOverrideMethod>) {
    match result {
        Ok(OverrideDecision::Unchanged) => {}
        other => panic!("expected unchanged decision, got {:?}", other),
    }
}

pub fn assert_rejected(
    result: Result<OverrideDecision, InvalidOverrideMethod>,
) -> InvalidOverrideMethod {
    match result {
        Err(error) => error,
        other => panic!("expected invalid override error, got {:?}", other),
    }
}
