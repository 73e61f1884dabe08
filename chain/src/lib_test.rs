use super::*;

fn sample_response(events: Vec<TxEvent>) -> ExecuteResponse {
    ExecuteResponse {
        transaction_hash: "ABC123".to_owned(),
        logs: vec![TxLog { events }],
    }
}

fn wasm_event(attributes: Vec<TxAttribute>) -> TxEvent {
    TxEvent {
        kind: WASM_EVENT.to_owned(),
        attributes,
    }
}

fn attribute(key: &str, value: &str) -> TxAttribute {
    TxAttribute {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn parse_rejects_blank_fields_in_every_combination() {
    let blanks = [
        ("", "desc", "[]"),
        ("title", "", "[]"),
        ("title", "desc", ""),
        ("", "", "[]"),
        ("", "desc", ""),
        ("title", "", ""),
        ("", "", ""),
        ("   ", "desc", "[]"),
        ("title", "\n\t", "[]"),
        ("title", "desc", "  "),
    ];
    for (title, description, json) in blanks {
        let result = ProposalDraft::parse(title, description, json);
        assert!(
            matches!(result, Err(DraftError::MissingField)),
            "expected MissingField for ({title:?}, {description:?}, {json:?})"
        );
    }
}

#[test]
fn parse_rejects_text_that_is_not_json() {
    let result = ProposalDraft::parse("title", "desc", "{");
    assert!(matches!(result, Err(DraftError::MalformedJson(_))));
}

#[test]
fn parse_rejects_json_that_is_not_an_array() {
    for json in [r#"{"a":1}"#, r#""hello""#, "42", "null", "true"] {
        let result = ProposalDraft::parse("title", "desc", json);
        assert!(
            matches!(result, Err(DraftError::NotAnActionArray(_))),
            "expected NotAnActionArray for {json}"
        );
    }
}

#[test]
fn parse_rejects_unknown_action_envelopes() {
    let result = ProposalDraft::parse("title", "desc", r#"[{"teleport":{}}]"#);
    assert!(matches!(result, Err(DraftError::NotAnActionArray(_))));
}

#[test]
fn parse_accepts_a_bank_send_array_and_trims_fields() {
    let json = r#"[{"bank":{"send":{"to_address":"stars1abc","amount":[{"denom":"ustars","amount":"1000000"}]}}}]"#;
    let draft = ProposalDraft::parse("  My Title ", " What it does\n", json).expect("valid draft");
    assert_eq!(draft.title, "My Title");
    assert_eq!(draft.description, "What it does");
    assert_eq!(draft.actions.len(), 1);
    assert!(matches!(draft.actions[0], ProposalAction::Bank(_)));
}

#[test]
fn parse_accepts_an_empty_action_array() {
    let draft = ProposalDraft::parse("title", "desc", "[]").expect("valid draft");
    assert!(draft.actions.is_empty());
}

#[test]
fn draft_error_messages_match_the_form_copy() {
    assert_eq!(
        DraftError::MissingField.to_string(),
        "All fields are required."
    );
    let parse_error = serde_json::from_str::<Value>("{").expect_err("invalid json");
    assert_eq!(
        DraftError::MalformedJson(parse_error).to_string(),
        "Error in JSON message."
    );
}

// =============================================================
// Message encoding
// =============================================================

#[test]
fn execute_msg_encodes_as_propose_envelope() {
    let draft = ProposalDraft::parse("title", "desc", r#"[{"bank":{"send":{}}}]"#)
        .expect("valid draft");
    let value = draft.into_execute_msg().to_value();
    assert_eq!(
        value,
        serde_json::json!({
            "propose": {
                "title": "title",
                "description": "desc",
                "msgs": [{"bank": {"send": {}}}],
            }
        })
    );
}

#[test]
fn query_msg_encodes_as_proposal_envelope() {
    let value = QueryMsg::Proposal { proposal_id: 42 }.to_value();
    assert_eq!(value, serde_json::json!({"proposal": {"proposal_id": 42}}));
}

#[test]
fn proposal_action_round_trips_through_its_tag() {
    let action: ProposalAction =
        serde_json::from_str(r#"{"wasm":{"execute":{"contract_addr":"stars1x"}}}"#)
            .expect("decodes");
    assert!(matches!(action, ProposalAction::Wasm(_)));
    let text = serde_json::to_string(&action).expect("encodes");
    assert!(text.starts_with(r#"{"wasm":"#));
}

#[test]
fn proposal_status_decodes_lowercase_wire_values() {
    let status: ProposalStatus = serde_json::from_str(r#""open""#).expect("decodes");
    assert_eq!(status, ProposalStatus::Open);
    assert_eq!(status.label(), "Open");
}

#[test]
fn proposal_response_ignores_extra_fields_and_defaults_msgs() {
    let json = r#"{
        "id": 7,
        "title": "t",
        "description": "d",
        "status": "passed",
        "expires": {"at_height": 12345},
        "threshold": {"absolute_count": {"weight": 2, "total_weight": 3}}
    }"#;
    let proposal: ProposalResponse = serde_json::from_str(json).expect("decodes");
    assert_eq!(proposal.id, 7);
    assert_eq!(proposal.status, ProposalStatus::Passed);
    assert!(proposal.msgs.is_empty());
}

#[test]
fn fee_serializes_with_string_amounts() {
    let fee = StdFee {
        amount: vec![Coin::new("10000", "ustars")],
        gas: "500000".to_owned(),
    };
    let value = serde_json::to_value(&fee).expect("encodes");
    assert_eq!(
        value,
        serde_json::json!({"amount": [{"denom": "ustars", "amount": "10000"}], "gas": "500000"})
    );
}

// =============================================================
// Transaction log lookup
// =============================================================

#[test]
fn find_event_attribute_returns_first_match() {
    let logs = vec![TxLog {
        events: vec![
            TxEvent {
                kind: "message".to_owned(),
                attributes: vec![attribute("action", "execute")],
            },
            wasm_event(vec![
                attribute(PROPOSAL_ID_ATTR, "1"),
                attribute(PROPOSAL_ID_ATTR, "2"),
            ]),
        ],
    }];
    assert_eq!(
        find_event_attribute(&logs, WASM_EVENT, PROPOSAL_ID_ATTR),
        Some("1")
    );
}

#[test]
fn find_event_attribute_returns_none_when_absent() {
    let logs = vec![TxLog { events: vec![] }];
    assert_eq!(find_event_attribute(&logs, WASM_EVENT, PROPOSAL_ID_ATTR), None);
}

#[test]
fn submission_result_extracts_hash_and_proposal_id() {
    let response = sample_response(vec![wasm_event(vec![
        attribute("_contract_address", "stars1multisig"),
        attribute(PROPOSAL_ID_ATTR, "42"),
    ])]);
    let result = SubmissionResult::from_response(&response).expect("well-formed response");
    assert_eq!(result.transaction_hash, "ABC123");
    assert_eq!(result.proposal_id, "42");
}

#[test]
fn submission_result_reports_missing_wasm_event() {
    let response = sample_response(vec![TxEvent {
        kind: "message".to_owned(),
        attributes: vec![],
    }]);
    assert_eq!(
        SubmissionResult::from_response(&response),
        Err(TxParseError::MissingEvent(WASM_EVENT.to_owned()))
    );
}

#[test]
fn submission_result_reports_missing_proposal_id_attribute() {
    let response = sample_response(vec![wasm_event(vec![attribute("method", "propose")])]);
    assert_eq!(
        SubmissionResult::from_response(&response),
        Err(TxParseError::MissingAttribute(
            WASM_EVENT.to_owned(),
            PROPOSAL_ID_ATTR.to_owned()
        ))
    );
}

#[test]
fn submission_result_scans_later_logs_for_the_event() {
    let response = ExecuteResponse {
        transaction_hash: "DEF456".to_owned(),
        logs: vec![
            TxLog { events: vec![] },
            TxLog {
                events: vec![wasm_event(vec![attribute(PROPOSAL_ID_ATTR, "9")])],
            },
        ],
    };
    let result = SubmissionResult::from_response(&response).expect("well-formed response");
    assert_eq!(result.proposal_id, "9");
}

#[test]
fn execute_response_decodes_wallet_json() {
    let json = r#"{
        "transactionHash": "1B5C8...",
        "logs": [{"events": [{"type": "wasm", "attributes": [{"key": "proposal_id", "value": "3"}]}]}]
    }"#;
    let response: ExecuteResponse = serde_json::from_str(json).expect("decodes");
    assert_eq!(
        find_event_attribute(&response.logs, WASM_EVENT, PROPOSAL_ID_ATTR),
        Some("3")
    );
}
