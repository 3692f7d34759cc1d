use odonto_core::models::command::{CommandAction, InterpretationRequest};
use odonto_core::models::tooth::Dentition;
use odonto_core::models::treatment::Treatment;
use odonto_core::vocabulary::Vocabulary;
use odonto_interpret::error::ProviderError;
use odonto_interpret::prompt::{
    STATUS_SYNONYMS, SURFACE_SYNONYMS, TREATMENT_SYNONYMS, parse_command, system_prompt,
    user_message,
};

#[test]
fn system_prompt_teaches_every_synonym() {
    let prompt = system_prompt();

    for synonym in TREATMENT_SYNONYMS {
        for heard in synonym.heard {
            assert!(prompt.contains(&format!("\"{heard}\"")), "missing synonym {heard}");
        }
    }
    for (heard, surface) in SURFACE_SYNONYMS {
        assert!(prompt.contains(&format!("- \"{heard}\" means {surface}")));
    }
    for (heard, status) in STATUS_SYNONYMS {
        assert!(prompt.contains(&format!("- \"{heard}\" means {status}")));
    }
}

#[test]
fn system_prompt_lists_every_treatment_with_its_label() {
    let prompt = system_prompt();
    for treatment in Treatment::ALL {
        let line = format!("- {treatment}: {}", treatment.label());
        assert!(prompt.contains(&line), "missing {line}");
    }
    assert!(prompt.contains("- obturacion: Obturación"));
}

#[test]
fn caries_implies_diagnosed_filling() {
    let caries = TREATMENT_SYNONYMS
        .iter()
        .find(|s| s.heard.contains(&"caries"))
        .unwrap();
    assert_eq!(caries.treatment, Treatment::Obturacion);
    assert_eq!(caries.status.map(|s| s.code()), Some("diagnostico"));

    assert!(system_prompt().contains("- \"caries\" means treatment obturacion with status diagnostico"));
}

#[test]
fn synonyms_only_target_real_treatments() {
    for synonym in TREATMENT_SYNONYMS {
        assert!(Treatment::ALL.contains(&synonym.treatment));
    }
}

#[test]
fn user_message_carries_vocabulary_and_transcript() {
    let vocabulary = Vocabulary::for_dentition(Dentition::Primary);
    let request = InterpretationRequest::new("caries en el cincuenta y cinco", &vocabulary);

    let message = user_message(&request);

    assert!(message.contains("<transcript>caries en el cincuenta y cinco</transcript>"));
    assert!(message.contains("obturacion"));
    assert!(message.contains("55"));
    // Permanent teeth are not offered for a primary chart.
    assert!(!message.contains(" 16,"));
}

#[test]
fn parses_bare_object() {
    let cmd = parse_command(
        r#"{"action":"apply_treatment","toothNumber":15,"treatment":"obturacion","area":"vestibular","status":"diagnostico","confidence":0.9,"message":"Caries en vestibular del 15"}"#,
    )
    .unwrap();

    assert_eq!(cmd.action, CommandAction::ApplyTreatment);
    assert_eq!(cmd.tooth_number, Some(15));
    assert_eq!(cmd.area.as_deref(), Some("vestibular"));
    assert_eq!(cmd.status.as_deref(), Some("diagnostico"));
}

#[test]
fn parses_object_wrapped_in_prose_and_fence() {
    let text = "Claro, aquí está:\n```json\n{\"action\":\"remove_treatment\",\"toothNumber\":36,\"treatment\":\"corona\",\"area\":null,\"status\":null,\"confidence\":0.7,\"message\":\"Quitar corona\"}\n```\n";

    let cmd = parse_command(text).unwrap();

    assert_eq!(cmd.action, CommandAction::RemoveTreatment);
    assert_eq!(cmd.treatment.as_deref(), Some("corona"));
    assert!(cmd.area.is_none());
}

#[test]
fn missing_confidence_and_message_default() {
    let cmd = parse_command(r#"{"action":"unknown","toothNumber":null,"treatment":null,"area":null,"status":null}"#)
        .unwrap();

    assert_eq!(cmd.action, CommandAction::Unknown);
    assert_eq!(cmd.confidence, 0.0);
    assert!(cmd.message.is_empty());
}

#[test]
fn reply_without_json_is_malformed() {
    let err = parse_command("No entendí el comando.").unwrap_err();
    assert!(matches!(err, ProviderError::MalformedResponse(_)));
}

#[test]
fn unknown_action_is_malformed() {
    let err = parse_command(r#"{"action":"delete_everything","toothNumber":11}"#).unwrap_err();
    assert!(matches!(err, ProviderError::MalformedResponse(_)));
}
