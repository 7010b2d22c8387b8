//! Report rendering: one deterministic text block per dispatch. The block is
//! the tool's product and goes to stdout as a single write; logs stay on
//! stderr.

use crate::client::SystemResponse;
use crate::dataset::QuestionRecord;
use crate::error::HarnessError;
use serde::Serialize;
use serde_json::Value;

const SEPARATOR: &str =
    "****************************************************************************";

/// Serialize a JSON value with 4-space indentation. Stable across runs for
/// the same value, so reference and system answers diff cleanly.
fn pretty(value: &Value) -> String {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut ser)
        .expect("serializing an in-memory JSON value cannot fail");
    String::from_utf8(out).expect("serde_json emits UTF-8")
}

/// Render a completed dispatch: identifier, question, reference query and
/// answer, then the system's query and answer, closed by a separator framed
/// in blank lines.
pub fn render_report(
    record: &QuestionRecord,
    question_text: &str,
    response: &SystemResponse,
) -> String {
    format!(
        "ID: {}\n\
         Question: {}\n\
         Query: {}\n\
         Correct Answer: {}\n\
         System Query: {}\n\
         System Answer: {}\n\
         \n{}\n\n",
        record.id_display(),
        question_text,
        record.query.sparql,
        pretty(&record.answers),
        response.sparql,
        pretty(&response.answer),
        SEPARATOR,
    )
}

/// Render a failed dispatch with the same identifier header so the operator
/// can tell which outstanding question the error belongs to.
pub fn render_failure(record: &QuestionRecord, error: &HarnessError) -> String {
    format!(
        "ID: {}\nError: {}\n\n{}\n\n",
        record.id_display(),
        error,
        SEPARATOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> QuestionRecord {
        serde_json::from_value(json!({
            "id": 7,
            "question": [{"language": "en", "string": "Who wrote Dune?"}],
            "query": {"sparql": "SELECT ?a WHERE { ?b dbo:author ?a }"},
            "answers": [{"head": {"vars": ["a"]}, "results": {"bindings": []}}]
        }))
        .unwrap()
    }

    fn response() -> SystemResponse {
        SystemResponse {
            sparql: "SELECT ?a WHERE { ?a a dbo:Writer }".to_string(),
            answer: json!({"results": {"bindings": [{"a": "Frank Herbert"}]}}),
        }
    }

    #[test]
    fn test_report_contains_every_field_in_order() {
        let block = render_report(&record(), "Who wrote Dune?", &response());
        let id_pos = block.find("ID: 7").unwrap();
        let question_pos = block.find("Question: Who wrote Dune?").unwrap();
        let query_pos = block.find("Query: SELECT ?a WHERE { ?b dbo:author ?a }").unwrap();
        let correct_pos = block.find("Correct Answer:").unwrap();
        let system_query_pos = block.find("System Query:").unwrap();
        let system_answer_pos = block.find("System Answer:").unwrap();
        let separator_pos = block.find(SEPARATOR).unwrap();
        assert!(id_pos < question_pos);
        assert!(question_pos < query_pos);
        assert!(query_pos < correct_pos);
        assert!(correct_pos < system_query_pos);
        assert!(system_query_pos < system_answer_pos);
        assert!(system_answer_pos < separator_pos);
    }

    #[test]
    fn test_reference_answer_is_verbatim_dataset_serialization() {
        let rec = record();
        let block = render_report(&rec, "Who wrote Dune?", &response());
        // The reference answer comes from the dataset, never the response.
        assert!(block.contains(&pretty(&rec.answers)));
        let start = block.find("Correct Answer:").unwrap();
        let end = block.find("System Query:").unwrap();
        assert!(!block[start..end].contains("Frank Herbert"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_report(&record(), "Who wrote Dune?", &response());
        let b = render_report(&record(), "Who wrote Dune?", &response());
        assert_eq!(a, b);
    }

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let text = pretty(&json!({"outer": {"inner": 1}}));
        assert!(text.contains("\n    \"outer\""));
        assert!(text.contains("\n        \"inner\""));
    }

    #[test]
    fn test_failure_block_names_the_record() {
        let err = HarnessError::MalformedResponse("missing questions[0]".to_string());
        let block = render_failure(&record(), &err);
        assert!(block.contains("ID: 7"));
        assert!(block.contains("Error: Malformed response: missing questions[0]"));
        assert!(block.contains(SEPARATOR));
    }

    #[test]
    fn test_separator_framed_by_blank_lines() {
        let block = render_report(&record(), "Who wrote Dune?", &response());
        assert!(block.ends_with(&format!("\n\n{}\n\n", SEPARATOR)));
    }
}
