//! JSON encoder.
use crate::{error::Error, processing::Pairing};

/// Serialize pairings into a JSON array of `{"old": .., "modern": ..}` objects.
pub fn encode(pairings: &[Pairing]) -> Result<String, Error> {
    Ok(serde_json::to_string(pairings)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn key_order() {
        let pairings = vec![Pairing::new("old hello", "new hello")];
        assert_eq!(
            encode(&pairings).unwrap(),
            r#"[{"old":"old hello","modern":"new hello"}]"#
        );
    }

    #[test]
    fn escaping() {
        let pairings = vec![
            Pairing::new("say \"hi\"", "tab\there"),
            Pairing::new("back\\slash", "line\nbreak"),
        ];
        let encoded = encode(&pairings).unwrap();
        let decoded: Vec<Pairing> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, pairings);
    }

    #[test]
    fn objects_have_exactly_two_keys() {
        let pairings = vec![Pairing::new("a", "b"), Pairing::new("c", "d")];
        let value: Value = serde_json::from_str(&encode(&pairings).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        for object in array {
            let object = object.as_object().unwrap();
            let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, vec!["modern", "old"]);
        }
    }
}
