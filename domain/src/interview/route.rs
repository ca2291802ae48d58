//! Navigation address codec
//!
//! A session is addressed as `/interview/<percent-encoded role>` with optional
//! `difficulty` and `questions` query parameters, e.g.
//! `/interview/Data%20Analyst?difficulty=Hard&questions=5`.
//!
//! This is a pure serialization boundary: the session state machine only ever
//! receives already-decoded [`SessionParameters`].

use crate::core::difficulty::Difficulty;
use crate::core::error::DomainError;
use crate::core::question_count::QuestionCount;
use crate::core::role::Role;
use crate::interview::parameters::SessionParameters;

/// Path prefix of every session address
pub const ROUTE_PREFIX: &str = "/interview/";

/// Encode parameters into a navigation address
pub fn encode_route(params: &SessionParameters) -> String {
    format!(
        "{}{}?difficulty={}&questions={}",
        ROUTE_PREFIX,
        urlencoding::encode(params.role().as_str()),
        params.difficulty().as_str(),
        params.question_count()
    )
}

/// Decode a navigation address back into parameters.
///
/// Missing or unparseable `difficulty` falls back to Medium; missing or
/// unparseable `questions` falls back to 8, and out-of-range counts are
/// clamped into [1, 50]. Unknown query parameters are ignored.
pub fn decode_route(address: &str) -> Result<SessionParameters, DomainError> {
    let address = address.trim();
    let (path, query) = match address.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (address, None),
    };

    let slug = path
        .strip_prefix(ROUTE_PREFIX)
        .or_else(|| path.strip_prefix(&ROUTE_PREFIX[1..]))
        .ok_or_else(|| DomainError::InvalidRoute(address.to_string()))?;
    let slug = slug.trim_end_matches('/');

    let decoded = urlencoding::decode(slug)
        .map_err(|e| DomainError::InvalidRoute(format!("{}: {}", address, e)))?;
    let role = Role::try_new(decoded.as_ref()).ok_or(DomainError::EmptyRole)?;

    let mut difficulty = Difficulty::default();
    let mut question_count = QuestionCount::default();

    for pair in query.unwrap_or("").split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Ok(value) = urlencoding::decode(value) else {
            continue;
        };
        match key {
            "difficulty" => {
                if let Ok(parsed) = value.parse() {
                    difficulty = parsed;
                }
            }
            "questions" => {
                if let Ok(parsed) = value.trim().parse::<i64>() {
                    question_count = QuestionCount::clamped(parsed);
                }
            }
            _ => {}
        }
    }

    Ok(SessionParameters::new(role, difficulty, question_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(role: &str, difficulty: Difficulty, count: i64) -> SessionParameters {
        SessionParameters::new(
            Role::try_new(role).unwrap(),
            difficulty,
            QuestionCount::new(count).unwrap(),
        )
    }

    #[test]
    fn test_data_analyst_round_trip() {
        let original = params("Data Analyst", Difficulty::Hard, 5);
        let address = encode_route(&original);
        assert_eq!(
            address,
            "/interview/Data%20Analyst?difficulty=Hard&questions=5"
        );

        let decoded = decode_route(&address).unwrap();
        assert_eq!(decoded.role().as_str(), "Data Analyst");
        assert_eq!(decoded.difficulty(), Difficulty::Hard);
        assert_eq!(decoded.question_count().get(), 5);
    }

    #[test]
    fn test_reserved_characters_survive() {
        let original = params("C++ / Rust dev? 100% & more", Difficulty::Low, 3);
        let decoded = decode_route(&encode_route(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_missing_query_uses_defaults() {
        let decoded = decode_route("/interview/Software%20Engineer").unwrap();
        assert_eq!(decoded.role().as_str(), "Software Engineer");
        assert_eq!(decoded.difficulty(), Difficulty::Medium);
        assert_eq!(decoded.question_count().get(), 8);
    }

    #[test]
    fn test_role_only_route() {
        let role = Role::try_new("IT Engineer").unwrap();
        let decoded = decode_route("/interview/IT%20Engineer").unwrap();
        assert_eq!(decoded, SessionParameters::with_defaults(role));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let decoded = decode_route("/interview/QA?difficulty=extreme&questions=lots").unwrap();
        assert_eq!(decoded.difficulty(), Difficulty::Medium);
        assert_eq!(decoded.question_count().get(), 8);
    }

    #[test]
    fn test_out_of_range_count_is_clamped() {
        let decoded = decode_route("/interview/QA?questions=99").unwrap();
        assert_eq!(decoded.question_count().get(), 50);
        let decoded = decode_route("/interview/QA?questions=0").unwrap();
        assert_eq!(decoded.question_count().get(), 1);
    }

    #[test]
    fn test_empty_role_rejected() {
        assert_eq!(
            decode_route("/interview/%20%20?difficulty=Low"),
            Err(DomainError::EmptyRole)
        );
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        assert!(matches!(
            decode_route("/settings/Data%20Analyst"),
            Err(DomainError::InvalidRoute(_))
        ));
    }

    #[test]
    fn test_prefix_without_leading_slash() {
        let decoded = decode_route("interview/Nurse?questions=3").unwrap();
        assert_eq!(decoded.role().as_str(), "Nurse");
        assert_eq!(decoded.question_count().get(), 3);
    }
}
