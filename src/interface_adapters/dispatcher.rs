// Central failure-to-response mapping.
//
// Handlers return `Result<_, Failure>`. The failure rides out in the response
// extensions and `dispatch_failures`, registered as a response-mapping layer on
// the router, swaps that response for the classified one.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};

use crate::domain::errors::Failure;
use crate::domain::ports::Clock;
use crate::interface_adapters::protocol::{GenericErrorBody, InternalErrorBody, TypedErrorBody};
use crate::interface_adapters::state::AppState;

const GENERIC_DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

// Presentation-level failure classes. Several failure kinds may share one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    DivisionByZero,
    RouteNotFound,
    InvalidNumberFormat,
    UserOrRoleMissing,
}

// Which of the two wire shapes a category is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyShape {
    Typed,
    Generic,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::DivisionByZero => "division by zero",
            Category::RouteNotFound => "API route not found",
            Category::InvalidNumberFormat => "invalid number format",
            Category::UserOrRoleMissing => "user or role does not exist",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Category::RouteNotFound => StatusCode::NOT_FOUND,
            Category::DivisionByZero
            | Category::InvalidNumberFormat
            | Category::UserOrRoleMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn shape(self) -> BodyShape {
        match self {
            Category::DivisionByZero | Category::RouteNotFound => BodyShape::Typed,
            Category::InvalidNumberFormat | Category::UserOrRoleMissing => BodyShape::Generic,
        }
    }
}

impl From<&Failure> for Category {
    fn from(failure: &Failure) -> Self {
        match failure {
            Failure::DivisionByZero(_) => Category::DivisionByZero,
            Failure::RouteNotFound(_) => Category::RouteNotFound,
            Failure::InvalidNumber(_) => Category::InvalidNumberFormat,
            // Null references and serialization faults are reported as a missing user/role.
            Failure::NullReference(_)
            | Failure::SerializationWrite(_)
            | Failure::UserNotFound(_) => Category::UserOrRoleMissing,
        }
    }
}

// Structured error produced for one failed request.
// `status_code` is derived from `category` at construction and cannot be set on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    timestamp: DateTime<Utc>,
    category: Category,
    message: Option<String>,
    status_code: u16,
}

impl ErrorResponse {
    pub fn new(category: Category, message: Option<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            category,
            message,
            status_code: category.status().as_u16(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn to_typed_body(&self) -> TypedErrorBody {
        TypedErrorBody {
            date: self.timestamp.timestamp_millis(),
            error: self.category.label().to_string(),
            message: self.message.clone(),
            status: self.status_code,
        }
    }

    pub fn to_generic_body(&self) -> GenericErrorBody {
        let status = self.category.status();
        let mut body = GenericErrorBody::new();
        body.insert(
            "Date",
            Some(self.timestamp.format(GENERIC_DATE_FORMAT).to_string()),
        );
        body.insert("Error", Some(self.category.label().to_string()));
        body.insert("Message", self.message.clone());
        body.insert("Status", Some(status_text(status)));
        body
    }
}

// Classify a failure. Total over `Failure`; reads the clock and nothing else.
pub fn classify(failure: &Failure, clock: &dyn Clock) -> (StatusCode, ErrorResponse) {
    let category = Category::from(failure);
    let response = ErrorResponse::new(
        category,
        failure.message().map(str::to_string),
        clock.now(),
    );
    (category.status(), response)
}

// Render a classified error in the shape its category uses.
pub fn render(status: StatusCode, error: &ErrorResponse) -> Response {
    match error.category().shape() {
        BodyShape::Typed => (status, Json(error.to_typed_body())).into_response(),
        BodyShape::Generic => (status, Json(error.to_generic_body())).into_response(),
    }
}

// Response-mapping middleware: replaces any undispatched failure response.
// Responses without a failure attached pass through untouched.
pub async fn dispatch_failures(State(state): State<AppState>, response: Response) -> Response {
    let Some(failure) = response.extensions().get::<Failure>().cloned() else {
        return response;
    };

    let (status, error) = classify(&failure, state.clock.as_ref());
    if status.is_server_error() {
        tracing::error!(
            %status,
            category = error.category().label(),
            failure = %failure,
            "request failed"
        );
    } else {
        tracing::warn!(
            %status,
            category = error.category().label(),
            failure = %failure,
            "request failed"
        );
    }

    render(status, &error)
}

// A failure that reaches the transport without the dispatcher layer is a defect:
// it goes out as a bare 500 with a generic body.
impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(InternalErrorBody {
                message: "internal server error".to_string(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// `500 INTERNAL_SERVER_ERROR` style status text used by the generic body.
fn status_text(status: StatusCode) -> String {
    let reason = status
        .canonical_reason()
        .unwrap_or_default()
        .to_ascii_uppercase()
        .replace(' ', "_");
    format!("{} {}", status.as_u16(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapters::state::SystemClock;
    use crate::use_cases::test_support::FixedClock;

    const FIXED_MILLIS: i64 = 1_700_000_000_000;

    fn all_kinds(message: Option<&str>) -> Vec<Failure> {
        let message = message.map(str::to_string);
        vec![
            Failure::DivisionByZero(message.clone()),
            Failure::RouteNotFound(message.clone()),
            Failure::InvalidNumber(message.clone()),
            Failure::NullReference(message.clone()),
            Failure::SerializationWrite(message.clone()),
            Failure::UserNotFound(message),
        ]
    }

    #[test]
    fn when_each_kind_is_classified_then_status_and_category_match_the_table() {
        let clock = FixedClock::at_millis(FIXED_MILLIS);
        let cases = [
            (Failure::DivisionByZero(Some("/ by zero".into())), 500, "division by zero"),
            (Failure::RouteNotFound(Some("No endpoint GET /x.".into())), 404, "API route not found"),
            (Failure::InvalidNumber(Some("bad".into())), 500, "invalid number format"),
            (Failure::NullReference(Some("null".into())), 500, "user or role does not exist"),
            (Failure::SerializationWrite(Some("write".into())), 500, "user or role does not exist"),
            (Failure::UserNotFound(Some("missing".into())), 500, "user or role does not exist"),
        ];

        for (failure, expected_status, expected_label) in cases {
            let (status, error) = classify(&failure, &clock);

            assert_eq!(status.as_u16(), expected_status, "status for {failure:?}");
            assert_eq!(error.status_code(), expected_status, "body status for {failure:?}");
            assert_eq!(error.category().label(), expected_label, "label for {failure:?}");
            assert_eq!(error.message(), failure.message());
            assert_eq!(error.timestamp().timestamp_millis(), FIXED_MILLIS);
        }
    }

    #[test]
    fn when_any_kind_is_classified_with_or_without_message_then_it_never_panics() {
        let clock = FixedClock::at_millis(FIXED_MILLIS);

        for failure in all_kinds(None).into_iter().chain(all_kinds(Some("text"))) {
            let (status, error) = classify(&failure, &clock);
            assert_eq!(status, error.category().status());
            assert_eq!(error.message(), failure.message());
            let _ = render(status, &error);
        }
    }

    #[test]
    fn when_classified_sequentially_then_timestamps_never_decrease() {
        let clock = SystemClock::default();
        let failure = Failure::user_not_found();
        let (_, mut previous) = classify(&failure, &clock);

        for _ in 0..500 {
            let (_, current) = classify(&failure, &clock);
            assert!(current.timestamp() >= previous.timestamp());
            previous = current;
        }
    }

    #[test]
    fn when_same_failure_is_classified_twice_then_results_are_equal() {
        let clock = FixedClock::at_millis(FIXED_MILLIS);
        let failure = Failure::invalid_number(
            "10x",
            &"10x".parse::<i32>().expect_err("expected parse failure"),
        );

        let first = classify(&failure, &clock);
        let second = classify(&failure, &clock);

        assert_eq!(first, second);
    }

    #[test]
    fn when_typed_body_is_built_then_fields_use_lowercase_names_and_numeric_status() {
        let error = ErrorResponse::new(
            Category::RouteNotFound,
            Some("No endpoint GET /nope.".into()),
            FixedClock::at_millis(FIXED_MILLIS).now(),
        );

        let body = serde_json::to_value(error.to_typed_body()).expect("expected json");

        assert_eq!(
            body,
            serde_json::json!({
                "date": FIXED_MILLIS,
                "error": "API route not found",
                "message": "No endpoint GET /nope.",
                "status": 404
            })
        );
    }

    #[test]
    fn when_generic_body_is_built_then_fields_are_capitalized_strings() {
        let error = ErrorResponse::new(
            Category::UserOrRoleMissing,
            None,
            FixedClock::at_millis(FIXED_MILLIS).now(),
        );

        let body = serde_json::to_value(error.to_generic_body()).expect("expected json");

        assert_eq!(
            body,
            serde_json::json!({
                "Date": "Tue Nov 14 22:13:20 UTC 2023",
                "Error": "user or role does not exist",
                "Message": null,
                "Status": "500 INTERNAL_SERVER_ERROR"
            })
        );
    }

    #[test]
    fn when_category_is_chosen_then_shape_follows_it() {
        assert_eq!(Category::DivisionByZero.shape(), BodyShape::Typed);
        assert_eq!(Category::RouteNotFound.shape(), BodyShape::Typed);
        assert_eq!(Category::InvalidNumberFormat.shape(), BodyShape::Generic);
        assert_eq!(Category::UserOrRoleMissing.shape(), BodyShape::Generic);
    }

    #[test]
    fn when_failure_is_turned_into_a_response_then_it_is_attached_for_dispatch() {
        let response = Failure::user_not_found().into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.extensions().get::<Failure>(),
            Some(&Failure::user_not_found())
        );
    }
}
